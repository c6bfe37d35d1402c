//! Regime classifier
//!
//! Derives the market regime from directional strength, four weighted bias components, the
//! volatility state and the Hilbert cycle mode. Pure: the same snapshot always yields the same
//! [`RegimeAnalysis`].

use tracing::debug;

use crate::config::{EngineConfig, RegimeThresholds, RegimeWeights};
use crate::indicators::keys;
use crate::models::analysis::{CycleMode, Regime, RegimeAnalysis, TrendStrength, VolatilityState};
use crate::models::signal::{Bias, Tally};
use crate::models::snapshot::IndicatorSnapshot;
use crate::regime::alignment;
use crate::regime::volatility::VolatilityAssessment;

/// Neutral defaults substituted for missing values
pub const DEFAULT_ADX: f64 = 20.0;
pub const DEFAULT_DI: f64 = 0.0;
pub const DEFAULT_AROON: f64 = 50.0;

#[derive(Debug, Clone)]
pub struct RegimeClassifier {
    thresholds: RegimeThresholds,
    weights: RegimeWeights,
}

impl RegimeClassifier {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            thresholds: config.regime.clone(),
            weights: config.regime_weights.clone(),
        }
    }

    pub fn classify(&self, snapshot: &IndicatorSnapshot) -> RegimeAnalysis {
        let mut trace = Vec::new();

        let trend_strength = self.trend_strength(snapshot, &mut trace);
        let directional_bias = self.directional_bias(snapshot, &mut trace);
        let timing_bias = self.timing_bias(snapshot, &mut trace);
        let statistical_bias = self.statistical_bias(snapshot, &mut trace);

        let alignment = alignment::assess(snapshot, &self.thresholds);
        trace.push(match alignment.percent {
            Some(pct) => format!(
                "MA alignment: {} bullish / {} bearish comparisons ({:.0}%) -> {}",
                alignment.tally.bullish,
                alignment.tally.bearish,
                pct,
                alignment.label.as_str()
            ),
            None => "MA alignment: no comparable averages -> UNKNOWN".to_string(),
        });

        let volatility = VolatilityAssessment::assess(snapshot, &self.thresholds);
        trace.push(volatility.describe());

        let cycle_mode = match snapshot.get(keys::HT_TRENDMODE) {
            Some(mode) if mode >= 0.5 => CycleMode::Trending,
            _ => CycleMode::Cycling,
        };
        trace.push(format!("Hilbert cycle mode: {}", cycle_mode.as_str()));

        let votes = [
            (directional_bias, self.weights.directional_bias),
            (timing_bias, self.weights.timing_bias),
            (statistical_bias, self.weights.statistical_bias),
            (alignment.label.bias(), self.weights.ma_alignment),
        ]
        .iter()
        .fold(Tally::default(), |mut tally, (bias, weight)| {
            match bias {
                Bias::Bullish => tally.bullish += weight,
                Bias::Bearish => tally.bearish += weight,
                Bias::Neutral => {}
            }
            tally
        });
        trace.push(format!(
            "Weighted bias votes: {} bullish / {} bearish",
            votes.bullish, votes.bearish
        ));

        let regime = self.decide(trend_strength, cycle_mode, volatility.state, votes);
        trace.push(format!("CONCLUSION: {}", conclusion(regime)));

        debug!(
            regime = %regime,
            trend_strength = trend_strength.as_str(),
            volatility = volatility.state.as_str(),
            bullish_votes = votes.bullish,
            bearish_votes = votes.bearish,
            "Regime classified"
        );

        RegimeAnalysis {
            regime,
            trend_strength,
            directional_bias,
            timing_bias,
            statistical_bias,
            cycle_mode,
            ma_alignment: alignment.label,
            ma_alignment_percent: alignment.percent,
            volatility: volatility.state,
            votes,
            trace,
        }
    }

    fn trend_strength(&self, snapshot: &IndicatorSnapshot, trace: &mut Vec<String>) -> TrendStrength {
        let adx = snapshot.get_or(keys::ADX_14, DEFAULT_ADX);
        let adxr = snapshot.get_or(keys::ADXR_14, DEFAULT_ADX);
        let average = (adx + adxr) / 2.0;
        let strength = if average > self.thresholds.adx_strong {
            TrendStrength::Strong
        } else if average > self.thresholds.adx_weak {
            TrendStrength::Weak
        } else {
            TrendStrength::None
        };
        trace.push(format!(
            "Trend strength: ADX {:.1}, ADXR {:.1}, average {:.1} -> {}",
            adx,
            adxr,
            average,
            strength.as_str()
        ));
        strength
    }

    fn directional_bias(&self, snapshot: &IndicatorSnapshot, trace: &mut Vec<String>) -> Bias {
        let plus = snapshot.get_or(keys::PLUS_DI_14, DEFAULT_DI);
        let minus = snapshot.get_or(keys::MINUS_DI_14, DEFAULT_DI);
        let spread = plus - minus;
        let bias = if spread > self.thresholds.di_bias {
            Bias::Bullish
        } else if spread < -self.thresholds.di_bias {
            Bias::Bearish
        } else {
            Bias::Neutral
        };
        trace.push(format!(
            "Directional bias: +DI {:.1} vs -DI {:.1} (spread {:+.1}) -> {}",
            plus, minus, spread, bias
        ));
        bias
    }

    fn timing_bias(&self, snapshot: &IndicatorSnapshot, trace: &mut Vec<String>) -> Bias {
        let t = &self.thresholds;
        let up = snapshot.get_or(keys::AROON_UP, DEFAULT_AROON);
        let down = snapshot.get_or(keys::AROON_DOWN, DEFAULT_AROON);
        let oscillator = snapshot.get_or(keys::AROONOSC, 0.0);
        let bias = if up > t.aroon_high && down < t.aroon_low {
            Bias::Bullish
        } else if down > t.aroon_high && up < t.aroon_low {
            Bias::Bearish
        } else if oscillator > t.aroon_oscillator {
            Bias::Bullish
        } else if oscillator < -t.aroon_oscillator {
            Bias::Bearish
        } else {
            Bias::Neutral
        };
        trace.push(format!(
            "Aroon timing: up {:.0}, down {:.0}, oscillator {:+.0} -> {}",
            up, down, oscillator, bias
        ));
        bias
    }

    fn statistical_bias(&self, snapshot: &IndicatorSnapshot, trace: &mut Vec<String>) -> Bias {
        let t = &self.thresholds;
        let angle = snapshot.get_or(keys::LINEARREG_ANGLE_14, 0.0);
        let bias = if angle > t.linreg_angle {
            Bias::Bullish
        } else if angle < -t.linreg_angle {
            Bias::Bearish
        } else {
            Bias::Neutral
        };
        let qualifier = if angle.abs() > t.linreg_angle_strong {
            "strong "
        } else {
            ""
        };
        trace.push(format!(
            "Regression angle {:+.1} deg -> {}{}",
            angle, qualifier, bias
        ));
        bias
    }

    fn decide(
        &self,
        strength: TrendStrength,
        mode: CycleMode,
        volatility: VolatilityState,
        votes: Tally,
    ) -> Regime {
        if volatility == VolatilityState::Spike {
            return Regime::Volatile;
        }

        let bullish = votes.bullish;
        let bearish = votes.bearish;

        if strength == TrendStrength::Strong && mode == CycleMode::Trending {
            let margin = self.thresholds.strong_margin;
            if bullish > bearish + margin {
                return Regime::TrendingUp;
            }
            if bearish > bullish + margin {
                return Regime::TrendingDown;
            }
        }

        match strength {
            TrendStrength::Strong | TrendStrength::Weak => {
                let margin = self.thresholds.weak_margin;
                if bullish > bearish + margin {
                    Regime::TrendingUp
                } else if bearish > bullish + margin {
                    Regime::TrendingDown
                } else {
                    Regime::Ranging
                }
            }
            TrendStrength::None => Regime::Ranging,
        }
    }
}

impl Default for RegimeClassifier {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

fn conclusion(regime: Regime) -> &'static str {
    match regime {
        Regime::TrendingUp => "TRENDING_UP - follow the trend, buy pullbacks",
        Regime::TrendingDown => "TRENDING_DOWN - follow the trend, sell rallies",
        Regime::Ranging => "RANGING - fade extremes, avoid breakout chasing",
        Regime::Volatile => "VOLATILE - stand aside until volatility settles",
    }
}
