//! Momentum family: oscillators, directional movement, rate of change
//!
//! The same oscillator value is read differently per regime. Inside a trend an extreme in the
//! trend's direction confirms momentum and an opposite extreme marks a pullback. In a range the
//! classic overbought/oversold reading applies. In a volatile market extremes are unreliable.

use serde::Serialize;

use crate::config::{EngineConfig, MomentumThresholds, OscillatorBand};
use crate::indicators::keys;
use crate::indicators::registry::IndicatorCategory;
use crate::models::analysis::Regime;
use crate::models::signal::{above, band_bias, sign_bias, Bias, VoteBook};
use crate::models::snapshot::IndicatorSnapshot;
use crate::signals::interpretation::{CategoryInterpreter, Interpretation};

/// Classic zone of a bounded oscillator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Zone {
    Overbought,
    Oversold,
    Neutral,
}

impl Zone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Overbought => "OVERBOUGHT",
            Zone::Oversold => "OVERSOLD",
            Zone::Neutral => "NEUTRAL",
        }
    }
}

/// What an oscillator reading means in the current regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OscillatorMeaning {
    BullishMomentum,
    BearishMomentum,
    Pullback,
    Overbought,
    Oversold,
    MidRange,
    Unreliable,
    Neutral,
}

impl OscillatorMeaning {
    pub fn describe(&self) -> &'static str {
        match self {
            OscillatorMeaning::BullishMomentum => "strong bullish momentum",
            OscillatorMeaning::BearishMomentum => "strong bearish momentum",
            OscillatorMeaning::Pullback => "pullback against the trend - entry opportunity",
            OscillatorMeaning::Overbought => "overbought - reversal risk",
            OscillatorMeaning::Oversold => "oversold - bounce potential",
            OscillatorMeaning::MidRange => "mid-range - no edge",
            OscillatorMeaning::Unreliable => "unreliable in volatile conditions",
            OscillatorMeaning::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OscillatorReading {
    pub indicator: &'static str,
    pub value: f64,
    pub zone: Zone,
    pub meaning: OscillatorMeaning,
}

/// Read one oscillator value in the context of `regime`
pub fn read_oscillator(band: &OscillatorBand, value: f64, regime: Regime) -> OscillatorReading {
    let zone = if value >= band.overbought {
        Zone::Overbought
    } else if value <= band.oversold {
        Zone::Oversold
    } else {
        Zone::Neutral
    };

    let meaning = match regime {
        Regime::TrendingUp => {
            if value >= band.trend_bullish {
                OscillatorMeaning::BullishMomentum
            } else if value <= band.trend_bearish {
                OscillatorMeaning::Pullback
            } else {
                OscillatorMeaning::Neutral
            }
        }
        Regime::TrendingDown => {
            if value <= band.trend_bearish {
                OscillatorMeaning::BearishMomentum
            } else if value >= band.trend_bullish {
                OscillatorMeaning::Pullback
            } else {
                OscillatorMeaning::Neutral
            }
        }
        Regime::Ranging => match zone {
            Zone::Overbought => OscillatorMeaning::Overbought,
            Zone::Oversold => OscillatorMeaning::Oversold,
            Zone::Neutral => OscillatorMeaning::MidRange,
        },
        Regime::Volatile => OscillatorMeaning::Unreliable,
    };

    OscillatorReading {
        indicator: band.key.name,
        value,
        zone,
        meaning,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MomentumInterpretation {
    pub overall: Bias,
    pub bullish_percent: Option<f64>,
    pub readings: Vec<OscillatorReading>,
    pub overbought_count: usize,
    pub oversold_count: usize,
    /// Several oscillators at the same extreme at once
    pub exhaustion_warning: bool,
    pub votes: VoteBook,
    pub trace: Vec<String>,
}

impl MomentumInterpretation {
    pub fn reading(&self, indicator: &str) -> Option<&OscillatorReading> {
        self.readings.iter().find(|r| r.indicator == indicator)
    }
}

impl Interpretation for MomentumInterpretation {
    fn votes(&self) -> &VoteBook {
        &self.votes
    }

    fn trace(&self) -> &[String] {
        &self.trace
    }
}

#[derive(Debug, Clone)]
pub struct MomentumInterpreter {
    thresholds: MomentumThresholds,
    directional_weight: u32,
}

impl MomentumInterpreter {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            thresholds: config.momentum.clone(),
            directional_weight: config.category_weights.directional_movement,
        }
    }

    fn cast_votes(&self, snapshot: &IndicatorSnapshot, votes: &mut VoteBook) {
        let t = &self.thresholds;
        let get = |key| snapshot.get(key);

        votes.cast("RSI_14", sign_bias(get(keys::RSI_14), 50.0));
        votes.cast("RSI_9", sign_bias(get(keys::RSI_9), 50.0));

        let macd = match (get(keys::MACD), get(keys::MACD_SIGNAL), get(keys::MACD_HIST)) {
            (Some(line), Some(signal), Some(hist)) if line > signal && hist > 0.0 => Bias::Bullish,
            (Some(line), Some(signal), Some(hist)) if line < signal && hist < 0.0 => Bias::Bearish,
            _ => Bias::Neutral,
        };
        votes.cast("MACD", macd);
        votes.cast("MACDEXT_hist", sign_bias(get(keys::MACDEXT_HIST), 0.0));
        votes.cast("MACDFIX_hist", sign_bias(get(keys::MACDFIX_HIST), 0.0));

        // Stochastic family votes once, by majority
        let stochastics = [keys::STOCH_SLOWK, keys::STOCHF_FASTK, keys::STOCHRSI_FASTK];
        let (above_mid, below_mid) = stochastics.iter().filter_map(|k| get(*k)).fold(
            (0, 0),
            |(up, down), value| {
                if value > 50.0 {
                    (up + 1, down)
                } else if value < 50.0 {
                    (up, down + 1)
                } else {
                    (up, down)
                }
            },
        );
        votes.cast(
            "Stochastic composite",
            match above_mid.cmp(&below_mid) {
                std::cmp::Ordering::Greater => Bias::Bullish,
                std::cmp::Ordering::Less => Bias::Bearish,
                std::cmp::Ordering::Equal => Bias::Neutral,
            },
        );
        votes.cast(
            "STOCH_slowk vs STOCH_slowd",
            Bias::from_comparison(above(get(keys::STOCH_SLOWK), get(keys::STOCH_SLOWD))),
        );

        votes.cast("AROONOSC", sign_bias(get(keys::AROONOSC), 0.0));
        votes.cast("CCI_14", band_bias(get(keys::CCI_14), -t.cci, t.cci));
        votes.cast("CMO_14", band_bias(get(keys::CMO_14), -t.cmo, t.cmo));
        votes.cast("MOM_10", sign_bias(get(keys::MOM_10), 0.0));
        votes.cast("ROC_10", sign_bias(get(keys::ROC_10), 0.0));
        votes.cast("ROCP_10", sign_bias(get(keys::ROCP_10), 0.0));
        votes.cast("ROCR_10", sign_bias(get(keys::ROCR_10), 1.0));
        votes.cast("ROCR100_10", sign_bias(get(keys::ROCR100_10), 100.0));
        votes.cast("TRIX_30", sign_bias(get(keys::TRIX_30), 0.0));
        votes.cast("APO", sign_bias(get(keys::APO), 0.0));
        votes.cast("PPO", sign_bias(get(keys::PPO), 0.0));
        votes.cast("BOP", band_bias(get(keys::BOP), -t.bop, t.bop));
        votes.cast("ULTOSC", sign_bias(get(keys::ULTOSC), 50.0));
        votes.cast("WILLR_14", sign_bias(get(keys::WILLR_14), -50.0));
        votes.cast("MFI_14", sign_bias(get(keys::MFI_14), 50.0));
        let di_bias = Bias::from_comparison(above(get(keys::PLUS_DI_14), get(keys::MINUS_DI_14)));
        votes.cast_weighted("+DI vs -DI", di_bias, self.directional_weight);
        // DX only confirms the DI side once directional movement is trending
        let dx_bias = match get(keys::DX_14) {
            Some(dx) if dx > t.dx_trend => di_bias,
            _ => Bias::Neutral,
        };
        votes.cast("DX_14", dx_bias);
        votes.cast(
            "+DM vs -DM",
            Bias::from_comparison(above(get(keys::PLUS_DM_14), get(keys::MINUS_DM_14))),
        );
    }
}

impl CategoryInterpreter for MomentumInterpreter {
    type Output = MomentumInterpretation;

    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Momentum
    }

    fn interpret(&self, snapshot: &IndicatorSnapshot, regime: Regime) -> MomentumInterpretation {
        let t = &self.thresholds;
        let mut votes = VoteBook::new();
        self.cast_votes(snapshot, &mut votes);

        let tally = votes.tally();
        let overall = tally.direction_by_share(t.bullish_percent, t.bearish_percent);

        let readings: Vec<OscillatorReading> = t
            .oscillators
            .iter()
            .filter_map(|band| {
                snapshot
                    .get(band.key)
                    .map(|value| read_oscillator(band, value, regime))
            })
            .collect();
        let overbought_count = readings.iter().filter(|r| r.zone == Zone::Overbought).count();
        let oversold_count = readings.iter().filter(|r| r.zone == Zone::Oversold).count();
        let exhaustion_warning = overbought_count >= t.extreme_warning_count
            || oversold_count >= t.extreme_warning_count;

        let mut trace = vec![format!(
            "Momentum: {} bullish / {} bearish -> {}",
            tally.bullish, tally.bearish, overall
        )];
        for reading in &readings {
            trace.push(format!(
                "{} {:.1} in {}: {}",
                reading.indicator,
                reading.value,
                regime,
                reading.meaning.describe()
            ));
        }
        if exhaustion_warning {
            trace.push(format!(
                "Warning: {} overbought / {} oversold oscillators - momentum may be exhausted",
                overbought_count, oversold_count
            ));
        }

        MomentumInterpretation {
            overall,
            bullish_percent: tally.bullish_percent(),
            readings,
            overbought_count,
            oversold_count,
            exhaustion_warning,
            votes,
            trace,
        }
    }
}
