//! Hierarchy-based decision synthesis
//!
//! Precedence is fixed: Regime > Trend > Momentum > Volume > Pattern. A trending regime forces
//! the direction and the categories only add confidence or warnings. A range needs a majority of
//! the designated oscillators at the same extreme. A volatile market never trades.

use crate::config::{EngineConfig, RangeOscillator};
use crate::indicators::registry::IndicatorCategory;
use crate::models::analysis::{Regime, RegimeAnalysis};
use crate::models::decision::{TradeDecision, TradeDirection};
use crate::models::signal::Bias;
use crate::models::snapshot::IndicatorSnapshot;
use crate::signals::aggregation::AgreementReport;
use crate::signals::interpretation::CategoryInterpretations;
use crate::signals::sizing::PositionSizer;

pub const MID_RANGE_WARNING: &str = "Mid-range - wait for extremes";

#[derive(Debug, Clone)]
pub struct DecisionResolver {
    range_oscillators: Vec<RangeOscillator>,
    range_trigger_count: usize,
    sizer: PositionSizer,
}

struct Factors {
    direction: TradeDirection,
    confidence: Vec<String>,
    warnings: Vec<String>,
}

impl DecisionResolver {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            range_oscillators: config.range_oscillators.clone(),
            range_trigger_count: config.range_trigger_count,
            sizer: PositionSizer::new(config),
        }
    }

    pub fn resolve(
        &self,
        regime: &RegimeAnalysis,
        interpretations: &CategoryInterpretations,
        agreement: &AgreementReport,
        snapshot: &IndicatorSnapshot,
    ) -> TradeDecision {
        let factors = match regime.regime {
            Regime::Volatile => Factors {
                direction: TradeDirection::NoTrade,
                confidence: vec!["Volatile market conditions".to_string()],
                warnings: vec![
                    "High volatility detected".to_string(),
                    "Wait for stability".to_string(),
                ],
            },
            Regime::TrendingUp | Regime::TrendingDown => self.follow_trend(regime.regime, agreement),
            Regime::Ranging => self.fade_extremes(agreement, snapshot),
        };

        let position_size_multiplier =
            self.sizer
                .size(agreement, regime.regime, factors.direction, &factors.warnings);
        let reasoning = reasoning(regime, interpretations, agreement, &factors);

        TradeDecision {
            direction: factors.direction,
            confidence_factors: factors.confidence,
            warning_factors: factors.warnings,
            position_size_multiplier,
            reasoning,
        }
    }

    fn follow_trend(&self, regime: Regime, agreement: &AgreementReport) -> Factors {
        // Only trending regimes reach here, and they always force a side
        let direction = regime.forced_direction().unwrap_or(TradeDirection::NoTrade);
        let wanted = direction.bias();
        let mut confidence = vec![format!("Market regime is {}", regime)];
        let mut warnings = Vec::new();

        for category in [
            IndicatorCategory::Trend,
            IndicatorCategory::Momentum,
            IndicatorCategory::Volume,
            IndicatorCategory::Pattern,
        ] {
            let Some(tally) = agreement.category(category) else {
                continue;
            };
            let (agreeing, opposing) = match wanted {
                Bias::Bullish => (tally.bullish_votes, tally.bearish_votes),
                _ => (tally.bearish_votes, tally.bullish_votes),
            };
            if tally.direction == wanted {
                confidence.push(agreeing_factor(category, wanted, agreeing));
            } else if tally.direction == wanted.opposite() {
                warnings.push(opposing_factor(category, wanted, opposing));
            }
        }

        Factors {
            direction,
            confidence,
            warnings,
        }
    }

    fn fade_extremes(&self, agreement: &AgreementReport, snapshot: &IndicatorSnapshot) -> Factors {
        let mut oversold = Vec::new();
        let mut overbought = Vec::new();
        for oscillator in &self.range_oscillators {
            match snapshot.get(oscillator.key) {
                Some(v) if v < oscillator.oversold => oversold.push(oscillator.key.name),
                Some(v) if v > oscillator.overbought => overbought.push(oscillator.key.name),
                _ => {}
            }
        }

        let total = self.range_oscillators.len();
        let (direction, triggered) = if oversold.len() >= self.range_trigger_count {
            (TradeDirection::Long, oversold)
        } else if overbought.len() >= self.range_trigger_count {
            (TradeDirection::Short, overbought)
        } else {
            return Factors {
                direction: TradeDirection::NoTrade,
                confidence: vec!["Market regime is RANGING".to_string()],
                warnings: vec![MID_RANGE_WARNING.to_string()],
            };
        };

        let extreme = match direction {
            TradeDirection::Long => "oversold",
            _ => "overbought",
        };
        let mut confidence = vec![
            "Market regime is RANGING".to_string(),
            format!(
                "{}/{} oscillators {} ({})",
                triggered.len(),
                total,
                extreme,
                triggered.join(", ")
            ),
        ];
        let mut warnings = Vec::new();

        let wanted = direction.bias();
        let pattern = agreement.direction(IndicatorCategory::Pattern);
        if pattern == wanted {
            confidence.push(match direction {
                TradeDirection::Long => "Bullish reversal patterns confirm the bounce".to_string(),
                _ => "Bearish reversal patterns confirm the rejection".to_string(),
            });
        } else if pattern == wanted.opposite() {
            warnings.push(match direction {
                TradeDirection::Long => "Bearish patterns contradict the bounce".to_string(),
                _ => "Bullish patterns contradict the rejection".to_string(),
            });
        }

        Factors {
            direction,
            confidence,
            warnings,
        }
    }
}

impl Default for DecisionResolver {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

fn agreeing_factor(category: IndicatorCategory, wanted: Bias, votes: u32) -> String {
    let side = match wanted {
        Bias::Bullish => "bullish",
        _ => "bearish",
    };
    match category {
        IndicatorCategory::Volume => match wanted {
            Bias::Bullish => "Volume confirms buying pressure".to_string(),
            _ => "Volume confirms selling pressure".to_string(),
        },
        IndicatorCategory::Pattern => format!("{} candlestick patterns present", capitalize(side)),
        _ => format!("{}: {} {} signals", category, votes, side),
    }
}

fn opposing_factor(category: IndicatorCategory, wanted: Bias, votes: u32) -> String {
    let against = match wanted {
        Bias::Bullish => "bearish",
        _ => "bullish",
    };
    match category {
        IndicatorCategory::Volume => "Volume not confirming - potential weakness".to_string(),
        IndicatorCategory::Pattern => match wanted {
            Bias::Bullish => "Bearish patterns - possible pullback".to_string(),
            _ => "Bullish patterns - possible bounce".to_string(),
        },
        _ => format!("{} diverging ({} {})", category, votes, against),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn reasoning(
    regime: &RegimeAnalysis,
    interpretations: &CategoryInterpretations,
    agreement: &AgreementReport,
    factors: &Factors,
) -> String {
    let mut lines = vec![
        format!(
            "Regime: {} (strength {}, volatility {}, MA alignment {})",
            regime.regime,
            regime.trend_strength.as_str(),
            regime.volatility.as_str(),
            regime.ma_alignment.as_str()
        ),
        format!(
            "Agreement: {:.1}% bullish ({} vs {})",
            agreement.bullish_percent, agreement.total_bullish, agreement.total_bearish
        ),
    ];
    for category in IndicatorCategory::all() {
        if let Some(summary) = interpretations.trace(category).first() {
            lines.push(summary.clone());
        }
    }
    lines.push(format!("Decision: {}", factors.direction));
    if !factors.confidence.is_empty() {
        lines.push(format!("Confidence: {}", factors.confidence.join("; ")));
    }
    if !factors.warnings.is_empty() {
        lines.push(format!("Warnings: {}", factors.warnings.join("; ")));
    }
    lines.join("\n")
}
