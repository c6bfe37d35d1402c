//! Candlestick pattern detections

use serde::Serialize;

use crate::indicators::keys::{PATTERN_PREFIX, REVERSAL_PATTERNS};
use crate::indicators::registry::IndicatorCategory;
use crate::models::analysis::Regime;
use crate::models::signal::{Bias, VoteBook};
use crate::models::snapshot::{IndicatorSnapshot, SnapshotCategory};
use crate::signals::interpretation::{CategoryInterpreter, Interpretation};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternInterpretation {
    pub bias: Bias,
    pub bullish_patterns: Vec<String>,
    pub bearish_patterns: Vec<String>,
    /// Most significant detection in the direction of the bias
    pub strongest: Option<String>,
    pub votes: VoteBook,
    pub trace: Vec<String>,
}

impl Interpretation for PatternInterpretation {
    fn votes(&self) -> &VoteBook {
        &self.votes
    }

    fn trace(&self) -> &[String] {
        &self.trace
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatternInterpreter;

impl PatternInterpreter {
    pub fn new() -> Self {
        Self
    }
}

impl CategoryInterpreter for PatternInterpreter {
    type Output = PatternInterpretation;

    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Pattern
    }

    fn interpret(&self, snapshot: &IndicatorSnapshot, regime: Regime) -> PatternInterpretation {
        let mut votes = VoteBook::new();
        let mut bullish_patterns = Vec::new();
        let mut bearish_patterns = Vec::new();

        for (name, value) in snapshot.values(SnapshotCategory::Patterns) {
            if !name.starts_with(PATTERN_PREFIX) {
                continue;
            }
            if value > 0.0 {
                bullish_patterns.push(name.to_string());
                votes.cast(name, Bias::Bullish);
            } else if value < 0.0 {
                bearish_patterns.push(name.to_string());
                votes.cast(name, Bias::Bearish);
            }
        }

        let bias = votes.tally().direction();
        let strongest = match bias {
            Bias::Bullish => strongest(&bullish_patterns),
            Bias::Bearish => strongest(&bearish_patterns),
            Bias::Neutral => None,
        };

        let mut trace = vec![format!(
            "Patterns: {} bullish, {} bearish -> {}",
            bullish_patterns.len(),
            bearish_patterns.len(),
            bias
        )];
        if let Some(name) = &strongest {
            trace.push(format!("Strongest pattern: {}", name));
        }
        if regime.is_trending() && bias == regime.bias().opposite() {
            trace.push("Counter-trend patterns - read as pullback, not reversal".to_string());
        }

        PatternInterpretation {
            bias,
            bullish_patterns,
            bearish_patterns,
            strongest,
            votes,
            trace,
        }
    }
}

fn strongest(detected: &[String]) -> Option<String> {
    REVERSAL_PATTERNS
        .iter()
        .find(|name| detected.iter().any(|d| d.as_str() == **name))
        .map(|name| name.to_string())
        .or_else(|| detected.first().cloned())
}
