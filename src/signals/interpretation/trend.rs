//! Trend family: moving averages, bands, stop-and-reverse, regression

use serde::Serialize;

use crate::config::{EngineConfig, TrendThresholds};
use crate::indicators::keys;
use crate::indicators::registry::IndicatorCategory;
use crate::models::analysis::Regime;
use crate::models::signal::{above, sign_bias, Bias, VoteBook};
use crate::models::snapshot::IndicatorSnapshot;
use crate::regime::classifier::DEFAULT_ADX;
use crate::signals::interpretation::{CategoryInterpreter, Interpretation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    Up,
    Down,
    Sideways,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "UP",
            TrendDirection::Down => "DOWN",
            TrendDirection::Sideways => "SIDEWAYS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendQuality {
    Strong,
    Moderate,
    Weak,
}

impl TrendQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendQuality::Strong => "STRONG",
            TrendQuality::Moderate => "MODERATE",
            TrendQuality::Weak => "WEAK",
        }
    }
}

/// Relative position of a fast and slow line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Crossover {
    Bullish,
    Bearish,
    Unknown,
}

impl Crossover {
    pub fn as_str(&self) -> &'static str {
        match self {
            Crossover::Bullish => "BULLISH",
            Crossover::Bearish => "BEARISH",
            Crossover::Unknown => "UNKNOWN",
        }
    }

    fn from_pair(fast: Option<f64>, slow: Option<f64>) -> Self {
        match above(fast, slow) {
            Some(true) => Crossover::Bullish,
            Some(false) => Crossover::Bearish,
            None => Crossover::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SarPosition {
    BelowPrice,
    AbovePrice,
    Unknown,
}

impl SarPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            SarPosition::BelowPrice => "BELOW_PRICE",
            SarPosition::AbovePrice => "ABOVE_PRICE",
            SarPosition::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendInterpretation {
    pub direction: TrendDirection,
    pub strength: TrendQuality,
    pub ema_crossover: Crossover,
    pub mama_crossover: Crossover,
    pub sar_position: SarPosition,
    pub bullish_percent: Option<f64>,
    pub votes: VoteBook,
    pub trace: Vec<String>,
}

impl Interpretation for TrendInterpretation {
    fn votes(&self) -> &VoteBook {
        &self.votes
    }

    fn trace(&self) -> &[String] {
        &self.trace
    }
}

#[derive(Debug, Clone)]
pub struct TrendInterpreter {
    thresholds: TrendThresholds,
}

impl TrendInterpreter {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            thresholds: config.trend.clone(),
        }
    }
}

impl CategoryInterpreter for TrendInterpreter {
    type Output = TrendInterpretation;

    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Trend
    }

    fn interpret(&self, snapshot: &IndicatorSnapshot, regime: Regime) -> TrendInterpretation {
        let price = snapshot.price_proxy();
        let get = |key| snapshot.get(key);

        let mut votes = VoteBook::new();
        let pairs = [
            ("EMA_12 vs EMA_26", get(keys::EMA_12), get(keys::EMA_26)),
            ("SMA_20 vs SMA_50", get(keys::SMA_20), get(keys::SMA_50)),
            ("SMA_50 vs SMA_200", get(keys::SMA_50), get(keys::SMA_200)),
            ("DEMA_30 vs SMA_50", get(keys::DEMA_30), get(keys::SMA_50)),
            ("TEMA_30 vs SMA_50", get(keys::TEMA_30), get(keys::SMA_50)),
            ("KAMA_30 vs SMA_50", get(keys::KAMA_30), get(keys::SMA_50)),
            ("MAMA vs FAMA", get(keys::MAMA), get(keys::FAMA)),
            ("price vs SMA_20", price, get(keys::SMA_20)),
            ("price vs SMA_50", price, get(keys::SMA_50)),
            ("price vs SMA_200", price, get(keys::SMA_200)),
            ("price vs BBANDS_middle", price, get(keys::BBANDS_MIDDLE)),
            ("price vs SAR", price, get(keys::SAR)),
            ("price vs TSF_14", price, get(keys::TSF_14)),
        ];
        for (signal, fast, slow) in pairs {
            votes.cast(signal, Bias::from_comparison(above(fast, slow)));
        }
        votes.cast(
            "LINEARREG_SLOPE_14",
            sign_bias(get(keys::LINEARREG_SLOPE_14), 0.0),
        );

        let tally = votes.tally();
        let bullish_percent = tally.bullish_percent();
        let direction = match tally.direction_by_share(self.thresholds.up_percent, self.thresholds.down_percent) {
            Bias::Bullish => TrendDirection::Up,
            Bias::Bearish => TrendDirection::Down,
            Bias::Neutral => TrendDirection::Sideways,
        };

        let adx = snapshot.get_or(keys::ADX_14, DEFAULT_ADX);
        let strength = if adx > self.thresholds.adx_strong {
            TrendQuality::Strong
        } else if adx > self.thresholds.adx_moderate {
            TrendQuality::Moderate
        } else {
            TrendQuality::Weak
        };

        let ema_crossover = Crossover::from_pair(get(keys::EMA_12), get(keys::EMA_26));
        let mama_crossover = Crossover::from_pair(get(keys::MAMA), get(keys::FAMA));
        let sar_position = match above(price, get(keys::SAR)) {
            Some(true) => SarPosition::BelowPrice,
            Some(false) => SarPosition::AbovePrice,
            None => SarPosition::Unknown,
        };

        let mut trace = vec![format!(
            "Trend: {} bullish / {} bearish signals -> {} ({}, ADX {:.1})",
            tally.bullish,
            tally.bearish,
            direction.as_str(),
            strength.as_str(),
            adx
        )];
        trace.push(format!(
            "EMA crossover {}, MAMA/FAMA {}, SAR {}",
            ema_crossover.as_str(),
            mama_crossover.as_str(),
            sar_position.as_str()
        ));
        trace.push(context_line(regime, direction).to_string());

        TrendInterpretation {
            direction,
            strength,
            ema_crossover,
            mama_crossover,
            sar_position,
            bullish_percent,
            votes,
            trace,
        }
    }
}

fn context_line(regime: Regime, direction: TrendDirection) -> &'static str {
    match (regime, direction) {
        (Regime::TrendingUp, TrendDirection::Up) => "UPTREND CONFIRMED - trend signals agree with regime",
        (Regime::TrendingUp, TrendDirection::Down) => "Possible pullback inside the uptrend",
        (Regime::TrendingUp, TrendDirection::Sideways) => "Uptrend pausing - consolidation",
        (Regime::TrendingDown, TrendDirection::Down) => "DOWNTREND CONFIRMED - trend signals agree with regime",
        (Regime::TrendingDown, TrendDirection::Up) => "Possible relief rally inside the downtrend",
        (Regime::TrendingDown, TrendDirection::Sideways) => "Downtrend pausing - consolidation",
        (Regime::Ranging, _) => "Range-bound - trend signals carry little weight",
        (Regime::Volatile, _) => "Volatile - trend signals distorted",
    }
}
