//! Regime labels and the aggregate analysis result

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::decision::{TradeDecision, TradeDirection, TradeLevels};
use crate::models::signal::{Bias, Tally};
use crate::signals::aggregation::AgreementReport;
use crate::signals::interpretation::CategoryInterpretations;

/// Qualitative market regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Regime {
    TrendingUp,
    TrendingDown,
    Ranging,
    Volatile,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::TrendingUp => "TRENDING_UP",
            Regime::TrendingDown => "TRENDING_DOWN",
            Regime::Ranging => "RANGING",
            Regime::Volatile => "VOLATILE",
        }
    }

    pub fn is_trending(&self) -> bool {
        matches!(self, Regime::TrendingUp | Regime::TrendingDown)
    }

    /// Direction a trending regime forces on the decision
    pub fn forced_direction(&self) -> Option<TradeDirection> {
        match self {
            Regime::TrendingUp => Some(TradeDirection::Long),
            Regime::TrendingDown => Some(TradeDirection::Short),
            Regime::Ranging | Regime::Volatile => None,
        }
    }

    /// Directional bias implied by the regime
    pub fn bias(&self) -> Bias {
        match self {
            Regime::TrendingUp => Bias::Bullish,
            Regime::TrendingDown => Bias::Bearish,
            Regime::Ranging | Regime::Volatile => Bias::Neutral,
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trend strength from the directional-movement index family
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendStrength {
    None,
    Weak,
    Strong,
}

impl TrendStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendStrength::None => "NONE",
            TrendStrength::Weak => "WEAK",
            TrendStrength::Strong => "STRONG",
        }
    }
}

/// Hilbert transform trend-vs-cycle mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CycleMode {
    Trending,
    Cycling,
}

impl CycleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleMode::Trending => "TRENDING",
            CycleMode::Cycling => "CYCLING",
        }
    }
}

/// Agreement of the moving-average family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaAlignment {
    Bullish,
    Bearish,
    Mixed,
    Unknown,
}

impl MaAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaAlignment::Bullish => "BULLISH",
            MaAlignment::Bearish => "BEARISH",
            MaAlignment::Mixed => "MIXED",
            MaAlignment::Unknown => "UNKNOWN",
        }
    }

    pub fn bias(&self) -> Bias {
        match self {
            MaAlignment::Bullish => Bias::Bullish,
            MaAlignment::Bearish => Bias::Bearish,
            MaAlignment::Mixed | MaAlignment::Unknown => Bias::Neutral,
        }
    }
}

/// Volatility state from normalized ATR and band width
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolatilityState {
    Low,
    Normal,
    High,
    Spike,
}

impl VolatilityState {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolatilityState::Low => "LOW",
            VolatilityState::Normal => "NORMAL",
            VolatilityState::High => "HIGH",
            VolatilityState::Spike => "SPIKE",
        }
    }
}

/// Output of the regime classifier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegimeAnalysis {
    pub regime: Regime,
    pub trend_strength: TrendStrength,
    pub directional_bias: Bias,
    pub timing_bias: Bias,
    pub statistical_bias: Bias,
    pub cycle_mode: CycleMode,
    pub ma_alignment: MaAlignment,
    pub ma_alignment_percent: Option<f64>,
    pub volatility: VolatilityState,
    /// Weighted bias votes behind the regime decision
    pub votes: Tally,
    pub trace: Vec<String>,
}

/// Aggregate root of one analysis cycle, keyed by (symbol, timeframe)
#[derive(Debug, Clone, Serialize)]
pub struct MarketAnalysis {
    pub symbol: String,
    pub timeframe: String,
    /// Timeframe the regime was classified on, when different from `timeframe`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regime_timeframe: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub current_price: f64,
    pub regime: RegimeAnalysis,
    pub interpretations: CategoryInterpretations,
    pub agreement: AgreementReport,
    pub decision: TradeDecision,
    pub levels: Option<TradeLevels>,
}

impl MarketAnalysis {
    pub fn is_tradeable(&self) -> bool {
        self.decision.direction != TradeDirection::NoTrade && self.levels.is_some()
    }
}
