//! Trade decision and price levels

use serde::Serialize;

use crate::models::signal::Bias;

/// Direction of the synthesized decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeDirection {
    Long,
    Short,
    NoTrade,
}

impl TradeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeDirection::Long => "LONG",
            TradeDirection::Short => "SHORT",
            TradeDirection::NoTrade => "NO_TRADE",
        }
    }

    /// Market bias this direction profits from
    pub fn bias(&self) -> Bias {
        match self {
            TradeDirection::Long => Bias::Bullish,
            TradeDirection::Short => Bias::Bearish,
            TradeDirection::NoTrade => Bias::Neutral,
        }
    }
}

impl std::fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeDecision {
    pub direction: TradeDirection,
    pub confidence_factors: Vec<String>,
    pub warning_factors: Vec<String>,
    /// Scales the risk-based lot size, always within [0, 1]
    pub position_size_multiplier: f64,
    pub reasoning: String,
}

/// Entry, protective stop and target for a LONG or SHORT decision
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeLevels {
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub stop_loss_distance: f64,
    pub take_profit_distance: f64,
    pub stop_loss_pips: f64,
    pub take_profit_pips: f64,
    pub risk_reward_ratio: f64,
    /// Lots, rounded to the lot step
    pub position_size: f64,
}
