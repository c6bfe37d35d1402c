//! Outcome reported by the execution layer that consumes trade levels

use serde::{Deserialize, Serialize};

use crate::models::decision::{TradeDirection, TradeLevels};

/// Order submitted downstream for one analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeOrder {
    pub symbol: String,
    pub direction: TradeDirection,
    pub units: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
}

impl TradeOrder {
    /// Build an order from a decision; `None` for NO_TRADE
    pub fn from_levels(symbol: &str, direction: TradeDirection, levels: &TradeLevels) -> Option<Self> {
        match direction {
            TradeDirection::NoTrade => None,
            TradeDirection::Long | TradeDirection::Short => Some(Self {
                symbol: symbol.to_string(),
                direction,
                units: levels.position_size,
                stop_loss: levels.stop_loss,
                take_profit: levels.take_profit,
            }),
        }
    }
}

/// Result of placing or closing an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TradeResult {
    pub fn filled(order_id: impl Into<String>, fill_price: f64) -> Self {
        Self {
            success: true,
            order_id: Some(order_id.into()),
            fill_price: Some(fill_price),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            order_id: None,
            fill_price: None,
            error: Some(error.into()),
        }
    }

    /// Slippage of the fill against the planned entry, in price units
    pub fn slippage(&self, planned_entry: f64) -> Option<f64> {
        self.fill_price.map(|fill| fill - planned_entry)
    }
}
