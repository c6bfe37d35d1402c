//! Unit tests for order and execution outcomes

use fxregime::models::decision::{TradeDirection, TradeLevels};
use fxregime::models::execution::{TradeOrder, TradeResult};

fn levels() -> TradeLevels {
    TradeLevels {
        entry_price: 1.1050,
        stop_loss: 1.1035,
        take_profit: 1.1075,
        stop_loss_distance: 0.0015,
        take_profit_distance: 0.0025,
        stop_loss_pips: 15.0,
        take_profit_pips: 25.0,
        risk_reward_ratio: 0.0025 / 0.0015,
        position_size: 0.5,
    }
}

#[test]
fn test_order_from_levels() {
    let order = TradeOrder::from_levels("EUR_USD", TradeDirection::Long, &levels()).unwrap();
    assert_eq!(order.units, 0.5);
    assert_eq!(order.stop_loss, 1.1035);
    assert_eq!(order.take_profit, 1.1075);
    assert!(TradeOrder::from_levels("EUR_USD", TradeDirection::NoTrade, &levels()).is_none());
}

#[test]
fn test_trade_result_outcomes() {
    let filled = TradeResult::filled("42", 1.1052);
    assert!(filled.success);
    assert!((filled.slippage(1.1050).unwrap() - 0.0002).abs() < 1e-12);

    let failed = TradeResult::failed("market closed");
    assert!(!failed.success);
    assert_eq!(failed.slippage(1.1050), None);

    let json = serde_json::to_value(&failed).unwrap();
    assert_eq!(json["error"], "market closed");
    assert!(json.get("order_id").is_none());
}
