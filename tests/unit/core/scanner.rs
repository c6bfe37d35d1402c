//! Unit tests for opportunity scoring and multi-instrument scans

use std::sync::Arc;

use fxregime::core::scanner::{
    rank, AnalysisRequest, OpportunityScoring, Scanner, ScoredOpportunity, DEFAULT_REGIME_TIMEFRAME,
};
use fxregime::indicators::keys;
use fxregime::metrics::Metrics;
use fxregime::models::snapshot::IndicatorSnapshot;
use fxregime::signals::engine::AnalysisPipeline;

use crate::fixtures;

fn request(symbol: &str, snapshot: IndicatorSnapshot, price: f64) -> AnalysisRequest {
    AnalysisRequest {
        symbol: symbol.to_string(),
        timeframe: "M5".to_string(),
        price,
        snapshot,
        regime_snapshot: None,
        regime_timeframe: DEFAULT_REGIME_TIMEFRAME.to_string(),
    }
}

fn scanner() -> Scanner {
    Scanner::new(Arc::new(AnalysisPipeline::default()))
}

#[test]
fn test_scoring_of_trending_setup() {
    let analysis = scanner()
        .analyze(&request("EUR_USD", fixtures::trending_up(), fixtures::EURUSD_PRICE))
        .unwrap();
    let score = OpportunityScoring::default().score(&analysis, &fixtures::trending_up(), None);
    // trending 20 + 5 confidence x 5 + risk/reward 1.67 -> 10
    assert_eq!(score, Some(55));
}

#[test]
fn test_timeframe_alignment_bonus() {
    let analysis = scanner()
        .analyze(&request("EUR_USD", fixtures::trending_up(), fixtures::EURUSD_PRICE))
        .unwrap();
    let scoring = OpportunityScoring::default();
    let regime_snapshot = fixtures::trending_up();
    // MACD histogram agrees (+10) and regime ADX 35 > 30 (+5)
    assert_eq!(
        scoring.score(&analysis, &fixtures::trending_up(), Some(&regime_snapshot)),
        Some(70)
    );

    let against = fixtures::trending_up().with(keys::MACD_HIST, -0.0001);
    assert_eq!(scoring.score(&analysis, &against, Some(&regime_snapshot)), Some(60));
}

#[test]
fn test_no_trade_is_not_scored() {
    let analysis = scanner()
        .analyze(&request("EUR_USD", fixtures::volatile(), fixtures::EURUSD_PRICE))
        .unwrap();
    assert_eq!(OpportunityScoring::default().score(&analysis, &fixtures::volatile(), None), None);
}

#[test]
fn test_scan_ranks_and_skips() {
    let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
    let scanner = scanner().with_metrics(metrics.clone());
    let report = scanner.scan(&[
        request("USD_CHF", fixtures::ranging_oversold(), fixtures::RANGE_PRICE),
        request("EUR_USD", fixtures::trending_up(), fixtures::EURUSD_PRICE),
        request("GBP_USD", fixtures::volatile(), fixtures::EURUSD_PRICE),
        request("NOT_A_PAIR", fixtures::trending_up(), fixtures::EURUSD_PRICE),
    ]);

    assert_eq!(report.opportunities.len(), 2);
    assert_eq!(report.best_trade().unwrap().analysis.symbol, "EUR_USD");
    assert!(report.opportunities[0].score >= report.opportunities[1].score);
    assert_eq!(report.idle.len(), 1);
    assert_eq!(report.idle[0].symbol, "GBP_USD");
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].symbol, "NOT_A_PAIR");

    assert_eq!(metrics.analysis_failures_total.get(), 1);
    assert_eq!(
        metrics.decisions_total.with_label_values(&["LONG"]).get(),
        2
    );
    assert_eq!(metrics.scan_duration_seconds.get_sample_count(), 1);
}

#[test]
fn test_scan_of_nothing_is_empty() {
    let report = scanner().scan(&[]);
    assert!(report.best_trade().is_none());
    assert!(report.idle.is_empty());
}

#[test]
fn test_request_defaults_when_deserializing() {
    let json = serde_json::json!({
        "symbol": "EUR_USD",
        "price": 1.1,
        "snapshot": {"momentum": {"RSI_14": 50.0}}
    });
    let request: AnalysisRequest = serde_json::from_value(json).unwrap();
    assert_eq!(request.timeframe, "M5");
    assert_eq!(request.regime_timeframe, "H1");
    assert!(request.regime_snapshot.is_none());
}

#[test]
fn test_multi_timeframe_request() {
    let mut req = request("EUR_USD", fixtures::ranging_mid(), fixtures::RANGE_PRICE);
    req.regime_snapshot = Some(fixtures::trending_up());
    let analysis = scanner().analyze(&req).unwrap();
    assert_eq!(analysis.regime_timeframe.as_deref(), Some("H1"));
    assert!(analysis.is_tradeable());
}

#[test]
fn test_rank_orders_best_first_and_keeps_ties_stable() {
    let analysis = scanner()
        .analyze(&request("EUR_USD", fixtures::trending_up(), fixtures::EURUSD_PRICE))
        .unwrap();
    let opportunity = |symbol: &str, score: i32| {
        let mut analysis = analysis.clone();
        analysis.symbol = symbol.to_string();
        ScoredOpportunity { score, analysis }
    };

    let ranked = rank(vec![
        opportunity("AUD_USD", 10),
        opportunity("EUR_USD", 40),
        opportunity("GBP_USD", 10),
    ]);
    let order: Vec<&str> = ranked.iter().map(|o| o.analysis.symbol.as_str()).collect();
    assert_eq!(order, ["EUR_USD", "AUD_USD", "GBP_USD"]);
}

#[test]
fn test_custom_scoring_reorders_opportunities() {
    let scoring = OpportunityScoring {
        trending_bonus: 0,
        ranging_bonus: 100,
        ..OpportunityScoring::default()
    };
    let report = scanner().with_scoring(scoring).scan(&[
        request("EUR_USD", fixtures::trending_up(), fixtures::EURUSD_PRICE),
        request("USD_CHF", fixtures::ranging_oversold(), fixtures::RANGE_PRICE),
    ]);

    assert_eq!(report.best_trade().unwrap().analysis.symbol, "USD_CHF");
}
