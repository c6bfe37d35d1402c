//! Unit tests for category agreement

use fxregime::config::EngineConfig;
use fxregime::indicators::registry::IndicatorCategory;
use fxregime::models::analysis::Regime;
use fxregime::models::decision::TradeDirection;
use fxregime::models::signal::Bias;
use fxregime::models::snapshot::IndicatorSnapshot;
use fxregime::signals::aggregation::AgreementScorer;
use fxregime::signals::interpretation::Interpreters;

use crate::fixtures;

#[test]
fn test_weighted_totals_on_uptrend() {
    let config = EngineConfig::default();
    let interpretations =
        Interpreters::new(&config).interpret_all(&fixtures::trending_up(), Regime::TrendingUp);
    let report = AgreementScorer::new(&config).score(&interpretations);

    let trend = report.category(IndicatorCategory::Trend).unwrap();
    assert_eq!(trend.bullish_votes, 14);
    assert_eq!(trend.weight, 2);

    // trend 14 x 2, momentum 25, volume 4, pattern 1, cycle 5
    assert_eq!(report.total_bullish, 63);
    assert_eq!(report.total_bearish, 0);
    assert_eq!(report.bullish_percent, 100.0);
    assert_eq!(report.overall_direction, Bias::Bullish);
    assert_eq!(report.percent_toward(TradeDirection::Short), 0.0);
}

#[test]
fn test_empty_interpretations_default_to_even() {
    let config = EngineConfig::default();
    let interpretations =
        Interpreters::new(&config).interpret_all(&IndicatorSnapshot::new(), Regime::Ranging);
    let report = AgreementScorer::default().score(&interpretations);

    assert_eq!(report.categories.len(), 5);
    assert_eq!(report.total_bullish + report.total_bearish, 0);
    assert_eq!(report.bullish_percent, 50.0);
    assert_eq!(report.overall_direction, Bias::Neutral);
    assert_eq!(report.direction(IndicatorCategory::Volume), Bias::Neutral);
    assert_eq!(report.percent_toward(TradeDirection::NoTrade), 50.0);
}

#[test]
fn test_category_weight_changes_totals() {
    let mut config = EngineConfig::default();
    config.category_weights.trend = 1;
    let interpretations =
        Interpreters::new(&config).interpret_all(&fixtures::trending_up(), Regime::TrendingUp);
    let report = AgreementScorer::new(&config).score(&interpretations);
    assert_eq!(report.total_bullish, 49);
}
