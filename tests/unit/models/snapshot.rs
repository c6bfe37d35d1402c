//! Unit tests for the indicator snapshot

use fxregime::indicators::keys;
use fxregime::indicators::registry::IndicatorCategory;
use fxregime::models::snapshot::{IndicatorSnapshot, SnapshotCategory};

#[test]
fn test_deserializes_producer_json_with_nulls() {
    let json = r#"{
        "overlap": {"SMA_20": 1.1030, "SMA_200": null},
        "momentum": {"RSI_14": 55.5},
        "patterns": {"CDLDOJI": 0, "CDLHAMMER": 100},
        "exotic": {"FOO": 1.0}
    }"#;
    let snapshot: IndicatorSnapshot = serde_json::from_str(json).unwrap();

    assert_eq!(snapshot.get(keys::SMA_20), Some(1.1030));
    assert_eq!(snapshot.get(keys::SMA_200), None);
    assert_eq!(snapshot.get(keys::RSI_14), Some(55.5));
    assert_eq!(snapshot.get(keys::ADX_14), None);
    assert_eq!(snapshot.get_raw(SnapshotCategory::Patterns, "CDLHAMMER"), Some(100.0));
}

#[test]
fn test_non_finite_values_read_as_missing() {
    let snapshot = IndicatorSnapshot::new()
        .with(keys::ADX_14, f64::NAN)
        .with(keys::RSI_14, f64::INFINITY);
    assert_eq!(snapshot.get(keys::ADX_14), None);
    assert_eq!(snapshot.get_or(keys::RSI_14, 50.0), 50.0);
    assert!(snapshot.is_empty());
}

#[test]
fn test_price_proxy_prefers_weighted_close() {
    let snapshot = IndicatorSnapshot::new()
        .with(keys::SMA_20, 1.10)
        .with(keys::BBANDS_MIDDLE, 1.11)
        .with(keys::WCLPRICE, 1.12);
    assert_eq!(snapshot.price_proxy(), Some(1.12));

    let snapshot = IndicatorSnapshot::new()
        .with(keys::SMA_20, 1.10)
        .with(keys::BBANDS_MIDDLE, 1.11);
    assert_eq!(snapshot.price_proxy(), Some(1.11));

    let snapshot = IndicatorSnapshot::new().with(keys::SMA_20, 1.10);
    assert_eq!(snapshot.price_proxy(), Some(1.10));

    assert_eq!(IndicatorSnapshot::new().price_proxy(), None);
}

#[test]
fn test_values_skip_nulls_in_name_order() {
    let snapshot = IndicatorSnapshot::new()
        .with_pattern("CDLHAMMER", 100.0)
        .with_pattern("CDLDOJI", 0.0)
        .with_null(keys::SMA_20);
    let names: Vec<&str> = snapshot
        .values(SnapshotCategory::Patterns)
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["CDLDOJI", "CDLHAMMER"]);
    assert_eq!(snapshot.values(SnapshotCategory::Overlap).count(), 0);
}

#[test]
fn test_coverage_counts_finite_values_per_family() {
    let snapshot = IndicatorSnapshot::new()
        .with(keys::AD, 1.0)
        .with(keys::OBV, 2.0)
        .with_null(keys::ADOSC);
    assert_eq!(snapshot.coverage(IndicatorCategory::Volume), 2);
    assert_eq!(snapshot.coverage(IndicatorCategory::Pattern), 0);
}

#[test]
fn test_serializes_back_to_nested_maps() {
    let snapshot = IndicatorSnapshot::new().with(keys::RSI_14, 42.0);
    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["momentum"]["RSI_14"], 42.0);
}

#[test]
fn test_keys_fall_back_to_batch_producer_spellings() {
    let json = r#"{
        "momentum": {"STOCH_K": 15.0, "STOCH_D": 18.0},
        "cycles": {"HT_SINE": 0.4, "HT_LEADSINE": 0.1},
        "math_operators": {"MAX_20": 1.1060, "MIN_20": 1.0990}
    }"#;
    let snapshot: IndicatorSnapshot = serde_json::from_str(json).unwrap();

    assert_eq!(snapshot.get(keys::STOCH_SLOWK), Some(15.0));
    assert_eq!(snapshot.get(keys::STOCH_SLOWD), Some(18.0));
    assert_eq!(snapshot.get(keys::HT_SINE_SINE), Some(0.4));
    assert_eq!(snapshot.get(keys::HT_SINE_LEADSINE), Some(0.1));
    assert_eq!(snapshot.get(keys::ROLLING_MAX), Some(1.1060));
    assert_eq!(snapshot.get(keys::ROLLING_MIN), Some(1.0990));
}

#[test]
fn test_canonical_spelling_wins_and_null_falls_through() {
    let json = r#"{
        "momentum": {"STOCH_slowk": 42.0, "STOCH_K": 15.0, "STOCHF_fastk": null, "STOCHF_K": 61.0},
        "math_operators": {"MIN_30": 1.0980, "MIN_20": 1.0990}
    }"#;
    let snapshot: IndicatorSnapshot = serde_json::from_str(json).unwrap();

    assert_eq!(snapshot.get(keys::STOCH_SLOWK), Some(42.0));
    assert_eq!(snapshot.get(keys::STOCHF_FASTK), Some(61.0));
    assert_eq!(snapshot.get(keys::ROLLING_MIN), Some(1.0980));
    assert_eq!(
        keys::ROLLING_MIN.spellings().collect::<Vec<_>>(),
        ["MIN_30", "MIN_20"]
    );
}
