//! Unit tests for the regime classifier

use fxregime::config::EngineConfig;
use fxregime::indicators::keys;
use fxregime::models::analysis::{CycleMode, MaAlignment, Regime, TrendStrength, VolatilityState};
use fxregime::models::signal::Bias;
use fxregime::models::snapshot::IndicatorSnapshot;
use fxregime::regime::classifier::RegimeClassifier;

use crate::fixtures;

#[test]
fn test_aligned_uptrend_is_trending_up() {
    let analysis = RegimeClassifier::default().classify(&fixtures::trending_up());

    assert_eq!(analysis.regime, Regime::TrendingUp);
    assert_eq!(analysis.trend_strength, TrendStrength::Strong);
    assert_eq!(analysis.directional_bias, Bias::Bullish);
    assert_eq!(analysis.timing_bias, Bias::Bullish);
    assert_eq!(analysis.statistical_bias, Bias::Bullish);
    assert_eq!(analysis.ma_alignment, MaAlignment::Bullish);
    assert_eq!(analysis.ma_alignment_percent, Some(100.0));
    assert_eq!(analysis.cycle_mode, CycleMode::Trending);
    assert_eq!(analysis.volatility, VolatilityState::Low);
    assert_eq!(analysis.votes.bullish, 6);
    assert_eq!(analysis.votes.bearish, 0);
}

#[test]
fn test_trace_ends_with_conclusion() {
    let analysis = RegimeClassifier::default().classify(&fixtures::trending_up());
    let last = analysis.trace.last().unwrap();
    assert!(last.starts_with("CONCLUSION: TRENDING_UP"), "{}", last);
}

#[test]
fn test_spike_forces_volatile_regardless_of_trend() {
    let analysis = RegimeClassifier::default().classify(&fixtures::volatile());
    assert_eq!(analysis.volatility, VolatilityState::Spike);
    assert_eq!(analysis.regime, Regime::Volatile);
    assert_eq!(analysis.trend_strength, TrendStrength::Strong);
}

#[test]
fn test_extreme_natr_alone_is_a_spike() {
    let snapshot = fixtures::trending_up().with(keys::NATR_14, 1.5);
    let analysis = RegimeClassifier::default().classify(&snapshot);
    assert_eq!(analysis.regime, Regime::Volatile);
}

#[test]
fn test_sparse_downtrend_is_trending_down() {
    let analysis = RegimeClassifier::default().classify(&fixtures::trending_down_sparse());
    assert_eq!(analysis.regime, Regime::TrendingDown);
    assert_eq!(analysis.ma_alignment, MaAlignment::Unknown);
    assert_eq!(analysis.votes.bearish, 4);
}

#[test]
fn test_low_adx_is_ranging() {
    let analysis = RegimeClassifier::default().classify(&fixtures::ranging_oversold());
    assert_eq!(analysis.trend_strength, TrendStrength::None);
    assert_eq!(analysis.regime, Regime::Ranging);
}

#[test]
fn test_weak_trend_needs_only_the_weak_margin() {
    // Average ADX 22 is WEAK; only the +DI/-DI component votes (weight 2)
    let snapshot = IndicatorSnapshot::new()
        .with(keys::ADX_14, 22.0)
        .with(keys::ADXR_14, 22.0)
        .with(keys::PLUS_DI_14, 32.0)
        .with(keys::MINUS_DI_14, 12.0);
    let analysis = RegimeClassifier::default().classify(&snapshot);
    assert_eq!(analysis.trend_strength, TrendStrength::Weak);
    assert_eq!(analysis.regime, Regime::TrendingUp);
}

#[test]
fn test_vote_margin_of_one_is_not_enough() {
    // Timing (1) bullish vs nothing bearish: margin 1 is not above the weak margin
    let snapshot = IndicatorSnapshot::new()
        .with(keys::ADX_14, 22.0)
        .with(keys::ADXR_14, 22.0)
        .with(keys::AROON_UP, 90.0)
        .with(keys::AROON_DOWN, 10.0);
    let analysis = RegimeClassifier::default().classify(&snapshot);
    assert_eq!(analysis.regime, Regime::Ranging);
}

#[test]
fn test_empty_snapshot_uses_neutral_defaults() {
    for snapshot in [IndicatorSnapshot::new(), fixtures::all_null()] {
        let analysis = RegimeClassifier::default().classify(&snapshot);
        assert_eq!(analysis.regime, Regime::Ranging);
        assert_eq!(analysis.trend_strength, TrendStrength::None);
        assert_eq!(analysis.directional_bias, Bias::Neutral);
        assert_eq!(analysis.timing_bias, Bias::Neutral);
        assert_eq!(analysis.volatility, VolatilityState::Normal);
        assert_eq!(analysis.ma_alignment, MaAlignment::Unknown);
        assert_eq!(analysis.cycle_mode, CycleMode::Cycling);
    }
}

#[test]
fn test_custom_thresholds_change_strength() {
    let mut config = EngineConfig::default();
    config.regime.adx_strong = 40.0;
    config.regime.adx_weak = 30.0;
    let analysis = RegimeClassifier::new(&config).classify(&fixtures::trending_up());
    assert_eq!(analysis.trend_strength, TrendStrength::Weak);
    assert_eq!(analysis.regime, Regime::TrendingUp);
}

#[test]
fn test_classification_is_deterministic() {
    let classifier = RegimeClassifier::default();
    let snapshot = fixtures::trending_up();
    assert_eq!(classifier.classify(&snapshot), classifier.classify(&snapshot));
}
