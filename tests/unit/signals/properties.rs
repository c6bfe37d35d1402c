//! Property tests for engine invariants.
//!
//! 1. Determinism: identical snapshots yield identical analyses
//! 2. Trend strength never weakens as ADX rises
//! 3. A volatility spike always means VOLATILE and NO_TRADE
//! 4. Trending regimes force the matching direction
//! 5. Levels are ordered and respect the risk/reward floor

use proptest::prelude::*;

use fxregime::config::EngineConfig;
use fxregime::indicators::keys::{self, IndicatorKey};
use fxregime::models::analysis::{MarketAnalysis, Regime};
use fxregime::models::decision::TradeDirection;
use fxregime::models::snapshot::IndicatorSnapshot;
use fxregime::regime::classifier::RegimeClassifier;
use fxregime::signals::engine::AnalysisPipeline;

// ── Strategies ───────────────────────────────────────────────────────

const RANGES: &[(IndicatorKey, f64, f64)] = &[
    (keys::ADX_14, 0.0, 60.0),
    (keys::ADXR_14, 0.0, 60.0),
    (keys::PLUS_DI_14, 0.0, 50.0),
    (keys::MINUS_DI_14, 0.0, 50.0),
    (keys::AROON_UP, 0.0, 100.0),
    (keys::AROON_DOWN, 0.0, 100.0),
    (keys::AROONOSC, -100.0, 100.0),
    (keys::LINEARREG_ANGLE_14, -60.0, 60.0),
    (keys::HT_TRENDMODE, 0.0, 1.0),
    (keys::NATR_14, 0.05, 1.5),
    (keys::WCLPRICE, 1.08, 1.12),
    (keys::SMA_20, 1.08, 1.12),
    (keys::SMA_50, 1.08, 1.12),
    (keys::SMA_200, 1.08, 1.12),
    (keys::EMA_12, 1.08, 1.12),
    (keys::EMA_26, 1.08, 1.12),
    (keys::BBANDS_UPPER, 1.10, 1.13),
    (keys::BBANDS_MIDDLE, 1.09, 1.11),
    (keys::BBANDS_LOWER, 1.07, 1.10),
    (keys::SAR, 1.08, 1.12),
    (keys::RSI_14, 0.0, 100.0),
    (keys::STOCH_SLOWK, 0.0, 100.0),
    (keys::CCI_14, -250.0, 250.0),
    (keys::WILLR_14, -100.0, 0.0),
    (keys::ULTOSC, 0.0, 100.0),
    (keys::MFI_14, 0.0, 100.0),
    (keys::AD, -1_000.0, 1_000.0),
    (keys::ADOSC, -100.0, 100.0),
    (keys::ATR_14, 0.0002, 0.003),
    (keys::ROLLING_MAX, 1.10, 1.13),
    (keys::ROLLING_MIN, 1.07, 1.10),
];

fn arb_snapshot() -> impl Strategy<Value = IndicatorSnapshot> {
    prop::collection::vec(prop::option::of(0.0..1.0_f64), RANGES.len()).prop_map(|fractions| {
        RANGES
            .iter()
            .zip(fractions)
            .fold(IndicatorSnapshot::new(), |snapshot, (&(key, lo, hi), fraction)| {
                match fraction {
                    Some(f) => snapshot.with(key, lo + f * (hi - lo)),
                    None => snapshot.with_null(key),
                }
            })
    })
}

fn arb_price() -> impl Strategy<Value = f64> {
    1.09..1.11_f64
}

fn analyze(snapshot: &IndicatorSnapshot, price: f64) -> MarketAnalysis {
    AnalysisPipeline::default()
        .analyze(snapshot, price, "EUR_USD", "M5")
        .expect("analysis of a valid price and symbol")
}

// ── 1. Determinism ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn analysis_is_deterministic(snapshot in arb_snapshot(), price in arb_price()) {
        let first = analyze(&snapshot, price);
        let second = analyze(&snapshot, price);
        prop_assert_eq!(&first.regime, &second.regime);
        prop_assert_eq!(&first.agreement, &second.agreement);
        prop_assert_eq!(&first.decision, &second.decision);
        prop_assert_eq!(&first.levels, &second.levels);
    }
}

// ── 2. ADX monotonicity ──────────────────────────────────────────────

proptest! {
    #[test]
    fn trend_strength_monotone_in_adx(
        snapshot in arb_snapshot(),
        a in 0.0..60.0_f64,
        b in 0.0..60.0_f64,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let classifier = RegimeClassifier::default();
        let weaker = classifier.classify(
            &snapshot.clone().with(keys::ADX_14, low).with(keys::ADXR_14, low),
        );
        let stronger = classifier.classify(
            &snapshot.with(keys::ADX_14, high).with(keys::ADXR_14, high),
        );
        prop_assert!(weaker.trend_strength <= stronger.trend_strength);
    }
}

// ── 3. Volatile dominance ────────────────────────────────────────────

proptest! {
    #[test]
    fn spike_always_stands_aside(snapshot in arb_snapshot(), natr in 1.01..5.0_f64, price in arb_price()) {
        let analysis = analyze(&snapshot.with(keys::NATR_14, natr), price);
        prop_assert_eq!(analysis.regime.regime, Regime::Volatile);
        prop_assert_eq!(analysis.decision.direction, TradeDirection::NoTrade);
        prop_assert_eq!(analysis.decision.position_size_multiplier, 0.0);
        prop_assert!(analysis.levels.is_none());
    }
}

// ── 4. Direction coupling ────────────────────────────────────────────

proptest! {
    #[test]
    fn regime_and_direction_are_coupled(snapshot in arb_snapshot(), price in arb_price()) {
        let analysis = analyze(&snapshot, price);
        let direction = analysis.decision.direction;
        match analysis.regime.regime {
            Regime::TrendingUp => prop_assert_eq!(direction, TradeDirection::Long),
            Regime::TrendingDown => prop_assert_eq!(direction, TradeDirection::Short),
            Regime::Volatile => prop_assert_eq!(direction, TradeDirection::NoTrade),
            Regime::Ranging => {}
        }
        let multiplier = analysis.decision.position_size_multiplier;
        prop_assert!((0.0..=1.0).contains(&multiplier));
        prop_assert_eq!(direction == TradeDirection::NoTrade, analysis.levels.is_none());
    }
}

// ── 5. Level ordering and risk/reward ────────────────────────────────

proptest! {
    #[test]
    fn levels_are_ordered_with_minimum_reward(snapshot in arb_snapshot(), price in arb_price()) {
        let min_rr = EngineConfig::default().risk.min_risk_reward;
        let analysis = analyze(&snapshot, price);
        if let Some(levels) = analysis.levels {
            match analysis.decision.direction {
                TradeDirection::Long => {
                    prop_assert!(levels.stop_loss < levels.entry_price);
                    prop_assert!(levels.entry_price < levels.take_profit);
                }
                TradeDirection::Short => {
                    prop_assert!(levels.take_profit < levels.entry_price);
                    prop_assert!(levels.entry_price < levels.stop_loss);
                }
                TradeDirection::NoTrade => prop_assert!(false, "levels for NO_TRADE"),
            }
            prop_assert!(levels.risk_reward_ratio + 1e-9 >= min_rr);
            prop_assert!(levels.position_size >= 0.0);
            prop_assert!(levels.position_size <= EngineConfig::default().risk.max_lot_size + 1e-9);
        }
    }
}
