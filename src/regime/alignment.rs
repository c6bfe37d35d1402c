//! Moving-average family alignment

use crate::config::RegimeThresholds;
use crate::indicators::keys::{self, IndicatorKey};
use crate::models::analysis::MaAlignment;
use crate::models::signal::{above, Tally};
use crate::models::snapshot::IndicatorSnapshot;

/// Faster/slower pairs; the pair is bullish when the first sits above the second
pub const ALIGNMENT_PAIRS: &[(IndicatorKey, IndicatorKey)] = &[
    (keys::MAMA, keys::FAMA),
    (keys::EMA_12, keys::EMA_26),
    (keys::EMA_12, keys::SMA_20),
    (keys::SMA_20, keys::SMA_50),
    (keys::SMA_50, keys::SMA_200),
    (keys::DEMA_30, keys::SMA_50),
    (keys::TEMA_30, keys::SMA_50),
    (keys::KAMA_30, keys::SMA_50),
    (keys::T3_5, keys::SMA_20),
    (keys::WMA_30, keys::SMA_50),
    (keys::TRIMA_30, keys::SMA_50),
];

/// Averages compared against the price proxy
pub const PRICE_ANCHORS: &[IndicatorKey] = &[keys::SMA_20, keys::SMA_50, keys::SMA_200, keys::EMA_50];

#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentReading {
    pub label: MaAlignment,
    pub tally: Tally,
    pub percent: Option<f64>,
}

pub fn assess(snapshot: &IndicatorSnapshot, thresholds: &RegimeThresholds) -> AlignmentReading {
    let price = snapshot.price_proxy();
    let comparisons = ALIGNMENT_PAIRS
        .iter()
        .map(|(fast, slow)| above(snapshot.get(*fast), snapshot.get(*slow)))
        .chain(
            PRICE_ANCHORS
                .iter()
                .map(|anchor| above(price, snapshot.get(*anchor))),
        );

    let mut tally = Tally::default();
    for comparison in comparisons.flatten() {
        if comparison {
            tally.bullish += 1;
        } else {
            tally.bearish += 1;
        }
    }

    let percent = tally.bullish_percent();
    let label = match percent {
        None => MaAlignment::Unknown,
        Some(pct) if pct >= thresholds.ma_bullish_percent => MaAlignment::Bullish,
        Some(pct) if pct <= thresholds.ma_bearish_percent => MaAlignment::Bearish,
        Some(_) => MaAlignment::Mixed,
    };

    AlignmentReading {
        label,
        tally,
        percent,
    }
}
