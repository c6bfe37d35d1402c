//! Point-in-time indicator snapshot for one instrument and timeframe.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::indicators::keys::{self, IndicatorKey};
use crate::indicators::registry::IndicatorCategory;

/// Snapshot category as emitted by the indicator producer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotCategory {
    Overlap,
    Momentum,
    Volume,
    Volatility,
    Cycles,
    PriceTransform,
    Statistics,
    Patterns,
    MathTransform,
    MathOperators,
}

impl SnapshotCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotCategory::Overlap => "overlap",
            SnapshotCategory::Momentum => "momentum",
            SnapshotCategory::Volume => "volume",
            SnapshotCategory::Volatility => "volatility",
            SnapshotCategory::Cycles => "cycles",
            SnapshotCategory::PriceTransform => "price_transform",
            SnapshotCategory::Statistics => "statistics",
            SnapshotCategory::Patterns => "patterns",
            SnapshotCategory::MathTransform => "math_transform",
            SnapshotCategory::MathOperators => "math_operators",
        }
    }
}

/// Immutable mapping of category → indicator → value.
///
/// A `null` value means the producer lacked history for it. Non-finite values are treated the same way.
/// Unknown categories are kept but never read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorSnapshot {
    categories: BTreeMap<String, BTreeMap<String, Option<f64>>>,
}

impl IndicatorSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mainly for producers and tests
    pub fn with(mut self, key: IndicatorKey, value: f64) -> Self {
        self.insert(key.category, key.name, Some(value));
        self
    }

    /// Builder-style insert of an explicit null
    pub fn with_null(mut self, key: IndicatorKey) -> Self {
        self.insert(key.category, key.name, None);
        self
    }

    /// Builder-style insert of a candlestick detection (-100, 0 or 100)
    pub fn with_pattern(mut self, name: &str, value: f64) -> Self {
        self.insert(SnapshotCategory::Patterns, name, Some(value));
        self
    }

    pub fn insert(&mut self, category: SnapshotCategory, name: &str, value: Option<f64>) {
        self.categories
            .entry(category.as_str().to_string())
            .or_default()
            .insert(name.to_string(), value);
    }

    /// Finite value for `key` under its canonical name or the first alias that has one;
    /// `None` when absent, null or non-finite everywhere
    pub fn get(&self, key: IndicatorKey) -> Option<f64> {
        key.spellings()
            .find_map(|name| self.get_raw(key.category, name))
    }

    /// Value for `key`, falling back to a neutral default
    pub fn get_or(&self, key: IndicatorKey, default: f64) -> f64 {
        self.get(key).unwrap_or(default)
    }

    pub fn get_raw(&self, category: SnapshotCategory, name: &str) -> Option<f64> {
        self.categories
            .get(category.as_str())
            .and_then(|values| values.get(name))
            .copied()
            .flatten()
            .filter(|value| value.is_finite())
    }

    /// Finite values of one category, ordered by indicator name
    pub fn values(&self, category: SnapshotCategory) -> impl Iterator<Item = (&str, f64)> {
        self.categories
            .get(category.as_str())
            .into_iter()
            .flat_map(|values| values.iter())
            .filter_map(|(name, value)| {
                value
                    .filter(|v| v.is_finite())
                    .map(|v| (name.as_str(), v))
            })
    }

    /// Best available proxy for the current bar's price: weighted close, band middle, then SMA 20
    pub fn price_proxy(&self) -> Option<f64> {
        self.get(keys::WCLPRICE)
            .or_else(|| self.get(keys::BBANDS_MIDDLE))
            .or_else(|| self.get(keys::SMA_20))
    }

    /// Number of finite values available to an interpretation category
    pub fn coverage(&self, category: IndicatorCategory) -> usize {
        category
            .sources()
            .iter()
            .map(|source| self.values(*source).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories
            .values()
            .all(|values| values.values().all(|v| v.map_or(true, |v| !v.is_finite())))
    }
}
