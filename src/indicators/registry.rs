//! Interpretation categories and the snapshot categories that feed them

use serde::Serialize;

use crate::models::snapshot::SnapshotCategory;

/// Indicator family interpreted as one unit by the decision engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCategory {
    Trend,
    Momentum,
    Volume,
    Pattern,
    Cycle,
}

impl IndicatorCategory {
    /// All categories in hierarchy order (Trend > Momentum > Volume > Pattern), cycle last
    pub fn all() -> [IndicatorCategory; 5] {
        [
            IndicatorCategory::Trend,
            IndicatorCategory::Momentum,
            IndicatorCategory::Volume,
            IndicatorCategory::Pattern,
            IndicatorCategory::Cycle,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            IndicatorCategory::Trend => "Trend",
            IndicatorCategory::Momentum => "Momentum",
            IndicatorCategory::Volume => "Volume",
            IndicatorCategory::Pattern => "Pattern",
            IndicatorCategory::Cycle => "Cycle",
        }
    }

    /// Snapshot categories read when interpreting this family
    pub fn sources(&self) -> &'static [SnapshotCategory] {
        match self {
            IndicatorCategory::Trend => &[
                SnapshotCategory::Overlap,
                SnapshotCategory::PriceTransform,
                SnapshotCategory::Statistics,
                SnapshotCategory::Momentum,
            ],
            IndicatorCategory::Momentum => &[SnapshotCategory::Momentum],
            IndicatorCategory::Volume => &[SnapshotCategory::Volume, SnapshotCategory::Momentum],
            IndicatorCategory::Pattern => &[SnapshotCategory::Patterns],
            IndicatorCategory::Cycle => &[SnapshotCategory::Cycles],
        }
    }
}

impl std::fmt::Display for IndicatorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
