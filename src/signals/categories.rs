//! Category weights for the agreement tally

use crate::error::ConfigError;
use crate::indicators::registry::IndicatorCategory;

/// Vote multipliers applied when category tallies are combined
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWeights {
    pub trend: u32,
    pub momentum: u32,
    pub volume: u32,
    pub pattern: u32,
    pub cycle: u32,
    /// Weight of the +DI/-DI vote inside the momentum tally
    pub directional_movement: u32,
    /// Weight of the cycle vote that follows the regime while in trend mode
    pub cycle_trend_mode: u32,
}

impl CategoryWeights {
    pub const TREND: u32 = 2;
    pub const MOMENTUM: u32 = 1;
    pub const VOLUME: u32 = 1;
    pub const PATTERN: u32 = 1;
    pub const CYCLE: u32 = 1;
    pub const DIRECTIONAL_MOVEMENT: u32 = 2;
    pub const CYCLE_TREND_MODE: u32 = 2;

    /// Get weight for a category
    pub fn get(&self, category: IndicatorCategory) -> u32 {
        match category {
            IndicatorCategory::Trend => self.trend,
            IndicatorCategory::Momentum => self.momentum,
            IndicatorCategory::Volume => self.volume,
            IndicatorCategory::Pattern => self.pattern,
            IndicatorCategory::Cycle => self.cycle,
        }
    }

    /// At least one category must carry weight
    pub fn validate(&self) -> Result<(), ConfigError> {
        let total: u32 = IndicatorCategory::all().iter().map(|c| self.get(*c)).sum();
        if total == 0 {
            return Err(ConfigError::NonPositive {
                field: "category_weights",
                value: 0.0,
            });
        }
        Ok(())
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            trend: Self::TREND,
            momentum: Self::MOMENTUM,
            volume: Self::VOLUME,
            pattern: Self::PATTERN,
            cycle: Self::CYCLE,
            directional_movement: Self::DIRECTIONAL_MOVEMENT,
            cycle_trend_mode: Self::CYCLE_TREND_MODE,
        }
    }
}
