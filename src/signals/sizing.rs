//! Position-size multiplier from agreement strength

use crate::config::{EngineConfig, SizingConfig};
use crate::models::analysis::Regime;
use crate::models::decision::TradeDirection;
use crate::signals::aggregation::AgreementReport;

#[derive(Debug, Clone)]
pub struct PositionSizer {
    config: SizingConfig,
}

impl PositionSizer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            config: config.sizing.clone(),
        }
    }

    /// Multiplier in [0, 1] for a decision in `direction` under `regime`
    pub fn size(
        &self,
        agreement: &AgreementReport,
        regime: Regime,
        direction: TradeDirection,
        warning_factors: &[String],
    ) -> f64 {
        if direction == TradeDirection::NoTrade {
            return 0.0;
        }

        let multiplier = match regime {
            Regime::Volatile => 0.0,
            Regime::Ranging => self.config.ranging_multiplier,
            Regime::TrendingUp | Regime::TrendingDown => {
                let percent = agreement.percent_toward(direction);
                let base = self.tier(percent);
                base * self.derating(warning_factors.len())
            }
        };

        multiplier.clamp(0.0, 1.0)
    }

    fn tier(&self, percent: f64) -> f64 {
        self.config
            .tiers
            .iter()
            .find(|(min_percent, _)| percent >= *min_percent)
            .map(|(_, multiplier)| *multiplier)
            .unwrap_or(self.config.floor_multiplier)
    }

    fn derating(&self, warnings: usize) -> f64 {
        if warnings >= self.config.heavy_warning_count {
            self.config.heavy_warning_factor
        } else if warnings == self.config.moderate_warning_count {
            self.config.moderate_warning_factor
        } else {
            1.0
        }
    }
}

impl Default for PositionSizer {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
