//! Category-based aggregation of directional votes

use serde::Serialize;

use crate::config::EngineConfig;
use crate::indicators::registry::IndicatorCategory;
use crate::models::decision::TradeDirection;
use crate::models::signal::{Bias, Tally};
use crate::signals::categories::CategoryWeights;
use crate::signals::interpretation::CategoryInterpretations;

/// Tally of one category before the category weight is applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAgreement {
    pub category: IndicatorCategory,
    pub bullish_votes: u32,
    pub bearish_votes: u32,
    pub weight: u32,
    pub direction: Bias,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgreementReport {
    pub categories: Vec<CategoryAgreement>,
    pub total_bullish: u32,
    pub total_bearish: u32,
    pub bullish_percent: f64,
    pub overall_direction: Bias,
}

impl AgreementReport {
    pub fn category(&self, category: IndicatorCategory) -> Option<&CategoryAgreement> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Direction of one category, neutral when it is absent
    pub fn direction(&self, category: IndicatorCategory) -> Bias {
        self.category(category)
            .map(|c| c.direction)
            .unwrap_or(Bias::Neutral)
    }

    /// Agreement percentage in favour of `direction`; 50 for NO_TRADE
    pub fn percent_toward(&self, direction: TradeDirection) -> f64 {
        match direction {
            TradeDirection::Long => self.bullish_percent,
            TradeDirection::Short => 100.0 - self.bullish_percent,
            TradeDirection::NoTrade => 50.0,
        }
    }
}

/// Combines per-category tallies with the category weights
#[derive(Debug, Clone)]
pub struct AgreementScorer {
    weights: CategoryWeights,
}

impl AgreementScorer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            weights: config.category_weights.clone(),
        }
    }

    pub fn score(&self, interpretations: &CategoryInterpretations) -> AgreementReport {
        let categories: Vec<CategoryAgreement> = IndicatorCategory::all()
            .iter()
            .map(|&category| {
                let tally = interpretations.tally(category);
                CategoryAgreement {
                    category,
                    bullish_votes: tally.bullish,
                    bearish_votes: tally.bearish,
                    weight: self.weights.get(category),
                    direction: tally.direction(),
                }
            })
            .collect();

        let total = categories.iter().fold(Tally::default(), |total, c| {
            total
                + Tally {
                    bullish: c.bullish_votes,
                    bearish: c.bearish_votes,
                }
                .scaled(c.weight)
        });

        AgreementReport {
            categories,
            total_bullish: total.bullish,
            total_bearish: total.bearish,
            bullish_percent: total.bullish_percent().unwrap_or(50.0),
            overall_direction: total.direction(),
        }
    }
}

impl Default for AgreementScorer {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
