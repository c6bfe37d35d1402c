//! Analysis pipeline: regime → interpretation → agreement → decision → levels.

use chrono::Utc;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::indicators::registry::IndicatorCategory;
use crate::markets::instrument::Instrument;
use crate::models::analysis::MarketAnalysis;
use crate::models::snapshot::IndicatorSnapshot;
use crate::regime::classifier::RegimeClassifier;
use crate::signals::aggregation::AgreementScorer;
use crate::signals::decision::DecisionResolver;
use crate::signals::interpretation::Interpreters;
use crate::signals::levels::LevelCalculator;

/// Stateless orchestration of the decision core; safe to share across tasks
#[derive(Debug, Clone)]
pub struct AnalysisPipeline {
    classifier: RegimeClassifier,
    interpreters: Interpreters,
    scorer: AgreementScorer,
    resolver: DecisionResolver,
    levels: LevelCalculator,
}

impl AnalysisPipeline {
    /// Build a pipeline from a validated configuration
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &EngineConfig) -> Self {
        Self {
            classifier: RegimeClassifier::new(config),
            interpreters: Interpreters::new(config),
            scorer: AgreementScorer::new(config),
            resolver: DecisionResolver::new(config),
            levels: LevelCalculator::new(config),
        }
    }

    /// Analyze one snapshot; the regime is classified on the same snapshot
    pub fn analyze(
        &self,
        snapshot: &IndicatorSnapshot,
        current_price: f64,
        symbol: &str,
        timeframe: &str,
    ) -> Result<MarketAnalysis, EngineError> {
        self.run(snapshot, snapshot, current_price, symbol, timeframe, None)
    }

    /// Classify the regime on a slower timeframe and everything else on the entry timeframe
    pub fn analyze_multi_timeframe(
        &self,
        regime_snapshot: &IndicatorSnapshot,
        regime_timeframe: &str,
        entry_snapshot: &IndicatorSnapshot,
        current_price: f64,
        symbol: &str,
        timeframe: &str,
    ) -> Result<MarketAnalysis, EngineError> {
        self.run(
            regime_snapshot,
            entry_snapshot,
            current_price,
            symbol,
            timeframe,
            Some(regime_timeframe),
        )
    }

    fn run(
        &self,
        regime_snapshot: &IndicatorSnapshot,
        snapshot: &IndicatorSnapshot,
        current_price: f64,
        symbol: &str,
        timeframe: &str,
        regime_timeframe: Option<&str>,
    ) -> Result<MarketAnalysis, EngineError> {
        if !current_price.is_finite() || current_price <= 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "current price must be positive, got {}",
                current_price
            )));
        }
        let instrument = Instrument::for_symbol(symbol)?;

        for category in IndicatorCategory::all() {
            debug!(
                symbol = %instrument.symbol,
                category = %category,
                available = snapshot.coverage(category),
                "Snapshot coverage"
            );
        }

        let regime = self.classifier.classify(regime_snapshot);
        let interpretations = self.interpreters.interpret_all(snapshot, regime.regime);
        let agreement = self.scorer.score(&interpretations);
        let decision = self
            .resolver
            .resolve(&regime, &interpretations, &agreement, snapshot);
        let levels = self
            .levels
            .levels(&decision, snapshot, current_price, &instrument)?;

        info!(
            symbol = %instrument.symbol,
            timeframe = %timeframe,
            regime = %regime.regime,
            direction = %decision.direction,
            bullish_percent = agreement.bullish_percent,
            multiplier = decision.position_size_multiplier,
            "Analysis complete for {}: {} / {}",
            instrument.symbol,
            regime.regime,
            decision.direction
        );

        Ok(MarketAnalysis {
            symbol: instrument.symbol,
            timeframe: timeframe.to_string(),
            regime_timeframe: regime_timeframe.map(str::to_string),
            timestamp: Utc::now(),
            current_price,
            regime,
            interpretations,
            agreement,
            decision,
            levels,
        })
    }
}

impl Default for AnalysisPipeline {
    /// Pipeline with the default configuration, which always validates
    fn default() -> Self {
        Self::build(&EngineConfig::default())
    }
}
