//! Multi-instrument scan and opportunity ranking

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::EngineError;
use crate::indicators::keys;
use crate::metrics::Metrics;
use crate::models::analysis::{MarketAnalysis, Regime};
use crate::models::snapshot::IndicatorSnapshot;
use crate::signals::engine::AnalysisPipeline;

pub const DEFAULT_TIMEFRAME: &str = "M5";
pub const DEFAULT_REGIME_TIMEFRAME: &str = "H1";

fn default_timeframe() -> String {
    DEFAULT_TIMEFRAME.to_string()
}

fn default_regime_timeframe() -> String {
    DEFAULT_REGIME_TIMEFRAME.to_string()
}

/// One instrument to analyze, with an optional slower-timeframe snapshot for the regime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub symbol: String,
    #[serde(default = "default_timeframe")]
    pub timeframe: String,
    pub price: f64,
    pub snapshot: IndicatorSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regime_snapshot: Option<IndicatorSnapshot>,
    #[serde(default = "default_regime_timeframe")]
    pub regime_timeframe: String,
}

/// Bonuses and penalties used to rank tradeable analyses
#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityScoring {
    pub trending_bonus: i32,
    pub ranging_bonus: i32,
    pub per_confidence: i32,
    pub per_warning: i32,
    /// `(minimum risk/reward, bonus)`, best first
    pub risk_reward_tiers: Vec<(f64, i32)>,
    pub timeframe_alignment_bonus: i32,
    pub strong_regime_adx: f64,
    pub strong_regime_bonus: i32,
}

impl Default for OpportunityScoring {
    fn default() -> Self {
        Self {
            trending_bonus: 20,
            ranging_bonus: 10,
            per_confidence: 5,
            per_warning: -3,
            risk_reward_tiers: vec![(2.0, 15), (1.5, 10), (1.0, 5)],
            timeframe_alignment_bonus: 10,
            strong_regime_adx: 30.0,
            strong_regime_bonus: 5,
        }
    }
}

impl OpportunityScoring {
    /// Score a tradeable analysis; `None` for NO_TRADE
    pub fn score(
        &self,
        analysis: &MarketAnalysis,
        entry_snapshot: &IndicatorSnapshot,
        regime_snapshot: Option<&IndicatorSnapshot>,
    ) -> Option<i32> {
        if !analysis.is_tradeable() {
            return None;
        }
        let regime = analysis.regime.regime;
        let mut score = match regime {
            Regime::TrendingUp | Regime::TrendingDown => self.trending_bonus,
            Regime::Ranging => self.ranging_bonus,
            Regime::Volatile => 0,
        };
        score += self.per_confidence * analysis.decision.confidence_factors.len() as i32;
        score += self.per_warning * analysis.decision.warning_factors.len() as i32;

        if let Some(levels) = &analysis.levels {
            if let Some((_, bonus)) = self
                .risk_reward_tiers
                .iter()
                .find(|(min, _)| levels.risk_reward_ratio >= *min)
            {
                score += bonus;
            }
        }

        if let Some(regime_snapshot) = regime_snapshot {
            let histogram = entry_snapshot.get(keys::MACD_HIST);
            let aligned = match (regime, histogram) {
                (Regime::TrendingUp, Some(h)) => h > 0.0,
                (Regime::TrendingDown, Some(h)) => h < 0.0,
                _ => false,
            };
            if aligned {
                score += self.timeframe_alignment_bonus;
            }
            if regime_snapshot
                .get(keys::ADX_14)
                .is_some_and(|adx| adx > self.strong_regime_adx)
            {
                score += self.strong_regime_bonus;
            }
        }

        Some(score)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredOpportunity {
    pub score: i32,
    pub analysis: MarketAnalysis,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedInstrument {
    pub symbol: String,
    pub error: String,
}

/// Outcome of a scan: ranked opportunities (best first), idle analyses and skipped instruments
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub opportunities: Vec<ScoredOpportunity>,
    pub idle: Vec<MarketAnalysis>,
    pub skipped: Vec<SkippedInstrument>,
}

/// Sort opportunities best first; stable, so request order is kept among equal scores
pub fn rank(mut opportunities: Vec<ScoredOpportunity>) -> Vec<ScoredOpportunity> {
    opportunities.sort_by(|a, b| b.score.cmp(&a.score));
    opportunities
}

impl ScanReport {
    pub fn best_trade(&self) -> Option<&ScoredOpportunity> {
        self.opportunities.first()
    }
}

pub struct Scanner {
    pipeline: Arc<AnalysisPipeline>,
    scoring: OpportunityScoring,
    metrics: Option<Arc<Metrics>>,
}

impl Scanner {
    pub fn new(pipeline: Arc<AnalysisPipeline>) -> Self {
        Self {
            pipeline,
            scoring: OpportunityScoring::default(),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn with_scoring(mut self, scoring: OpportunityScoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Analyze one request, multi-timeframe when it carries a regime snapshot
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<MarketAnalysis, EngineError> {
        let result = match &request.regime_snapshot {
            Some(regime_snapshot) => self.pipeline.analyze_multi_timeframe(
                regime_snapshot,
                &request.regime_timeframe,
                &request.snapshot,
                request.price,
                &request.symbol,
                &request.timeframe,
            ),
            None => self.pipeline.analyze(
                &request.snapshot,
                request.price,
                &request.symbol,
                &request.timeframe,
            ),
        };

        if let Some(metrics) = &self.metrics {
            match &result {
                Ok(analysis) => metrics.record_analysis(analysis),
                Err(_) => metrics.analysis_failures_total.inc(),
            }
        }
        result
    }

    /// Analyze every request; failures skip the instrument without aborting the scan
    pub fn scan(&self, requests: &[AnalysisRequest]) -> ScanReport {
        let start = Instant::now();
        let mut report = ScanReport::default();

        for request in requests {
            match self.analyze(request) {
                Ok(analysis) => {
                    let score = self.scoring.score(
                        &analysis,
                        &request.snapshot,
                        request.regime_snapshot.as_ref(),
                    );
                    match score {
                        Some(score) => report.opportunities.push(ScoredOpportunity { score, analysis }),
                        None => report.idle.push(analysis),
                    }
                }
                Err(e) => {
                    warn!(symbol = %request.symbol, error = %e, "Skipping instrument");
                    report.skipped.push(SkippedInstrument {
                        symbol: request.symbol.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        report.opportunities = rank(std::mem::take(&mut report.opportunities));

        if let Some(metrics) = &self.metrics {
            metrics
                .scan_duration_seconds
                .observe(start.elapsed().as_secs_f64());
        }
        if let Some(best) = report.best_trade() {
            info!(
                symbol = %best.analysis.symbol,
                direction = %best.analysis.decision.direction,
                score = best.score,
                candidates = requests.len(),
                "Best trade: {} {} (score {})",
                best.analysis.decision.direction,
                best.analysis.symbol,
                best.score
            );
        } else {
            info!(candidates = requests.len(), "No tradeable setups");
        }

        report
    }
}
