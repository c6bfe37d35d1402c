//! Regime-aware interpretation of each indicator family.
//!
//! Every interpreter records its individual votes, so one pass yields both the qualitative labels
//! and the numeric tally consumed by the agreement scorer.

pub mod cycle;
pub mod momentum;
pub mod pattern;
pub mod trend;
pub mod volume;

use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::indicators::registry::IndicatorCategory;
use crate::models::analysis::Regime;
use crate::models::signal::{Tally, VoteBook};
use crate::models::snapshot::IndicatorSnapshot;

pub use cycle::{CycleInterpretation, CycleInterpreter};
pub use momentum::{MomentumInterpretation, MomentumInterpreter};
pub use pattern::{PatternInterpretation, PatternInterpreter};
pub use trend::{TrendInterpretation, TrendInterpreter};
pub use volume::{VolumeInterpretation, VolumeInterpreter};

/// Interprets one indicator family in the context of the regime
pub trait CategoryInterpreter {
    type Output: Interpretation;

    fn category(&self) -> IndicatorCategory;

    fn interpret(&self, snapshot: &IndicatorSnapshot, regime: Regime) -> Self::Output;
}

/// Common view over the per-category outputs
pub trait Interpretation {
    fn votes(&self) -> &VoteBook;

    fn trace(&self) -> &[String];

    fn tally(&self) -> Tally {
        self.votes().tally()
    }
}

/// The five category interpretations of one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryInterpretations {
    pub trend: TrendInterpretation,
    pub momentum: MomentumInterpretation,
    pub volume: VolumeInterpretation,
    pub pattern: PatternInterpretation,
    pub cycle: CycleInterpretation,
}

impl CategoryInterpretations {
    pub fn tally(&self, category: IndicatorCategory) -> Tally {
        match category {
            IndicatorCategory::Trend => self.trend.tally(),
            IndicatorCategory::Momentum => self.momentum.tally(),
            IndicatorCategory::Volume => self.volume.tally(),
            IndicatorCategory::Pattern => self.pattern.tally(),
            IndicatorCategory::Cycle => self.cycle.tally(),
        }
    }

    pub fn trace(&self, category: IndicatorCategory) -> &[String] {
        match category {
            IndicatorCategory::Trend => self.trend.trace(),
            IndicatorCategory::Momentum => self.momentum.trace(),
            IndicatorCategory::Volume => self.volume.trace(),
            IndicatorCategory::Pattern => self.pattern.trace(),
            IndicatorCategory::Cycle => self.cycle.trace(),
        }
    }
}

/// All five interpreters built from one configuration
#[derive(Debug, Clone)]
pub struct Interpreters {
    pub trend: TrendInterpreter,
    pub momentum: MomentumInterpreter,
    pub volume: VolumeInterpreter,
    pub pattern: PatternInterpreter,
    pub cycle: CycleInterpreter,
}

impl Interpreters {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            trend: TrendInterpreter::new(config),
            momentum: MomentumInterpreter::new(config),
            volume: VolumeInterpreter::new(config),
            pattern: PatternInterpreter::new(),
            cycle: CycleInterpreter::new(config),
        }
    }

    pub fn interpret_all(&self, snapshot: &IndicatorSnapshot, regime: Regime) -> CategoryInterpretations {
        CategoryInterpretations {
            trend: interpret_logged(&self.trend, snapshot, regime),
            momentum: interpret_logged(&self.momentum, snapshot, regime),
            volume: interpret_logged(&self.volume, snapshot, regime),
            pattern: interpret_logged(&self.pattern, snapshot, regime),
            cycle: interpret_logged(&self.cycle, snapshot, regime),
        }
    }
}

fn interpret_logged<I: CategoryInterpreter>(
    interpreter: &I,
    snapshot: &IndicatorSnapshot,
    regime: Regime,
) -> I::Output {
    let output = interpreter.interpret(snapshot, regime);
    let tally = output.tally();
    debug!(
        category = %interpreter.category(),
        regime = %regime,
        bullish = tally.bullish,
        bearish = tally.bearish,
        "Category interpreted"
    );
    output
}
