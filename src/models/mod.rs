//! Shared data models spanning the engine layers.

pub mod analysis;
pub mod decision;
pub mod execution;
pub mod signal;
pub mod snapshot;

pub use analysis::{
    CycleMode, MaAlignment, MarketAnalysis, Regime, RegimeAnalysis, TrendStrength, VolatilityState,
};
pub use decision::{TradeDecision, TradeDirection, TradeLevels};
pub use execution::{TradeOrder, TradeResult};
pub use signal::{Bias, SignalVote, Tally, VoteBook};
pub use snapshot::{IndicatorSnapshot, SnapshotCategory};
