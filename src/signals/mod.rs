//! Decision core: interpretation, agreement, resolution, sizing and levels.

pub mod aggregation;
pub mod categories;
pub mod decision;
pub mod engine;
pub mod interpretation;
pub mod levels;
pub mod sizing;

pub use aggregation::{AgreementReport, AgreementScorer, CategoryAgreement};
pub use categories::CategoryWeights;
pub use decision::DecisionResolver;
pub use engine::AnalysisPipeline;
pub use levels::LevelCalculator;
pub use sizing::PositionSizer;
