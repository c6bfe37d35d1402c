//! Market regime classification.

pub mod alignment;
pub mod classifier;
pub mod volatility;

pub use classifier::RegimeClassifier;
pub use volatility::VolatilityAssessment;
