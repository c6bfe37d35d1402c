//! Indicator vocabulary: snapshot keys and interpretation categories.

pub mod keys;
pub mod registry;

pub use keys::IndicatorKey;
pub use registry::IndicatorCategory;
