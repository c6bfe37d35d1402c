//! Error taxonomy for the decision engine.
//!
//! Missing indicator data is never an error: the engine substitutes neutral defaults or abstains.

use thiserror::Error;

/// Invalid threshold, multiplier or environment override. Fatal at startup.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("environment variable {name} has invalid value '{value}'")]
    InvalidEnvValue { name: String, value: String },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{lower} ({lower_value}) must be below {upper} ({upper_value})")]
    Ordering {
        lower: &'static str,
        lower_value: f64,
        upper: &'static str,
        upper_value: f64,
    },

    #[error("range oscillator set cannot be empty")]
    EmptyOscillatorSet,

    #[error("range trigger count {count} must be between 1 and {available}")]
    InvalidTriggerCount { count: usize, available: usize },
}

/// Errors raised by a single analysis. Callers skip the instrument for this cycle.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}
