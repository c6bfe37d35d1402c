//! Instrument pip conventions

use serde::Serialize;

use crate::error::EngineError;

/// Pip value of one standard lot (100k units) in USD, per pair
const PIP_VALUES: &[(&str, f64)] = &[
    ("EUR_USD", 10.0),
    ("GBP_USD", 10.0),
    ("AUD_USD", 10.0),
    ("NZD_USD", 10.0),
    ("USD_JPY", 9.1),
    ("USD_CHF", 11.2),
    ("USD_CAD", 7.4),
    ("EUR_GBP", 12.7),
    ("EUR_JPY", 9.1),
    ("EUR_CHF", 11.2),
    ("EUR_AUD", 6.6),
    ("EUR_CAD", 7.4),
    ("EUR_NZD", 6.1),
    ("GBP_JPY", 9.1),
    ("GBP_CHF", 11.2),
    ("GBP_AUD", 6.6),
    ("GBP_CAD", 7.4),
    ("GBP_NZD", 6.1),
    ("AUD_JPY", 9.1),
    ("AUD_NZD", 6.1),
    ("AUD_CAD", 7.4),
    ("AUD_CHF", 11.2),
    ("NZD_JPY", 9.1),
    ("CAD_JPY", 9.1),
    ("CHF_JPY", 9.1),
    ("NZD_CAD", 7.4),
    ("NZD_CHF", 11.2),
];

const DEFAULT_PIP_VALUE: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instrument {
    /// Normalized `BASE_QUOTE` symbol
    pub symbol: String,
    pub pip_size: f64,
    pub pip_value_per_lot: f64,
}

impl Instrument {
    /// Resolve pip conventions for `symbol` (`EUR/USD`, `EUR_USD`, `eurusd`, ...)
    pub fn for_symbol(symbol: &str) -> Result<Self, EngineError> {
        let symbol = normalize_symbol(symbol)?;
        let pip_size = if symbol.ends_with("_JPY") { 0.01 } else { 0.0001 };
        let pip_value_per_lot = PIP_VALUES
            .iter()
            .find(|(pair, _)| *pair == symbol)
            .map(|(_, value)| *value)
            .unwrap_or(DEFAULT_PIP_VALUE);

        Ok(Self {
            symbol,
            pip_size,
            pip_value_per_lot,
        })
    }

    pub fn to_pips(&self, distance: f64) -> f64 {
        distance / self.pip_size
    }
}

/// Canonical `BASE_QUOTE` form of a currency pair
pub fn normalize_symbol(symbol: &str) -> Result<String, EngineError> {
    let letters: String = symbol
        .chars()
        .filter(|c| !matches!(c, '/' | '_' | '-' | ' '))
        .collect::<String>()
        .to_ascii_uppercase();

    if letters.len() != 6 || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(EngineError::InvalidInput(format!(
            "'{}' is not a currency pair",
            symbol
        )));
    }
    Ok(format!("{}_{}", &letters[..3], &letters[3..]))
}

/// Pairs with a pip-value entry
pub fn known_pairs() -> impl Iterator<Item = &'static str> {
    PIP_VALUES.iter().map(|(pair, _)| *pair)
}
