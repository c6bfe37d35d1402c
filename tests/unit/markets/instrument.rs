//! Unit tests for instrument conventions

use fxregime::error::EngineError;
use fxregime::markets::instrument::{known_pairs, normalize_symbol, Instrument};

#[test]
fn test_normalize_symbol_accepts_common_spellings() {
    for raw in ["EUR_USD", "EUR/USD", "eurusd", "eur-usd", " EUR USD "] {
        assert_eq!(normalize_symbol(raw).unwrap(), "EUR_USD", "{}", raw);
    }
}

#[test]
fn test_normalize_symbol_rejects_non_pairs() {
    for raw in ["", "EUR", "BTCUSDT", "EUR_US1"] {
        assert!(matches!(normalize_symbol(raw), Err(EngineError::InvalidInput(_))), "{}", raw);
    }
}

#[test]
fn test_pip_size_by_quote_currency() {
    let eurusd = Instrument::for_symbol("EUR_USD").unwrap();
    assert_eq!(eurusd.pip_size, 0.0001);
    assert_eq!(eurusd.pip_value_per_lot, 10.0);
    assert!((eurusd.to_pips(0.0015) - 15.0).abs() < 1e-9);

    let gbpjpy = Instrument::for_symbol("gbpjpy").unwrap();
    assert_eq!(gbpjpy.symbol, "GBP_JPY");
    assert_eq!(gbpjpy.pip_size, 0.01);
    assert_eq!(gbpjpy.pip_value_per_lot, 9.1);
}

#[test]
fn test_unknown_pair_uses_default_pip_value() {
    let instrument = Instrument::for_symbol("USD_SEK").unwrap();
    assert_eq!(instrument.pip_value_per_lot, 10.0);
    assert!(!known_pairs().any(|pair| pair == "USD_SEK"));
    assert!(known_pairs().any(|pair| pair == "EUR_USD"));
}
