//! Shared indicator snapshots for unit and integration tests

#![allow(dead_code)]

use fxregime::indicators::keys;
use fxregime::models::snapshot::IndicatorSnapshot;

pub const EURUSD_PRICE: f64 = 1.1050;

/// Strong, aligned uptrend with every family agreeing
pub fn trending_up() -> IndicatorSnapshot {
    IndicatorSnapshot::new()
        // overlap
        .with(keys::SMA_20, 1.1030)
        .with(keys::SMA_50, 1.1000)
        .with(keys::SMA_200, 1.0950)
        .with(keys::EMA_12, 1.1040)
        .with(keys::EMA_26, 1.1020)
        .with(keys::EMA_50, 1.1005)
        .with(keys::DEMA_30, 1.1035)
        .with(keys::TEMA_30, 1.1040)
        .with(keys::KAMA_30, 1.1025)
        .with(keys::WMA_30, 1.1025)
        .with(keys::TRIMA_30, 1.1015)
        .with(keys::T3_5, 1.1038)
        .with(keys::MAMA, 1.1042)
        .with(keys::FAMA, 1.1030)
        .with(keys::BBANDS_UPPER, 1.1080)
        .with(keys::BBANDS_MIDDLE, 1.1030)
        .with(keys::BBANDS_LOWER, 1.0980)
        .with(keys::SAR, 1.1000)
        .with(keys::WCLPRICE, EURUSD_PRICE)
        // momentum
        .with(keys::ADX_14, 35.0)
        .with(keys::ADXR_14, 32.0)
        .with(keys::PLUS_DI_14, 32.0)
        .with(keys::MINUS_DI_14, 12.0)
        .with(keys::PLUS_DM_14, 0.0020)
        .with(keys::MINUS_DM_14, 0.0010)
        .with(keys::AROON_UP, 90.0)
        .with(keys::AROON_DOWN, 10.0)
        .with(keys::AROONOSC, 80.0)
        .with(keys::RSI_14, 65.0)
        .with(keys::RSI_9, 68.0)
        .with(keys::MACD, 0.0012)
        .with(keys::MACD_SIGNAL, 0.0008)
        .with(keys::MACD_HIST, 0.0004)
        .with(keys::MACDEXT_HIST, 0.0003)
        .with(keys::MACDFIX_HIST, 0.0003)
        .with(keys::STOCH_SLOWK, 75.0)
        .with(keys::STOCH_SLOWD, 70.0)
        .with(keys::STOCHF_FASTK, 78.0)
        .with(keys::STOCHRSI_FASTK, 80.0)
        .with(keys::CCI_14, 120.0)
        .with(keys::CMO_14, 55.0)
        .with(keys::MOM_10, 0.0020)
        .with(keys::ROC_10, 0.3)
        .with(keys::ROCP_10, 0.003)
        .with(keys::ROCR_10, 1.003)
        .with(keys::ROCR100_10, 100.3)
        .with(keys::TRIX_30, 0.01)
        .with(keys::APO, 0.0008)
        .with(keys::PPO, 0.07)
        .with(keys::BOP, 0.4)
        .with(keys::ULTOSC, 62.0)
        .with(keys::WILLR_14, -15.0)
        .with(keys::MFI_14, 68.0)
        // volume
        .with(keys::AD, 15_000.0)
        .with(keys::ADOSC, 1_200.0)
        .with(keys::OBV, 50_000.0)
        // volatility
        .with(keys::ATR_14, 0.0010)
        .with(keys::NATR_14, 0.15)
        // cycles
        .with(keys::HT_TRENDMODE, 1.0)
        .with(keys::HT_SINE_SINE, 0.5)
        .with(keys::HT_SINE_LEADSINE, 0.3)
        .with(keys::HT_PHASOR_INPHASE, 0.002)
        .with(keys::HT_PHASOR_QUADRATURE, 0.001)
        .with(keys::HT_DCPHASE, 45.0)
        .with(keys::HT_DCPERIOD, 20.0)
        // statistics
        .with(keys::LINEARREG_ANGLE_14, 35.0)
        .with(keys::LINEARREG_SLOPE_14, 0.0002)
        .with(keys::TSF_14, 1.1045)
        // math operators
        .with(keys::ROLLING_MAX, 1.1060)
        .with(keys::ROLLING_MIN, 1.0990)
        .with_pattern("CDLENGULFING", 100.0)
}

/// The uptrend above with a volatility spike: high NATR and bands over 4% wide
pub fn volatile() -> IndicatorSnapshot {
    trending_up()
        .with(keys::NATR_14, 0.7)
        .with(keys::BBANDS_UPPER, 1.125)
        .with(keys::BBANDS_MIDDLE, 1.100)
        .with(keys::BBANDS_LOWER, 1.075)
}

pub const RANGE_PRICE: f64 = 1.1000;

/// Directionless market with all five range oscillators oversold
pub fn ranging_oversold() -> IndicatorSnapshot {
    IndicatorSnapshot::new()
        .with(keys::ADX_14, 15.0)
        .with(keys::ADXR_14, 15.0)
        .with(keys::RSI_14, 25.0)
        .with(keys::STOCH_SLOWK, 15.0)
        .with(keys::CCI_14, -150.0)
        .with(keys::WILLR_14, -90.0)
        .with(keys::ULTOSC, 25.0)
        .with(keys::ATR_14, 0.0008)
        .with(keys::NATR_14, 0.1)
}

/// Directionless market with all five range oscillators overbought
pub fn ranging_overbought() -> IndicatorSnapshot {
    IndicatorSnapshot::new()
        .with(keys::ADX_14, 15.0)
        .with(keys::ADXR_14, 15.0)
        .with(keys::RSI_14, 78.0)
        .with(keys::STOCH_SLOWK, 88.0)
        .with(keys::CCI_14, 160.0)
        .with(keys::WILLR_14, -8.0)
        .with(keys::ULTOSC, 75.0)
        .with(keys::ATR_14, 0.0008)
        .with(keys::NATR_14, 0.1)
}

/// Only two of five oscillators at an extreme
pub fn ranging_mid() -> IndicatorSnapshot {
    IndicatorSnapshot::new()
        .with(keys::ADX_14, 15.0)
        .with(keys::ADXR_14, 15.0)
        .with(keys::RSI_14, 25.0)
        .with(keys::STOCH_SLOWK, 15.0)
        .with(keys::CCI_14, 0.0)
        .with(keys::WILLR_14, -50.0)
        .with(keys::ULTOSC, 50.0)
        .with(keys::ATR_14, 0.0008)
}

pub const GBPUSD_PRICE: f64 = 1.2000;

/// Strong downtrend carried by directional movement, Aroon and regression only
pub fn trending_down_sparse() -> IndicatorSnapshot {
    IndicatorSnapshot::new()
        .with(keys::ADX_14, 35.0)
        .with(keys::ADXR_14, 32.0)
        .with(keys::PLUS_DI_14, 10.0)
        .with(keys::MINUS_DI_14, 30.0)
        .with(keys::AROON_UP, 10.0)
        .with(keys::AROON_DOWN, 90.0)
        .with(keys::LINEARREG_ANGLE_14, -35.0)
        .with(keys::HT_TRENDMODE, 1.0)
}

/// Every indicator present but null
pub fn all_null() -> IndicatorSnapshot {
    [
        keys::ADX_14,
        keys::ADXR_14,
        keys::PLUS_DI_14,
        keys::MINUS_DI_14,
        keys::RSI_14,
        keys::SMA_20,
        keys::SMA_50,
        keys::ATR_14,
        keys::NATR_14,
        keys::HT_TRENDMODE,
        keys::WCLPRICE,
    ]
    .into_iter()
    .fold(IndicatorSnapshot::new(), |snapshot, key| snapshot.with_null(key))
}

pub const RANGING_PRODUCER_PRICE: f64 = 1.1000;

/// Ranging snapshot as the per-family indicator modules emit it: RSI, Stochastic and CCI oversold,
/// Williams %R and the Ultimate Oscillator mid-range
pub fn ranging_producer_json() -> &'static str {
    r#"{
        "overlap": {"SMA_20": 1.1002, "SMA_50": 1.1001, "BBANDS_upper": 1.1030, "BBANDS_middle": 1.1000,
                    "BBANDS_lower": 1.0970, "SAR": null},
        "momentum": {"ADX_14": 15.0, "ADXR_14": 16.0, "DX_14": 12.0, "RSI_14": 25.0,
                     "STOCH_slowk": 10.0, "STOCH_slowd": 14.0, "STOCHF_fastk": 8.0, "STOCHF_fastd": 11.0,
                     "STOCHRSI_fastk": 5.0, "STOCHRSI_fastd": 9.0, "CCI_14": -150.0, "WILLR_14": -50.0,
                     "ULTOSC": 50.0, "IMI_14": 40.0},
        "volatility": {"ATR_14": 0.0008, "NATR_14": 0.1, "TRANGE": 0.0007},
        "cycles": {"HT_TRENDMODE": 0, "HT_SINE_sine": -0.6, "HT_SINE_leadsine": -0.2},
        "math_operators": {"MAX_30": 1.1030, "MIN_30": 1.0985, "MAX_INDEX_30": 12, "MIN_INDEX_30": 3},
        "patterns": {}
    }"#
}

/// The same market as [`ranging_producer_json`] under the batch producer's spellings
pub fn ranging_batch_producer_json() -> &'static str {
    r#"{
        "overlap": {"SMA_20": 1.1002, "SMA_50": 1.1001, "BBANDS_upper": 1.1030, "BBANDS_middle": 1.1000,
                    "BBANDS_lower": 1.0970},
        "momentum": {"ADX_14": 15.0, "ADXR_14": 16.0, "RSI_14": 25.0, "RSI_9": 22.0,
                     "STOCH_K": 10.0, "STOCH_D": 14.0, "STOCHF_K": 8.0, "STOCHRSI_K": 5.0,
                     "CCI_14": -150.0, "WILLR_14": -50.0, "ULTOSC": 50.0},
        "volatility": {"ATR_14": 0.0008, "NATR_14": 0.1},
        "cycles": {"HT_TRENDMODE": 0, "HT_SINE": -0.6, "HT_LEADSINE": -0.2},
        "math_operators": {"MAX_20": 1.1030, "MIN_20": 1.0985}
    }"#
}
