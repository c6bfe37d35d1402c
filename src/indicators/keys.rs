//! Snapshot key vocabulary emitted by the indicator producers.
//!
//! Canonical names follow the per-family indicator modules (`STOCH_slowk`, `HT_SINE_sine`, `MAX_30`).
//! The batch producer spells a few of them differently (`STOCH_K`, `HT_SINE`, `MAX_20`); those spellings are
//! kept as aliases and looked up when the canonical name is absent.

use crate::models::snapshot::SnapshotCategory::{self, *};

/// Address of one value in an [`IndicatorSnapshot`](crate::models::snapshot::IndicatorSnapshot)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndicatorKey {
    pub category: SnapshotCategory,
    pub name: &'static str,
    /// Alternative spellings, tried in order after `name`
    pub aliases: &'static [&'static str],
}

impl IndicatorKey {
    pub const fn new(category: SnapshotCategory, name: &'static str) -> Self {
        Self {
            category,
            name,
            aliases: &[],
        }
    }

    pub const fn aliased(
        category: SnapshotCategory,
        name: &'static str,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            category,
            name,
            aliases,
        }
    }

    /// Canonical name followed by the aliases
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

// Overlap studies
pub const SMA_20: IndicatorKey = IndicatorKey::new(Overlap, "SMA_20");
pub const SMA_50: IndicatorKey = IndicatorKey::new(Overlap, "SMA_50");
pub const SMA_200: IndicatorKey = IndicatorKey::new(Overlap, "SMA_200");
pub const EMA_12: IndicatorKey = IndicatorKey::new(Overlap, "EMA_12");
pub const EMA_26: IndicatorKey = IndicatorKey::new(Overlap, "EMA_26");
pub const EMA_50: IndicatorKey = IndicatorKey::new(Overlap, "EMA_50");
pub const DEMA_30: IndicatorKey = IndicatorKey::new(Overlap, "DEMA_30");
pub const TEMA_30: IndicatorKey = IndicatorKey::new(Overlap, "TEMA_30");
pub const KAMA_30: IndicatorKey = IndicatorKey::new(Overlap, "KAMA_30");
pub const WMA_30: IndicatorKey = IndicatorKey::new(Overlap, "WMA_30");
pub const TRIMA_30: IndicatorKey = IndicatorKey::new(Overlap, "TRIMA_30");
pub const T3_5: IndicatorKey = IndicatorKey::new(Overlap, "T3_5");
pub const MAMA: IndicatorKey = IndicatorKey::new(Overlap, "MAMA");
pub const FAMA: IndicatorKey = IndicatorKey::new(Overlap, "FAMA");
pub const BBANDS_UPPER: IndicatorKey = IndicatorKey::new(Overlap, "BBANDS_upper");
pub const BBANDS_MIDDLE: IndicatorKey = IndicatorKey::new(Overlap, "BBANDS_middle");
pub const BBANDS_LOWER: IndicatorKey = IndicatorKey::new(Overlap, "BBANDS_lower");
pub const SAR: IndicatorKey = IndicatorKey::new(Overlap, "SAR");

// Momentum
pub const RSI_14: IndicatorKey = IndicatorKey::new(Momentum, "RSI_14");
pub const MACD: IndicatorKey = IndicatorKey::new(Momentum, "MACD");
pub const MACD_SIGNAL: IndicatorKey = IndicatorKey::new(Momentum, "MACD_signal");
pub const MACD_HIST: IndicatorKey = IndicatorKey::new(Momentum, "MACD_hist");
pub const ADX_14: IndicatorKey = IndicatorKey::new(Momentum, "ADX_14");
pub const ADXR_14: IndicatorKey = IndicatorKey::new(Momentum, "ADXR_14");
pub const DX_14: IndicatorKey = IndicatorKey::new(Momentum, "DX_14");
pub const PLUS_DI_14: IndicatorKey = IndicatorKey::new(Momentum, "PLUS_DI_14");
pub const MINUS_DI_14: IndicatorKey = IndicatorKey::new(Momentum, "MINUS_DI_14");
pub const PLUS_DM_14: IndicatorKey = IndicatorKey::new(Momentum, "PLUS_DM_14");
pub const MINUS_DM_14: IndicatorKey = IndicatorKey::new(Momentum, "MINUS_DM_14");
pub const STOCH_SLOWK: IndicatorKey = IndicatorKey::aliased(Momentum, "STOCH_slowk", &["STOCH_K"]);
pub const STOCH_SLOWD: IndicatorKey = IndicatorKey::aliased(Momentum, "STOCH_slowd", &["STOCH_D"]);
pub const STOCHF_FASTK: IndicatorKey = IndicatorKey::aliased(Momentum, "STOCHF_fastk", &["STOCHF_K"]);
pub const STOCHRSI_FASTK: IndicatorKey =
    IndicatorKey::aliased(Momentum, "STOCHRSI_fastk", &["STOCHRSI_K"]);
pub const AROON_UP: IndicatorKey = IndicatorKey::new(Momentum, "AROON_up");
pub const AROON_DOWN: IndicatorKey = IndicatorKey::new(Momentum, "AROON_down");
pub const AROONOSC: IndicatorKey = IndicatorKey::new(Momentum, "AROONOSC");
pub const CCI_14: IndicatorKey = IndicatorKey::new(Momentum, "CCI_14");
pub const CMO_14: IndicatorKey = IndicatorKey::new(Momentum, "CMO_14");
pub const MOM_10: IndicatorKey = IndicatorKey::new(Momentum, "MOM_10");
pub const ROC_10: IndicatorKey = IndicatorKey::new(Momentum, "ROC_10");
pub const ROCP_10: IndicatorKey = IndicatorKey::new(Momentum, "ROCP_10");
pub const ROCR_10: IndicatorKey = IndicatorKey::new(Momentum, "ROCR_10");
pub const ROCR100_10: IndicatorKey = IndicatorKey::new(Momentum, "ROCR100_10");
pub const TRIX_30: IndicatorKey = IndicatorKey::new(Momentum, "TRIX_30");
pub const ULTOSC: IndicatorKey = IndicatorKey::new(Momentum, "ULTOSC");
pub const WILLR_14: IndicatorKey = IndicatorKey::new(Momentum, "WILLR_14");
pub const MFI_14: IndicatorKey = IndicatorKey::new(Momentum, "MFI_14");
pub const BOP: IndicatorKey = IndicatorKey::new(Momentum, "BOP");
pub const APO: IndicatorKey = IndicatorKey::new(Momentum, "APO");
pub const PPO: IndicatorKey = IndicatorKey::new(Momentum, "PPO");

// Momentum extras only the batch producer emits; absent values abstain
pub const RSI_9: IndicatorKey = IndicatorKey::new(Momentum, "RSI_9");
pub const MACDEXT_HIST: IndicatorKey = IndicatorKey::new(Momentum, "MACDEXT_hist");
pub const MACDFIX_HIST: IndicatorKey = IndicatorKey::new(Momentum, "MACDFIX_hist");

// Volume
pub const AD: IndicatorKey = IndicatorKey::new(Volume, "AD");
pub const ADOSC: IndicatorKey = IndicatorKey::new(Volume, "ADOSC");
pub const OBV: IndicatorKey = IndicatorKey::new(Volume, "OBV");

// Volatility
pub const ATR_14: IndicatorKey = IndicatorKey::new(Volatility, "ATR_14");
pub const NATR_14: IndicatorKey = IndicatorKey::new(Volatility, "NATR_14");

// Cycles
pub const HT_DCPERIOD: IndicatorKey = IndicatorKey::new(Cycles, "HT_DCPERIOD");
pub const HT_DCPHASE: IndicatorKey = IndicatorKey::new(Cycles, "HT_DCPHASE");
pub const HT_PHASOR_INPHASE: IndicatorKey = IndicatorKey::new(Cycles, "HT_PHASOR_inphase");
pub const HT_PHASOR_QUADRATURE: IndicatorKey = IndicatorKey::new(Cycles, "HT_PHASOR_quadrature");
pub const HT_SINE_SINE: IndicatorKey = IndicatorKey::aliased(Cycles, "HT_SINE_sine", &["HT_SINE"]);
pub const HT_SINE_LEADSINE: IndicatorKey =
    IndicatorKey::aliased(Cycles, "HT_SINE_leadsine", &["HT_LEADSINE"]);
pub const HT_TRENDMODE: IndicatorKey = IndicatorKey::new(Cycles, "HT_TRENDMODE");

// Price transforms
pub const WCLPRICE: IndicatorKey = IndicatorKey::new(PriceTransform, "WCLPRICE");

// Statistics
pub const LINEARREG_ANGLE_14: IndicatorKey = IndicatorKey::new(Statistics, "LINEARREG_ANGLE_14");
pub const LINEARREG_SLOPE_14: IndicatorKey = IndicatorKey::new(Statistics, "LINEARREG_SLOPE_14");
pub const TSF_14: IndicatorKey = IndicatorKey::new(Statistics, "TSF_14");

// Math operators (rolling extrema used as support/resistance)
pub const ROLLING_MAX: IndicatorKey = IndicatorKey::aliased(MathOperators, "MAX_30", &["MAX_20"]);
pub const ROLLING_MIN: IndicatorKey = IndicatorKey::aliased(MathOperators, "MIN_30", &["MIN_20"]);

/// Candlestick detectors whose signal is a reversal, in order of preference
pub const REVERSAL_PATTERNS: &[&str] = &[
    "CDLENGULFING",
    "CDLMORNINGSTAR",
    "CDLEVENINGSTAR",
    "CDLMORNINGDOJISTAR",
    "CDLEVENINGDOJISTAR",
    "CDLABANDONEDBABY",
    "CDL3WHITESOLDIERS",
    "CDL3BLACKCROWS",
    "CDLHAMMER",
    "CDLINVERTEDHAMMER",
    "CDLHANGINGMAN",
    "CDLSHOOTINGSTAR",
    "CDLPIERCING",
    "CDLDARKCLOUDCOVER",
    "CDLHARAMI",
    "CDLHARAMICROSS",
];

/// Prefix shared by every candlestick detector key
pub const PATTERN_PREFIX: &str = "CDL";
