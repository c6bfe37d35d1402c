//! Engine configuration
//!
//! Every threshold, weight and breakpoint used by the classifier and resolver lives here.
//! The defaults are hand-tuned and should be treated as empirically tunable, not derived.

use std::env;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::indicators::keys::{self, IndicatorKey};
use crate::signals::categories::CategoryWeights;

/// Deployment environment (`production`, `prod`, `sandbox`, ...)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Regime classification thresholds
#[derive(Debug, Clone, PartialEq)]
pub struct RegimeThresholds {
    pub adx_strong: f64,
    pub adx_weak: f64,
    pub di_bias: f64,
    pub aroon_high: f64,
    pub aroon_low: f64,
    pub aroon_oscillator: f64,
    pub linreg_angle: f64,
    pub linreg_angle_strong: f64,
    pub ma_bullish_percent: f64,
    pub ma_bearish_percent: f64,
    pub natr_extreme: f64,
    pub natr_high: f64,
    pub natr_normal: f64,
    pub band_width_wide: f64,
    pub band_width_normal: f64,
    /// Vote margin required when trend strength is STRONG and the cycle mode is trending
    pub strong_margin: u32,
    /// Vote margin required for any STRONG or WEAK trend
    pub weak_margin: u32,
}

impl Default for RegimeThresholds {
    fn default() -> Self {
        Self {
            adx_strong: 25.0,
            adx_weak: 20.0,
            di_bias: 10.0,
            aroon_high: 70.0,
            aroon_low: 30.0,
            aroon_oscillator: 50.0,
            linreg_angle: 10.0,
            linreg_angle_strong: 30.0,
            ma_bullish_percent: 70.0,
            ma_bearish_percent: 30.0,
            natr_extreme: 1.0,
            natr_high: 0.5,
            natr_normal: 0.2,
            band_width_wide: 4.0,
            band_width_normal: 2.0,
            strong_margin: 2,
            weak_margin: 1,
        }
    }
}

/// Vote weights of the regime classifier's bias components
#[derive(Debug, Clone, PartialEq)]
pub struct RegimeWeights {
    pub directional_bias: u32,
    pub timing_bias: u32,
    pub statistical_bias: u32,
    pub ma_alignment: u32,
}

impl Default for RegimeWeights {
    fn default() -> Self {
        Self {
            directional_bias: 2,
            timing_bias: 1,
            statistical_bias: 1,
            ma_alignment: 2,
        }
    }
}

/// Trend interpreter thresholds
#[derive(Debug, Clone, PartialEq)]
pub struct TrendThresholds {
    pub up_percent: f64,
    pub down_percent: f64,
    pub adx_strong: f64,
    pub adx_moderate: f64,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self {
            up_percent: 65.0,
            down_percent: 35.0,
            adx_strong: 40.0,
            adx_moderate: 25.0,
        }
    }
}

/// Classic and in-trend bands of one bounded oscillator
#[derive(Debug, Clone, PartialEq)]
pub struct OscillatorBand {
    pub key: IndicatorKey,
    pub overbought: f64,
    pub oversold: f64,
    /// Reading at or above this confirms bullish momentum inside a trend
    pub trend_bullish: f64,
    /// Reading at or below this confirms bearish momentum inside a trend
    pub trend_bearish: f64,
}

/// Momentum interpreter thresholds
#[derive(Debug, Clone, PartialEq)]
pub struct MomentumThresholds {
    pub cci: f64,
    pub cmo: f64,
    pub bop: f64,
    /// DX above this votes with the +DI/-DI side
    pub dx_trend: f64,
    pub bullish_percent: f64,
    pub bearish_percent: f64,
    pub extreme_warning_count: usize,
    pub oscillators: Vec<OscillatorBand>,
}

impl Default for MomentumThresholds {
    fn default() -> Self {
        Self {
            cci: 100.0,
            cmo: 50.0,
            bop: 0.3,
            dx_trend: 25.0,
            bullish_percent: 60.0,
            bearish_percent: 40.0,
            extreme_warning_count: 3,
            oscillators: vec![
                OscillatorBand {
                    key: keys::RSI_14,
                    overbought: 70.0,
                    oversold: 30.0,
                    trend_bullish: 60.0,
                    trend_bearish: 40.0,
                },
                OscillatorBand {
                    key: keys::STOCH_SLOWK,
                    overbought: 80.0,
                    oversold: 20.0,
                    trend_bullish: 70.0,
                    trend_bearish: 30.0,
                },
                OscillatorBand {
                    key: keys::CCI_14,
                    overbought: 100.0,
                    oversold: -100.0,
                    trend_bullish: 100.0,
                    trend_bearish: -100.0,
                },
                OscillatorBand {
                    key: keys::WILLR_14,
                    overbought: -20.0,
                    oversold: -80.0,
                    trend_bullish: -30.0,
                    trend_bearish: -70.0,
                },
                OscillatorBand {
                    key: keys::MFI_14,
                    overbought: 80.0,
                    oversold: 20.0,
                    trend_bullish: 60.0,
                    trend_bearish: 40.0,
                },
                OscillatorBand {
                    key: keys::ULTOSC,
                    overbought: 70.0,
                    oversold: 30.0,
                    trend_bullish: 60.0,
                    trend_bearish: 40.0,
                },
            ],
        }
    }
}

/// One oscillator of the RANGING trigger set
#[derive(Debug, Clone, PartialEq)]
pub struct RangeOscillator {
    pub key: IndicatorKey,
    pub oversold: f64,
    pub overbought: f64,
}

/// Step function from agreement percentage to position-size multiplier
#[derive(Debug, Clone, PartialEq)]
pub struct SizingConfig {
    /// `(minimum percent, multiplier)` pairs, highest breakpoint first
    pub tiers: Vec<(f64, f64)>,
    pub floor_multiplier: f64,
    pub ranging_multiplier: f64,
    pub heavy_warning_count: usize,
    pub heavy_warning_factor: f64,
    pub moderate_warning_count: usize,
    pub moderate_warning_factor: f64,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            tiers: vec![(75.0, 1.0), (65.0, 0.75), (55.0, 0.5)],
            floor_multiplier: 0.25,
            ranging_multiplier: 0.5,
            heavy_warning_count: 3,
            heavy_warning_factor: 0.5,
            moderate_warning_count: 2,
            moderate_warning_factor: 0.75,
        }
    }
}

/// Stop, target and lot-size parameters
#[derive(Debug, Clone, PartialEq)]
pub struct RiskConfig {
    pub account_balance: f64,
    pub max_risk_percent: f64,
    pub atr_sl_multiplier: f64,
    pub atr_tp_multiplier: f64,
    pub natr_widening_threshold: f64,
    pub widening_factor: f64,
    pub min_risk_reward: f64,
    /// Buffer beyond the N-period extremum, in ATR units
    pub structure_buffer_atr: f64,
    /// Fractional overshoot past a band edge or extremum before the target is capped
    pub cap_tolerance: f64,
    /// ATR fallback as a fraction of price when ATR is unavailable
    pub atr_fallback_fraction: f64,
    pub max_lot_size: f64,
    pub lot_step: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            account_balance: 10_000.0,
            max_risk_percent: 2.0,
            atr_sl_multiplier: 1.5,
            atr_tp_multiplier: 2.5,
            natr_widening_threshold: 0.5,
            widening_factor: 1.2,
            min_risk_reward: 1.5,
            structure_buffer_atr: 0.5,
            cap_tolerance: 0.01,
            atr_fallback_fraction: 0.001,
            max_lot_size: 1.0,
            lot_step: 0.01,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub regime: RegimeThresholds,
    pub regime_weights: RegimeWeights,
    pub trend: TrendThresholds,
    pub momentum: MomentumThresholds,
    pub category_weights: CategoryWeights,
    pub range_oscillators: Vec<RangeOscillator>,
    pub range_trigger_count: usize,
    pub sizing: SizingConfig,
    pub risk: RiskConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            regime: RegimeThresholds::default(),
            regime_weights: RegimeWeights::default(),
            trend: TrendThresholds::default(),
            momentum: MomentumThresholds::default(),
            category_weights: CategoryWeights::default(),
            range_oscillators: vec![
                RangeOscillator {
                    key: keys::RSI_14,
                    oversold: 30.0,
                    overbought: 70.0,
                },
                RangeOscillator {
                    key: keys::STOCH_SLOWK,
                    oversold: 20.0,
                    overbought: 80.0,
                },
                RangeOscillator {
                    key: keys::CCI_14,
                    oversold: -100.0,
                    overbought: 100.0,
                },
                RangeOscillator {
                    key: keys::WILLR_14,
                    oversold: -80.0,
                    overbought: -20.0,
                },
                RangeOscillator {
                    key: keys::ULTOSC,
                    oversold: 30.0,
                    overbought: 70.0,
                },
            ],
            range_trigger_count: 3,
            sizing: SizingConfig::default(),
            risk: RiskConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load defaults overridden by process environment variables, then validate
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load defaults overridden by `lookup`, then validate
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        override_value(&lookup, "ATR_SL_MULTIPLIER", &mut config.risk.atr_sl_multiplier)?;
        override_value(&lookup, "ATR_TP_MULTIPLIER", &mut config.risk.atr_tp_multiplier)?;
        override_value(&lookup, "MAX_RISK_PERCENT", &mut config.risk.max_risk_percent)?;
        override_value(&lookup, "ACCOUNT_BALANCE", &mut config.risk.account_balance)?;
        override_value(&lookup, "MIN_RISK_REWARD", &mut config.risk.min_risk_reward)?;
        override_value(&lookup, "MAX_LOT_SIZE", &mut config.risk.max_lot_size)?;
        override_value(&lookup, "ADX_STRONG_THRESHOLD", &mut config.regime.adx_strong)?;
        override_value(&lookup, "ADX_WEAK_THRESHOLD", &mut config.regime.adx_weak)?;
        override_value(&lookup, "RANGE_TRIGGER_COUNT", &mut config.range_trigger_count)?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make the engine inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        let risk = &self.risk;
        positive("account_balance", risk.account_balance)?;
        positive("atr_sl_multiplier", risk.atr_sl_multiplier)?;
        positive("atr_tp_multiplier", risk.atr_tp_multiplier)?;
        positive("widening_factor", risk.widening_factor)?;
        positive("min_risk_reward", risk.min_risk_reward)?;
        positive("atr_fallback_fraction", risk.atr_fallback_fraction)?;
        positive("max_lot_size", risk.max_lot_size)?;
        positive("lot_step", risk.lot_step)?;
        within("max_risk_percent", risk.max_risk_percent, f64::EPSILON, 100.0)?;
        within("structure_buffer_atr", risk.structure_buffer_atr, 0.0, 10.0)?;
        within("cap_tolerance", risk.cap_tolerance, 0.0, 1.0)?;

        let regime = &self.regime;
        ordered("adx_weak", regime.adx_weak, "adx_strong", regime.adx_strong)?;
        ordered("natr_normal", regime.natr_normal, "natr_high", regime.natr_high)?;
        ordered("natr_high", regime.natr_high, "natr_extreme", regime.natr_extreme)?;
        ordered(
            "band_width_normal",
            regime.band_width_normal,
            "band_width_wide",
            regime.band_width_wide,
        )?;
        ordered(
            "ma_bearish_percent",
            regime.ma_bearish_percent,
            "ma_bullish_percent",
            regime.ma_bullish_percent,
        )?;
        ordered("aroon_low", regime.aroon_low, "aroon_high", regime.aroon_high)?;
        ordered(
            "trend.down_percent",
            self.trend.down_percent,
            "trend.up_percent",
            self.trend.up_percent,
        )?;
        ordered(
            "momentum.bearish_percent",
            self.momentum.bearish_percent,
            "momentum.bullish_percent",
            self.momentum.bullish_percent,
        )?;
        within("momentum.dx_trend", self.momentum.dx_trend, 0.0, 100.0)?;
        for band in &self.momentum.oscillators {
            ordered("oscillator.oversold", band.oversold, "oscillator.overbought", band.overbought)?;
            ordered(
                "oscillator.trend_bearish",
                band.trend_bearish,
                "oscillator.trend_bullish",
                band.trend_bullish,
            )?;
        }

        if self.range_oscillators.is_empty() {
            return Err(ConfigError::EmptyOscillatorSet);
        }
        for oscillator in &self.range_oscillators {
            ordered(
                "range.oversold",
                oscillator.oversold,
                "range.overbought",
                oscillator.overbought,
            )?;
        }
        // A majority is required so that oversold and overbought can never trigger together.
        let available = self.range_oscillators.len();
        if self.range_trigger_count == 0
            || self.range_trigger_count > available
            || self.range_trigger_count * 2 <= available
        {
            return Err(ConfigError::InvalidTriggerCount {
                count: self.range_trigger_count,
                available,
            });
        }

        let sizing = &self.sizing;
        let mut previous: Option<f64> = None;
        for &(percent, multiplier) in &sizing.tiers {
            within("sizing.tier_percent", percent, 0.0, 100.0)?;
            within("sizing.tier_multiplier", multiplier, 0.0, 1.0)?;
            if let Some(higher) = previous {
                ordered("sizing.tier_percent", percent, "previous tier_percent", higher)?;
            }
            previous = Some(percent);
        }
        within("sizing.floor_multiplier", sizing.floor_multiplier, 0.0, 1.0)?;
        within("sizing.ranging_multiplier", sizing.ranging_multiplier, 0.0, 1.0)?;
        within("sizing.heavy_warning_factor", sizing.heavy_warning_factor, 0.0, 1.0)?;
        within("sizing.moderate_warning_factor", sizing.moderate_warning_factor, 0.0, 1.0)?;

        self.category_weights.validate()
    }
}

fn override_value<F, T>(lookup: &F, name: &str, target: &mut T) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(name) {
        *target = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvValue {
                name: name.to_string(),
                value: raw.clone(),
            })?;
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn within(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn ordered(
    lower: &'static str,
    lower_value: f64,
    upper: &'static str,
    upper_value: f64,
) -> Result<(), ConfigError> {
    if lower_value < upper_value {
        Ok(())
    } else {
        Err(ConfigError::Ordering {
            lower,
            lower_value,
            upper,
            upper_value,
        })
    }
}
