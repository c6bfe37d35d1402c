//! Volatility state from normalized ATR and relative Bollinger band width

use serde::Serialize;

use crate::config::RegimeThresholds;
use crate::indicators::keys;
use crate::models::analysis::VolatilityState;
use crate::models::snapshot::IndicatorSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NatrLevel {
    Low,
    Normal,
    High,
    Extreme,
}

impl NatrLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NatrLevel::Low => "LOW",
            NatrLevel::Normal => "NORMAL",
            NatrLevel::High => "HIGH",
            NatrLevel::Extreme => "EXTREME",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BandWidth {
    Narrow,
    Normal,
    Wide,
}

impl BandWidth {
    pub fn as_str(&self) -> &'static str {
        match self {
            BandWidth::Narrow => "NARROW",
            BandWidth::Normal => "NORMAL",
            BandWidth::Wide => "WIDE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolatilityAssessment {
    pub natr: Option<f64>,
    pub natr_level: NatrLevel,
    /// (upper - lower) / middle, in percent
    pub band_width: Option<f64>,
    pub band_width_level: BandWidth,
    pub state: VolatilityState,
}

impl VolatilityAssessment {
    pub fn assess(snapshot: &IndicatorSnapshot, thresholds: &RegimeThresholds) -> Self {
        let natr = snapshot.get(keys::NATR_14);
        // Missing NATR reads as normal volatility so that an empty snapshot is never a spike
        let natr_level = match natr {
            Some(v) if v > thresholds.natr_extreme => NatrLevel::Extreme,
            Some(v) if v > thresholds.natr_high => NatrLevel::High,
            Some(v) if v > thresholds.natr_normal => NatrLevel::Normal,
            Some(_) => NatrLevel::Low,
            None => NatrLevel::Normal,
        };

        let band_width = match (
            snapshot.get(keys::BBANDS_UPPER),
            snapshot.get(keys::BBANDS_MIDDLE),
            snapshot.get(keys::BBANDS_LOWER),
        ) {
            (Some(upper), Some(middle), Some(lower)) if middle > 0.0 => {
                Some((upper - lower) / middle * 100.0)
            }
            _ => None,
        };
        let band_width_level = match band_width {
            Some(w) if w > thresholds.band_width_wide => BandWidth::Wide,
            Some(w) if w > thresholds.band_width_normal => BandWidth::Normal,
            Some(_) => BandWidth::Narrow,
            None => BandWidth::Normal,
        };

        let state = match (natr_level, band_width_level) {
            (NatrLevel::Extreme, _) | (NatrLevel::High, BandWidth::Wide) => VolatilityState::Spike,
            (NatrLevel::High, _) | (_, BandWidth::Wide) => VolatilityState::High,
            (NatrLevel::Low, BandWidth::Narrow) => VolatilityState::Low,
            _ => VolatilityState::Normal,
        };

        Self {
            natr,
            natr_level,
            band_width,
            band_width_level,
            state,
        }
    }

    pub fn describe(&self) -> String {
        let natr = self
            .natr
            .map(|v| format!("{:.3}%", v))
            .unwrap_or_else(|| "n/a".to_string());
        let width = self
            .band_width
            .map(|v| format!("{:.2}%", v))
            .unwrap_or_else(|| "n/a".to_string());
        format!(
            "Volatility: NATR {} ({}), band width {} ({}) -> {}",
            natr,
            self.natr_level.as_str(),
            width,
            self.band_width_level.as_str(),
            self.state.as_str()
        )
    }
}
