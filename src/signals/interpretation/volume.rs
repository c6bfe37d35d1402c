//! Volume family: accumulation/distribution, Chaikin oscillator, on-balance volume, money flow

use serde::Serialize;

use crate::config::{EngineConfig, OscillatorBand};
use crate::indicators::keys;
use crate::indicators::registry::IndicatorCategory;
use crate::models::analysis::Regime;
use crate::models::signal::{sign_bias, Bias, VoteBook};
use crate::models::snapshot::IndicatorSnapshot;
use crate::signals::interpretation::momentum::Zone;
use crate::signals::interpretation::{CategoryInterpreter, Interpretation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObvTrend {
    Rising,
    Falling,
    Flat,
}

impl ObvTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObvTrend::Rising => "RISING",
            ObvTrend::Falling => "FALLING",
            ObvTrend::Flat => "FLAT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoneyFlow {
    Accumulation,
    Distribution,
    Neutral,
}

impl MoneyFlow {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoneyFlow::Accumulation => "ACCUMULATION",
            MoneyFlow::Distribution => "DISTRIBUTION",
            MoneyFlow::Neutral => "NEUTRAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeInterpretation {
    pub obv_trend: ObvTrend,
    pub flow: MoneyFlow,
    pub mfi_zone: Option<Zone>,
    pub bias: Bias,
    /// Whether volume supports the regime's direction
    pub confirms_price: bool,
    pub votes: VoteBook,
    pub trace: Vec<String>,
}

impl Interpretation for VolumeInterpretation {
    fn votes(&self) -> &VoteBook {
        &self.votes
    }

    fn trace(&self) -> &[String] {
        &self.trace
    }
}

#[derive(Debug, Clone)]
pub struct VolumeInterpreter {
    mfi_band: Option<OscillatorBand>,
}

impl VolumeInterpreter {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            mfi_band: config
                .momentum
                .oscillators
                .iter()
                .find(|band| band.key == keys::MFI_14)
                .cloned(),
        }
    }
}

impl CategoryInterpreter for VolumeInterpreter {
    type Output = VolumeInterpretation;

    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Volume
    }

    fn interpret(&self, snapshot: &IndicatorSnapshot, regime: Regime) -> VolumeInterpretation {
        let ad = snapshot.get(keys::AD);
        let adosc = snapshot.get(keys::ADOSC);
        let obv = snapshot.get(keys::OBV);
        let mfi = snapshot.get(keys::MFI_14);

        // The snapshot carries a single OBV value; the Chaikin oscillator gives its recent slope
        let obv_trend = match adosc {
            Some(v) if v > 0.0 => ObvTrend::Rising,
            Some(v) if v < 0.0 => ObvTrend::Falling,
            _ => ObvTrend::Flat,
        };

        let flow = match (ad, adosc) {
            (Some(a), Some(o)) if a > 0.0 && o > 0.0 => MoneyFlow::Accumulation,
            (Some(a), _) if a < 0.0 => MoneyFlow::Distribution,
            (_, Some(o)) if o < 0.0 => MoneyFlow::Distribution,
            _ => MoneyFlow::Neutral,
        };

        let mfi_zone = match (&self.mfi_band, mfi) {
            (Some(band), Some(v)) if v >= band.overbought => Some(Zone::Overbought),
            (Some(band), Some(v)) if v <= band.oversold => Some(Zone::Oversold),
            (_, Some(_)) => Some(Zone::Neutral),
            (_, None) => None,
        };

        let mut votes = VoteBook::new();
        votes.cast("ADOSC", sign_bias(adosc, 0.0));
        votes.cast("AD", sign_bias(ad, 0.0));
        votes.cast("OBV", sign_bias(obv, 0.0));
        votes.cast("MFI_14", sign_bias(mfi, 50.0));

        let tally = votes.tally();
        let bias = tally.direction();
        let confirms_price = match regime {
            Regime::TrendingUp => bias == Bias::Bullish,
            Regime::TrendingDown => bias == Bias::Bearish,
            Regime::Ranging => true,
            Regime::Volatile => false,
        };

        let mut trace = vec![format!(
            "Volume: OBV {}, flow {}, {} bullish / {} bearish -> {}",
            obv_trend.as_str(),
            flow.as_str(),
            tally.bullish, tally.bearish, bias
        )];
        if let (Some(zone), Some(value)) = (mfi_zone, mfi) {
            trace.push(format!("MFI {:.1} ({})", value, zone.as_str()));
        }
        trace.push(
            match (regime.is_trending(), confirms_price) {
                (true, true) => "Volume confirms the trend",
                (true, false) => "DIVERGENCE - volume does not confirm the trend",
                (false, true) => "Volume neutral in range",
                (false, false) => "Volume unreliable in volatile conditions",
            }
            .to_string(),
        );

        VolumeInterpretation {
            obv_trend,
            flow,
            mfi_zone,
            bias,
            confirms_price,
            votes,
            trace,
        }
    }
}
