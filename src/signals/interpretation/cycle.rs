//! Hilbert transform cycle family

use serde::Serialize;

use crate::config::EngineConfig;
use crate::indicators::keys;
use crate::indicators::registry::IndicatorCategory;
use crate::models::analysis::{CycleMode, Regime};
use crate::models::signal::{above, sign_bias, Bias, VoteBook};
use crate::models::snapshot::IndicatorSnapshot;
use crate::signals::interpretation::{CategoryInterpreter, Interpretation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CyclePosition {
    FollowingTrend,
    ApproachingTop,
    ApproachingBottom,
    Rising,
    Falling,
    Unknown,
}

impl CyclePosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            CyclePosition::FollowingTrend => "FOLLOWING_TREND",
            CyclePosition::ApproachingTop => "APPROACHING_TOP",
            CyclePosition::ApproachingBottom => "APPROACHING_BOTTOM",
            CyclePosition::Rising => "RISING",
            CyclePosition::Falling => "FALLING",
            CyclePosition::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleInterpretation {
    pub mode: CycleMode,
    pub position: CyclePosition,
    pub dominant_period: Option<f64>,
    /// atan2(quadrature, inphase) in degrees, within (-180, 180]
    pub phasor_angle: Option<f64>,
    /// 1..=4, counter-clockwise from the positive inphase axis
    pub phasor_quadrant: Option<u8>,
    pub votes: VoteBook,
    pub trace: Vec<String>,
}

impl Interpretation for CycleInterpretation {
    fn votes(&self) -> &VoteBook {
        &self.votes
    }

    fn trace(&self) -> &[String] {
        &self.trace
    }
}

#[derive(Debug, Clone)]
pub struct CycleInterpreter {
    trend_mode_weight: u32,
}

impl CycleInterpreter {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            trend_mode_weight: config.category_weights.cycle_trend_mode,
        }
    }
}

impl CategoryInterpreter for CycleInterpreter {
    type Output = CycleInterpretation;

    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Cycle
    }

    fn interpret(&self, snapshot: &IndicatorSnapshot, regime: Regime) -> CycleInterpretation {
        let mode = match snapshot.get(keys::HT_TRENDMODE) {
            Some(v) if v >= 0.5 => CycleMode::Trending,
            _ => CycleMode::Cycling,
        };
        let sine = snapshot.get(keys::HT_SINE_SINE);
        let lead = snapshot.get(keys::HT_SINE_LEADSINE);
        let inphase = snapshot.get(keys::HT_PHASOR_INPHASE);
        let quadrature = snapshot.get(keys::HT_PHASOR_QUADRATURE);
        let phase = snapshot.get(keys::HT_DCPHASE);

        let position = match mode {
            CycleMode::Trending => CyclePosition::FollowingTrend,
            CycleMode::Cycling => match (sine, lead) {
                (Some(s), Some(l)) if s > l && s > 0.0 => CyclePosition::ApproachingTop,
                (Some(s), Some(l)) if s < l && s < 0.0 => CyclePosition::ApproachingBottom,
                (Some(s), Some(l)) if s > l => CyclePosition::Rising,
                (Some(s), Some(l)) if s < l => CyclePosition::Falling,
                _ => CyclePosition::Unknown,
            },
        };

        let phasor_angle = match (inphase, quadrature) {
            (Some(i), Some(q)) if i != 0.0 || q != 0.0 => Some(q.atan2(i).to_degrees()),
            _ => None,
        };
        let phasor_quadrant = phasor_angle.map(|angle| match angle {
            a if (0.0..90.0).contains(&a) => 1,
            a if (90.0..=180.0).contains(&a) => 2,
            a if (-180.0..-90.0).contains(&a) => 3,
            _ => 4,
        });

        let mut votes = VoteBook::new();
        if mode == CycleMode::Trending {
            votes.cast_weighted("HT_TRENDMODE", regime.bias(), self.trend_mode_weight);
        }
        votes.cast("HT_SINE_sine vs HT_SINE_leadsine", Bias::from_comparison(above(sine, lead)));
        votes.cast("HT_PHASOR_inphase", sign_bias(inphase, 0.0));
        votes.cast("HT_DCPHASE", phase.map_or(Bias::Neutral, phase_bias));

        let tally = votes.tally();
        let mut trace = vec![format!(
            "Cycle: mode {}, position {}, {} bullish / {} bearish",
            mode.as_str(),
            position.as_str(),
            tally.bullish,
            tally.bearish
        )];
        if let (Some(angle), Some(quadrant)) = (phasor_angle, phasor_quadrant) {
            trace.push(format!("Phasor angle {:.0} deg (quadrant {})", angle, quadrant));
        }
        let dominant_period = snapshot.get(keys::HT_DCPERIOD);
        if let Some(period) = dominant_period {
            trace.push(format!("Dominant cycle period {:.1} bars", period));
        }

        CycleInterpretation {
            mode,
            position,
            dominant_period,
            phasor_angle,
            phasor_quadrant,
            votes,
            trace,
        }
    }
}

/// Rising half of the cycle is (0, 180) degrees
fn phase_bias(phase: f64) -> Bias {
    let normalized = phase.rem_euclid(360.0);
    if normalized > 0.0 && normalized < 180.0 {
        Bias::Bullish
    } else if normalized > 180.0 {
        Bias::Bearish
    } else {
        Bias::Neutral
    }
}
