//! Directional votes cast by individual indicators

use serde::Serialize;

/// Qualitative direction of a vote, category or overall tally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bias {
    Bullish,
    Bearish,
    Neutral,
}

impl Bias {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bias::Bullish => "BULLISH",
            Bias::Bearish => "BEARISH",
            Bias::Neutral => "NEUTRAL",
        }
    }

    pub fn opposite(self) -> Bias {
        match self {
            Bias::Bullish => Bias::Bearish,
            Bias::Bearish => Bias::Bullish,
            Bias::Neutral => Bias::Neutral,
        }
    }

    /// Bias of a comparison result: `Some(true)` bullish, `Some(false)` bearish
    pub fn from_comparison(comparison: Option<bool>) -> Bias {
        match comparison {
            Some(true) => Bias::Bullish,
            Some(false) => Bias::Bearish,
            None => Bias::Neutral,
        }
    }
}

impl std::fmt::Display for Bias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One indicator's directional vote
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalVote {
    pub signal: String,
    pub bias: Bias,
    pub weight: u32,
}

/// Weighted bullish/bearish counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub bullish: u32,
    pub bearish: u32,
}

impl Tally {
    pub fn total(&self) -> u32 {
        self.bullish + self.bearish
    }

    /// Share of bullish weight, `None` when nothing voted
    pub fn bullish_percent(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.bullish as f64 / total as f64 * 100.0),
        }
    }

    /// Plain majority
    pub fn direction(&self) -> Bias {
        match self.bullish.cmp(&self.bearish) {
            std::cmp::Ordering::Greater => Bias::Bullish,
            std::cmp::Ordering::Less => Bias::Bearish,
            std::cmp::Ordering::Equal => Bias::Neutral,
        }
    }

    /// Direction by percentage thresholds; an empty tally is neutral
    pub fn direction_by_share(&self, bullish_at: f64, bearish_at: f64) -> Bias {
        match self.bullish_percent() {
            Some(pct) if pct >= bullish_at => Bias::Bullish,
            Some(pct) if pct <= bearish_at => Bias::Bearish,
            _ => Bias::Neutral,
        }
    }

    pub fn scaled(&self, weight: u32) -> Tally {
        Tally {
            bullish: self.bullish * weight,
            bearish: self.bearish * weight,
        }
    }
}

impl std::ops::Add for Tally {
    type Output = Tally;

    fn add(self, other: Tally) -> Tally {
        Tally {
            bullish: self.bullish + other.bullish,
            bearish: self.bearish + other.bearish,
        }
    }
}

/// Ordered collection of votes; neutral votes abstain and are not recorded
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VoteBook {
    votes: Vec<SignalVote>,
}

impl VoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cast(&mut self, signal: &str, bias: Bias) {
        self.cast_weighted(signal, bias, 1);
    }

    pub fn cast_weighted(&mut self, signal: &str, bias: Bias, weight: u32) {
        if bias == Bias::Neutral || weight == 0 {
            return;
        }
        self.votes.push(SignalVote {
            signal: signal.to_string(),
            bias,
            weight,
        });
    }

    pub fn votes(&self) -> &[SignalVote] {
        &self.votes
    }

    pub fn tally(&self) -> Tally {
        self.votes.iter().fold(Tally::default(), |mut tally, vote| {
            match vote.bias {
                Bias::Bullish => tally.bullish += vote.weight,
                Bias::Bearish => tally.bearish += vote.weight,
                Bias::Neutral => {}
            }
            tally
        })
    }
}

/// `Some(a > b)` when both sides are present and differ
pub fn above(a: Option<f64>, b: Option<f64>) -> Option<bool> {
    match (a, b) {
        (Some(a), Some(b)) if a != b => Some(a > b),
        _ => None,
    }
}

/// Bias of a value's sign relative to `center`
pub fn sign_bias(value: Option<f64>, center: f64) -> Bias {
    Bias::from_comparison(above(value, Some(center)))
}

/// Bias when the value leaves a symmetric dead band `[low, high]`
pub fn band_bias(value: Option<f64>, low: f64, high: f64) -> Bias {
    match value {
        Some(v) if v > high => Bias::Bullish,
        Some(v) if v < low => Bias::Bearish,
        _ => Bias::Neutral,
    }
}
