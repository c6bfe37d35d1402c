//! Trading sessions and FX market hours (UTC)

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Session {
    Asian,
    London,
    NewYork,
}

impl Session {
    pub fn all() -> [Session; 3] {
        [Session::Asian, Session::London, Session::NewYork]
    }

    /// Opening and closing hour, UTC, half-open
    pub fn hours(&self) -> (u32, u32) {
        match self {
            Session::Asian => (0, 9),
            Session::London => (7, 16),
            Session::NewYork => (12, 21),
        }
    }

    /// Pairs with the deepest liquidity during the session
    pub fn pairs(&self) -> &'static [&'static str] {
        match self {
            Session::Asian => &["USD_JPY", "AUD_USD", "NZD_USD", "AUD_JPY", "EUR_JPY"],
            Session::London => &["EUR_USD", "GBP_USD", "EUR_GBP", "USD_CHF", "GBP_JPY", "EUR_JPY"],
            Session::NewYork => &["EUR_USD", "GBP_USD", "USD_CAD", "USD_JPY", "USD_CHF"],
        }
    }

    pub fn is_active(&self, at: DateTime<Utc>) -> bool {
        let (open, close) = self.hours();
        let hour = at.hour();
        hour >= open && hour < close
    }
}

/// The FX market is closed from Friday 22:00 to Sunday 22:00 UTC
pub fn is_market_open(at: DateTime<Utc>) -> bool {
    match at.weekday() {
        Weekday::Sat => false,
        Weekday::Sun => at.hour() >= 22,
        Weekday::Fri => at.hour() < 22,
        _ => true,
    }
}

pub fn active_sessions(at: DateTime<Utc>) -> Vec<Session> {
    Session::all()
        .into_iter()
        .filter(|session| session.is_active(at))
        .collect()
}

/// Deduplicated union of the active sessions' pairs, in session order
pub fn session_pairs(at: DateTime<Utc>) -> Vec<String> {
    let mut pairs: Vec<String> = Vec::new();
    for session in active_sessions(at) {
        for pair in session.pairs() {
            if !pairs.iter().any(|p| p == pair) {
                pairs.push(pair.to_string());
            }
        }
    }
    pairs
}
