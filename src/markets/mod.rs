//! Instrument conventions and trading-session windows.

pub mod instrument;
pub mod sessions;

pub use instrument::Instrument;
pub use sessions::{active_sessions, is_market_open, session_pairs, Session};
