//! fxregime: regime-aware technical-analysis decision engine for spot FX.
//!
//! The core (`regime`, `signals`) is pure and synchronous. `core`, `services` and the binaries wrap it
//! with an HTTP API, a cron-driven scanner and snapshot loading.

pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod markets;
pub mod metrics;
pub mod models;
pub mod regime;
pub mod services;
pub mod signals;
