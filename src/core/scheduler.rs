//! Cron-based scheduler for periodic instrument scans

use chrono::{DateTime, Utc};
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::core::scanner::{ScanReport, Scanner};
use crate::markets::sessions::{active_sessions, is_market_open, session_pairs};
use crate::services::snapshot_source::SnapshotSource;

/// Convert an interval to a six-field cron expression (second minute hour day month weekday)
///
/// Step fields restart at every wrap of the next field, so only intervals that evenly divide a
/// minute, an hour or a day keep a constant period. Anything else is `None`.
pub fn cron_expression(interval_seconds: u64) -> Option<String> {
    match interval_seconds {
        0 => None,
        s if s < 60 && 60 % s == 0 => Some(format!("*/{} * * * * *", s)),
        s if s % 60 == 0 && s < 3600 && 60 % (s / 60) == 0 => {
            Some(format!("0 */{} * * * *", s / 60))
        }
        86_400 => Some("0 0 0 * * *".to_string()),
        s if s % 3600 == 0 && s < 86_400 && 24 % (s / 3600) == 0 => {
            Some(format!("0 0 */{} * * *", s / 3600))
        }
        _ => None,
    }
}

/// Scheduler that scans the configured symbols, or the active session's pairs, on every tick
pub struct ScanScheduler {
    source: Arc<dyn SnapshotSource>,
    scanner: Arc<Scanner>,
    symbols: Vec<String>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl ScanScheduler {
    /// Create a new scheduler
    ///
    /// # Arguments
    /// * `source` - where snapshots are loaded from
    /// * `scanner` - analysis and ranking
    /// * `symbols` - fixed symbol list; empty means "pairs of the active sessions"
    /// * `interval_seconds` - scan interval in seconds; must evenly divide a minute, an hour or a day
    pub fn new(
        source: Arc<dyn SnapshotSource>,
        scanner: Arc<Scanner>,
        symbols: Vec<String>,
        interval_seconds: u64,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if interval_seconds == 0 {
            return Err("Scheduler disabled: interval_seconds is 0".into());
        }

        let cron_expr = cron_expression(interval_seconds).ok_or_else(|| {
            format!(
                "Interval {}s does not evenly divide a minute, an hour or a day",
                interval_seconds
            )
        })?;
        let schedule = Schedule::from_str(&cron_expr)
            .map_err(|e| format!("Invalid cron expression '{}': {}", cron_expr, e))?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            symbols = ?symbols,
            "ScanScheduler: created with interval {}s (cron: {})",
            interval_seconds,
            cron_expr
        );

        Ok(Self {
            source,
            scanner,
            symbols,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Symbols to scan at `now`
    pub fn symbols_at(&self, now: DateTime<Utc>) -> Vec<String> {
        if self.symbols.is_empty() {
            session_pairs(now)
        } else {
            self.symbols.clone()
        }
    }

    /// Run one scan; `None` when the market is closed
    pub async fn run_once(&self, now: DateTime<Utc>) -> Option<ScanReport> {
        if !is_market_open(now) {
            info!("ScanScheduler: market closed, skipping tick");
            return None;
        }

        let symbols = self.symbols_at(now);
        debug!(sessions = ?active_sessions(now), symbols = ?symbols, "ScanScheduler: tick");

        let mut requests = Vec::with_capacity(symbols.len());
        for symbol in &symbols {
            match self.source.load(symbol).await {
                Ok(request) => requests.push(request),
                Err(e) => warn!(symbol = %symbol, error = %e, "ScanScheduler: snapshot unavailable"),
            }
        }

        Some(self.scanner.scan(&requests))
    }

    /// Start the scheduler loop in a background task
    pub async fn start(self: Arc<Self>) {
        let scheduler = self.clone();
        let handle = tokio::spawn(async move {
            info!("ScanScheduler: started, waiting for cron schedule...");

            loop {
                let next_tick = scheduler.schedule.upcoming(Utc).next();
                match next_tick {
                    Some(next_tick) => {
                        let now = Utc::now();
                        if next_tick > now {
                            let duration = (next_tick - now).to_std().unwrap_or_default();
                            tokio::time::sleep(duration).await;
                        }
                    }
                    None => {
                        tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                        continue;
                    }
                }

                if let Some(report) = scheduler.run_once(Utc::now()).await {
                    info!(
                        opportunities = report.opportunities.len(),
                        idle = report.idle.len(),
                        skipped = report.skipped.len(),
                        "ScanScheduler: scan finished"
                    );
                }
            }
        });

        *self.handle.write().await = Some(handle);
    }

    /// Stop the scheduler loop
    pub async fn stop(&self) {
        if let Some(handle) = self.handle.write().await.take() {
            handle.abort();
            info!("ScanScheduler: stopped");
        }
    }
}
