//! fxregime Worker
//!
//! Periodically loads snapshot envelopes from a directory, scans them and logs the best trade.
//! Runs as a separate process from the API server.

use dotenvy::dotenv;
use fxregime::config::EngineConfig;
use fxregime::core::scanner::Scanner;
use fxregime::core::scheduler::ScanScheduler;
use fxregime::logging;
use fxregime::metrics::Metrics;
use fxregime::services::snapshot_source::{DirectorySnapshotSource, SnapshotSource};
use fxregime::signals::engine::AnalysisPipeline;
use std::env;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();

    logging::init_logging();

    let scan_interval: u64 = env::var("SCAN_INTERVAL_SECONDS")
        .ok()
        .and_then(|i| i.parse().ok())
        .unwrap_or(300);
    let snapshot_dir = env::var("SNAPSHOT_DIR").unwrap_or_else(|_| "snapshots".to_string());
    let symbols: Vec<String> = env::var("SYMBOLS")
        .map(|s| {
            s.split(',')
                .map(|symbol| symbol.trim().to_string())
                .filter(|symbol| !symbol.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let env = fxregime::config::get_environment();
    info!("Starting fxregime Worker");
    info!(environment = %env, "Environment");
    info!(snapshot_dir = %snapshot_dir, "Snapshot directory: {}", snapshot_dir);
    if symbols.is_empty() {
        info!("No SYMBOLS configured - scanning the pairs of the active sessions");
    } else {
        info!(symbols = ?symbols, "Symbols: {}", symbols.join(", "));
    }

    let config = EngineConfig::from_env()?;
    let metrics = Arc::new(Metrics::new()?);
    let pipeline = Arc::new(AnalysisPipeline::new(&config)?);
    let scanner = Arc::new(Scanner::new(pipeline).with_metrics(metrics));
    let source: Arc<dyn SnapshotSource> = Arc::new(DirectorySnapshotSource::new(snapshot_dir));

    let scheduler = Arc::new(ScanScheduler::new(source, scanner, symbols, scan_interval)?);
    scheduler.clone().start().await;

    info!("Worker started, waiting for shutdown signal...");
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutting down worker..."),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
    scheduler.stop().await;
    info!("Worker stopped");

    Ok(())
}
