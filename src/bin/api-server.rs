//! fxregime API Server
//!
//! HTTP API server with health check, metrics and analysis endpoints.
//! The service holds no per-request state and can be horizontally scaled.

use dotenvy::dotenv;
use fxregime::config::EngineConfig;
use fxregime::core::http::start_server;
use fxregime::core::scanner::Scanner;
use fxregime::logging;
use fxregime::metrics::Metrics;
use fxregime::signals::engine::AnalysisPipeline;
use std::env;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let env = fxregime::config::get_environment();
    info!("Starting fxregime API Server");
    info!(environment = %env, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let config = EngineConfig::from_env()?;
    let metrics = Arc::new(Metrics::new()?);
    let pipeline = Arc::new(AnalysisPipeline::new(&config)?);
    let scanner = Arc::new(Scanner::new(pipeline).with_metrics(metrics.clone()));

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, scanner, metrics).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
