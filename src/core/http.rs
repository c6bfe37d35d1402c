//! HTTP endpoint server using Axum

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::core::scanner::{AnalysisRequest, ScanReport, Scanner};
use crate::error::EngineError;
use crate::markets::sessions::{active_sessions, is_market_open, session_pairs, Session};
use crate::metrics::Metrics;
use crate::models::analysis::MarketAnalysis;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub scanner: Arc<Scanner>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Engine error rendered as `422 {"error": ...}`
pub struct ApiError(EngineError);

impl From<EngineError> for ApiError {
    fn from(error: EngineError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self.0, "Analysis rejected");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "fxregime-decision-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// Analyze one instrument
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<MarketAnalysis>, ApiError> {
    let analysis = state.scanner.analyze(&request)?;
    Ok(Json(analysis))
}

#[derive(Debug, Deserialize)]
struct ScanRequest {
    requests: Vec<AnalysisRequest>,
}

#[derive(Debug, Serialize)]
struct ScanResponse {
    best_trade: Option<String>,
    #[serde(flatten)]
    report: ScanReport,
}

/// Analyze several instruments and rank the tradeable ones
async fn scan(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Json<ScanResponse> {
    let report = state.scanner.scan(&request.requests);
    let best_trade = report.best_trade().map(|best| best.analysis.symbol.clone());
    Json(ScanResponse { best_trade, report })
}

#[derive(Debug, Serialize)]
struct SessionsResponse {
    market_open: bool,
    active_sessions: Vec<Session>,
    pairs: Vec<String>,
}

/// Market hours and active sessions at the current time
async fn sessions() -> Json<SessionsResponse> {
    let now = Utc::now();
    Json(SessionsResponse {
        market_open: is_market_open(now),
        active_sessions: active_sessions(now),
        pairs: session_pairs(now),
    })
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/analyze", post(analyze))
        .route("/api/scan", post(scan))
        .route("/api/sessions", get(sessions))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    port: u16,
    scanner: Arc<Scanner>,
    metrics: Arc<Metrics>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
        scanner,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
