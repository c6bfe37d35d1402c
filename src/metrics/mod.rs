//! Prometheus metrics for the HTTP surface and the analysis loop

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

use crate::models::analysis::MarketAnalysis;

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub analyses_total: IntCounterVec,
    pub decisions_total: IntCounterVec,
    pub analysis_failures_total: IntCounter,
    pub scan_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::with_opts(Opts::new("http_requests_total", "Total HTTP requests"))?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight = IntGauge::with_opts(Opts::new(
            "http_requests_in_flight",
            "HTTP requests currently being served",
        ))?;
        let analyses_total = IntCounterVec::new(
            Opts::new("analyses_total", "Completed analyses by regime"),
            &["regime"],
        )?;
        let decisions_total = IntCounterVec::new(
            Opts::new("decisions_total", "Trade decisions by direction"),
            &["direction"],
        )?;
        let analysis_failures_total = IntCounter::with_opts(Opts::new(
            "analysis_failures_total",
            "Analyses aborted with an engine error",
        ))?;
        let scan_duration_seconds = Histogram::with_opts(
            HistogramOpts::new("scan_duration_seconds", "Duration of a multi-instrument scan")
                .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(analyses_total.clone()))?;
        registry.register(Box::new(decisions_total.clone()))?;
        registry.register(Box::new(analysis_failures_total.clone()))?;
        registry.register(Box::new(scan_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            analyses_total,
            decisions_total,
            analysis_failures_total,
            scan_duration_seconds,
        })
    }

    /// Count a completed analysis
    pub fn record_analysis(&self, analysis: &MarketAnalysis) {
        self.analyses_total
            .with_label_values(&[analysis.regime.regime.as_str()])
            .inc();
        self.decisions_total
            .with_label_values(&[analysis.decision.direction.as_str()])
            .inc();
    }

    /// Render all metrics in the Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
