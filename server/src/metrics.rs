//! Prometheus metrics & middleware helper.
//!
//! Exposes per-endpoint request counters and latency histograms under the
//! `warband_` prefix. Liveness probes are left out of the series.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use once_cell::sync::Lazy;

/// Scrape path served by the middleware itself.
pub const METRICS_PATH: &str = "/metrics";

/// Global Prometheus handle, wrapped around the app in `main`.
pub static METRICS: Lazy<PrometheusMetrics> = Lazy::new(|| {
    PrometheusMetricsBuilder::new("warband")
        .endpoint(METRICS_PATH)
        .exclude("/healthz")
        .build()
        .expect("metrics builder")
});
