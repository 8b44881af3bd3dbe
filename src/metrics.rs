//! Prometheus request metrics, served at `/metrics`.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};

/// Build once at startup; every worker's `App` wraps a clone.
pub fn build() -> anyhow::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("matchlog")
        .endpoint("/metrics")
        .build()
        .map_err(|e| anyhow::anyhow!(e).context("building prometheus metrics"))
}
