//! Prometheus metrics recorder and `/metrics` endpoint handler.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;

/// Install the Prometheus metrics recorder (global).
///
/// Returns the `PrometheusHandle` used to render the `/metrics` endpoint.
/// Must be called once at server startup before any metrics are recorded.
pub fn install_recorder() -> PrometheusHandle {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install metrics recorder");
    info!("prometheus metrics recorder installed");
    handle
}

/// Render Prometheus text format from the installed recorder.
pub fn render(handle: &PrometheusHandle) -> String {
    handle.render()
}

// Metric name constants to avoid typos across handlers.

/// Rewrite requests total (counter).
pub const REWRITE_REQUESTS_TOTAL: &str = "rewrite_requests_total";
/// Rewrite requests blocked by the safety gate (counter).
pub const REWRITE_BLOCKED_TOTAL: &str = "rewrite_blocked_total";
/// Rewrite request duration seconds (histogram).
pub const REWRITE_DURATION_SECONDS: &str = "rewrite_duration_seconds";
/// Batch templates processed total (counter).
pub const BATCH_TEMPLATES_TOTAL: &str = "batch_templates_total";
/// Batch template failures total (counter).
pub const BATCH_FAILURES_TOTAL: &str = "batch_failures_total";
/// Speech markup requests total (counter).
pub const MARKUP_REQUESTS_TOTAL: &str = "speech_markup_requests_total";
