//! Prometheus metrics for request counting.

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";

/// Install the Prometheus recorder and return its scrape handle.
///
/// Must be called once, before any counter is touched; increments recorded
/// earlier go nowhere.
pub fn install_recorder() -> crate::Result<PrometheusHandle> {
    Ok(PrometheusBuilder::new().install_recorder()?)
}

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_HTTP_REQUESTS,
        "Total number of HTTP requests handled, labeled by endpoint"
    );

    debug!("Metrics initialized");
}

/// Increment the request counter for an endpoint.
pub fn inc_requests(endpoint: &str) {
    counter!(METRIC_HTTP_REQUESTS, "endpoint" => endpoint.to_string()).increment(1);
}
