//! Request metrics for greeter-service.
//!
//! The registry is constructed explicitly and injected through application
//! state rather than living in process-wide statics, so each built
//! application owns exactly one counter family.

use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

/// Content type of the Prometheus text exposition format.
pub const METRICS_CONTENT_TYPE: &str = prometheus::TEXT_FORMAT;

/// Per-endpoint request counter plus the registry it is registered in.
pub struct AppMetrics {
    registry: Registry,
    requests: IntCounterVec,
}

impl AppMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new("app_requests_total", "Total HTTP requests"),
            &["endpoint"],
        )?;
        registry.register(Box::new(requests.clone()))?;

        Ok(Self { registry, requests })
    }

    /// Count one handled request against the given endpoint label.
    ///
    /// The series for a label is created lazily on first use.
    pub fn record_request(&self, endpoint: &str) {
        self.requests.with_label_values(&[endpoint]).inc();
    }

    /// Render a snapshot of every registered metric in the Prometheus text
    /// exposition format. Reads only; never touches counter values.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;

        String::from_utf8(buffer)
            .map_err(|e| prometheus::Error::Msg(format!("non-utf8 metrics output: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_series_appear_lazily() {
        let metrics = AppMetrics::new().unwrap();

        let before = metrics.render().unwrap();
        assert!(!before.contains("endpoint=\"/\""));

        metrics.record_request("/");
        metrics.record_request("/");

        let after = metrics.render().unwrap();
        assert!(after.contains("app_requests_total{endpoint=\"/\"} 2"));
        assert!(!after.contains("endpoint=\"/healthz\""));
    }

    #[test]
    fn render_does_not_change_counter_values() {
        let metrics = AppMetrics::new().unwrap();
        metrics.record_request("/healthz");

        let first = metrics.render().unwrap();
        let second = metrics.render().unwrap();
        assert_eq!(first, second);
    }
}
