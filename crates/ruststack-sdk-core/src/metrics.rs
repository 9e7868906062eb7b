//! Per-request timing metrics.
//!
//! The runtime measures each phase of a request and hands the result to a
//! [`MetricsCollector`]. [`OperationStats`] is an in-memory collector that
//! aggregates calls, errors and latency per service operation.

use std::time::Duration;

use dashmap::DashMap;

/// Timings and outcome of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMetrics {
    /// Service name.
    pub service: &'static str,
    /// Operation name.
    pub operation: &'static str,
    /// Time spent building the HTTP request.
    pub marshall: Duration,
    /// Time spent resolving credentials and signing.
    pub sign: Duration,
    /// Time spent on the wire.
    pub transport: Duration,
    /// Time spent decoding the response.
    pub unmarshall: Duration,
    /// End-to-end time.
    pub total: Duration,
    /// HTTP status, if a response was received.
    pub status: Option<http::StatusCode>,
    /// Whether the operation succeeded.
    pub success: bool,
}

/// Receives the metrics of every request a client makes.
pub trait MetricsCollector: Send + Sync + std::fmt::Debug {
    /// Record one finished request.
    fn record(&self, metrics: &RequestMetrics);
}

/// Aggregate figures for one operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationSummary {
    /// Number of requests.
    pub calls: u64,
    /// Number of failed requests.
    pub errors: u64,
    /// Sum of end-to-end latencies.
    pub total_latency: Duration,
}

impl OperationSummary {
    /// Mean end-to-end latency, or zero if nothing was recorded.
    #[must_use]
    pub fn mean_latency(&self) -> Duration {
        if self.calls == 0 {
            return Duration::ZERO;
        }
        let calls = u32::try_from(self.calls).unwrap_or(u32::MAX);
        self.total_latency / calls
    }
}

/// Thread-safe in-memory collector keyed by `(service, operation)`.
#[derive(Debug, Default)]
pub struct OperationStats {
    entries: DashMap<(&'static str, &'static str), OperationSummary>,
}

impl OperationStats {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Summary for one operation.
    #[must_use]
    pub fn summary(&self, service: &str, operation: &str) -> Option<OperationSummary> {
        self.entries
            .iter()
            .find(|entry| entry.key().0 == service && entry.key().1 == operation)
            .map(|entry| *entry.value())
    }

    /// Snapshot of every recorded operation, sorted by service and operation.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(&'static str, &'static str, OperationSummary)> {
        let mut all: Vec<_> = self
            .entries
            .iter()
            .map(|entry| (entry.key().0, entry.key().1, *entry.value()))
            .collect();
        all.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        all
    }
}

impl MetricsCollector for OperationStats {
    fn record(&self, metrics: &RequestMetrics) {
        let mut entry = self
            .entries
            .entry((metrics.service, metrics.operation))
            .or_default();
        entry.calls += 1;
        if !metrics.success {
            entry.errors += 1;
        }
        entry.total_latency += metrics.total;
    }
}
