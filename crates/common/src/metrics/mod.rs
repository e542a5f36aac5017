//! Metrics and observability utilities
//!
//! Provides Prometheus-style metrics with standardized naming conventions.

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram, Unit};
use std::time::Instant;

/// Metrics prefix for all Dojo metrics
pub const METRICS_PREFIX: &str = "dojo";

/// Histogram buckets for in-memory scans and tool calls (in seconds)
pub const LATENCY_BUCKETS: &[f64] = &[
    0.0001, // 100us
    0.0005, // 500us
    0.001,  // 1ms
    0.005,  // 5ms
    0.010,  // 10ms
    0.050,  // 50ms
    0.100,  // 100ms
    0.500,  // 500ms
    1.000,  // 1s
];

/// Register all metric descriptions
pub fn register_metrics() {
    describe_counter!(
        format!("{}_search_queries_total", METRICS_PREFIX),
        Unit::Count,
        "Total number of wisdom searches"
    );

    describe_histogram!(
        format!("{}_search_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "Wisdom search latency in seconds"
    );

    describe_gauge!(
        format!("{}_search_results_count", METRICS_PREFIX),
        Unit::Count,
        "Number of results returned from the last search"
    );

    describe_counter!(
        format!("{}_tool_calls_total", METRICS_PREFIX),
        Unit::Count,
        "Total number of tool calls"
    );

    describe_histogram!(
        format!("{}_tool_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "Tool call latency in seconds"
    );

    tracing::info!("Metrics registered");
}

/// Helper to record tool call metrics
pub struct ToolMetrics {
    start: Instant,
    tool: String,
}

impl ToolMetrics {
    /// Start tracking a tool call
    pub fn start(tool: &str) -> Self {
        Self {
            start: Instant::now(),
            tool: tool.to_string(),
        }
    }

    /// Record tool call completion, returning the elapsed milliseconds
    pub fn finish(self, is_error: bool) -> u64 {
        let elapsed = self.start.elapsed();
        let outcome = if is_error { "error" } else { "ok" };

        counter!(
            format!("{}_tool_calls_total", METRICS_PREFIX),
            "tool" => self.tool.clone(),
            "outcome" => outcome
        )
        .increment(1);

        histogram!(
            format!("{}_tool_duration_seconds", METRICS_PREFIX),
            "tool" => self.tool
        )
        .record(elapsed.as_secs_f64());

        elapsed.as_millis() as u64
    }
}

/// Helper to record search metrics
pub fn record_search(duration_secs: f64, result_count: usize) {
    counter!(format!("{}_search_queries_total", METRICS_PREFIX)).increment(1);

    histogram!(format!("{}_search_duration_seconds", METRICS_PREFIX)).record(duration_secs);

    gauge!(format!("{}_search_results_count", METRICS_PREFIX)).set(result_count as f64);
}
