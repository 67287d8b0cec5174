// SPDX-License-Identifier: MIT OR Apache-2.0
//! OpenTelemetry metrics for graph algorithm runs.
//!
//! This module provides metrics instrumentation for callers embedding the
//! algorithms in a service. Enable the `metrics` feature to use this
//! functionality.

use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter, Unit},
    KeyValue,
};

/// Metrics collector for graph algorithm runs.
pub struct AlgorithmMetrics {
    /// Counter for algorithm invocations.
    runs: Counter<u64>,
    /// Histogram for run latency in seconds.
    run_latency: Histogram<f64>,
    /// Histogram for vertices visited per run.
    visited_vertices: Histogram<u64>,
}

impl AlgorithmMetrics {
    /// Creates a new metrics collector using the global meter provider.
    #[must_use]
    pub fn new() -> Self {
        let meter = global::meter("graph_core");
        Self::with_meter(&meter)
    }

    /// Creates a new metrics collector with a specific meter.
    #[must_use]
    pub fn with_meter(meter: &Meter) -> Self {
        let runs = meter
            .u64_counter("graph_core.algorithm_runs")
            .with_description("Total number of algorithm invocations")
            .init();

        let run_latency = meter
            .f64_histogram("graph_core.run_latency")
            .with_description("Algorithm run latency in seconds")
            .with_unit(Unit::new("s"))
            .init();

        let visited_vertices = meter
            .u64_histogram("graph_core.visited_vertices")
            .with_description("Vertices visited or settled per run")
            .init();

        Self {
            runs,
            run_latency,
            visited_vertices,
        }
    }

    /// Records one algorithm invocation.
    pub fn record_run(&self, algorithm: &str) {
        self.runs
            .add(1, &[KeyValue::new("algorithm", algorithm.to_string())]);
    }

    /// Records the latency of one run.
    pub fn record_run_latency(&self, latency_secs: f64, algorithm: &str) {
        self.run_latency.record(
            latency_secs,
            &[KeyValue::new("algorithm", algorithm.to_string())],
        );
    }

    /// Records how many vertices a run visited or settled.
    pub fn record_visited(&self, count: u64, algorithm: &str) {
        self.visited_vertices
            .record(count, &[KeyValue::new("algorithm", algorithm.to_string())]);
    }
}

impl Default for AlgorithmMetrics {
    fn default() -> Self {
        Self::new()
    }
}
