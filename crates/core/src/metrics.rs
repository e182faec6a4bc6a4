// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Delivery counters and the snapshot derived from them.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Persisted delivery counters.
///
/// All three fields only ever grow. Latency is accumulated for successful
/// deliveries only. The live queue length is deliberately absent: it is
/// recomputed from the queue on every read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsState {
    #[serde(default)]
    pub success: u64,
    #[serde(default)]
    pub failures: u64,
    #[serde(default, rename = "totalLatency")]
    pub total_latency_ms: f64,
}

impl MetricsState {
    /// Counts a delivered submission, adding its latency when one was measured.
    pub fn record_success(&mut self, latency: Option<Duration>) {
        self.success += 1;
        if let Some(latency) = latency {
            self.total_latency_ms += latency.as_secs_f64() * 1000.0;
        }
    }

    /// Counts a submission whose attempts were exhausted.
    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    /// Mean latency of successful deliveries in milliseconds, or 0 if none.
    pub fn avg_latency_ms(&self) -> f64 {
        if self.success > 0 {
            self.total_latency_ms / self.success as f64
        } else {
            0.0
        }
    }

    /// Builds a read-only view combining these counters with a live queue length.
    pub fn snapshot(&self, queued_items: usize) -> MetricsSnapshot {
        MetricsSnapshot {
            success: self.success,
            failures: self.failures,
            avg_latency_ms: self.avg_latency_ms(),
            queued_items,
        }
    }
}

/// Telemetry as shown to a consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub success: u64,
    pub failures: u64,
    #[serde(rename = "avgLatency")]
    pub avg_latency_ms: f64,
    pub queued_items: usize,
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
