// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use postbox_core::MetricsSnapshot;

use crate::store::{MetricsStore, QueueStore};

/// Read-only view over the delivery counters and the live queue length.
pub struct TelemetryReader {
    queue: Arc<QueueStore>,
    metrics: Arc<MetricsStore>,
}

impl TelemetryReader {
    pub fn new(queue: Arc<QueueStore>, metrics: Arc<MetricsStore>) -> Self {
        TelemetryReader { queue, metrics }
    }

    /// Reads both stores afresh.
    pub fn snapshot(&self) -> MetricsSnapshot {
        self.metrics.load().snapshot(self.queue.len())
    }
}
