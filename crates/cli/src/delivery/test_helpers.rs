// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for delivery module tests.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use postbox_core::{IdempotencyKey, MemorySlot, QueuedEntry};

use super::transport_tests::MockTransport;
use super::{QueueSynchronizer, RetryPolicy, SubmissionEngine, TelemetryReader};
use crate::connectivity::Connectivity;
use crate::store::{MetricsStore, QueueStore};
use crate::test_helpers::payload;

/// In-memory stores plus a scripted transport.
pub struct Harness {
    pub transport: Arc<MockTransport>,
    pub connectivity: Connectivity,
    pub queue: Arc<QueueStore>,
    pub metrics: Arc<MetricsStore>,
}

impl Harness {
    pub fn new(transport: MockTransport, online: bool) -> Self {
        Harness {
            transport: Arc::new(transport),
            connectivity: Connectivity::new(online),
            queue: Arc::new(QueueStore::new(Arc::new(MemorySlot::new("contactQueue")))),
            metrics: Arc::new(MetricsStore::new(Arc::new(MemorySlot::new(
                "contactMetrics",
            )))),
        }
    }

    pub fn engine(&self) -> SubmissionEngine {
        SubmissionEngine::new(
            self.transport.clone(),
            self.connectivity.clone(),
            Arc::clone(&self.queue),
            Arc::clone(&self.metrics),
            RetryPolicy::default(),
        )
    }

    pub fn synchronizer(&self) -> QueueSynchronizer {
        QueueSynchronizer::new(
            self.transport.clone(),
            self.connectivity.clone(),
            Arc::clone(&self.queue),
            Arc::clone(&self.metrics),
        )
    }

    pub fn telemetry(&self) -> TelemetryReader {
        TelemetryReader::new(Arc::clone(&self.queue), Arc::clone(&self.metrics))
    }

    /// Queues an entry directly, returning it.
    pub fn enqueue(&self, name: &str) -> QueuedEntry {
        let entry = QueuedEntry::new(payload(name), IdempotencyKey::generate());
        self.queue.push(entry.clone()).unwrap();
        entry
    }
}

/// Elapsed time between consecutive recorded calls.
pub fn gaps(transport: &MockTransport) -> Vec<Duration> {
    transport
        .calls()
        .windows(2)
        .map(|pair| pair[1].at.duration_since(pair[0].at))
        .collect()
}
