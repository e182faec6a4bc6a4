// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Replay of deferred submissions.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;

use super::transport::Transport;
use crate::connectivity::Connectivity;
use crate::store::{MetricsStore, QueueStore};

/// Outcome of one replay pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Entries handed to the transport.
    pub attempted: usize,
    /// Entries accepted and removed from the queue.
    pub delivered: usize,
    /// Queue length after the pass.
    pub remaining: usize,
}

/// Walks the queue oldest first, removing each entry the endpoint accepts.
///
/// Passes never overlap: a caller arriving mid-pass waits, then runs its own
/// pass over a fresh snapshot. Only the pass that actually dequeues an entry
/// counts it, so synchronizers sharing a state directory never double count. There is no retry ceiling; an entry stays
/// queued until a replay succeeds.
pub struct QueueSynchronizer {
    transport: Arc<dyn Transport>,
    connectivity: Connectivity,
    queue: Arc<QueueStore>,
    metrics: Arc<MetricsStore>,
    pass: Mutex<()>,
}

impl QueueSynchronizer {
    pub fn new(
        transport: Arc<dyn Transport>,
        connectivity: Connectivity,
        queue: Arc<QueueStore>,
        metrics: Arc<MetricsStore>,
    ) -> Self {
        QueueSynchronizer {
            transport,
            connectivity,
            queue,
            metrics,
            pass: Mutex::new(()),
        }
    }

    /// Runs one replay pass. Failures only leave entries queued.
    pub async fn sync_now(&self) -> SyncReport {
        let _pass = self.pass.lock().await;

        let mut report = SyncReport::default();
        if !self.connectivity.is_online() {
            report.remaining = self.queue.len();
            tracing::debug!(queued = report.remaining, "offline, skipping sync pass");
            return report;
        }

        let snapshot = self.queue.load();
        if snapshot.is_empty() {
            return report;
        }
        tracing::info!(queued = snapshot.len(), "sync pass started");

        for entry in snapshot {
            if !self.connectivity.is_online() {
                tracing::info!("connectivity lost, stopping sync pass");
                break;
            }

            report.attempted += 1;
            let outcome = self
                .transport
                .deliver(&entry.payload, &entry.idempotency_key)
                .await;
            match outcome {
                Ok(_) => match self.queue.remove(&entry.id) {
                    Ok(true) => {
                        if let Err(e) = self.metrics.record_success(None) {
                            tracing::warn!(error = %e, "failed to record success metric");
                        }
                        report.delivered += 1;
                    }
                    Ok(false) => {
                        tracing::debug!(entry = %entry.id, "replayed entry already dequeued elsewhere");
                    }
                    Err(e) => {
                        // The next pass resends under the same key and counts it then.
                        tracing::warn!(entry = %entry.id, error = %e, "replayed but failed to dequeue");
                    }
                },
                Err(e) => {
                    tracing::debug!(entry = %entry.id, error = %e, "replay failed, entry stays queued");
                }
            }
        }

        report.remaining = self.queue.len();
        tracing::info!(
            attempted = report.attempted,
            delivered = report.delivered,
            remaining = report.remaining,
            "sync pass finished"
        );
        report
    }
}
