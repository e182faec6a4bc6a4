// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Submission with bounded retry and durable deferral.

use std::sync::Arc;
use std::time::Duration;

use postbox_core::{EntryId, IdempotencyKey, QueuedEntry, Receipt, SubmissionPayload};
use tokio::time::Instant;

use super::transport::{Transport, TransportError};
use crate::connectivity::Connectivity;
use crate::store::{MetricsStore, QueueStore};

/// Attempt budget and linear backoff for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first.
    pub max_attempts: u32,
    /// Delay after attempt `n` is `n * backoff_step`.
    pub backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 3,
            backoff_step: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Wait before the attempt following failed attempt number `attempt`.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff_step.saturating_mul(attempt)
    }
}

/// Why a submission was not delivered.
///
/// Every variant except `Persistence` means the submission is safely queued.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("offline: submission queued as {entry_id}\n  hint: run `postbox sync` once the endpoint is reachable")]
    Offline { entry_id: EntryId },

    #[error("delivery failed after {attempts} attempts: {source}\n  queued as {entry_id}; run `postbox sync` to retry")]
    ExhaustedRetries {
        attempts: u32,
        entry_id: EntryId,
        #[source]
        source: TransportError,
    },

    #[error("failed to queue submission: {0}")]
    Persistence(#[from] postbox_core::Error),
}

impl SubmitError {
    /// Id of the queued entry, if the submission was deferred.
    pub fn entry_id(&self) -> Option<&EntryId> {
        match self {
            SubmitError::Offline { entry_id } | SubmitError::ExhaustedRetries { entry_id, .. } => {
                Some(entry_id)
            }
            SubmitError::Persistence(_) => None,
        }
    }
}

/// A successful delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivered {
    pub receipt: Receipt,
    /// Attempts used, starting at 1.
    pub attempts: u32,
    /// Time from the start of `submit` to the accepted response.
    pub latency: Duration,
}

/// Delivers submissions, deferring to the queue when delivery is impossible.
pub struct SubmissionEngine {
    transport: Arc<dyn Transport>,
    connectivity: Connectivity,
    queue: Arc<QueueStore>,
    metrics: Arc<MetricsStore>,
    policy: RetryPolicy,
}

impl SubmissionEngine {
    pub fn new(
        transport: Arc<dyn Transport>,
        connectivity: Connectivity,
        queue: Arc<QueueStore>,
        metrics: Arc<MetricsStore>,
        policy: RetryPolicy,
    ) -> Self {
        SubmissionEngine {
            transport,
            connectivity,
            queue,
            metrics,
            policy,
        }
    }

    /// Submits one logical submission identified by `key`.
    ///
    /// Offline submissions are queued without touching the transport. Online
    /// submissions get up to `max_attempts` tries; when all fail the
    /// submission is queued under the same key before the error is returned.
    pub async fn submit(
        &self,
        payload: SubmissionPayload,
        key: IdempotencyKey,
    ) -> Result<Delivered, SubmitError> {
        if !self.connectivity.is_online() {
            let entry_id = self.defer(payload, key)?;
            tracing::info!(entry = %entry_id, "offline, submission deferred");
            return Err(SubmitError::Offline { entry_id });
        }

        let started = Instant::now();
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let outcome = self.transport.deliver(&payload, &key).await;
            match outcome {
                Ok(receipt) => {
                    let latency = started.elapsed();
                    if let Err(e) = self.metrics.record_success(Some(latency)) {
                        tracing::warn!(error = %e, "failed to record success metric");
                    }
                    tracing::info!(%key, attempt, ?latency, "submission delivered");
                    return Ok(Delivered {
                        receipt,
                        attempts: attempt,
                        latency,
                    });
                }
                Err(err) if attempt >= max_attempts => {
                    // Counted even when deferral fails below.
                    if let Err(e) = self.metrics.record_failure() {
                        tracing::warn!(error = %e, "failed to record failure metric");
                    }
                    let entry_id = self.defer(payload, key)?;
                    tracing::warn!(entry = %entry_id, attempts = attempt, error = %err, "delivery exhausted, submission deferred");
                    return Err(SubmitError::ExhaustedRetries {
                        attempts: attempt,
                        entry_id,
                        source: err,
                    });
                }
                Err(err) => {
                    let delay = self.policy.delay_after(attempt);
                    tracing::debug!(%key, attempt, error = %err, ?delay, "delivery attempt failed, backing off");
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    fn defer(
        &self,
        payload: SubmissionPayload,
        key: IdempotencyKey,
    ) -> Result<EntryId, postbox_core::Error> {
        let entry = QueuedEntry::new(payload, key);
        let id = entry.id.clone();
        self.queue.push(entry)?;
        Ok(id)
    }
}
