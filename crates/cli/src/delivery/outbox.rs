// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Consumer-facing facade over the delivery pipeline.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use postbox_core::{FileSlot, IdempotencyKey, MetricsSnapshot, QueuedEntry, Slot, SubmissionPayload};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::engine::{Delivered, RetryPolicy, SubmissionEngine, SubmitError};
use super::synchronizer::{QueueSynchronizer, SyncReport};
use super::telemetry::TelemetryReader;
use super::transport::{HttpTransport, Transport};
use crate::config::{Config, METRICS_SLOT, QUEUE_SLOT};
use crate::connectivity::{Connectivity, Transition};
use crate::error::Result;
use crate::store::{MetricsStore, QueueStore};

/// Owns the stores and wires them into the engine, synchronizer and reader.
pub struct Outbox {
    engine: SubmissionEngine,
    synchronizer: Arc<QueueSynchronizer>,
    telemetry: TelemetryReader,
    queue: Arc<QueueStore>,
    connectivity: Connectivity,
}

impl Outbox {
    pub fn new(
        transport: Arc<dyn Transport>,
        connectivity: Connectivity,
        queue_slot: Arc<dyn Slot>,
        metrics_slot: Arc<dyn Slot>,
        policy: RetryPolicy,
    ) -> Self {
        let queue = Arc::new(QueueStore::new(queue_slot));
        let metrics = Arc::new(MetricsStore::new(metrics_slot));

        let engine = SubmissionEngine::new(
            Arc::clone(&transport),
            connectivity.clone(),
            Arc::clone(&queue),
            Arc::clone(&metrics),
            policy,
        );
        let synchronizer = Arc::new(QueueSynchronizer::new(
            transport,
            connectivity.clone(),
            Arc::clone(&queue),
            Arc::clone(&metrics),
        ));
        let telemetry = TelemetryReader::new(Arc::clone(&queue), metrics);

        Outbox {
            engine,
            synchronizer,
            telemetry,
            queue,
            connectivity,
        }
    }

    /// Opens the file-backed outbox in `state_dir`, delivering over HTTP.
    pub fn open(config: &Config, state_dir: &Path, connectivity: Connectivity) -> Result<Self> {
        let transport = HttpTransport::new(&config.endpoint, config.request_timeout())?;
        tracing::debug!(endpoint = %transport.endpoint(), state_dir = %state_dir.display(), "opening outbox");
        Ok(Outbox::new(
            Arc::new(transport),
            connectivity,
            Arc::new(FileSlot::new(state_dir, QUEUE_SLOT)),
            Arc::new(FileSlot::new(state_dir, METRICS_SLOT)),
            config.retry.policy(),
        ))
    }

    pub async fn submit(
        &self,
        payload: SubmissionPayload,
        key: IdempotencyKey,
    ) -> std::result::Result<Delivered, SubmitError> {
        self.engine.submit(payload, key).await
    }

    /// Deferred submissions, oldest first.
    pub fn list_queued(&self) -> Vec<QueuedEntry> {
        self.queue.load()
    }

    pub async fn sync_now(&self) -> SyncReport {
        self.synchronizer.sync_now().await
    }

    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.telemetry.snapshot()
    }

    pub fn connectivity(&self) -> &Connectivity {
        &self.connectivity
    }

    /// Replays the queue on every offline→online edge and, when `interval`
    /// is set, periodically while online. Runs until `cancel` fires, even
    /// after this outbox is dropped.
    pub fn spawn_auto_sync(
        &self,
        interval: Option<Duration>,
        cancel: CancellationToken,
    ) -> JoinHandle<()> {
        let synchronizer = Arc::clone(&self.synchronizer);
        let connectivity = self.connectivity.clone();
        let mut transitions = self.connectivity.subscribe();

        tokio::spawn(async move {
            let mut ticker = interval.map(|period| {
                let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                ticker
            });

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::debug!("auto-sync stopped");
                        return;
                    }
                    // The task's own handle keeps the channel open, so only
                    // `cancel` ends the loop.
                    Some(transition) = transitions.next() => {
                        if transition == Transition::BecameOnline {
                            synchronizer.sync_now().await;
                        }
                    }
                    _ = tick(ticker.as_mut()) => {
                        if connectivity.is_online() {
                            synchronizer.sync_now().await;
                        }
                    }
                }
            }
        })
    }
}

/// Waits for the next tick, or forever without a timer.
async fn tick(ticker: Option<&mut tokio::time::Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending().await,
    }
}
