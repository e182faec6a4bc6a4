// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable delivery counters.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use postbox_core::{blob, MetricsState, Result, Slot};

/// Persisted success/failure/latency counters.
pub struct MetricsStore {
    slot: Arc<dyn Slot>,
    guard: Mutex<()>,
}

impl MetricsStore {
    pub fn new(slot: Arc<dyn Slot>) -> Self {
        MetricsStore {
            slot,
            guard: Mutex::new(()),
        }
    }

    /// Reads the counters. Missing or corrupt data reads as zero.
    pub fn load(&self) -> MetricsState {
        blob::load_or_default(self.slot.as_ref())
    }

    pub fn save(&self, state: &MetricsState) -> Result<()> {
        let _held = self.guard.lock().unwrap_or_else(PoisonError::into_inner);
        let _lock = self.slot.lock()?;
        blob::store(self.slot.as_ref(), state)
    }

    /// Counts one delivered submission.
    pub fn record_success(&self, latency: Option<Duration>) -> Result<MetricsState> {
        self.update(|state| state.record_success(latency))
    }

    /// Counts one submission whose attempts were exhausted.
    pub fn record_failure(&self) -> Result<MetricsState> {
        self.update(MetricsState::record_failure)
    }

    fn update(&self, apply: impl FnOnce(&mut MetricsState)) -> Result<MetricsState> {
        let _held = self.guard.lock().unwrap_or_else(PoisonError::into_inner);
        let _lock = self.slot.lock()?;

        let mut state: MetricsState = blob::load_for_update(self.slot.as_ref())?;
        apply(&mut state);
        blob::store(self.slot.as_ref(), &state)?;
        Ok(state)
    }
}
