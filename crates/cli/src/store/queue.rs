// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable FIFO of deferred submissions.

use std::sync::{Arc, Mutex, PoisonError};

use postbox_core::{blob, EntryId, QueuedEntry, Result, Slot};

/// Ordered list of deferred submissions, oldest first.
pub struct QueueStore {
    slot: Arc<dyn Slot>,
    guard: Mutex<()>,
}

impl QueueStore {
    pub fn new(slot: Arc<dyn Slot>) -> Self {
        QueueStore {
            slot,
            guard: Mutex::new(()),
        }
    }

    /// Reads every queued entry. Missing or corrupt data reads as empty.
    pub fn load(&self) -> Vec<QueuedEntry> {
        blob::load_or_default(self.slot.as_ref())
    }

    /// Replaces the stored queue.
    pub fn save(&self, entries: &[QueuedEntry]) -> Result<()> {
        let _held = self.guard.lock().unwrap_or_else(PoisonError::into_inner);
        let _lock = self.slot.lock()?;
        blob::store(self.slot.as_ref(), &entries)
    }

    /// Appends an entry; returns the new queue length.
    pub fn push(&self, entry: QueuedEntry) -> Result<usize> {
        let _held = self.guard.lock().unwrap_or_else(PoisonError::into_inner);
        let _lock = self.slot.lock()?;

        let mut entries: Vec<QueuedEntry> = blob::load_for_update(self.slot.as_ref())?;
        let id = entry.id.clone();
        entries.push(entry);
        blob::store(self.slot.as_ref(), &entries)?;

        tracing::info!(entry = %id, queued = entries.len(), "deferred submission queued");
        Ok(entries.len())
    }

    /// Removes the entry with `id`; returns whether it was present.
    pub fn remove(&self, id: &EntryId) -> Result<bool> {
        let _held = self.guard.lock().unwrap_or_else(PoisonError::into_inner);
        let _lock = self.slot.lock()?;

        let mut entries: Vec<QueuedEntry> = blob::load_for_update(self.slot.as_ref())?;
        let before = entries.len();
        entries.retain(|e| &e.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        blob::store(self.slot.as_ref(), &entries)?;

        tracing::info!(entry = %id, queued = entries.len(), "deferred submission removed");
        Ok(true)
    }

    /// Current queue length, read live from the slot.
    pub fn len(&self) -> usize {
        self.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
