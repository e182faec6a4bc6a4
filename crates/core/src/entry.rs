// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deferred submissions awaiting replay.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::key::IdempotencyKey;
use crate::payload::SubmissionPayload;

/// Queue-local identifier of a deferred submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn generate() -> Self {
        EntryId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        EntryId(s.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A submission that could not be delivered and is persisted for replay.
///
/// Entries are immutable once created. The stored layout uses the keys
/// `id`, `data`, `idempotencyKey` and `timestamp` (epoch milliseconds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuedEntry {
    pub id: EntryId,
    #[serde(rename = "data")]
    pub payload: SubmissionPayload,
    pub idempotency_key: IdempotencyKey,
    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub enqueued_at: DateTime<Utc>,
}

impl QueuedEntry {
    /// Creates an entry stamped with the current time and a fresh id.
    pub fn new(payload: SubmissionPayload, idempotency_key: IdempotencyKey) -> Self {
        QueuedEntry::at(payload, idempotency_key, Utc::now())
    }

    pub fn at(
        payload: SubmissionPayload,
        idempotency_key: IdempotencyKey,
        enqueued_at: DateTime<Utc>,
    ) -> Self {
        QueuedEntry {
            id: EntryId::generate(),
            payload,
            idempotency_key,
            enqueued_at,
        }
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
