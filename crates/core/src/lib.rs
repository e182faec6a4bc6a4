// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! postbox-core: Shared data model for the postbox submission pipeline
//!
//! This crate provides the plain data types, wire types and persistence
//! primitives used by the `postbox` library and CLI. Nothing here performs
//! network I/O or spawns tasks.

pub mod blob;
pub mod entry;
pub mod error;
pub mod key;
pub mod metrics;
pub mod payload;
pub mod protocol;
pub mod slot;

pub use entry::{EntryId, QueuedEntry};
pub use error::{Error, Result};
pub use key::IdempotencyKey;
pub use metrics::{MetricsSnapshot, MetricsState};
pub use payload::SubmissionPayload;
pub use protocol::{Receipt, SubmissionRequest, IDEMPOTENCY_HEADER};
pub use slot::{FileSlot, MemorySlot, Slot, SlotLock};
