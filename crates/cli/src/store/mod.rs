// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable stores for deferred submissions and delivery counters.
//!
//! Each store owns one [`Slot`](postbox_core::Slot) and exposes whole-value
//! `load`/`save` plus atomic update helpers. Updates are read-modify-write
//! sequences run under an in-process mutex and the slot's cross-process lock,
//! so concurrent submitters and replay passes never lose each other's writes.
//! A slot that cannot be read fails the update instead of being overwritten.

mod metrics;
mod queue;

pub use metrics::MetricsStore;
pub use queue::QueueStore;
