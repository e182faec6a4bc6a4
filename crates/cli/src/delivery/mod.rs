// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Delivery of submissions to the receiving endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ SubmissionEngine │────►│  Transport  │────►│  Endpoint   │
//! │ QueueSynchronizer│◄────│   (trait)   │◄────│   (HTTP)    │
//! └──────────────────┘     └─────────────┘     └─────────────┘
//!        │    ▲
//!        ▼    │
//! ┌──────────────────┐     ┌─────────────────┐
//! │    QueueStore    │     │  MetricsStore   │◄── TelemetryReader
//! └──────────────────┘     └─────────────────┘
//! ```
//!
//! # Features
//!
//! - Bounded retry with linear backoff per submission
//! - Durable deferral when offline or when attempts run out
//! - Replay on reconnect, on a timer, or on demand
//! - Idempotency key reused for every attempt and replay
//! - Injectable transport trait for testing

mod engine;
mod outbox;
mod synchronizer;
mod telemetry;
mod transport;

pub use engine::{Delivered, RetryPolicy, SubmissionEngine, SubmitError};
pub use outbox::Outbox;
pub use synchronizer::{QueueSynchronizer, SyncReport};
pub use telemetry::TelemetryReader;
pub use transport::{HttpTransport, Transport, TransportError, TransportResult};

#[cfg(test)]
mod test_helpers;
