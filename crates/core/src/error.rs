// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for postbox-core operations.

use thiserror::Error;

/// All possible errors that can occur in postbox-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid idempotency key: '{0}'\n  hint: keys must be non-empty text without surrounding whitespace")]
    InvalidKey(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data in slot '{slot}': {reason}")]
    CorruptedData { slot: String, reason: String },
}

/// A specialized Result type for postbox-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
