// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::delivery::{SubmitError, TransportError};

/// All possible errors that can occur in the postbox library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("cannot locate a state directory\n  hint: pass --state-dir or set POSTBOX_STATE_DIR")]
    NoStateDir,

    #[error("storage error: {0}")]
    Store(#[from] postbox_core::Error),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidInput(String),
}

/// A specialized Result type for postbox operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
