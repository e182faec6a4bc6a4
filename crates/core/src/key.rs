// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Idempotency keys for logical submissions.
//!
//! A key is minted once per logical submission and travels with every retry
//! and every replay of it, so a receiving server can collapse duplicates into
//! a single effect.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Token identifying one logical submission across all of its attempts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    /// Mints a fresh random key (UUID v4).
    pub fn generate() -> Self {
        IdempotencyKey(uuid::Uuid::new_v4().to_string())
    }

    /// Accepts a caller-supplied key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] for empty text or text with leading or
    /// trailing whitespace.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() || s.trim() != s {
            return Err(Error::InvalidKey(s.to_string()));
        }
        Ok(IdempotencyKey(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdempotencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for IdempotencyKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        IdempotencyKey::parse(s)
    }
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
