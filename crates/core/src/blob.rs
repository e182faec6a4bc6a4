// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON encoding of whole values stored in a [`Slot`].
//!
//! Plain loads never fail: a missing blob is the default value, and an
//! unreadable or corrupt one is logged and treated as the default too.
//! Loads that feed a write-back use [`load_for_update`], which still reads a
//! corrupt blob as the default but propagates read errors, so an I/O hiccup
//! never overwrites good data with an empty value.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};
use crate::slot::Slot;

/// Decodes a stored blob, attributing failures to the slot.
pub fn decode<T: DeserializeOwned>(slot_key: &str, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| Error::CorruptedData {
        slot: slot_key.to_string(),
        reason: e.to_string(),
    })
}

/// Loads the value in `slot`, or `T::default()` if it is missing or corrupt.
pub fn load_or_default<T: DeserializeOwned + Default>(slot: &dyn Slot) -> T {
    let text = match slot.read() {
        Ok(Some(text)) => text,
        Ok(None) => return T::default(),
        Err(e) => {
            tracing::warn!(slot = slot.key(), "failed to read slot, using default: {}", e);
            return T::default();
        }
    };

    match decode(slot.key(), &text) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(slot = slot.key(), "{}; using default", e);
            T::default()
        }
    }
}

/// Loads the value in `slot` ahead of a write-back.
///
/// A missing or corrupt blob is `T::default()`; a failed read is an error.
pub fn load_for_update<T: DeserializeOwned + Default>(slot: &dyn Slot) -> Result<T> {
    let Some(text) = slot.read()? else {
        return Ok(T::default());
    };

    match decode(slot.key(), &text) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(slot = slot.key(), "{}; replacing with default", e);
            Ok(T::default())
        }
    }
}

/// Serializes `value` and replaces the blob in `slot`.
pub fn store<T: Serialize>(slot: &dyn Slot, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    slot.write(&json)
}

#[cfg(test)]
#[path = "blob_tests.rs"]
mod tests;
