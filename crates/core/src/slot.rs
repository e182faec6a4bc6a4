// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyed string-value slots for whole-value persistence.
//!
//! A slot holds one serialized blob. Writes replace the whole value: file
//! slots write a temp file, fsync it and rename it over the old value, so a
//! crash leaves either the old or the new blob, never a torn one.
//!
//! [`Slot::lock`] hands out an exclusive guard that callers hold across a
//! read-modify-write. File slots back it with an advisory lock on a sibling
//! `.lock` file so separate processes sharing a state directory serialize too.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::Result;

/// A keyed cell holding one serialized value.
pub trait Slot: Send + Sync {
    /// Name of this slot (e.g. `contactQueue`).
    fn key(&self) -> &str;

    /// Reads the stored blob, or `None` if nothing was ever written.
    fn read(&self) -> Result<Option<String>>;

    /// Replaces the stored blob.
    fn write(&self, value: &str) -> Result<()>;

    /// Acquires the cross-process guard for a read-modify-write.
    fn lock(&self) -> Result<SlotLock>;
}

/// Guard returned by [`Slot::lock`]; the lock is released on drop.
#[derive(Debug)]
pub struct SlotLock {
    _file: Option<File>,
}

impl SlotLock {
    /// A guard that holds nothing, for slots without cross-process sharing.
    pub fn none() -> Self {
        SlotLock { _file: None }
    }
}

/// Slot stored as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSlot {
    key: String,
    path: PathBuf,
    lock_path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: &Path, key: &str) -> Self {
        FileSlot {
            key: key.to_string(),
            path: dir.join(format!("{key}.json")),
            lock_path: dir.join(format!("{key}.lock")),
        }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl Slot for FileSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, value: &str) -> Result<()> {
        self.ensure_parent()?;
        let temp_path = self.path.with_extension("json.tmp");

        let mut file = File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    fn lock(&self) -> Result<SlotLock> {
        use fs2::FileExt;

        self.ensure_parent()?;
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.lock_path)?;
        file.lock_exclusive()?;
        Ok(SlotLock { _file: Some(file) })
    }
}

/// In-process slot, used for tests and for embedding without a state directory.
#[derive(Debug, Default)]
pub struct MemorySlot {
    key: String,
    value: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new(key: &str) -> Self {
        MemorySlot {
            key: key.to_string(),
            value: Mutex::new(None),
        }
    }

    /// Creates a slot that already holds `value`.
    pub fn with_value(key: &str, value: &str) -> Self {
        MemorySlot {
            key: key.to_string(),
            value: Mutex::new(Some(value.to_string())),
        }
    }
}

impl Slot for MemorySlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>> {
        Ok(self
            .value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn write(&self, value: &str) -> Result<()> {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(value.to_string());
        Ok(())
    }

    fn lock(&self) -> Result<SlotLock> {
        Ok(SlotLock::none())
    }
}

#[cfg(test)]
#[path = "slot_tests.rs"]
mod tests;
