// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers.

use std::sync::atomic::{AtomicBool, Ordering};

use postbox_core::{MemorySlot, Result, Slot, SlotLock, SubmissionPayload};

/// Create a payload whose fields are derived from `name`.
pub fn payload(name: &str) -> SubmissionPayload {
    SubmissionPayload::new(
        name,
        format!("{}@example.com", name.to_lowercase()),
        format!("Hello from {}", name),
        "Testing the contact pipeline.",
    )
}

/// In-memory slot whose reads or writes can be switched to fail with an I/O error.
pub struct FaultySlot {
    inner: MemorySlot,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FaultySlot {
    pub fn new(key: &str) -> Self {
        FaultySlot {
            inner: MemorySlot::new(key),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl Slot for FaultySlot {
    fn key(&self) -> &str {
        self.inner.key()
    }

    fn read(&self) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(std::io::Error::other("simulated read failure").into());
        }
        self.inner.read()
    }

    fn write(&self, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(std::io::Error::other("simulated write failure").into());
        }
        self.inner.write(value)
    }

    fn lock(&self) -> Result<SlotLock> {
        self.inner.lock()
    }
}
