// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The caller-defined record carried by a submission.

use serde::{Deserialize, Serialize};

/// A contact-form submission.
///
/// The pipeline never inspects these fields; it only transports and persists
/// them. Validation belongs to whatever collects the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl SubmissionPayload {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        SubmissionPayload {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
