// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wire types for delivering a submission to the receiving endpoint.
//!
//! A request is the payload's fields with `idempotencyKey` added. The same key
//! is also sent out-of-band in the [`IDEMPOTENCY_HEADER`] header so that the
//! receiver can dedupe without parsing the body.

use serde::{Deserialize, Serialize};

use crate::key::IdempotencyKey;
use crate::payload::SubmissionPayload;

/// Header carrying the idempotency key on every attempt.
pub const IDEMPOTENCY_HEADER: &str = "X-Idempotency-Key";

/// Request body for one delivery attempt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest<'a> {
    #[serde(flatten)]
    pub payload: &'a SubmissionPayload,
    pub idempotency_key: &'a IdempotencyKey,
}

impl<'a> SubmissionRequest<'a> {
    pub fn new(payload: &'a SubmissionPayload, idempotency_key: &'a IdempotencyKey) -> Self {
        SubmissionRequest {
            payload,
            idempotency_key,
        }
    }
}

/// Accepted response from the receiving endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// HTTP status code (2xx/3xx).
    pub status: u16,
    /// Response body; raw text is kept as a JSON string when it isn't JSON.
    pub body: serde_json::Value,
}

impl Receipt {
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Receipt { status, body }
    }

    /// Decodes a response body, falling back to the raw text.
    pub fn from_body(status: u16, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(text)
                .unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
        };
        Receipt { status, body }
    }

    /// Server-assigned id of the accepted submission, when the body has one.
    pub fn server_id(&self) -> Option<&str> {
        self.body.get("id").and_then(serde_json::Value::as_str)
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
