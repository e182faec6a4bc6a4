// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for delivering submissions.
//!
//! Provides a trait-based transport layer that enables:
//! - HTTP delivery for production
//! - Scripted transports for unit testing

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use postbox_core::{IdempotencyKey, Receipt, SubmissionPayload, SubmissionRequest, IDEMPOTENCY_HEADER};
use reqwest::Url;

/// Error type for a single delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The endpoint answered with a status of 400 or above.
    #[error("rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// One-shot delivery of a submission.
///
/// Implementations make exactly one attempt per call; retry policy lives in
/// the caller. The key must be sent unchanged so the receiver can dedupe.
pub trait Transport: Send + Sync {
    fn deliver<'a>(
        &'a self,
        payload: &'a SubmissionPayload,
        key: &'a IdempotencyKey,
    ) -> Pin<Box<dyn Future<Output = TransportResult<Receipt>> + Send + 'a>>;
}

/// JSON-over-HTTP transport using reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Creates a transport posting to `endpoint` with a per-request `timeout`.
    pub fn new(endpoint: &str, timeout: Duration) -> TransportResult<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| TransportError::Request(format!("invalid endpoint '{}': {}", endpoint, e)))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Request(format!("failed to create HTTP client: {}", e)))?;
        Ok(HttpTransport { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn deliver<'a>(
        &'a self,
        payload: &'a SubmissionPayload,
        key: &'a IdempotencyKey,
    ) -> Pin<Box<dyn Future<Output = TransportResult<Receipt>> + Send + 'a>> {
        Box::pin(async move {
            let body = SubmissionRequest::new(payload, key);
            let response = self
                .client
                .post(self.endpoint.clone())
                .header(IDEMPOTENCY_HEADER, key.as_str())
                .json(&body)
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;

            let status = response.status().as_u16();
            let text = response
                .text()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;

            if status >= 400 {
                return Err(TransportError::Rejected { status, body: text });
            }
            Ok(Receipt::from_body(status, &text))
        })
    }
}
