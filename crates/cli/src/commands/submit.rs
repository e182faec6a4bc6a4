// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use postbox_core::{IdempotencyKey, SubmissionPayload};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::connectivity::Connectivity;
use crate::delivery::Delivered;
use crate::error::{Error, Result};

use super::{print_json, Context};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeliveredJson<'a> {
    idempotency_key: &'a IdempotencyKey,
    attempts: u32,
    latency_ms: u128,
    status: u16,
    body: &'a serde_json::Value,
}

/// Parses a caller-supplied key, or generates one for a new logical submission.
pub(crate) fn resolve_key(key: Option<&str>) -> Result<IdempotencyKey> {
    match key {
        Some(key) => IdempotencyKey::parse(key).map_err(|e| Error::InvalidInput(e.to_string())),
        None => Ok(IdempotencyKey::generate()),
    }
}

pub async fn run(
    ctx: &Context,
    payload: SubmissionPayload,
    key: Option<String>,
    offline: bool,
    format: OutputFormat,
) -> Result<()> {
    let key = resolve_key(key.as_deref())?;
    let connectivity = if offline {
        Connectivity::new(false)
    } else {
        ctx.probe().await?
    };
    let outbox = ctx.outbox(connectivity)?;

    let delivered = outbox.submit(payload, key.clone()).await?;
    print_delivered(&key, &delivered, format)
}

fn print_delivered(key: &IdempotencyKey, delivered: &Delivered, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", format_delivered(key, delivered));
            Ok(())
        }
        OutputFormat::Json => print_json(&DeliveredJson {
            idempotency_key: key,
            attempts: delivered.attempts,
            latency_ms: delivered.latency.as_millis(),
            status: delivered.receipt.status,
            body: &delivered.receipt.body,
        }),
    }
}

pub(crate) fn format_delivered(key: &IdempotencyKey, delivered: &Delivered) -> String {
    let attempts = match delivered.attempts {
        1 => "1 attempt".to_string(),
        n => format!("{} attempts", n),
    };
    let mut line = format!(
        "delivered in {} ms ({})\n  key: {}",
        delivered.latency.as_millis(),
        attempts,
        key
    );
    if let Some(id) = delivered.receipt.server_id() {
        line.push_str(&format!("\n  id:  {}", id));
    }
    line
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod tests;
