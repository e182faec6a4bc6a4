// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::SecondsFormat;
use postbox_core::QueuedEntry;

use crate::cli::OutputFormat;
use crate::connectivity::Connectivity;
use crate::error::Result;

use super::{print_json, Context};

pub fn run(ctx: &Context, format: OutputFormat) -> Result<()> {
    let outbox = ctx.outbox(Connectivity::new(false))?;
    let entries = outbox.list_queued();
    match format {
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("No queued submissions.");
            }
            for entry in &entries {
                println!("{}", format_entry(entry));
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&entries),
    }
}

pub(crate) fn format_entry(entry: &QueuedEntry) -> String {
    format!(
        "{}  {}  {} <{}>  {}",
        entry.id,
        entry.enqueued_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        entry.payload.name,
        entry.payload.email,
        entry.payload.subject
    )
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
