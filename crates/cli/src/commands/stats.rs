// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use postbox_core::MetricsSnapshot;

use crate::cli::OutputFormat;
use crate::connectivity::Connectivity;
use crate::error::Result;

use super::{print_json, Context};

pub fn run(ctx: &Context, format: OutputFormat) -> Result<()> {
    let outbox = ctx.outbox(Connectivity::new(false))?;
    let snapshot = outbox.metrics_snapshot();
    match format {
        OutputFormat::Text => {
            println!("{}", format_snapshot(&snapshot));
            Ok(())
        }
        OutputFormat::Json => print_json(&snapshot),
    }
}

pub(crate) fn format_snapshot(snapshot: &MetricsSnapshot) -> String {
    format!(
        "Delivered:    {}\nFailed:       {}\nAvg latency:  {:.0} ms\nQueued:       {}",
        snapshot.success, snapshot.failures, snapshot.avg_latency_ms, snapshot.queued_items
    )
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
