// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::OutputFormat;
use crate::delivery::SyncReport;
use crate::error::Result;

use super::{print_json, Context};

pub async fn run(ctx: &Context, format: OutputFormat) -> Result<()> {
    let connectivity = ctx.probe().await?;
    let online = connectivity.is_online();
    let outbox = ctx.outbox(connectivity)?;
    let report = outbox.sync_now().await;

    match format {
        OutputFormat::Text => {
            println!("{}", format_report(&report, online));
            Ok(())
        }
        OutputFormat::Json => print_json(&report),
    }
}

pub(crate) fn format_report(report: &SyncReport, online: bool) -> String {
    if !online {
        return format!(
            "Endpoint unreachable; {} submission(s) remain queued.",
            report.remaining
        );
    }
    if report.attempted == 0 && report.remaining == 0 {
        return "Nothing to sync.".to_string();
    }
    format!(
        "Delivered {} of {} queued submission(s); {} remaining.",
        report.delivered, report.attempted, report.remaining
    )
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
