// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tokio_util::sync::CancellationToken;

use crate::connectivity::probe::{self, ProbeTarget};
use crate::connectivity::{Connectivity, Transition};
use crate::error::Result;

use super::Context;

/// Runs the probe and auto-sync tasks until Ctrl-C.
pub async fn run(ctx: &Context) -> Result<()> {
    let target = ProbeTarget::from_endpoint(&ctx.config.endpoint)?;
    let connectivity = Connectivity::new(false);
    let outbox = ctx.outbox(connectivity.clone())?;
    let mut transitions = connectivity.subscribe();
    let cancel = CancellationToken::new();

    let sync_task = outbox.spawn_auto_sync(ctx.config.sync.interval(), cancel.clone());
    let probe_task = probe::spawn(
        connectivity.clone(),
        target.clone(),
        ctx.config.probe.interval(),
        ctx.config.probe.timeout(),
        cancel.clone(),
    );

    println!(
        "Watching {} ({} queued). Press Ctrl-C to stop.",
        target,
        outbox.list_queued().len()
    );

    let outcome = loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => break signal,
            transition = transitions.next() => match transition {
                Some(Transition::BecameOnline) => println!("online: replaying queue"),
                Some(Transition::BecameOffline) => println!("offline: new submissions will be queued"),
                None => break Ok(()),
            },
        }
    };

    cancel.cancel();
    for task in [sync_task, probe_task] {
        if let Err(e) = task.await {
            tracing::warn!(error = %e, "background task ended abnormally");
        }
    }
    outcome?;
    Ok(())
}
