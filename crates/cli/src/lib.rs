// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! postbox - resilient delivery of contact-form submissions.
//!
//! This crate provides the delivery pipeline behind the `postbox` CLI: a
//! submission is attempted a bounded number of times with linear backoff and,
//! when it cannot be delivered, is queued on disk and replayed later under the
//! same idempotency key.
//!
//! # Main Components
//!
//! - [`Outbox`] - Facade owning the stores, engine, synchronizer and telemetry
//! - [`SubmissionEngine`] - Retry loop with deferral on exhaustion or offline
//! - [`QueueSynchronizer`] - Replays the queue on reconnect, on a timer or on demand
//! - [`Connectivity`] - Online/offline oracle fed by a TCP probe
//! - [`Config`] - `config.toml` settings for endpoint, retry, sync and probe
//! - [`Error`] - Error types for all operations
//!
//! # Embedding
//!
//! ```rust,ignore
//! use postbox::{Config, Connectivity, Outbox};
//! use postbox_core::{IdempotencyKey, SubmissionPayload};
//!
//! let config = Config::load(&state_dir)?;
//! let outbox = Outbox::open(&config, &state_dir, Connectivity::new(true))?;
//! let key = IdempotencyKey::generate();
//! match outbox.submit(payload, key).await {
//!     Ok(delivered) => println!("accepted after {} attempt(s)", delivered.attempts),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

mod cli;
mod commands;
mod env;

pub mod config;
pub mod connectivity;
pub mod delivery;
pub mod error;
pub mod logging;
pub mod store;

#[cfg(test)]
mod test_helpers;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use connectivity::{Connectivity, Transition};
pub use delivery::{
    Delivered, HttpTransport, Outbox, QueueSynchronizer, RetryPolicy, SubmissionEngine,
    SubmitError, SyncReport, TelemetryReader, Transport, TransportError,
};
pub use error::{Error, Result};

use postbox_core::SubmissionPayload;

use commands::Context;

/// Execute a CLI invocation. This is the main entry point for the binary
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Io(std::io::Error::other(format!("tokio: {}", e))))?;
    runtime.block_on(run_async(cli))
}

async fn run_async(cli: Cli) -> Result<()> {
    let ctx = Context::load(cli.state_dir.as_deref())?;
    match cli.command {
        Command::Submit {
            name,
            email,
            subject,
            message,
            key,
            offline,
            output,
        } => {
            let payload = SubmissionPayload::new(name, email, subject, message);
            commands::submit::run(&ctx, payload, key, offline, output).await
        }
        Command::Queue { output } => commands::queue::run(&ctx, output),
        Command::Sync { output } => commands::sync::run(&ctx, output).await,
        Command::Stats { output } => commands::stats::run(&ctx, output),
        Command::Watch => commands::watch::run(&ctx).await,
    }
}
