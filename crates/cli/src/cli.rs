// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const QUICKSTART_HELP: &str = "\
Get started:
  postbox submit --name Ada --email ada@example.com \\
      --subject Hello --message \"Hi there\"    Deliver a submission
  postbox queue                               Show deferred submissions
  postbox sync                                Replay deferred submissions
  postbox stats                               Show delivery counters
  postbox watch                               Replay automatically on reconnect";

#[derive(Parser)]
#[command(name = "postbox", version)]
#[command(about = "Deliver contact-form submissions, deferring them while offline")]
#[command(
    long_about = "Deliver contact-form submissions to an HTTP endpoint.\n\n\
    Failed or offline submissions are queued on disk and replayed later under the \
    same idempotency key, so the receiver can drop duplicates."
)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// State directory holding the queue, counters and config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub state_dir: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Deliver a submission, queueing it if delivery fails
    #[command(after_help = "Examples:\n  \
        postbox submit --name Ada --email ada@example.com --subject Hi --message Hello\n  \
        postbox submit ... --key 6f1c...        Replay a logical submission under its key\n  \
        postbox submit ... --offline            Queue without attempting delivery")]
    Submit {
        /// Sender name
        #[arg(long)]
        name: String,

        /// Sender email address
        #[arg(long)]
        email: String,

        /// Message subject
        #[arg(long)]
        subject: String,

        /// Message body
        #[arg(long)]
        message: String,

        /// Idempotency key (default: freshly generated)
        #[arg(long)]
        key: Option<String>,

        /// Treat the endpoint as unreachable and queue immediately
        #[arg(long)]
        offline: bool,

        /// Output format (text, json)
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List deferred submissions, oldest first
    Queue {
        /// Output format (text, json)
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Replay deferred submissions once
    Sync {
        /// Output format (text, json)
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show delivery counters and queue length
    Stats {
        /// Output format (text, json)
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Probe the endpoint and replay the queue on reconnect until Ctrl-C
    Watch,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
