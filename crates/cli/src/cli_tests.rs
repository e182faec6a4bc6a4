// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use std::path::PathBuf;

use clap::CommandFactory;
use yare::parameterized;

use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_submit_parses_all_fields() {
    let cli = parse(&[
        "postbox", "submit", "--name", "Ada", "--email", "ada@example.com", "--subject", "Hi",
        "--message", "Hello", "--key", "k-1", "--offline", "-o", "json",
    ])
    .unwrap();
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
            assert_eq!(name, "Ada");
            assert_eq!(email, "ada@example.com");
            assert_eq!(subject, "Hi");
            assert_eq!(message, "Hello");
            assert_eq!(key.as_deref(), Some("k-1"));
            assert!(offline);
            assert_eq!(output, OutputFormat::Json);
        }
        other => panic!("expected Submit, got {other:?}"),
    }
}

#[test]
fn test_submit_requires_message() {
    let result = parse(&[
        "postbox", "submit", "--name", "Ada", "--email", "a@b.c", "--subject", "Hi",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_submit_defaults() {
    let cli = parse(&[
        "postbox", "submit", "--name", "A", "--email", "a@b.c", "--subject", "S", "--message", "M",
    ])
    .unwrap();
    match cli.command {
        Command::Submit {
            key,
            offline,
            output,
            ..
        } => {
            assert!(key.is_none());
            assert!(!offline);
            assert_eq!(output, OutputFormat::Text);
        }
        other => panic!("expected Submit, got {other:?}"),
    }
}

#[parameterized(
    queue = { "queue" },
    sync = { "sync" },
    stats = { "stats" },
)]
fn test_output_flag_accepts_json(command: &str) {
    let cli = parse(&["postbox", command, "--output", "json"]).unwrap();
    let output = match cli.command {
        Command::Queue { output } | Command::Sync { output } | Command::Stats { output } => output,
        other => panic!("unexpected command {other:?}"),
    };
    assert_eq!(output, OutputFormat::Json);
}

#[test]
fn test_unknown_output_format_is_rejected() {
    assert!(parse(&["postbox", "queue", "-o", "ids"]).is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse(&["postbox", "stats", "--state-dir", "/tmp/pb", "-v"]).unwrap();
    assert_eq!(cli.state_dir, Some(PathBuf::from("/tmp/pb")));
    assert!(cli.verbose);
}

#[test]
fn test_watch_takes_no_arguments() {
    let cli = parse(&["postbox", "watch"]).unwrap();
    assert!(matches!(cli.command, Command::Watch));
    assert!(parse(&["postbox", "watch", "extra"]).is_err());
}
