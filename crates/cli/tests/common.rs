// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `postbox` isolated to `state_dir`, with ambient configuration cleared.
pub fn postbox(state_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("postbox");
    cmd.env_remove("POSTBOX_STATE_DIR")
        .env_remove("POSTBOX_ENDPOINT")
        .env_remove("RUST_LOG")
        .arg("--state-dir")
        .arg(state_dir);
    cmd
}

/// Same as [`postbox`], delivering to `endpoint`.
pub fn postbox_at(state_dir: &Path, endpoint: &str) -> Command {
    let mut cmd = postbox(state_dir);
    cmd.env("POSTBOX_ENDPOINT", endpoint);
    cmd
}

/// Appends the submit arguments for a payload derived from `name`.
pub fn submit_args(cmd: &mut Command, name: &str) {
    cmd.arg("submit")
        .arg("--name")
        .arg(name)
        .arg("--email")
        .arg(format!("{}@example.com", name.to_lowercase()))
        .arg("--subject")
        .arg(format!("Hello from {}", name))
        .arg("--message")
        .arg("Testing the contact pipeline.");
}

/// Queues a submission without attempting delivery.
pub fn queue_offline(state_dir: &Path, name: &str) {
    let mut cmd = postbox(state_dir);
    submit_args(&mut cmd, name);
    cmd.arg("--offline").assert().failure();
}

/// Runs `args` with `-o json` and parses stdout.
pub fn json_output(state_dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = postbox(state_dir)
        .args(args)
        .arg("-o")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}
