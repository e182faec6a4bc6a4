// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Delivery through the `postbox` binary against a local HTTP endpoint.

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

use std::path::PathBuf;

use serde_json::json;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn endpoint(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .and(header_exists("X-Idempotency-Key"))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(json!({"id": "srv-1", "status": "received"})),
        )
        .mount(&server)
        .await;
    server
}

fn url(server: &MockServer) -> String {
    format!("{}/api/contact", server.uri())
}

/// Runs a blocking command without stalling the mock server.
async fn run(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

fn submit(state_dir: &std::path::Path, endpoint: &str, name: &str) -> assert_cmd::Command {
    let mut cmd = postbox_at(state_dir, endpoint);
    submit_args(&mut cmd, name);
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn online_submit_is_delivered_and_counted() {
    let server = endpoint(202).await;
    let temp = TempDir::new().unwrap();
    let dir: PathBuf = temp.path().to_path_buf();

    let output = run(submit(&dir, &url(&server), "Ada")).await;
    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("delivered in"));
    assert!(stdout.contains("id:  srv-1"));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let header = requests[0].headers.get("X-Idempotency-Key").unwrap();
    assert_eq!(body["idempotencyKey"].as_str().unwrap(), header.to_str().unwrap());

    let snapshot = json_output(&dir, &["stats"]);
    assert_eq!(snapshot["success"], 1);
    assert_eq!(snapshot["queuedItems"], 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn sync_replays_offline_submission_with_its_key() {
    let server = endpoint(202).await;
    let temp = TempDir::new().unwrap();
    let dir: PathBuf = temp.path().to_path_buf();

    let mut offline = submit(&dir, &url(&server), "Ada");
    offline.arg("--offline").arg("--key").arg("logical-7");
    let output = run(offline).await;
    assert!(!output.status.success());
    assert!(server.received_requests().await.unwrap().is_empty());

    let mut sync = postbox_at(&dir, &url(&server));
    sync.arg("sync").arg("-o").arg("json");
    let output = run(sync).await;
    assert!(output.status.success(), "{:?}", output);
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["delivered"], 1);
    assert_eq!(report["remaining"], 0);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].headers.get("X-Idempotency-Key").unwrap().to_str().unwrap(),
        "logical-7"
    );

    let snapshot = json_output(&dir, &["stats"]);
    assert_eq!(snapshot["success"], 1);
    assert_eq!(snapshot["avgLatency"], 0.0);
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_submit_is_queued_after_retries() {
    let server = endpoint(500).await;
    let temp = TempDir::new().unwrap();
    let dir: PathBuf = temp.path().to_path_buf();

    std::fs::write(dir.join("config.toml"), "[retry]\nbackoff_step_ms = 10\n").unwrap();

    let mut cmd = submit(&dir, &url(&server), "Ada");
    cmd.arg("--key").arg("logical-9");
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("delivery failed after 3 attempts"));
    assert_eq!(server.received_requests().await.unwrap().len(), 3);

    let entries = json_output(&dir, &["queue"]);
    assert_eq!(entries.as_array().unwrap().len(), 1);
    assert_eq!(entries[0]["idempotencyKey"], "logical-9");

    let snapshot = json_output(&dir, &["stats"]);
    assert_eq!(snapshot["failures"], 1);
    assert_eq!(snapshot["success"], 0);
}
