// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

#[test]
fn test_load_missing_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load(temp.path()).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.retry.max_attempts, 3);
    assert_eq!(config.retry.backoff_step_ms, 1000);
    assert_eq!(config.sync.interval(), Some(Duration::from_secs(30)));
}

#[test]
fn test_written_file_loads_back() {
    let temp = TempDir::new().unwrap();
    let mut config = Config::default();
    config.endpoint = "https://forms.example.com/api/contact".to_string();
    config.retry.max_attempts = 5;
    config.sync.interval_secs = 0;

    fs::write(
        temp.path().join("config.toml"),
        toml::to_string_pretty(&config).unwrap(),
    )
    .unwrap();
    let loaded = Config::load(temp.path()).unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.sync.interval(), None);
}

#[test]
fn test_partial_file_fills_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "endpoint = \"http://127.0.0.1:9000/submit\"\n\n[retry]\nbackoff_step_ms = 250\n",
    )
    .unwrap();

    let config = Config::load(temp.path()).unwrap();
    assert_eq!(config.endpoint, "http://127.0.0.1:9000/submit");
    assert_eq!(config.retry.max_attempts, 3);
    assert_eq!(config.retry.backoff_step_ms, 250);
    assert_eq!(config.probe, ProbeConfig::default());
}

#[test]
fn test_malformed_file_is_config_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "endpoint = [unclosed").unwrap();

    let err = Config::load(temp.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("failed to parse config"));
}

#[parameterized(
    not_a_url = { "localhost contact" },
    wrong_scheme = { "ftp://example.com/contact" },
)]
fn test_invalid_endpoint_rejected(endpoint: &str) {
    let config = Config {
        endpoint: endpoint.to_string(),
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(Error::Config(_))));
}

#[test]
fn test_zero_attempts_rejected() {
    let mut config = Config::default();
    config.retry.max_attempts = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("max_attempts"));
}

#[test]
fn test_zero_request_timeout_rejected() {
    let config = Config {
        request_timeout_secs: 0,
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("request_timeout_secs"));
}

#[test]
fn test_zero_request_timeout_in_file_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "request_timeout_secs = 0\n").unwrap();

    let err = Config::load(temp.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_retry_policy_from_config() {
    let config = RetryConfig {
        max_attempts: 4,
        backoff_step_ms: 500,
    };
    let policy = config.policy();
    assert_eq!(policy.max_attempts, 4);
    assert_eq!(policy.backoff_step, Duration::from_millis(500));
}

#[test]
fn test_probe_interval_never_zero() {
    let probe = ProbeConfig {
        interval_secs: 0,
        timeout_ms: 100,
    };
    assert_eq!(probe.interval(), Duration::from_secs(1));
    assert_eq!(probe.timeout(), Duration::from_millis(100));
}

#[test]
fn test_state_dir_flag_wins() {
    let dir = pick_state_dir(
        Some(Path::new("/explicit")),
        Some(PathBuf::from("/from-env")),
        Some(PathBuf::from("/xdg")),
        Some(PathBuf::from("/home/u")),
    )
    .unwrap();
    assert_eq!(dir, PathBuf::from("/explicit"));
}

#[test]
fn test_state_dir_env_before_xdg() {
    let dir = pick_state_dir(
        None,
        Some(PathBuf::from("/from-env")),
        Some(PathBuf::from("/xdg")),
        None,
    )
    .unwrap();
    assert_eq!(dir, PathBuf::from("/from-env"));
}

#[test]
fn test_state_dir_xdg_gets_app_subdir() {
    let dir = pick_state_dir(None, None, Some(PathBuf::from("/xdg")), None).unwrap();
    assert_eq!(dir, PathBuf::from("/xdg/postbox"));
}

#[test]
fn test_state_dir_home_fallback() {
    let dir = pick_state_dir(None, None, None, Some(PathBuf::from("/home/u"))).unwrap();
    assert_eq!(dir, PathBuf::from("/home/u/.local/state/postbox"));
}

#[test]
fn test_state_dir_none_available() {
    let err = pick_state_dir(None, None, None, None).unwrap_err();
    assert!(matches!(err, Error::NoStateDir));
}
