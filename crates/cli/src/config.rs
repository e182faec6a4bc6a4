// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration management.
//!
//! Configuration is stored in `<state_dir>/config.toml` and includes:
//! - `endpoint`: URL submissions are POSTed to
//! - `[retry]`: attempt budget and linear backoff step for `submit`
//! - `[sync]`: periodic replay interval while online
//! - `[probe]`: reachability check cadence used to derive online/offline
//!
//! Every key is optional; a missing file means all defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::delivery::RetryPolicy;
use crate::env;
use crate::error::{Error, Result};

const STATE_DIR_NAME: &str = "postbox";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Slot key for the deferred-submission queue.
pub const QUEUE_SLOT: &str = "contactQueue";
/// Slot key for the delivery counters.
pub const METRICS_SLOT: &str = "contactMetrics";

/// Configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// URL that receives `POST` submissions.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Per-request timeout enforced by the HTTP transport, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
}

/// Retry settings for a single logical submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts including the first (default: 3).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Backoff unit in milliseconds; the wait before attempt n+1 is n × step (default: 1000).
    #[serde(default = "default_backoff_step_ms")]
    pub backoff_step_ms: u64,
}

/// Settings for background replay of the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Seconds between replay passes while online; 0 disables the timer (default: 30).
    #[serde(default = "default_sync_interval_secs")]
    pub interval_secs: u64,
}

/// Settings for the reachability probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Seconds between checks in `watch` (default: 5).
    #[serde(default = "default_probe_interval_secs")]
    pub interval_secs: u64,
    /// Connect timeout for one check in milliseconds (default: 2000).
    #[serde(default = "default_probe_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_endpoint() -> String {
    "http://localhost:8080/api/contact".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_step_ms() -> u64 {
    1000
}

fn default_sync_interval_secs() -> u64 {
    30
}

fn default_probe_interval_secs() -> u64 {
    5
}

fn default_probe_timeout_ms() -> u64 {
    2000
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: default_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
            retry: RetryConfig::default(),
            sync: SyncConfig::default(),
            probe: ProbeConfig::default(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            max_attempts: default_max_attempts(),
            backoff_step_ms: default_backoff_step_ms(),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            interval_secs: default_sync_interval_secs(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            interval_secs: default_probe_interval_secs(),
            timeout_ms: default_probe_timeout_ms(),
        }
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            backoff_step: Duration::from_millis(self.backoff_step_ms),
        }
    }
}

impl SyncConfig {
    /// The replay timer period, or `None` when disabled.
    pub fn interval(&self) -> Option<Duration> {
        (self.interval_secs > 0).then(|| Duration::from_secs(self.interval_secs))
    }
}

impl ProbeConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Config {
    /// Loads configuration from the given state directory.
    ///
    /// A missing `config.toml` yields the defaults.
    pub fn load(state_dir: &Path) -> Result<Self> {
        let config_path = state_dir.join(CONFIG_FILE_NAME);
        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `POSTBOX_ENDPOINT` on top of the file settings.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(endpoint) = env::endpoint() {
            self.endpoint = endpoint;
            self.validate()?;
        }
        Ok(self)
    }

    /// Checks that the settings describe a usable pipeline.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.endpoint)
            .map_err(|e| Error::Config(format!("invalid endpoint '{}': {}", self.endpoint, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "invalid endpoint '{}': must be http:// or https://",
                self.endpoint
            )));
        }
        if self.retry.max_attempts == 0 {
            return Err(Error::Config(
                "retry.max_attempts must be at least 1".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Resolves the state directory.
///
/// Resolution order:
/// 1. Explicit `--state-dir`
/// 2. `POSTBOX_STATE_DIR`
/// 3. `$XDG_STATE_HOME/postbox`
/// 4. `~/.local/state/postbox`
pub fn resolve_state_dir(flag: Option<&Path>) -> Result<PathBuf> {
    pick_state_dir(
        flag,
        env::state_dir(),
        env::xdg_state_home(),
        dirs::home_dir(),
    )
}

fn pick_state_dir(
    flag: Option<&Path>,
    state_dir: Option<PathBuf>,
    xdg_state_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = state_dir {
        return Ok(dir);
    }
    if let Some(dir) = xdg_state_home {
        return Ok(dir.join(STATE_DIR_NAME));
    }
    home.map(|h| h.join(".local/state").join(STATE_DIR_NAME))
        .ok_or(Error::NoStateDir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
