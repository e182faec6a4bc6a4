// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TCP reachability probe feeding the [`Connectivity`] oracle.

use std::fmt;
use std::time::Duration;

use reqwest::Url;
use tokio::net::TcpStream;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::Connectivity;
use crate::error::{Error, Result};

/// Host and port the probe connects to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    host: String,
    port: u16,
}

impl ProbeTarget {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        ProbeTarget {
            host: host.into(),
            port,
        }
    }

    /// Derives the target from the submission endpoint URL.
    pub fn from_endpoint(endpoint: &str) -> Result<Self> {
        let url = Url::parse(endpoint)
            .map_err(|e| Error::Config(format!("invalid endpoint '{}': {}", endpoint, e)))?;
        let host = url
            .host_str()
            .ok_or_else(|| Error::Config(format!("endpoint '{}' has no host", endpoint)))?;
        let port = url
            .port_or_known_default()
            .ok_or_else(|| Error::Config(format!("endpoint '{}' has no port", endpoint)))?;
        // IPv6 hosts come back bracketed.
        let host = host.trim_start_matches('[').trim_end_matches(']');
        Ok(ProbeTarget::new(host, port))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for ProbeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Returns true if a TCP connection to `target` opens within `timeout`.
pub async fn check(target: &ProbeTarget, timeout: Duration) -> bool {
    let connect = TcpStream::connect((target.host.as_str(), target.port));
    match tokio::time::timeout(timeout, connect).await {
        Ok(Ok(_)) => true,
        Ok(Err(e)) => {
            tracing::debug!(%target, error = %e, "probe failed");
            false
        }
        Err(_) => {
            tracing::debug!(%target, ?timeout, "probe timed out");
            false
        }
    }
}

/// Probes once and records the result on `connectivity`.
pub async fn refresh(connectivity: &Connectivity, target: &ProbeTarget, timeout: Duration) -> bool {
    let online = check(target, timeout).await;
    connectivity.set_online(online);
    online
}

/// Probes `target` every `interval` until `cancel` fires.
pub fn spawn(
    connectivity: Connectivity,
    target: ProbeTarget,
    interval: Duration,
    timeout: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!(%target, "probe stopped");
                    return;
                }
                _ = ticker.tick() => {
                    refresh(&connectivity, &target, timeout).await;
                }
            }
        }
    })
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
