// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod queue;
pub mod stats;
pub mod submit;
pub mod sync;
pub mod watch;

use std::path::{Path, PathBuf};

use crate::config::{resolve_state_dir, Config};
use crate::connectivity::probe::{self, ProbeTarget};
use crate::connectivity::Connectivity;
use crate::delivery::Outbox;
use crate::error::Result;

/// Resolved state directory and configuration for one invocation.
pub struct Context {
    pub state_dir: PathBuf,
    pub config: Config,
}

impl Context {
    /// Resolves the state directory and loads its config.
    pub fn load(state_dir_flag: Option<&Path>) -> Result<Self> {
        let state_dir = resolve_state_dir(state_dir_flag)?;
        let config = Config::load(&state_dir)?.with_env_overrides()?;
        tracing::debug!(state_dir = %state_dir.display(), endpoint = %config.endpoint, "loaded config");
        Ok(Context { state_dir, config })
    }

    /// Opens the file-backed outbox with the given connectivity.
    pub fn outbox(&self, connectivity: Connectivity) -> Result<Outbox> {
        Outbox::open(&self.config, &self.state_dir, connectivity)
    }

    /// Probes the endpoint once and returns the resulting oracle.
    pub async fn probe(&self) -> Result<Connectivity> {
        let target = ProbeTarget::from_endpoint(&self.config.endpoint)?;
        let online = probe::check(&target, self.config.probe.timeout()).await;
        tracing::debug!(%target, online, "probed endpoint");
        Ok(Connectivity::new(online))
    }
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
