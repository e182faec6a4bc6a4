// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Online/offline state with edge-triggered transitions.
//!
//! [`Connectivity`] is a cheaply cloneable handle around a watch channel.
//! Writers call [`Connectivity::set_online`]; readers either poll
//! [`Connectivity::is_online`] or await [`Transitions::next`]. Rapid flips may
//! coalesce, but a subscriber always observes the latest state.

pub mod probe;

use std::sync::Arc;

use tokio::sync::watch;

/// An observed change of connectivity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    BecameOnline,
    BecameOffline,
}

impl Transition {
    fn from_state(online: bool) -> Self {
        if online {
            Transition::BecameOnline
        } else {
            Transition::BecameOffline
        }
    }
}

/// Shared connectivity oracle.
#[derive(Debug, Clone)]
pub struct Connectivity {
    state: Arc<watch::Sender<bool>>,
}

impl Connectivity {
    pub fn new(online: bool) -> Self {
        let (tx, _rx) = watch::channel(online);
        Connectivity {
            state: Arc::new(tx),
        }
    }

    pub fn is_online(&self) -> bool {
        *self.state.borrow()
    }

    /// Records the current state, returning the edge if it changed.
    pub fn set_online(&self, online: bool) -> Option<Transition> {
        let changed = self.state.send_if_modified(|current| {
            if *current == online {
                false
            } else {
                *current = online;
                true
            }
        });
        if !changed {
            return None;
        }
        let transition = Transition::from_state(online);
        tracing::info!(?transition, "connectivity changed");
        Some(transition)
    }

    /// Subscribes to future transitions.
    pub fn subscribe(&self) -> Transitions {
        let rx = self.state.subscribe();
        let last = *rx.borrow();
        Transitions { rx, last }
    }
}

/// Stream of transitions observed after [`Connectivity::subscribe`].
#[derive(Debug)]
pub struct Transitions {
    rx: watch::Receiver<bool>,
    last: bool,
}

impl Transitions {
    /// Waits for the next state change.
    ///
    /// Returns `None` once every [`Connectivity`] handle has been dropped,
    /// which a caller still holding a handle never observes.
    pub async fn next(&mut self) -> Option<Transition> {
        loop {
            self.rx.changed().await.ok()?;
            let online = *self.rx.borrow_and_update();
            // A flip and flip-back between polls leaves nothing to report.
            if online != self.last {
                self.last = online;
                return Some(Transition::from_state(online));
            }
        }
    }
}

#[cfg(test)]
#[path = "connectivity_tests.rs"]
mod tests;
