// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! OS launch events and action-marker claiming.

use serde::{Deserialize, Serialize};

/// A launch (or relaunch) event delivered by the OS.
///
/// Carries at most one action marker. Claiming a marker consumes it, so a
/// redelivered event record cannot trigger the same action twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchEvent {
    #[serde(default)]
    pub action: Option<String>,
}

impl LaunchEvent {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
        }
    }

    /// A normal launch with no action attached.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Claim `marker` if this event carries it, clearing it in the process.
    pub fn claim(&mut self, marker: &str) -> bool {
        if self.action.as_deref() == Some(marker) {
            self.action = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "launch_tests.rs"]
mod tests;
