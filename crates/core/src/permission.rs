// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification authorization state and the single-flight request slot.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// OS-level notification authorization status.
///
/// Some platforms never report `NotDetermined` and collapse it into
/// `Denied`; the bridge surface treats both as "not enabled".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationStatus {
    NotDetermined,
    Denied,
    Authorized,
    /// Authorized for quiet delivery without an explicit prompt.
    Provisional,
    /// Authorized for the duration of an app clip style session.
    Ephemeral,
}

impl AuthorizationStatus {
    /// Whether notifications may be presented under this status.
    pub fn is_enabled(self) -> bool {
        matches!(
            self,
            Self::Authorized | Self::Provisional | Self::Ephemeral
        )
    }
}

/// A permission request was issued while one was already outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("another notification permission request is still pending")]
pub struct AlreadyPending;

/// Single-flight holder for the in-flight permission request.
///
/// At most one request may be outstanding per process; a second `begin`
/// fails fast rather than queuing. The payload is the caller's single-use
/// response handle, owned exclusively by the slot until the grant outcome
/// arrives.
#[derive(Debug, Default)]
pub enum PermissionSlot<T> {
    #[default]
    Idle,
    Pending(T),
}

impl<T> PermissionSlot<T> {
    pub fn new() -> Self {
        Self::Idle
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Claim the slot for a new request.
    ///
    /// While a request is live the claim is refused and the handle comes
    /// back to the caller, who still owes it a [`AlreadyPending`]-shaped
    /// rejection.
    pub fn begin(&mut self, handle: T) -> Result<(), T> {
        match self {
            Self::Idle => {
                *self = Self::Pending(handle);
                Ok(())
            }
            Self::Pending(_) => Err(handle),
        }
    }

    /// Take the held handle, vacating the slot before the caller can act
    /// on it, so re-entrant observers see "no longer pending".
    pub fn take(&mut self) -> Option<T> {
        match std::mem::replace(self, Self::Idle) {
            Self::Pending(handle) => Some(handle),
            Self::Idle => None,
        }
    }
}

#[cfg(test)]
#[path = "permission_tests.rs"]
mod tests;
