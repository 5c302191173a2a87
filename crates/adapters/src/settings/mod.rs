// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Settings-navigation adapters

mod command;
mod noop;

pub use command::CommandSettingsAdapter;
pub use noop::NoOpSettingsAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeSettingsAdapter;

use async_trait::async_trait;
use thiserror::Error;

/// Candidate settings surfaces, tried in order by the redirector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTarget {
    /// The per-app notification-settings screen.
    AppNotifications,
    /// The generic per-app details screen.
    AppDetails,
}

/// Errors from settings navigation
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no launcher configured for this surface")]
    Unavailable,
    #[error("launch failed: {0}")]
    LaunchFailed(String),
}

/// Adapter for the OS settings-navigation subsystem.
///
/// An error tells the caller to try the next candidate surface; it is
/// never surfaced past the redirector.
#[async_trait]
pub trait SettingsAdapter: Clone + Send + Sync + 'static {
    async fn open(&self, target: SettingsTarget) -> Result<(), SettingsError>;
}
