// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification authorization adapters

mod ungated;

pub use ungated::UngatedAuthorizationAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeAuthorizationAdapter;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use tollcam_core::AuthorizationStatus;

/// Channel on which adapters deliver asynchronous grant outcomes.
///
/// Mirrors the OS permission callback: `prompt()` returns immediately and
/// the boolean outcome arrives here later, possibly much later, possibly
/// never.
pub type GrantOutcomeTx = mpsc::UnboundedSender<bool>;

/// Create the grant-outcome channel shared by adapter and bridge.
pub fn grant_outcome_channel() -> (GrantOutcomeTx, mpsc::UnboundedReceiver<bool>) {
    mpsc::unbounded_channel()
}

/// Errors from authorization operations
#[derive(Debug, Error)]
pub enum AuthorizationError {
    #[error("status query failed: {0}")]
    QueryFailed(String),
    #[error("prompt failed to open: {0}")]
    PromptFailed(String),
}

/// Adapter for the OS notification-authorization subsystem
#[async_trait]
pub trait AuthorizationAdapter: Clone + Send + Sync + 'static {
    /// Whether this platform gates notifications behind a runtime prompt.
    fn requires_prompt(&self) -> bool;

    /// Query the current authorization status. No side effects.
    async fn status(&self) -> Result<AuthorizationStatus, AuthorizationError>;

    /// Open the OS permission prompt.
    ///
    /// The grant outcome is not returned here; it is delivered through the
    /// adapter's [`GrantOutcomeTx`] when the user dismisses the dialog.
    async fn prompt(&self) -> Result<(), AuthorizationError>;
}
