// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification presentation adapters

mod desktop;
mod noop;

pub use desktop::DesktopNotifyAdapter;
pub use noop::NoOpNotifyAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeNotifyAdapter, NotifyCall};

use async_trait::async_trait;
use thiserror::Error;

use tollcam_core::ForegroundContent;

/// Errors from presentation operations
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("post failed: {0}")]
    PostFailed(String),
    #[error("cancel failed: {0}")]
    CancelFailed(String),
}

/// Adapter for the OS notification-presentation subsystem.
///
/// Every operation addresses the single foreground notification identity
/// ([`tollcam_core::FOREGROUND_NOTIFICATION_ID`]); posting replaces any
/// previous rendering rather than adding a second notification.
#[async_trait]
pub trait NotifyAdapter: Clone + Send + Sync + 'static {
    /// Post or replace the foreground notification.
    async fn post(&self, content: &ForegroundContent) -> Result<(), NotifyError>;

    /// Remove the foreground notification if present. Idempotent.
    async fn cancel(&self) -> Result<(), NotifyError>;
}
