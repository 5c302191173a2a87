// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task-lifecycle adapters

mod shutdown;

pub use shutdown::ShutdownTaskAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeTaskAdapter;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from task-lifecycle operations
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("terminate failed: {0}")]
    TerminateFailed(String),
}

/// Adapter for OS task-lifecycle control.
#[async_trait]
pub trait TaskAdapter: Clone + Send + Sync + 'static {
    /// Remove the current task from any recents surface and end the
    /// process.
    async fn terminate(&self) -> Result<(), TaskError>;
}
