// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task adapter that ends the daemon through its shutdown notify.

use super::{TaskAdapter, TaskError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Notify;

/// Signals the daemon's shutdown `Notify`; the main loop drains and the
/// process exits. The daemon equivalent of finishing and removing the
/// task.
#[derive(Clone)]
pub struct ShutdownTaskAdapter {
    shutdown: Arc<Notify>,
}

impl ShutdownTaskAdapter {
    pub fn new(shutdown: Arc<Notify>) -> Self {
        Self { shutdown }
    }
}

#[async_trait]
impl TaskAdapter for ShutdownTaskAdapter {
    async fn terminate(&self) -> Result<(), TaskError> {
        tracing::info!("exit requested, shutting down");
        self.shutdown.notify_one();
        Ok(())
    }
}

#[cfg(test)]
#[path = "shutdown_tests.rs"]
mod tests;
