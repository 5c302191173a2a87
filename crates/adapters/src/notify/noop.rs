// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op presentation adapter.

use super::{NotifyAdapter, NotifyError};
use async_trait::async_trait;
use tollcam_core::ForegroundContent;

/// Presentation adapter that silently discards all renderings.
///
/// Used when notifications are disabled or not yet configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpNotifyAdapter;

impl NoOpNotifyAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotifyAdapter for NoOpNotifyAdapter {
    async fn post(&self, _content: &ForegroundContent) -> Result<(), NotifyError> {
        Ok(())
    }

    async fn cancel(&self) -> Result<(), NotifyError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
