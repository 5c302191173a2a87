// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op settings adapter.

use super::{SettingsAdapter, SettingsError, SettingsTarget};
use async_trait::async_trait;

/// Settings adapter for headless environments: every surface opens
/// "successfully" and nothing happens.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpSettingsAdapter;

impl NoOpSettingsAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SettingsAdapter for NoOpSettingsAdapter {
    async fn open(&self, _target: SettingsTarget) -> Result<(), SettingsError> {
        Ok(())
    }
}
