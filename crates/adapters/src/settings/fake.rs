// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake settings adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{SettingsAdapter, SettingsError, SettingsTarget};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

struct FakeSettingsState {
    opens: Vec<SettingsTarget>,
    failing: Vec<SettingsTarget>,
}

/// Fake settings adapter for testing.
#[derive(Clone)]
pub struct FakeSettingsAdapter {
    inner: Arc<Mutex<FakeSettingsState>>,
}

impl Default for FakeSettingsAdapter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeSettingsState {
                opens: Vec::new(),
                failing: Vec::new(),
            })),
        }
    }
}

impl FakeSettingsAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All surfaces opened so far, in order.
    pub fn opens(&self) -> Vec<SettingsTarget> {
        self.inner.lock().opens.clone()
    }

    /// Make a specific surface fail to open.
    pub fn fail_target(&self, target: SettingsTarget) {
        self.inner.lock().failing.push(target);
    }
}

#[async_trait]
impl SettingsAdapter for FakeSettingsAdapter {
    async fn open(&self, target: SettingsTarget) -> Result<(), SettingsError> {
        let mut state = self.inner.lock();
        state.opens.push(target);
        if state.failing.contains(&target) {
            return Err(SettingsError::LaunchFailed("unavailable".into()));
        }
        Ok(())
    }
}
