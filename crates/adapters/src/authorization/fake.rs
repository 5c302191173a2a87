// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake authorization adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{AuthorizationAdapter, AuthorizationError, GrantOutcomeTx};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use tollcam_core::AuthorizationStatus;

struct FakeAuthorizationState {
    requires_prompt: bool,
    status: AuthorizationStatus,
    prompts: usize,
    prompt_fails: bool,
}

/// Fake authorization adapter for testing.
///
/// Prompts never resolve on their own; tests deliver the OS callback by
/// calling [`FakeAuthorizationAdapter::resolve`], or never do, to model a
/// dialog the user ignores.
#[derive(Clone)]
pub struct FakeAuthorizationAdapter {
    inner: Arc<Mutex<FakeAuthorizationState>>,
    outcomes: GrantOutcomeTx,
}

impl FakeAuthorizationAdapter {
    pub fn new(outcomes: GrantOutcomeTx) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeAuthorizationState {
                requires_prompt: true,
                status: AuthorizationStatus::NotDetermined,
                prompts: 0,
                prompt_fails: false,
            })),
            outcomes,
        }
    }

    pub fn set_requires_prompt(&self, value: bool) {
        self.inner.lock().requires_prompt = value;
    }

    pub fn set_status(&self, status: AuthorizationStatus) {
        self.inner.lock().status = status;
    }

    /// Make subsequent `prompt` calls fail to open.
    pub fn set_prompt_fails(&self, value: bool) {
        self.inner.lock().prompt_fails = value;
    }

    /// Number of prompts opened so far.
    pub fn prompt_count(&self) -> usize {
        self.inner.lock().prompts
    }

    /// Deliver the OS grant outcome for the open prompt, updating the
    /// stored status the way the OS authorization store would.
    pub fn resolve(&self, granted: bool) {
        self.inner.lock().status = if granted {
            AuthorizationStatus::Authorized
        } else {
            AuthorizationStatus::Denied
        };
        let _ = self.outcomes.send(granted);
    }
}

#[async_trait]
impl AuthorizationAdapter for FakeAuthorizationAdapter {
    fn requires_prompt(&self) -> bool {
        self.inner.lock().requires_prompt
    }

    async fn status(&self) -> Result<AuthorizationStatus, AuthorizationError> {
        Ok(self.inner.lock().status)
    }

    async fn prompt(&self) -> Result<(), AuthorizationError> {
        let mut state = self.inner.lock();
        if state.prompt_fails {
            return Err(AuthorizationError::PromptFailed("no prompt surface".into()));
        }
        state.prompts += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
