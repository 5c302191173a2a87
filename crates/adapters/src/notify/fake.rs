// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake presentation adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{NotifyAdapter, NotifyError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use tollcam_core::ForegroundContent;

/// Recorded presentation call
#[derive(Debug, Clone, PartialEq)]
pub enum NotifyCall {
    Post(ForegroundContent),
    Cancel,
}

struct FakeNotifyState {
    calls: Vec<NotifyCall>,
    live: Option<ForegroundContent>,
    post_fails: bool,
}

/// Fake presentation adapter for testing.
///
/// Models the OS notification slot: `live()` reflects post/cancel
/// sequencing under the single fixed identity.
#[derive(Clone)]
pub struct FakeNotifyAdapter {
    inner: Arc<Mutex<FakeNotifyState>>,
}

impl Default for FakeNotifyAdapter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeNotifyState {
                calls: Vec::new(),
                live: None,
                post_fails: false,
            })),
        }
    }
}

impl FakeNotifyAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<NotifyCall> {
        self.inner.lock().calls.clone()
    }

    /// The rendering currently displayed, if any.
    pub fn live(&self) -> Option<ForegroundContent> {
        self.inner.lock().live.clone()
    }

    /// Make subsequent `post` calls fail.
    pub fn set_post_fails(&self, value: bool) {
        self.inner.lock().post_fails = value;
    }
}

#[async_trait]
impl NotifyAdapter for FakeNotifyAdapter {
    async fn post(&self, content: &ForegroundContent) -> Result<(), NotifyError> {
        let mut state = self.inner.lock();
        if state.post_fails {
            return Err(NotifyError::PostFailed("server unreachable".into()));
        }
        state.calls.push(NotifyCall::Post(content.clone()));
        state.live = Some(content.clone());
        Ok(())
    }

    async fn cancel(&self) -> Result<(), NotifyError> {
        let mut state = self.inner.lock();
        state.calls.push(NotifyCall::Cancel);
        state.live = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
