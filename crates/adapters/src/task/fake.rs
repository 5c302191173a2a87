// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake task adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{TaskAdapter, TaskError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// Fake task adapter for testing.
#[derive(Clone, Default)]
pub struct FakeTaskAdapter {
    terminations: Arc<Mutex<usize>>,
}

impl FakeTaskAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terminated(&self) -> bool {
        *self.terminations.lock() > 0
    }

    pub fn termination_count(&self) -> usize {
        *self.terminations.lock()
    }
}

#[async_trait]
impl TaskAdapter for FakeTaskAdapter {
    async fn terminate(&self) -> Result<(), TaskError> {
        *self.terminations.lock() += 1;
        Ok(())
    }
}
