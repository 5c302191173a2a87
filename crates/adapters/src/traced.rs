// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::notify::{NotifyAdapter, NotifyError};
use crate::settings::{SettingsAdapter, SettingsError, SettingsTarget};
use async_trait::async_trait;
use tollcam_core::ForegroundContent;
use tracing::Instrument;

/// Wrapper that adds tracing to any NotifyAdapter
#[derive(Clone)]
pub struct TracedNotify<N> {
    inner: N,
}

impl<N> TracedNotify<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<N: NotifyAdapter> NotifyAdapter for TracedNotify<N> {
    async fn post(&self, content: &ForegroundContent) -> Result<(), NotifyError> {
        async {
            let start = std::time::Instant::now();
            let result = self.inner.post(content).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "posted"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "post failed"),
            }
            result
        }
        .instrument(tracing::info_span!("notify.post", title = %content.title))
        .await
    }

    async fn cancel(&self) -> Result<(), NotifyError> {
        let result = self.inner.cancel().await;
        if let Err(ref e) = result {
            tracing::warn!(error = %e, "cancel failed");
        }
        result
    }
}

/// Wrapper that adds tracing to any SettingsAdapter
#[derive(Clone)]
pub struct TracedSettings<S> {
    inner: S,
}

impl<S> TracedSettings<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: SettingsAdapter> SettingsAdapter for TracedSettings<S> {
    async fn open(&self, target: SettingsTarget) -> Result<(), SettingsError> {
        async {
            tracing::info!("opening");
            let result = self.inner.open(target).await;
            if let Err(ref e) = result {
                tracing::warn!(error = %e, "open failed");
            }
            result
        }
        .instrument(tracing::info_span!("settings.open", target = ?target))
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
