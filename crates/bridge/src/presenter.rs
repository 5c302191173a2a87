// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Foreground notification presenter.

use tollcam_adapters::NotifyAdapter;
use tollcam_core::{ContentDraft, ForegroundContent, IconCatalog};

/// Owns the single foreground-notification slot.
///
/// `current` mirrors what the OS is displaying under the fixed identity;
/// it only changes when a rendering is actually posted or cancelled.
pub struct Presenter<N, C> {
    notify: N,
    catalog: C,
    current: Option<ForegroundContent>,
}

impl<N: NotifyAdapter, C: IconCatalog> Presenter<N, C> {
    pub fn new(notify: N, catalog: C) -> Self {
        Self {
            notify,
            catalog,
            current: None,
        }
    }

    /// Post or replace the foreground notification.
    ///
    /// A draft with a blank or missing title or text is skipped silently:
    /// the previous rendering, if any, stays live. Presentation failures
    /// are logged and leave the slot untouched as well.
    pub async fn update(&mut self, draft: &ContentDraft) {
        let Some(content) = draft.render(&self.catalog) else {
            tracing::debug!("skipping foreground update with blank title or text");
            return;
        };
        match self.notify.post(&content).await {
            Ok(()) => self.current = Some(content),
            Err(e) => tracing::warn!(error = %e, "foreground notification post failed"),
        }
    }

    /// Remove the foreground notification and vacate the slot. Idempotent.
    pub async fn clear(&mut self) {
        if let Err(e) = self.notify.cancel().await {
            tracing::warn!(error = %e, "foreground notification cancel failed");
        }
        self.current = None;
    }

    /// The last successfully posted rendering.
    pub fn current(&self) -> Option<&ForegroundContent> {
        self.current.as_ref()
    }
}

#[cfg(test)]
#[path = "presenter_tests.rs"]
mod tests;
