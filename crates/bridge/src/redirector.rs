// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Settings redirector.

use tollcam_adapters::{SettingsAdapter, SettingsTarget};

/// Opens the per-app notification-settings surface, with the generic
/// app-details surface as the one fallback.
pub struct Redirector<S> {
    settings: S,
}

impl<S: SettingsAdapter> Redirector<S> {
    pub fn new(settings: S) -> Self {
        Self { settings }
    }

    /// Best-effort navigation: a failed primary falls back once, and a
    /// failed fallback is swallowed. The caller always sees success.
    pub async fn open(&self) {
        let Err(primary) = self.settings.open(SettingsTarget::AppNotifications).await else {
            return;
        };
        tracing::warn!(error = %primary, "notification settings unavailable, trying app details");
        if let Err(fallback) = self.settings.open(SettingsTarget::AppDetails).await {
            tracing::warn!(error = %fallback, "settings navigation failed");
        }
    }
}

#[cfg(test)]
#[path = "redirector_tests.rs"]
mod tests;
