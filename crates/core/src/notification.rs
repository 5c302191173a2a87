// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Foreground notification content.

use serde::{Deserialize, Serialize};

use crate::icon::{resolve_icon, IconCatalog, IconRef};

/// The one well-known identity the foreground notification lives under.
/// Posting under this identity replaces any previous rendering.
pub const FOREGROUND_NOTIFICATION_ID: u32 = 1001;

/// Action tag that marks a launch as an exit request.
pub const EXIT_ACTION: &str = "tollcam.exit";

/// Raw named arguments of an `updateForegroundNotification` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub icon_name: Option<String>,
    #[serde(default)]
    pub icon_type: Option<String>,
}

impl ContentDraft {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Render the draft into displayable content.
    ///
    /// Returns `None` when title or text is missing or blank. Callers
    /// treat that as a silent skip: the previous rendering, if any, stays
    /// live untouched.
    pub fn render(&self, catalog: &impl IconCatalog) -> Option<ForegroundContent> {
        let title = non_blank(self.title.as_deref())?;
        let body = non_blank(self.text.as_deref())?;
        let icon = resolve_icon(
            self.icon_name.as_deref(),
            self.icon_type.as_deref(),
            catalog,
        );
        Some(ForegroundContent {
            title: title.to_string(),
            body: body.to_string(),
            icon,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

/// The rendered state of the single foreground notification.
///
/// Every posted rendering is persistent and high-priority, with a default
/// tap action that foregrounds the application and an exit action tagged
/// [`EXIT_ACTION`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForegroundContent {
    pub title: String,
    pub body: String,
    pub icon: IconRef,
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
