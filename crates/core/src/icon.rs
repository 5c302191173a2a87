// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Icon resolution for the foreground notification.
//!
//! Pure (name, kind) lookup against a catalog. Anything that does not
//! resolve (absent name, unknown kind, or a pair the catalog does not
//! carry) falls back to the application's own icon.

use serde::{Deserialize, Serialize};

/// Name of the application's own icon.
pub const APP_ICON: &str = "tollcam";

/// Icon namespace accepted by the presenter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    /// Status-area icons (the default namespace).
    #[default]
    Status,
    /// Application launcher icons.
    Apps,
}

impl IconKind {
    /// Parse an `iconType` argument. Unknown kinds yield `None`.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "status" => Some(Self::Status),
            "apps" => Some(Self::Apps),
            _ => None,
        }
    }
}

/// A resolved icon reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRef {
    pub name: String,
    pub kind: IconKind,
}

impl IconRef {
    pub fn new(name: impl Into<String>, kind: IconKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// The application's own icon identity.
    pub fn app_default() -> Self {
        Self::new(APP_ICON, IconKind::Apps)
    }
}

/// Lookup interface over the icons available to the application.
pub trait IconCatalog {
    fn contains(&self, name: &str, kind: IconKind) -> bool;
}

/// Resolve an icon request to a displayable reference.
pub fn resolve_icon(
    name: Option<&str>,
    kind: Option<&str>,
    catalog: &impl IconCatalog,
) -> IconRef {
    let name = match name {
        Some(n) if !n.trim().is_empty() => n.trim(),
        _ => return IconRef::app_default(),
    };
    let kind = match kind {
        None => IconKind::default(),
        Some(k) => match IconKind::parse(k) {
            Some(k) => k,
            None => return IconRef::app_default(),
        },
    };
    if catalog.contains(name, kind) {
        IconRef::new(name, kind)
    } else {
        IconRef::app_default()
    }
}

/// Catalog of the icons bundled with the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

impl BundledCatalog {
    pub fn new() -> Self {
        Self
    }
}

const BUNDLED: &[(&str, IconKind)] = &[
    (APP_ICON, IconKind::Apps),
    ("tollcam-tracking", IconKind::Status),
    ("tollcam-camera", IconKind::Status),
];

impl IconCatalog for BundledCatalog {
    fn contains(&self, name: &str, kind: IconKind) -> bool {
        BUNDLED.iter().any(|(n, k)| *n == name && *k == kind)
    }
}

/// Fake catalog for testing
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, Default)]
pub struct FakeCatalog {
    entries: Vec<(String, IconKind)>,
}

#[cfg(any(test, feature = "test-support"))]
impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, kind: IconKind) -> Self {
        self.entries.push((name.to_string(), kind));
        self
    }
}

#[cfg(any(test, feature = "test-support"))]
impl IconCatalog for FakeCatalog {
    fn contains(&self, name: &str, kind: IconKind) -> bool {
        self.entries.iter().any(|(n, k)| n == name && *k == kind)
    }
}

#[cfg(test)]
#[path = "icon_tests.rs"]
mod tests;
