// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Settings adapter that launches a desktop settings surface as a
//! subprocess.

use super::{SettingsAdapter, SettingsError, SettingsTarget};
use crate::subprocess::{run_with_timeout, SETTINGS_TIMEOUT};
use async_trait::async_trait;
use tokio::process::Command;

/// Launches configured command lines per settings surface.
///
/// The defaults target the GNOME control center; both are overridable so
/// other desktops can point at their own panels.
#[derive(Clone, Debug)]
pub struct CommandSettingsAdapter {
    notifications: Vec<String>,
    details: Vec<String>,
}

impl CommandSettingsAdapter {
    pub fn new(notifications: Vec<String>, details: Vec<String>) -> Self {
        Self {
            notifications,
            details,
        }
    }

    fn command_for(&self, target: SettingsTarget) -> &[String] {
        match target {
            SettingsTarget::AppNotifications => &self.notifications,
            SettingsTarget::AppDetails => &self.details,
        }
    }
}

impl Default for CommandSettingsAdapter {
    fn default() -> Self {
        Self::new(
            vec!["gnome-control-center".into(), "notifications".into()],
            vec!["gnome-control-center".into(), "applications".into()],
        )
    }
}

#[async_trait]
impl SettingsAdapter for CommandSettingsAdapter {
    async fn open(&self, target: SettingsTarget) -> Result<(), SettingsError> {
        let line = self.command_for(target);
        let (program, args) = match line.split_first() {
            Some(split) => split,
            None => return Err(SettingsError::Unavailable),
        };

        let mut cmd = Command::new(program);
        cmd.args(args);
        let output = run_with_timeout(cmd, SETTINGS_TIMEOUT, "settings launcher")
            .await
            .map_err(SettingsError::LaunchFailed)?;

        if output.status.success() {
            Ok(())
        } else {
            Err(SettingsError::LaunchFailed(format!(
                "{} exited with {}",
                program, output.status
            )))
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
