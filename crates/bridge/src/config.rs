// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bridge daemon configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Bridge daemon configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root state directory (e.g. ~/.local/state/tollcam)
    pub state_dir: PathBuf,
    /// Path to the channel's Unix socket
    pub socket_path: PathBuf,
    /// Path to lock/PID file
    pub lock_path: PathBuf,
    /// Path to the bridge log file
    pub log_path: PathBuf,
    /// Command line opening the per-app notification-settings surface
    pub settings_cmd: Vec<String>,
    /// Command line opening the generic app-details surface (fallback)
    pub settings_fallback_cmd: Vec<String>,
}

/// Errors from configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot determine the state directory")]
    NoStateDir,
}

impl Config {
    /// Load configuration for the user-level bridge.
    ///
    /// Uses fixed paths under `$XDG_STATE_HOME/tollcam/` (default
    /// `~/.local/state/tollcam/`). One bridge serves the user session.
    pub fn load() -> Result<Self, ConfigError> {
        let state_dir = state_dir()?;

        Ok(Self {
            socket_path: state_dir.join("bridge.sock"),
            lock_path: state_dir.join("bridge.pid"),
            log_path: state_dir.join("bridge.log"),
            settings_cmd: command_from_env(
                "TOLLCAM_SETTINGS_CMD",
                &["gnome-control-center", "notifications"],
            ),
            settings_fallback_cmd: command_from_env(
                "TOLLCAM_SETTINGS_FALLBACK_CMD",
                &["gnome-control-center", "applications"],
            ),
            state_dir,
        })
    }
}

fn state_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(dir) = std::env::var("XDG_STATE_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir).join("tollcam"));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".local").join("state").join("tollcam"))
        .ok_or(ConfigError::NoStateDir)
}

fn command_from_env(var: &str, default: &[&str]) -> Vec<String> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => {
            value.split_whitespace().map(str::to_string).collect()
        }
        _ => default.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
