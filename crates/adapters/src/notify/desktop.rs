// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Desktop presentation adapter using notify-rust.
//!
//! On macOS, `notify-rust` uses `mac-notification-sys` (Cocoa bindings) to
//! send notifications via the Notification Center. The first notification
//! triggers `ensure_application_set()` which runs an AppleScript to look up
//! a bundle identifier. In a daemon context without Automation permissions,
//! that AppleScript blocks forever. We pre-set the bundle identifier at
//! construction time to bypass the lookup entirely.

use super::{NotifyAdapter, NotifyError};
use async_trait::async_trait;
use notify_rust::Notification;
#[cfg(all(unix, not(target_os = "macos")))]
use notify_rust::{Hint, Timeout, Urgency};
#[cfg(all(unix, not(target_os = "macos")))]
use parking_lot::Mutex;
#[cfg(all(unix, not(target_os = "macos")))]
use std::sync::Arc;
use tollcam_core::ForegroundContent;
#[cfg(all(unix, not(target_os = "macos")))]
use tollcam_core::{EXIT_ACTION, FOREGROUND_NOTIFICATION_ID};

#[derive(Clone, Default)]
pub struct DesktopNotifyAdapter {
    // Last shown handle; taking it is the only way to close the
    // notification on freedesktop servers.
    #[cfg(all(unix, not(target_os = "macos")))]
    handle: Arc<Mutex<Option<notify_rust::NotificationHandle>>>,
}

impl DesktopNotifyAdapter {
    pub fn new() -> Self {
        #[cfg(target_os = "macos")]
        {
            // Pre-set the application bundle identifier so mac-notification-sys
            // skips its NSAppleScript lookup (which blocks forever in daemon
            // processes that lack Automation permissions).
            let _ = mac_notification_sys::set_application("com.apple.Terminal");
        }
        Self::default()
    }
}

fn build(content: &ForegroundContent) -> Notification {
    let mut notification = Notification::new();
    notification
        .appname("tollcam")
        .summary(&content.title)
        .body(&content.body)
        .icon(&content.icon.name);
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        notification
            .id(FOREGROUND_NOTIFICATION_ID)
            .action("default", "Open")
            .action(EXIT_ACTION, "Exit")
            .hint(Hint::Resident(true))
            .urgency(Urgency::Critical)
            .timeout(Timeout::Never);
    }
    notification
}

#[async_trait]
impl NotifyAdapter for DesktopNotifyAdapter {
    async fn post(&self, content: &ForegroundContent) -> Result<(), NotifyError> {
        let notification = build(content);
        let title = content.title.clone();
        #[cfg(all(unix, not(target_os = "macos")))]
        let slot = Arc::clone(&self.handle);
        // notify_rust::Notification::show() is synchronous; run it on
        // tokio's bounded blocking thread pool.
        let shown = tokio::task::spawn_blocking(move || match notification.show() {
            Ok(handle) => {
                tracing::info!(%title, "foreground notification posted");
                #[cfg(all(unix, not(target_os = "macos")))]
                {
                    *slot.lock() = Some(handle);
                }
                #[cfg(not(all(unix, not(target_os = "macos"))))]
                let _ = handle;
                Ok(())
            }
            Err(e) => Err(NotifyError::PostFailed(e.to_string())),
        })
        .await;
        match shown {
            Ok(result) => result,
            Err(join) => Err(NotifyError::PostFailed(join.to_string())),
        }
    }

    async fn cancel(&self) -> Result<(), NotifyError> {
        #[cfg(all(unix, not(target_os = "macos")))]
        {
            let slot = Arc::clone(&self.handle);
            let closed = tokio::task::spawn_blocking(move || {
                let handle = slot.lock().take();
                if let Some(handle) = handle {
                    handle.close();
                    tracing::info!("foreground notification cancelled");
                }
            })
            .await;
            if let Err(join) = closed {
                return Err(NotifyError::CancelFailed(join.to_string()));
            }
        }
        #[cfg(not(all(unix, not(target_os = "macos"))))]
        tracing::debug!("notification cannot be closed programmatically here");
        Ok(())
    }
}
