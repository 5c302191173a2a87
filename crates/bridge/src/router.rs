// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exit action router.

use tollcam_adapters::{NotifyAdapter, TaskAdapter};
use tollcam_core::{IconCatalog, LaunchEvent, EXIT_ACTION};

use crate::presenter::Presenter;

/// Routes launch events, watching for the exit action.
///
/// Runs on every lifecycle entry point: the initial launch and any later
/// redelivery while the bridge is running.
pub struct ExitRouter<T> {
    task: T,
}

impl<T: TaskAdapter> ExitRouter<T> {
    pub fn new(task: T) -> Self {
        Self { task }
    }

    /// Inspect a launch event.
    ///
    /// An exit-marked event cancels the foreground notification and
    /// terminates the task; claiming the marker clears it, so the same
    /// event record redelivered later reads as a normal launch. Events
    /// without the marker are the normal launch path and are left alone.
    ///
    /// Returns whether exit was performed.
    pub async fn handle<N, C>(
        &self,
        event: &mut LaunchEvent,
        presenter: &mut Presenter<N, C>,
    ) -> bool
    where
        N: NotifyAdapter,
        C: IconCatalog,
    {
        if !event.claim(EXIT_ACTION) {
            return false;
        }
        tracing::info!("exit action received");
        presenter.clear().await;
        if let Err(e) = self.task.terminate().await {
            tracing::warn!(error = %e, "task termination failed");
        }
        true
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
