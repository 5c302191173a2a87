// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Permission gate: queries and requests notification authorization,
//! tracking at most one outstanding request.

use tokio::sync::oneshot;

use tollcam_adapters::AuthorizationAdapter;
use tollcam_core::PermissionSlot;

use crate::protocol::Response;
use crate::service::respond;

/// Gate over the OS notification-authorization subsystem.
///
/// The pending slot holds the caller's reply sender from `requestPermission`
/// until the OS delivers the grant outcome. Confinement to the service loop
/// is what makes the slot race-free.
pub struct PermissionGate<A> {
    adapter: A,
    slot: PermissionSlot<oneshot::Sender<Response>>,
}

impl<A: AuthorizationAdapter> PermissionGate<A> {
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            slot: PermissionSlot::new(),
        }
    }

    /// Whether notifications are currently authorized.
    ///
    /// Platforms without a runtime permission report enabled
    /// unconditionally. A failed status query degrades to `false` rather
    /// than erroring out of the bridge.
    pub async fn is_enabled(&self) -> bool {
        if !self.adapter.requires_prompt() {
            return true;
        }
        match self.adapter.status().await {
            Ok(status) => status.is_enabled(),
            Err(e) => {
                tracing::warn!(error = %e, "authorization status query failed");
                false
            }
        }
    }

    /// Run the request protocol. `reply` is resolved immediately on the
    /// short-circuit paths, rejected while a request is live, or parked in
    /// the pending slot until [`PermissionGate::resolve`] delivers the
    /// outcome.
    pub async fn request(&mut self, reply: oneshot::Sender<Response>) {
        if !self.adapter.requires_prompt() || self.is_enabled().await {
            respond(reply, Response::Bool { value: true });
            return;
        }

        match self.slot.begin(reply) {
            Err(reply) => respond(reply, Response::pending_request()),
            Ok(()) => {
                if let Err(e) = self.adapter.prompt().await {
                    // The dialog never opened, so no outcome will arrive;
                    // resolve the caller as denied and free the slot.
                    tracing::warn!(error = %e, "permission prompt failed to open");
                    if let Some(reply) = self.slot.take() {
                        respond(reply, Response::Bool { value: false });
                    }
                }
            }
        }
    }

    /// Deliver the OS grant outcome.
    ///
    /// The slot is vacated before the reply resolves, so re-entrant
    /// callers observe "no longer pending". Only the first outcome for a
    /// request is honored; anything later is logged and dropped.
    pub fn resolve(&mut self, granted: bool) {
        match self.slot.take() {
            Some(reply) => respond(reply, Response::Bool { value: granted }),
            None => tracing::debug!(granted, "grant outcome with no pending request"),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_pending()
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
