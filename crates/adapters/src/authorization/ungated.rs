// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Authorization adapter for platforms without a runtime notification
//! permission.

use super::{AuthorizationAdapter, AuthorizationError, GrantOutcomeTx};
use async_trait::async_trait;
use tollcam_core::AuthorizationStatus;

/// Notifications are always allowed and there is no dialog to show.
#[derive(Clone)]
pub struct UngatedAuthorizationAdapter {
    outcomes: GrantOutcomeTx,
}

impl UngatedAuthorizationAdapter {
    pub fn new(outcomes: GrantOutcomeTx) -> Self {
        Self { outcomes }
    }
}

#[async_trait]
impl AuthorizationAdapter for UngatedAuthorizationAdapter {
    fn requires_prompt(&self) -> bool {
        false
    }

    async fn status(&self) -> Result<AuthorizationStatus, AuthorizationError> {
        Ok(AuthorizationStatus::Authorized)
    }

    async fn prompt(&self) -> Result<(), AuthorizationError> {
        // Nothing to ask; the grant resolves immediately.
        let _ = self.outcomes.send(true);
        Ok(())
    }
}

#[cfg(test)]
#[path = "ungated_tests.rs"]
mod tests;
