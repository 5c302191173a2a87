// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the OS collaborators of the notification bridge

pub mod authorization;
pub mod notify;
pub mod settings;
pub mod subprocess;
pub mod task;
pub mod traced;

pub use authorization::{
    grant_outcome_channel, AuthorizationAdapter, AuthorizationError, GrantOutcomeTx,
    UngatedAuthorizationAdapter,
};
pub use notify::{DesktopNotifyAdapter, NoOpNotifyAdapter, NotifyAdapter, NotifyError};
pub use settings::{
    CommandSettingsAdapter, NoOpSettingsAdapter, SettingsAdapter, SettingsError, SettingsTarget,
};
pub use task::{ShutdownTaskAdapter, TaskAdapter, TaskError};
pub use traced::{TracedNotify, TracedSettings};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use authorization::FakeAuthorizationAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use notify::{FakeNotifyAdapter, NotifyCall};
#[cfg(any(test, feature = "test-support"))]
pub use settings::FakeSettingsAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use task::FakeTaskAdapter;
