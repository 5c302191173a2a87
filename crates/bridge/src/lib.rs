// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tollcam-bridge: the notification channel of the tollcam app.
//!
//! The bridge exposes notification authorization and foreground
//! notification control to the application layer over a fixed channel
//! name. All state lives in one sequential service loop; OS callbacks
//! (permission dialog results, notification action launches) re-enter
//! through the same loop, so pending-request tracking and the single
//! foreground-notification slot need no locks.

pub mod config;
pub mod gate;
pub mod listener;
pub mod presenter;
pub mod protocol;
pub mod redirector;
pub mod router;
pub mod service;

pub use config::Config;
pub use gate::PermissionGate;
pub use listener::Listener;
pub use presenter::Presenter;
pub use protocol::{MethodCall, Request, Response, CHANNEL_NAME};
pub use redirector::Redirector;
pub use router::ExitRouter;
pub use service::{forward_grants, BridgeHandle, BridgeService, CallError};
