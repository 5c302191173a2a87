// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    not_determined = { AuthorizationStatus::NotDetermined, false },
    denied         = { AuthorizationStatus::Denied, false },
    authorized     = { AuthorizationStatus::Authorized, true },
    provisional    = { AuthorizationStatus::Provisional, true },
    ephemeral      = { AuthorizationStatus::Ephemeral, true },
)]
fn status_enabled_mapping(status: AuthorizationStatus, expected: bool) {
    assert_eq!(status.is_enabled(), expected);
}

#[test]
fn status_serde_roundtrip() {
    let statuses = [
        AuthorizationStatus::NotDetermined,
        AuthorizationStatus::Denied,
        AuthorizationStatus::Authorized,
        AuthorizationStatus::Provisional,
        AuthorizationStatus::Ephemeral,
    ];
    for status in statuses {
        let json = serde_json::to_string(&status).unwrap();
        let parsed: AuthorizationStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, parsed);
    }
}

#[test]
fn slot_starts_idle() {
    let slot: PermissionSlot<u32> = PermissionSlot::new();
    assert!(!slot.is_pending());
}

#[test]
fn begin_claims_the_slot() {
    let mut slot = PermissionSlot::new();
    slot.begin(7).unwrap();
    assert!(slot.is_pending());
}

#[test]
fn second_begin_fails_fast_without_disturbing_the_first() {
    let mut slot = PermissionSlot::new();
    slot.begin("first").unwrap();

    // The rejected handle comes back so the caller can resolve it.
    assert_eq!(slot.begin("second"), Err("second"));
    assert!(slot.is_pending());
    assert_eq!(slot.take(), Some("first"));
}

#[test]
fn already_pending_has_a_stable_message() {
    assert_eq!(
        AlreadyPending.to_string(),
        "another notification permission request is still pending"
    );
}

#[test]
fn take_vacates_before_returning() {
    let mut slot = PermissionSlot::new();
    slot.begin(1).unwrap();

    let handle = slot.take();
    assert_eq!(handle, Some(1));
    assert!(!slot.is_pending());
}

#[test]
fn take_on_idle_is_none() {
    let mut slot: PermissionSlot<u32> = PermissionSlot::new();
    assert_eq!(slot.take(), None);
}

#[test]
fn slot_is_reusable_after_take() {
    let mut slot = PermissionSlot::new();
    slot.begin(1).unwrap();
    slot.take();

    slot.begin(2).unwrap();
    assert_eq!(slot.take(), Some(2));
}
