//! Permission request protocol over the channel.

use crate::prelude::TestBridge;
use tollcam_bridge::protocol::{MethodCall, Response, PENDING_REQUEST};
use tollcam_core::AuthorizationStatus;

fn request() -> MethodCall {
    MethodCall::new("requestPermission")
}

fn enabled() -> MethodCall {
    MethodCall::new("areNotificationsEnabled")
}

#[tokio::test]
async fn first_request_parks_and_later_ones_are_rejected() {
    let bridge = TestBridge::spawn();

    let first = bridge.call_in_background(request());
    bridge.wait_for_prompts(1).await;

    // Every further request before resolution is rejected; the live
    // request is not disturbed and no new prompt opens.
    for _ in 0..3 {
        match bridge.call(request()).await {
            Response::Error { code, .. } => assert_eq!(code, PENDING_REQUEST),
            other => panic!("expected a pending-request rejection, got {other:?}"),
        }
    }
    assert_eq!(bridge.authorization.prompt_count(), 1);

    bridge.authorization.resolve(true);
    assert_eq!(first.await.unwrap(), Response::Bool { value: true });
}

#[tokio::test]
async fn slot_is_free_again_after_resolution() {
    let bridge = TestBridge::spawn();

    let first = bridge.call_in_background(request());
    bridge.wait_for_prompts(1).await;
    bridge.authorization.resolve(false);
    assert_eq!(first.await.unwrap(), Response::Bool { value: false });

    let second = bridge.call_in_background(request());
    bridge.wait_for_prompts(2).await;
    bridge.authorization.resolve(true);
    assert_eq!(second.await.unwrap(), Response::Bool { value: true });
}

#[tokio::test]
async fn enabled_query_tracks_the_grant_outcome() {
    let bridge = TestBridge::spawn();

    // Not yet asked reads as disabled, same as denied.
    assert_eq!(bridge.call(enabled()).await, Response::Bool { value: false });

    let parked = bridge.call_in_background(request());
    bridge.wait_for_prompts(1).await;
    bridge.authorization.resolve(false);
    parked.await.unwrap();
    assert_eq!(bridge.call(enabled()).await, Response::Bool { value: false });

    let parked = bridge.call_in_background(request());
    bridge.wait_for_prompts(2).await;
    bridge.authorization.resolve(true);
    parked.await.unwrap();
    assert_eq!(bridge.call(enabled()).await, Response::Bool { value: true });
}

#[tokio::test]
async fn ungated_platform_grants_without_a_prompt() {
    let bridge = TestBridge::spawn();
    bridge.authorization.set_requires_prompt(false);

    assert_eq!(bridge.call(enabled()).await, Response::Bool { value: true });
    assert_eq!(bridge.call(request()).await, Response::Bool { value: true });
    assert_eq!(bridge.authorization.prompt_count(), 0);
}

#[tokio::test]
async fn already_authorized_grants_without_a_prompt() {
    let bridge = TestBridge::spawn();
    bridge
        .authorization
        .set_status(AuthorizationStatus::Authorized);

    assert_eq!(bridge.call(request()).await, Response::Bool { value: true });
    assert_eq!(bridge.authorization.prompt_count(), 0);
}

#[tokio::test]
async fn provisional_authorization_reads_as_enabled() {
    let bridge = TestBridge::spawn();
    bridge
        .authorization
        .set_status(AuthorizationStatus::Provisional);

    assert_eq!(bridge.call(enabled()).await, Response::Bool { value: true });
}
