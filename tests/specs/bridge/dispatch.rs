//! Channel dispatch: recognized surface vs. protocol drift.

use crate::prelude::TestBridge;
use tollcam_bridge::protocol::{MethodCall, Response};

#[tokio::test]
async fn unknown_methods_yield_not_implemented() {
    let bridge = TestBridge::spawn();

    for method in ["setBadgeCount", "vibrate", "AreNotificationsEnabled", ""] {
        let response = bridge.call(MethodCall::new(method)).await;
        // Distinct from failure: callers must be able to tell protocol
        // drift apart from an operation that failed.
        assert_eq!(response, Response::NotImplemented, "method {method:?}");
    }
}

#[tokio::test]
async fn unknown_methods_never_touch_bridge_state() {
    let bridge = TestBridge::spawn();

    bridge
        .call(MethodCall::new("cancelForegroundNotification"))
        .await;

    assert!(bridge.notify.calls().is_empty());
    assert!(bridge.settings.opens().is_empty());
    assert!(!bridge.task.terminated());
    assert_eq!(bridge.authorization.prompt_count(), 0);
}

#[tokio::test]
async fn extra_arguments_on_recognized_methods_are_ignored() {
    let bridge = TestBridge::spawn();

    let response = bridge
        .call(MethodCall::new("areNotificationsEnabled").arg("verbose", true))
        .await;

    assert_eq!(response, Response::Bool { value: false });
}

#[tokio::test]
async fn every_surface_operation_resolves() {
    let bridge = TestBridge::spawn();
    bridge.authorization.set_requires_prompt(false);

    let responses = [
        bridge.call(MethodCall::new("areNotificationsEnabled")).await,
        bridge.call(MethodCall::new("requestPermission")).await,
        bridge.call(MethodCall::new("openNotificationSettings")).await,
        bridge
            .call(MethodCall::new("updateForegroundNotification"))
            .await,
    ];

    // No operation throws past the bridge boundary; each resolves with a
    // value, null, or a typed failure.
    assert_eq!(responses[0], Response::Bool { value: true });
    assert_eq!(responses[1], Response::Bool { value: true });
    assert_eq!(responses[2], Response::Null);
    assert_eq!(responses[3], Response::Null);
}
