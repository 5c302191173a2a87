//! Foreground notification lifecycle over the channel.

use crate::prelude::{update, TestBridge};
use tollcam_bridge::protocol::{MethodCall, Response};
use tollcam_core::{IconKind, IconRef};

#[tokio::test]
async fn update_posts_the_rendering() {
    let bridge = TestBridge::spawn();

    let response = bridge.call(update("Tracking", "Active")).await;

    assert_eq!(response, Response::Null);
    let live = bridge.notify.live().unwrap();
    assert_eq!(live.title, "Tracking");
    assert_eq!(live.body, "Active");
    assert_eq!(live.icon, IconRef::app_default());
}

#[tokio::test]
async fn a_second_update_replaces_the_first() {
    let bridge = TestBridge::spawn();

    bridge.call(update("Tracking", "Active")).await;
    bridge.call(update("Tracking", "Paused")).await;

    // Exactly one live rendering under the fixed identity.
    assert_eq!(bridge.notify.live().unwrap().body, "Paused");
    assert_eq!(bridge.notify.calls().len(), 2);
}

#[tokio::test]
async fn blank_fields_leave_the_previous_rendering() {
    let bridge = TestBridge::spawn();
    bridge.call(update("Tracking", "Active")).await;

    for call in [
        update("", "Paused"),
        update("Paused", ""),
        MethodCall::new("updateForegroundNotification"),
    ] {
        let response = bridge.call(call).await;
        // A silent no-op, not an error.
        assert_eq!(response, Response::Null);
        assert_eq!(bridge.notify.live().unwrap().body, "Active");
    }
}

#[tokio::test]
async fn blank_first_update_posts_nothing() {
    let bridge = TestBridge::spawn();

    bridge.call(MethodCall::new("updateForegroundNotification")).await;

    assert_eq!(bridge.notify.live(), None);
    assert!(bridge.notify.calls().is_empty());
}

#[tokio::test]
async fn a_known_icon_is_resolved_by_name_and_type() {
    let bridge = TestBridge::spawn();

    bridge
        .call(
            update("Tracking", "Active")
                .arg("iconName", "tracking")
                .arg("iconType", "status"),
        )
        .await;

    assert_eq!(
        bridge.notify.live().unwrap().icon,
        IconRef::new("tracking", IconKind::Status)
    );
}

#[tokio::test]
async fn an_unknown_icon_falls_back_to_the_app_icon() {
    let bridge = TestBridge::spawn();

    bridge
        .call(
            update("Tracking", "Active")
                .arg("iconName", "missing")
                .arg("iconType", "status"),
        )
        .await;

    assert_eq!(bridge.notify.live().unwrap().icon, IconRef::app_default());
}
