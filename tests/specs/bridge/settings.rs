//! Settings redirection over the channel.

use crate::prelude::TestBridge;
use tollcam_bridge::protocol::{MethodCall, Response};
use tollcam_adapters::SettingsTarget;

fn open() -> MethodCall {
    MethodCall::new("openNotificationSettings")
}

#[tokio::test]
async fn opens_the_notification_surface() {
    let bridge = TestBridge::spawn();

    let response = bridge.call(open()).await;

    assert_eq!(response, Response::Null);
    assert_eq!(bridge.settings.opens(), vec![SettingsTarget::AppNotifications]);
}

#[tokio::test]
async fn falls_back_once_when_the_primary_surface_is_missing() {
    let bridge = TestBridge::spawn();
    bridge.settings.fail_target(SettingsTarget::AppNotifications);

    let response = bridge.call(open()).await;

    assert_eq!(response, Response::Null);
    assert_eq!(
        bridge.settings.opens(),
        vec![SettingsTarget::AppNotifications, SettingsTarget::AppDetails]
    );
}

#[tokio::test]
async fn navigation_failures_never_reach_the_caller() {
    let bridge = TestBridge::spawn();
    bridge.settings.fail_target(SettingsTarget::AppNotifications);
    bridge.settings.fail_target(SettingsTarget::AppDetails);

    // Best-effort: the caller still sees a clean completion.
    assert_eq!(bridge.call(open()).await, Response::Null);
}
