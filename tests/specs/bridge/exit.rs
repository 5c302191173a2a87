//! Exit action routing over the channel.

use crate::prelude::{update, TestBridge};
use tollcam_bridge::protocol::{MethodCall, Response};
use tollcam_core::{LaunchEvent, EXIT_ACTION};

fn deliver(action: &str) -> MethodCall {
    MethodCall::new("deliverLaunch").arg("action", action)
}

#[tokio::test]
async fn exit_marked_launch_cancels_and_terminates() {
    let bridge = TestBridge::spawn();
    bridge.call(update("Tracking", "Active")).await;

    let response = bridge.call(deliver(EXIT_ACTION)).await;

    assert_eq!(response, Response::Null);
    assert_eq!(bridge.notify.live(), None);
    assert!(bridge.task.terminated());
}

#[tokio::test]
async fn launch_without_the_marker_is_the_normal_path() {
    let bridge = TestBridge::spawn();
    bridge.call(update("Tracking", "Active")).await;

    bridge.call(MethodCall::new("deliverLaunch")).await;
    bridge.call(deliver("tollcam.snooze")).await;

    assert!(bridge.notify.live().is_some());
    assert!(!bridge.task.terminated());
}

#[tokio::test]
async fn a_claimed_event_record_does_not_re_trigger_exit() {
    let bridge = TestBridge::spawn();
    bridge.call(update("Tracking", "Active")).await;

    // The initial delivery claims the marker off the event record.
    let mut event = LaunchEvent::new(EXIT_ACTION);
    assert!(event.claim(EXIT_ACTION));

    // Redelivering the same (now cleared) record is a no-op.
    bridge.handle.deliver_launch(event).unwrap();
    bridge.call(MethodCall::new("areNotificationsEnabled")).await;

    assert!(!bridge.task.terminated());
}

#[tokio::test]
async fn exit_works_from_the_initial_launch_too() {
    let bridge = TestBridge::spawn();

    // No notification was ever posted; exit still terminates the task and
    // the cancel is a harmless no-op.
    bridge
        .handle
        .deliver_launch(LaunchEvent::new(EXIT_ACTION))
        .unwrap();
    bridge.call(MethodCall::new("areNotificationsEnabled")).await;

    assert!(bridge.task.terminated());
    assert_eq!(bridge.notify.live(), None);
}
