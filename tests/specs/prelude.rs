//! Shared harness for bridge specs.
//!
//! Each spec gets a fresh bridge: a real service loop and Unix-socket
//! listener wired to fake OS adapters, rooted in a temp directory.

use tollcam_adapters::{
    grant_outcome_channel, FakeAuthorizationAdapter, FakeNotifyAdapter, FakeSettingsAdapter,
    FakeTaskAdapter,
};
use tollcam_bridge::protocol::{self, MethodCall, Response, DEFAULT_TIMEOUT};
use tollcam_bridge::service::{forward_grants, BridgeService};
use tollcam_bridge::{BridgeHandle, Listener};
use tollcam_core::{FakeCatalog, IconKind};

pub struct TestBridge {
    pub handle: BridgeHandle,
    pub authorization: FakeAuthorizationAdapter,
    pub notify: FakeNotifyAdapter,
    pub settings: FakeSettingsAdapter,
    pub task: FakeTaskAdapter,
    socket_path: std::path::PathBuf,
    _dir: tempfile::TempDir,
}

impl TestBridge {
    pub fn spawn() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let socket_path = dir.path().join("bridge.sock");

        let (grant_tx, grant_rx) = grant_outcome_channel();
        let authorization = FakeAuthorizationAdapter::new(grant_tx);
        let notify = FakeNotifyAdapter::new();
        let settings = FakeSettingsAdapter::new();
        let task = FakeTaskAdapter::new();
        let catalog = FakeCatalog::new()
            .with("tracking", IconKind::Status)
            .with("camera", IconKind::Status);

        let (handle, service) = BridgeService::new(
            authorization.clone(),
            notify.clone(),
            settings.clone(),
            task.clone(),
            catalog,
        );
        tokio::spawn(forward_grants(grant_rx, handle.clone()));
        tokio::spawn(service.run());

        let socket = tokio::net::UnixListener::bind(&socket_path).unwrap();
        tokio::spawn(Listener::new(socket, handle.clone()).run());

        Self {
            handle,
            authorization,
            notify,
            settings,
            task,
            socket_path,
            _dir: dir,
        }
    }

    /// Issue one method call over the socket, as the application layer
    /// would.
    pub async fn call(&self, call: MethodCall) -> Response {
        let mut stream = tokio::net::UnixStream::connect(&self.socket_path)
            .await
            .unwrap();
        protocol::roundtrip(&mut stream, &call, DEFAULT_TIMEOUT)
            .await
            .unwrap()
    }

    /// Issue a call on a background task, for operations that park until
    /// an OS callback arrives.
    pub fn call_in_background(&self, call: MethodCall) -> tokio::task::JoinHandle<Response> {
        let socket_path = self.socket_path.clone();
        tokio::spawn(async move {
            let mut stream = tokio::net::UnixStream::connect(&socket_path).await.unwrap();
            protocol::roundtrip(&mut stream, &call, DEFAULT_TIMEOUT)
                .await
                .unwrap()
        })
    }

    /// Yield until `count` permission prompts have been opened, so a
    /// background request is known to be parked in the pending slot.
    pub async fn wait_for_prompts(&self, count: usize) {
        while self.authorization.prompt_count() < count {
            tokio::task::yield_now().await;
        }
    }
}

pub fn update(title: &str, text: &str) -> MethodCall {
    MethodCall::new("updateForegroundNotification")
        .arg("title", title)
        .arg("text", text)
}
