// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The bridge service loop.
//!
//! One task owns every piece of mutable bridge state and processes
//! messages strictly in arrival order. Operations from the application
//! layer and callbacks from the OS all funnel through the same queue,
//! which is what makes the pending-permission slot and the foreground
//! notification slot safe without locks.

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

use tollcam_adapters::{
    AuthorizationAdapter, NotifyAdapter, SettingsAdapter, TaskAdapter,
};
use tollcam_core::{IconCatalog, LaunchEvent};

use crate::gate::PermissionGate;
use crate::presenter::Presenter;
use crate::protocol::{Request, Response};
use crate::redirector::Redirector;
use crate::router::ExitRouter;

/// A message for the service loop.
#[derive(Debug)]
pub enum ServiceMsg {
    /// An operation from the application layer.
    Call {
        request: Request,
        reply: oneshot::Sender<Response>,
    },
    /// The OS delivered a permission grant outcome.
    GrantResult { granted: bool },
    /// The OS delivered a launch event.
    Launch { event: LaunchEvent },
}

/// Errors surfaced to handle callers.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("bridge service is gone")]
    ServiceGone,
}

/// Clonable handle for issuing bridge operations.
#[derive(Clone)]
pub struct BridgeHandle {
    tx: mpsc::UnboundedSender<ServiceMsg>,
}

impl BridgeHandle {
    /// Dispatch an operation and await its response.
    ///
    /// Returns immediately with a future; `requestPermission` may resolve
    /// only when the user dismisses the OS dialog, or never. Callers that
    /// need liveness apply their own timeouts.
    pub async fn call(&self, request: Request) -> Result<Response, CallError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(ServiceMsg::Call { request, reply })
            .map_err(|_| CallError::ServiceGone)?;
        rx.await.map_err(|_| CallError::ServiceGone)
    }

    /// Deliver an OS launch event to the router.
    pub fn deliver_launch(&self, event: LaunchEvent) -> Result<(), CallError> {
        self.tx
            .send(ServiceMsg::Launch { event })
            .map_err(|_| CallError::ServiceGone)
    }

    /// Deliver an OS permission grant outcome to the gate.
    pub fn deliver_grant(&self, granted: bool) -> Result<(), CallError> {
        self.tx
            .send(ServiceMsg::GrantResult { granted })
            .map_err(|_| CallError::ServiceGone)
    }
}

/// Resolve a reply sender, tolerating callers that went away.
pub(crate) fn respond(reply: oneshot::Sender<Response>, response: Response) {
    let _ = reply.send(response);
}

/// The bridge service: dispatch plus the four components it feeds.
pub struct BridgeService<A, N, S, T, C> {
    gate: PermissionGate<A>,
    presenter: Presenter<N, C>,
    redirector: Redirector<S>,
    router: ExitRouter<T>,
    rx: mpsc::UnboundedReceiver<ServiceMsg>,
}

impl<A, N, S, T, C> BridgeService<A, N, S, T, C>
where
    A: AuthorizationAdapter,
    N: NotifyAdapter,
    S: SettingsAdapter,
    T: TaskAdapter,
    C: IconCatalog + Send + 'static,
{
    pub fn new(
        authorization: A,
        notify: N,
        settings: S,
        task: T,
        catalog: C,
    ) -> (BridgeHandle, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        let service = Self {
            gate: PermissionGate::new(authorization),
            presenter: Presenter::new(notify, catalog),
            redirector: Redirector::new(settings),
            router: ExitRouter::new(task),
            rx,
        };
        (BridgeHandle { tx }, service)
    }

    /// Process messages until every handle is dropped.
    pub async fn run(mut self) {
        while let Some(msg) = self.rx.recv().await {
            self.dispatch(msg).await;
        }
        tracing::debug!("bridge service stopped");
    }

    async fn dispatch(&mut self, msg: ServiceMsg) {
        match msg {
            ServiceMsg::Call { request, reply } => self.handle_call(request, reply).await,
            ServiceMsg::GrantResult { granted } => self.gate.resolve(granted),
            ServiceMsg::Launch { mut event } => {
                self.router.handle(&mut event, &mut self.presenter).await;
            }
        }
    }

    async fn handle_call(&mut self, request: Request, reply: oneshot::Sender<Response>) {
        match request {
            Request::AreNotificationsEnabled => {
                let value = self.gate.is_enabled().await;
                respond(reply, Response::Bool { value });
            }
            Request::RequestPermission => self.gate.request(reply).await,
            Request::OpenNotificationSettings => {
                self.redirector.open().await;
                respond(reply, Response::Null);
            }
            Request::UpdateForegroundNotification { draft } => {
                self.presenter.update(&draft).await;
                respond(reply, Response::Null);
            }
            Request::DeliverLaunch { mut event } => {
                self.router.handle(&mut event, &mut self.presenter).await;
                respond(reply, Response::Null);
            }
        }
    }
}

/// Forward OS grant outcomes from the adapters' channel into the service
/// loop. Ends when either side goes away.
pub async fn forward_grants(mut grants: mpsc::UnboundedReceiver<bool>, handle: BridgeHandle) {
    while let Some(granted) = grants.recv().await {
        if handle.deliver_grant(granted).is_err() {
            break;
        }
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
