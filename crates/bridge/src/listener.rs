// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener task for handling socket I/O.
//!
//! The Listener runs in a spawned task, accepting connections and handling
//! them without blocking the service loop. Each connection carries one
//! method call and one response.

use thiserror::Error;
use tokio::net::{UnixListener, UnixStream};
use tracing::{debug, error, warn};

use crate::protocol::{self, MethodCall, Request, Response, DEFAULT_TIMEOUT};
use crate::service::{BridgeHandle, CallError};

/// Listener task for accepting channel connections.
pub struct Listener {
    socket: UnixListener,
    handle: BridgeHandle,
}

/// Errors from connection handling.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("Protocol error: {0}")]
    Protocol(#[from] protocol::ProtocolError),

    #[error("Bridge error: {0}")]
    Bridge(#[from] CallError),
}

impl Listener {
    pub fn new(socket: UnixListener, handle: BridgeHandle) -> Self {
        Self { socket, handle }
    }

    /// Run the accept loop, spawning a task for each connection.
    pub async fn run(self) {
        loop {
            match self.socket.accept().await {
                Ok((stream, _)) => {
                    let handle = self.handle.clone();
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, handle).await {
                            match e {
                                ConnectionError::Protocol(
                                    protocol::ProtocolError::ConnectionClosed,
                                ) => debug!("Client disconnected"),
                                ConnectionError::Protocol(protocol::ProtocolError::Timeout) => {
                                    warn!("Connection timeout")
                                }
                                _ => error!("Connection error: {}", e),
                            }
                        }
                    });
                }
                Err(e) => {
                    error!("Accept error: {}", e);
                }
            }
        }
    }
}

/// Handle a single client connection.
async fn handle_connection(
    stream: UnixStream,
    handle: BridgeHandle,
) -> Result<(), ConnectionError> {
    let (mut reader, mut writer) = stream.into_split();

    // Read the call with timeout
    let call: MethodCall = protocol::read_call(&mut reader, DEFAULT_TIMEOUT).await?;

    let response = match Request::parse(&call) {
        Ok(request) => {
            // Log queries at debug level (frequent polling), mutations at info
            if matches!(request, Request::AreNotificationsEnabled) {
                debug!(method = %call.method, "received query");
            } else {
                tracing::info!(method = %call.method, "received request");
            }
            handle.call(request).await?
        }
        Err(unknown) => {
            // Unknown names are protocol drift, not failures; they never
            // reach the service loop.
            warn!(method = %unknown.0, "method not implemented");
            Response::NotImplemented
        }
    };

    debug!("Sending response: {:?}", response);

    // Write response with timeout
    protocol::write_response(&mut writer, &response, DEFAULT_TIMEOUT).await?;

    Ok(())
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
