// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Channel protocol for the notification bridge.
//!
//! Wire format: 4-byte length prefix (big-endian) + JSON payload

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use tollcam_core::{ContentDraft, LaunchEvent};

/// Logical name of the bridge's method channel.
pub const CHANNEL_NAME: &str = "tollcam/notifications";

/// Error code for a permission request issued while one is outstanding.
pub const PENDING_REQUEST: &str = "PENDING_REQUEST";

/// Maximum message size (64 KB); method calls are small.
pub const MAX_MESSAGE_SIZE: usize = 64 * 1024;

/// Default channel timeout
pub const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Protocol version (from Cargo.toml)
pub const PROTOCOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A named method call from the application layer.
///
/// The method name is free-form on the wire; names outside the channel
/// surface map to [`Response::NotImplemented`] rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub args: serde_json::Map<String, serde_json::Value>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: serde_json::Map::new(),
        }
    }

    pub fn arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }
}

/// The channel received a method name it does not implement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("method not implemented: {0}")]
pub struct UnknownMethod(pub String);

/// A recognized bridge operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    AreNotificationsEnabled,
    RequestPermission,
    OpenNotificationSettings,
    UpdateForegroundNotification { draft: ContentDraft },
    /// Launch-event delivery from the relaunch trampoline. Internal-only:
    /// the application layer never issues this itself.
    DeliverLaunch { event: LaunchEvent },
}

impl Request {
    /// Map a wire call to an operation. Arguments of the wrong JSON type
    /// read as absent, which downstream treats the same as missing input.
    pub fn parse(call: &MethodCall) -> Result<Self, UnknownMethod> {
        match call.method.as_str() {
            "areNotificationsEnabled" => Ok(Self::AreNotificationsEnabled),
            "requestPermission" => Ok(Self::RequestPermission),
            "openNotificationSettings" => Ok(Self::OpenNotificationSettings),
            "updateForegroundNotification" => Ok(Self::UpdateForegroundNotification {
                draft: ContentDraft {
                    title: arg_string(call, "title"),
                    text: arg_string(call, "text"),
                    icon_name: arg_string(call, "iconName"),
                    icon_type: arg_string(call, "iconType"),
                },
            }),
            "deliverLaunch" => Ok(Self::DeliverLaunch {
                event: LaunchEvent {
                    action: arg_string(call, "action"),
                },
            }),
            _ => Err(UnknownMethod(call.method.clone())),
        }
    }
}

fn arg_string(call: &MethodCall, key: &str) -> Option<String> {
    call.args
        .get(key)
        .and_then(|value| value.as_str())
        .map(str::to_string)
}

/// Response from the bridge to the application layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    /// Boolean result
    Bool { value: bool },

    /// The operation completed and has nothing to report
    Null,

    /// The method name is not part of the channel surface. Distinct from
    /// `Error` so callers can detect protocol drift.
    NotImplemented,

    /// Typed failure
    Error { code: String, message: String },
}

impl Response {
    /// The rejection for a permission request issued while one is live.
    pub fn pending_request() -> Self {
        Self::Error {
            code: PENDING_REQUEST.to_string(),
            message: "Another notification permission request is still pending.".to_string(),
        }
    }
}

/// Protocol errors
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Message too large: {size} bytes (max {max})")]
    MessageTooLarge { size: usize, max: usize },

    #[error("Connection closed")]
    ConnectionClosed,

    #[error("Timeout")]
    Timeout,
}

/// Encode a message to JSON bytes (without length prefix)
///
/// Use with `write_message()` which handles the length-prefix wire format.
pub fn encode<T: Serialize>(msg: &T) -> Result<Vec<u8>, ProtocolError> {
    let json = serde_json::to_vec(msg)?;

    if json.len() > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge {
            size: json.len(),
            max: MAX_MESSAGE_SIZE,
        });
    }

    Ok(json)
}

/// Decode a message from wire format
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ProtocolError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Read a length-prefixed message from an async reader
pub async fn read_message<R: tokio::io::AsyncReadExt + Unpin>(
    reader: &mut R,
) -> Result<Vec<u8>, ProtocolError> {
    // Read length prefix
    let mut len_buf = [0u8; 4];
    match reader.read_exact(&mut len_buf).await {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            return Err(ProtocolError::ConnectionClosed);
        }
        Err(e) => return Err(ProtocolError::Io(e)),
    }
    let len = u32::from_be_bytes(len_buf) as usize;

    if len > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge {
            size: len,
            max: MAX_MESSAGE_SIZE,
        });
    }

    // Read payload
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf).await?;
    Ok(buf)
}

/// Write a length-prefixed message to an async writer
pub async fn write_message<W: tokio::io::AsyncWriteExt + Unpin>(
    writer: &mut W,
    data: &[u8],
) -> Result<(), ProtocolError> {
    let len = data.len();
    if len > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge {
            size: len,
            max: MAX_MESSAGE_SIZE,
        });
    }

    writer.write_all(&(len as u32).to_be_bytes()).await?;
    writer.write_all(data).await?;
    writer.flush().await?;
    Ok(())
}

/// Read a method call with timeout
pub async fn read_call<R: tokio::io::AsyncReadExt + Unpin>(
    reader: &mut R,
    timeout: std::time::Duration,
) -> Result<MethodCall, ProtocolError> {
    let bytes = tokio::time::timeout(timeout, read_message(reader))
        .await
        .map_err(|_| ProtocolError::Timeout)??;
    decode(&bytes)
}

/// Write a response with timeout
pub async fn write_response<W: tokio::io::AsyncWriteExt + Unpin>(
    writer: &mut W,
    response: &Response,
    timeout: std::time::Duration,
) -> Result<(), ProtocolError> {
    let data = encode(response)?;
    tokio::time::timeout(timeout, write_message(writer, &data))
        .await
        .map_err(|_| ProtocolError::Timeout)?
}

/// Issue a single call over a connected stream and await the response.
///
/// The write is bounded by `timeout`; the read is not, because an
/// operation like `requestPermission` resolves only when the user
/// dismisses the OS dialog.
pub async fn roundtrip<S>(
    stream: &mut S,
    call: &MethodCall,
    timeout: std::time::Duration,
) -> Result<Response, ProtocolError>
where
    S: tokio::io::AsyncReadExt + tokio::io::AsyncWriteExt + Unpin,
{
    let data = encode(call)?;
    tokio::time::timeout(timeout, write_message(stream, &data))
        .await
        .map_err(|_| ProtocolError::Timeout)??;
    let bytes = read_message(stream).await?;
    decode(&bytes)
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
