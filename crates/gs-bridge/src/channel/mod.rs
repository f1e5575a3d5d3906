//! Method channel over a binary message bus.
//! 基于二进制消息总线的方法通道。
//!
//! The native side installs a [`MethodCallHandler`] with
//! [`MethodChannel::set_method_call_handler`]; the UI side calls
//! [`MethodChannel::invoke_method`]. Both share one codec, so whatever the
//! handler returns is what the caller decodes.

use std::sync::Arc;

use async_trait::async_trait;
use gs_core::channel::{ArgumentMap, CodecError, MethodCall, MethodResponse, PendingCall};
use gs_core::gallery::ErrorCode;
use gs_core::ports::{BinaryMessageHandler, BinaryMessengerPort, MessengerError};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Handles decoded calls for one channel.
///
/// Returning the response from the `async fn` is the only way to reply, so
/// every call gets exactly one response.
#[async_trait]
pub trait MethodCallHandler: Send + Sync {
    /// Whether `method` is served here. Any other method is answered with
    /// not-implemented before its arguments are decoded.
    fn handles(&self, method: &str) -> bool;

    /// Error reply in the handler's locale, for failures the dispatcher
    /// detects itself.
    fn error_reply(&self, code: ErrorCode) -> MethodResponse;

    async fn on_method_call(&self, call: MethodCall) -> MethodResponse;
}

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Messenger(#[from] MessengerError),
}

/// A named logical channel on a message bus.
#[derive(Clone)]
pub struct MethodChannel {
    name: String,
    messenger: Arc<dyn BinaryMessengerPort>,
}

impl MethodChannel {
    pub fn new(name: impl Into<String>, messenger: Arc<dyn BinaryMessengerPort>) -> Self {
        Self {
            name: name.into(),
            messenger,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Install `handler` for this channel, replacing any previous handler.
    /// `None` unregisters the channel.
    pub fn set_method_call_handler(&self, handler: Option<Arc<dyn MethodCallHandler>>) {
        let adapter = handler.map(|handler| {
            Arc::new(MethodCallDispatch {
                channel: self.name.clone(),
                handler,
            }) as Arc<dyn BinaryMessageHandler>
        });
        self.messenger.set_message_handler(&self.name, adapter);
    }

    /// Send a call over the bus and decode the reply.
    pub async fn invoke_method(
        &self,
        method: &str,
        arguments: ArgumentMap,
    ) -> Result<MethodResponse, ChannelError> {
        let message = MethodCall::new(method, arguments).to_bytes()?;
        let reply = self.messenger.send(&self.name, message).await?;
        Ok(MethodResponse::from_bytes(&reply)?)
    }
}

/// Bus-level handler: decode call, route to the method handler, encode reply.
struct MethodCallDispatch {
    channel: String,
    handler: Arc<dyn MethodCallHandler>,
}

impl MethodCallDispatch {
    async fn dispatch(&self, message: &[u8]) -> MethodResponse {
        let pending = match PendingCall::from_bytes(message) {
            Ok(pending) => pending,
            Err(err) => {
                warn!(channel = %self.channel, error = %err, "Rejected undecodable call");
                return self.handler.error_reply(ErrorCode::InvalidArgs);
            }
        };

        if !self.handler.handles(&pending.method) {
            debug!(channel = %self.channel, method = %pending.method, "Method not implemented");
            return MethodResponse::NotImplemented;
        }

        match pending.into_call() {
            Ok(call) => self.handler.on_method_call(call).await,
            Err(err) => {
                warn!(channel = %self.channel, error = %err, "Rejected undecodable arguments");
                self.handler.error_reply(ErrorCode::InvalidArgs)
            }
        }
    }
}

#[async_trait]
impl BinaryMessageHandler for MethodCallDispatch {
    async fn on_message(&self, message: Vec<u8>) -> Vec<u8> {
        let response = self.dispatch(&message).await;

        match response.to_bytes() {
            Ok(reply) => reply,
            Err(err) => {
                error!(channel = %self.channel, error = %err, "Failed to encode reply");
                self.handler
                    .error_reply(ErrorCode::SaveFailed)
                    .to_bytes()
                    .unwrap_or_default()
            }
        }
    }
}
