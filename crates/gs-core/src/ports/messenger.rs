//! Host message bus abstraction.
//! 宿主消息总线抽象。
//!
//! The bus maps channel names to byte-level handlers. It knows nothing about
//! method calls; the method channel layers a codec on top of it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::ports::errors::MessengerError;

/// Receives raw messages for one channel and produces exactly one raw reply.
#[async_trait]
pub trait BinaryMessageHandler: Send + Sync {
    async fn on_message(&self, message: Vec<u8>) -> Vec<u8>;
}

#[async_trait]
pub trait BinaryMessengerPort: Send + Sync {
    /// Install `handler` on `channel`, replacing any previous one.
    /// `None` removes the registration.
    fn set_message_handler(&self, channel: &str, handler: Option<Arc<dyn BinaryMessageHandler>>);

    /// Deliver `message` to the handler on `channel` and wait for its reply.
    async fn send(&self, channel: &str, message: Vec<u8>) -> Result<Vec<u8>, MessengerError>;
}
