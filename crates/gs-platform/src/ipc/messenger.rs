use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use gs_core::ports::{BinaryMessageHandler, BinaryMessengerPort, MessengerError};
use tracing::{debug, trace};

/// Message bus living in the same process as its handlers.
/// 与处理器同进程的消息总线。
///
/// Stands in for the embedding runtime's messenger: the UI side calls
/// [`BinaryMessengerPort::send`], native code registers handlers. Each send
/// is delivered to the handler registered at that moment; the handler table
/// lock is released before the handler runs.
#[derive(Default)]
pub struct InProcessMessenger {
    handlers: RwLock<HashMap<String, Arc<dyn BinaryMessageHandler>>>,
}

impl InProcessMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_handler(&self, channel: &str) -> bool {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(channel)
    }
}

#[async_trait]
impl BinaryMessengerPort for InProcessMessenger {
    fn set_message_handler(&self, channel: &str, handler: Option<Arc<dyn BinaryMessageHandler>>) {
        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        match handler {
            Some(handler) => {
                if handlers.insert(channel.to_string(), handler).is_some() {
                    debug!(channel, "Replaced message handler");
                } else {
                    debug!(channel, "Registered message handler");
                }
            }
            None => {
                handlers.remove(channel);
                debug!(channel, "Removed message handler");
            }
        }
    }

    async fn send(&self, channel: &str, message: Vec<u8>) -> Result<Vec<u8>, MessengerError> {
        let handler = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(channel)
            .cloned()
            .ok_or_else(|| MessengerError::NoHandler(channel.to_string()))?;

        trace!(channel, len = message.len(), "Dispatching message");
        Ok(handler.on_message(message).await)
    }
}
