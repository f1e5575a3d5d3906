use std::sync::Arc;

use tracing::info;

use crate::channel::{MethodCallHandler, MethodChannel};
use crate::commands::GallerySaverHandler;

/// Owns the registration of the gallery channel on the host bus.
///
/// Call [`attach`](Self::attach) each time the host UI surface is
/// configured. Attaching again replaces the earlier registration.
pub struct GallerySaverPlugin {
    channel: MethodChannel,
    handler: Arc<GallerySaverHandler>,
}

impl GallerySaverPlugin {
    pub fn new(channel: MethodChannel, handler: GallerySaverHandler) -> Self {
        Self {
            channel,
            handler: Arc::new(handler),
        }
    }

    pub fn channel_name(&self) -> &str {
        self.channel.name()
    }

    pub fn attach(&self) {
        let handler: Arc<dyn MethodCallHandler> = self.handler.clone();
        self.channel.set_method_call_handler(Some(handler));
        info!(channel = %self.channel.name(), "Gallery channel attached");
    }

    pub fn detach(&self) {
        self.channel.set_method_call_handler(None);
        info!(channel = %self.channel.name(), "Gallery channel detached");
    }
}
