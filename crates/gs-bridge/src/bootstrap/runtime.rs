use std::sync::Arc;

use gs_core::config::AppConfig;
use gs_platform::InProcessMessenger;

use crate::channel::MethodChannel;
use crate::plugins::GallerySaverPlugin;

/// The assembled bridge.
///
/// Holds the message bus with the gallery channel attached. UI-side callers
/// obtain a [`MethodChannel`] client through [`client`](Self::client).
pub struct BridgeRuntime {
    config: AppConfig,
    messenger: Arc<InProcessMessenger>,
    plugin: GallerySaverPlugin,
}

impl BridgeRuntime {
    pub fn new(
        config: AppConfig,
        messenger: Arc<InProcessMessenger>,
        plugin: GallerySaverPlugin,
    ) -> Self {
        Self {
            config,
            messenger,
            plugin,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn messenger(&self) -> &Arc<InProcessMessenger> {
        &self.messenger
    }

    /// UI-side handle on the gallery channel.
    pub fn client(&self) -> MethodChannel {
        MethodChannel::new(self.plugin.channel_name(), self.messenger.clone())
    }
}
