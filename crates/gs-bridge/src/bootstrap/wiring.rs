//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create the storage collaborator named by config / 按配置创建存储协作者
//! - ✅ Create the message bus and the gallery channel / 创建消息总线与图库通道
//! - ✅ Inject the use case into the channel handler / 将用例注入通道处理器
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//!
//! > **This is the only place allowed to depend on gs-infra + gs-platform + gs-app simultaneously.**
//! > **这是唯一允许同时依赖 gs-infra、gs-platform 和 gs-app 的地方。**

use std::sync::Arc;

use gs_app::SaveImage;
use gs_core::config::AppConfig;
use gs_core::gallery::Locale;
use gs_core::ports::ImageStorePort;
use gs_infra::{FsGalleryStore, UnavailableGalleryStore};
use gs_platform::InProcessMessenger;
use tracing::info;

use super::runtime::BridgeRuntime;
use crate::channel::MethodChannel;
use crate::commands::GallerySaverHandler;
use crate::plugins::GallerySaverPlugin;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Unknown storage backend: {0:?} (expected \"filesystem\" or \"unavailable\")")]
    UnknownStorageBackend(String),

    #[error("Unsupported locale: {0:?}")]
    UnsupportedLocale(String),
}

/// Build the storage collaborator named by `config.storage_backend`.
pub fn build_store(config: &AppConfig) -> WiringResult<Arc<dyn ImageStorePort>> {
    match config.storage_backend.as_str() {
        "filesystem" => Ok(Arc::new(FsGalleryStore::new(config.gallery_dir.clone()))),
        "unavailable" => Ok(Arc::new(UnavailableGalleryStore)),
        other => Err(WiringError::UnknownStorageBackend(other.to_string())),
    }
}

fn parse_locale(tag: &str) -> WiringResult<Locale> {
    Locale::from_tag(tag).ok_or_else(|| WiringError::UnsupportedLocale(tag.to_string()))
}

/// Assemble the bridge and attach the gallery channel.
pub fn wire_runtime(config: AppConfig) -> WiringResult<BridgeRuntime> {
    let store = build_store(&config)?;
    let locale = parse_locale(&config.locale)?;

    let messenger = Arc::new(InProcessMessenger::new());
    let channel = MethodChannel::new(config.channel_name.clone(), messenger.clone());
    let handler = GallerySaverHandler::new(SaveImage::new(store), locale);
    let plugin = GallerySaverPlugin::new(channel, handler);
    plugin.attach();

    info!(
        channel = %config.channel_name,
        backend = %config.storage_backend,
        gallery_dir = %config.gallery_dir.display(),
        "Bridge wired"
    );

    Ok(BridgeRuntime::new(config, messenger, plugin))
}
