//! Channel registration with the host
//! 向宿主注册通道

mod gallery_saver;
#[cfg(feature = "tauri")]
pub mod tauri_adapter;

pub use gallery_saver::GallerySaverPlugin;
