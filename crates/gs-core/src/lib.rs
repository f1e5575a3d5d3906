//! # gs-core
//!
//! Core domain models and the channel contract for the gallery saver bridge.
//!
//! This crate contains pure contract logic without any infrastructure dependencies:
//! the dynamically typed boundary values, the wire codec, the gallery method
//! model with its argument validation, and the ports implemented by outer layers.

// Public module exports
pub mod app_dirs;
pub mod channel;
pub mod config;
pub mod gallery;
pub mod ports;

// Re-export commonly used types at the crate root
pub use channel::{ArgumentMap, EncodableValue, MethodCall, MethodError, MethodResponse};
pub use config::AppConfig;
pub use gallery::{ErrorCode, GalleryMethod, Locale, SaveImageArgs, SaveImageRequest};
