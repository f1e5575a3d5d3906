//! # gs-bridge
//!
//! Native side of the gallery saver channel.
//!
//! This crate provides:
//! - The method channel dispatcher layered over a host message bus
//! - The gallery saver method handler and its plugin registration
//! - Bootstrap: configuration loading, tracing, dependency wiring
//!
//! ## Modules
//!
//! - **channel**: `MethodChannel` and the codec adapter installed on the bus
//! - **commands**: method handlers (`saveImage`)
//! - **plugins**: channel registration, optional Tauri adapter
//! - **bootstrap**: config, tracing, wiring

pub mod bootstrap;
pub mod channel;
pub mod commands;
pub mod plugins;

// Re-export commonly used types
pub use bootstrap::BridgeRuntime;
pub use channel::{ChannelError, MethodCallHandler, MethodChannel};
pub use plugins::GallerySaverPlugin;
