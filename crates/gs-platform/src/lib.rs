//! # gs-platform
//!
//! Platform-specific implementations for the gallery saver bridge.
//!
//! This crate contains the pieces that stand in for, or talk to, the host:
//! the in-process message bus and platform directory resolution.

pub mod app_dirs;
pub mod ipc;

pub use app_dirs::DirsAppDirsAdapter;
pub use ipc::InProcessMessenger;
