//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The use cases and the channel
//! dispatcher depend only on these traits; `gs-infra` and `gs-platform`
//! provide the implementations.

pub mod app_dirs;
pub mod errors;
mod image_store;
pub mod messenger;

pub use app_dirs::AppDirsPort;
pub use errors::{AppDirsError, ImageStoreError, MessengerError};
pub use image_store::ImageStorePort;
pub use messenger::{BinaryMessageHandler, BinaryMessengerPort};
