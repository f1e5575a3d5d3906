//! Gallery saver application layer
//!
//! This crate contains the use cases behind the channel methods. It depends
//! only on `gs-core` ports; concrete collaborators are injected by the bridge.

pub mod usecases;

pub use usecases::{SaveImage, SaveImageError, SavedImage};
