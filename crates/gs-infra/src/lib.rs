//! # gs-infra
//!
//! Storage collaborators implementing [`gs_core::ports::ImageStorePort`].

pub mod fs;

pub use fs::gallery_store::{FsGalleryStore, UnavailableGalleryStore};
