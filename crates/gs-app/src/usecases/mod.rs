//! Business logic use cases
//! 业务用例
//!
//! One use case per channel method:
//!
//! ```text
//! saveImage ──► SaveImage (validate → persist → map outcome)
//! ```

pub mod save_image;

pub use save_image::{SaveImage, SaveImageError, SavedImage};
