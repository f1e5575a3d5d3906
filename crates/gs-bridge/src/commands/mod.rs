//! Method handlers exposed over the gallery channel
//! 图库通道上暴露的方法处理器

pub mod error;
pub mod gallery;

pub use error::map_err;
pub use gallery::GallerySaverHandler;
