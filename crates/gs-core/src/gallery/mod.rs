//! Gallery saver channel: method model, argument validation and reply taxonomy.
//! 图库保存通道：方法模型、参数校验与响应分类。

mod error_code;
mod method;

pub use error_code::{ErrorCode, Locale};
pub use method::{
    GalleryMethod, InvalidArgs, SaveImageArgs, SaveImageRequest, BYTES_ARG, FILE_NAME_ARG,
    SAVE_IMAGE_METHOD,
};

/// Channel name used when configuration does not provide one.
pub const DEFAULT_CHANNEL_NAME: &str = "com.mercadea/gallery_saver";
