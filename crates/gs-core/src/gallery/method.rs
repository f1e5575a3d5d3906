use thiserror::Error;

use crate::channel::{ArgumentMap, EncodableValue, MethodCall};

pub const SAVE_IMAGE_METHOD: &str = "saveImage";
pub const BYTES_ARG: &str = "bytes";
pub const FILE_NAME_ARG: &str = "fileName";

/// Methods understood by the gallery channel, one variant per method.
/// 图库通道支持的方法，每个方法对应一个变体。
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryMethod {
    SaveImage(SaveImageArgs),
    /// Any other method name. Answered with not-implemented.
    Unknown(String),
}

impl GalleryMethod {
    /// Route a call by method name.
    pub fn from_call(call: MethodCall) -> Self {
        match call.method.as_str() {
            SAVE_IMAGE_METHOD => {
                GalleryMethod::SaveImage(SaveImageArgs::from_arguments(call.arguments))
            }
            _ => GalleryMethod::Unknown(call.method),
        }
    }

    /// Whether the gallery channel serves `method`.
    pub fn is_supported(method: &str) -> bool {
        method == SAVE_IMAGE_METHOD
    }

    pub fn name(&self) -> &str {
        match self {
            GalleryMethod::SaveImage(_) => SAVE_IMAGE_METHOD,
            GalleryMethod::Unknown(name) => name,
        }
    }
}

/// `saveImage` arguments as they arrived, before validation.
///
/// A field holding the wrong type is treated the same as a missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveImageArgs {
    pub bytes: Option<Vec<u8>>,
    pub file_name: Option<String>,
}

impl SaveImageArgs {
    pub fn from_arguments(mut arguments: ArgumentMap) -> Self {
        Self {
            bytes: arguments.remove(BYTES_ARG).and_then(EncodableValue::into_bytes),
            file_name: arguments
                .remove(FILE_NAME_ARG)
                .and_then(EncodableValue::into_string),
        }
    }

    /// Validate without touching storage.
    pub fn validate(self) -> Result<SaveImageRequest, InvalidArgs> {
        let bytes = match self.bytes {
            None => return Err(InvalidArgs::MissingBytes),
            Some(bytes) if bytes.is_empty() => return Err(InvalidArgs::EmptyBytes),
            Some(bytes) => bytes,
        };
        let file_name = match self.file_name {
            None => return Err(InvalidArgs::MissingFileName),
            Some(name) if name.is_empty() => return Err(InvalidArgs::EmptyFileName),
            Some(name) => name,
        };
        Ok(SaveImageRequest { bytes, file_name })
    }
}

/// Which part of the request was malformed. Only ever logged; the caller
/// sees a single `invalid_args` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgs {
    #[error("`bytes` argument is missing or not binary")]
    MissingBytes,
    #[error("`bytes` argument is empty")]
    EmptyBytes,
    #[error("`fileName` argument is missing or not a string")]
    MissingFileName,
    #[error("`fileName` argument is empty")]
    EmptyFileName,
}

/// A validated `saveImage` request: non-empty payload, non-empty file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveImageRequest {
    bytes: Vec<u8>,
    file_name: String,
}

impl SaveImageRequest {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn into_parts(self) -> (Vec<u8>, String) {
        (self.bytes, self.file_name)
    }
}
