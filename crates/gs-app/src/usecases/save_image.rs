//! Use case for persisting an image received over the gallery channel
//! 保存通过图库通道接收的图片的用例

use std::sync::Arc;

use gs_core::gallery::{ErrorCode, InvalidArgs, SaveImageArgs};
use gs_core::ports::ImageStorePort;
use thiserror::Error;
use tracing::{error, info, warn};

/// Terminal failure of a `saveImage` call.
#[derive(Debug, Error)]
pub enum SaveImageError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(#[from] InvalidArgs),

    #[error("save failed: {0}")]
    SaveFailed(String),
}

impl SaveImageError {
    /// Wire error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            SaveImageError::InvalidArgs(_) => ErrorCode::InvalidArgs,
            SaveImageError::SaveFailed(_) => ErrorCode::SaveFailed,
        }
    }
}

/// Location of a successfully saved image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedImage {
    pub path: String,
}

/// Use case for saving an image payload to the gallery.
///
/// ## Behavior / 行为
/// - Validates arguments before any I/O (`invalid_args` on failure)
/// - Makes exactly one storage attempt, on the blocking pool
/// - Maps an empty location, a storage error or a storage panic to `save_failed`
///
/// Holds no per-call state, so one instance serves concurrent calls.
pub struct SaveImage {
    store: Arc<dyn ImageStorePort>,
}

impl SaveImage {
    pub fn new(store: Arc<dyn ImageStorePort>) -> Self {
        Self { store }
    }

    /// Execute the use case.
    ///
    /// # Returns / 返回值
    /// - `Ok(SavedImage)` with a non-empty path
    /// - `Err(SaveImageError::InvalidArgs)` if validation fails
    /// - `Err(SaveImageError::SaveFailed)` if storage fails for any reason
    #[tracing::instrument(
        name = "usecase.save_image.execute",
        skip(self, args),
        fields(
            file_name = ?args.file_name,
            bytes_len = ?args.bytes.as_ref().map(Vec::len),
        )
    )]
    pub async fn execute(&self, args: SaveImageArgs) -> Result<SavedImage, SaveImageError> {
        let request = args.validate().map_err(|err| {
            warn!(reason = %err, "Rejected saveImage arguments");
            SaveImageError::from(err)
        })?;

        let (bytes, file_name) = request.into_parts();
        let store = Arc::clone(&self.store);
        let joined =
            tokio::task::spawn_blocking(move || store.persist(&bytes, &file_name)).await;

        match joined {
            Ok(Ok(path)) if !path.is_empty() => {
                info!(path = %path, "Image saved");
                Ok(SavedImage { path })
            }
            Ok(Ok(_)) => {
                warn!("Storage returned an empty location");
                Err(SaveImageError::SaveFailed(
                    "storage returned an empty location".to_string(),
                ))
            }
            Ok(Err(err)) => {
                warn!(error = %err, "Storage failed to persist image");
                Err(SaveImageError::SaveFailed(err.to_string()))
            }
            Err(join_err) => {
                error!(error = %join_err, "Storage task aborted");
                Err(SaveImageError::SaveFailed(format!(
                    "storage task aborted: {}",
                    join_err
                )))
            }
        }
    }
}
