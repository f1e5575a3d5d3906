use std::sync::Arc;

use crate::ports::errors::ImageStoreError;

/// Storage collaborator that persists an image payload.
/// 持久化图片数据的存储协作者。
///
/// Contract:
/// - Blocking. Callers running on an async executor must offload the call
///   (e.g. `spawn_blocking`); never call it from a thread that must stay responsive.
/// - All-or-nothing: on `Err` no partially written file may be reachable.
/// - On success returns the non-empty location of the saved file.
/// - Concurrent calls with the same `file_name` must not clobber each other;
///   serializing or renaming is the implementation's job.
pub trait ImageStorePort: Send + Sync {
    fn persist(&self, bytes: &[u8], file_name: &str) -> Result<String, ImageStoreError>;
}

impl<T: ImageStorePort + ?Sized> ImageStorePort for Arc<T> {
    fn persist(&self, bytes: &[u8], file_name: &str) -> Result<String, ImageStoreError> {
        (**self).persist(bytes, file_name)
    }
}
