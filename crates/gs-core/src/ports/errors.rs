use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("data local directory unavailable")]
    DataLocalDirUnavailable,

    #[error("pictures directory unavailable")]
    PicturesDirUnavailable,
}

/// Failure causes reported by a storage collaborator.
///
/// The gallery channel collapses all of these into `save_failed`; the
/// variants exist for logs.
#[derive(Debug, Error)]
pub enum ImageStoreError {
    #[error("file name has no usable component: {0:?}")]
    InvalidFileName(String),

    #[error("no free file name for {0:?} in gallery directory")]
    NameExhausted(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum MessengerError {
    #[error("no handler registered on channel {0:?}")]
    NoHandler(String),
}
