//! Error types for the backing-file store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing the backing document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be stat'ed, read or written.
    #[error("storage unavailable: {path}: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file was readable but is not a well-formed document.
    #[error("corrupt data in {path}: {source}")]
    CorruptData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::StorageUnavailable {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StoreError::CorruptData {
            path: path.into(),
            source,
        }
    }
}
