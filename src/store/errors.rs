/// Errors from the storage layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or appending to a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record could not be appended to the store file.
    #[error("failed to append to '{}': {source}", .path.display())]
    Write {
        /// Store file that was being appended to.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but could not be read as UTF-8 text.
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        /// Store file that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Path of the store file involved in the failure.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Write { path, .. } | Self::Read { path, .. } => path,
        }
    }
}
