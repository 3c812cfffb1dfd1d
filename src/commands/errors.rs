/// Errors surfaced by command handlers.
use thiserror::Error;

use crate::store::StoreError;

/// Everything that makes a command exit non-zero.
#[derive(Debug, Error)]
pub enum CommandError {
    /// `create` could not append the record.
    #[error("Error creating entry: {0}")]
    Create(#[source] StoreError),

    /// `find` resolved no record for the id.
    #[error("No entry found for id: {id}")]
    NotFound {
        /// The queried id.
        id: String,
    },

    /// `find` could not read the store.
    #[error("Error finding entry: {0}")]
    Find(#[source] StoreError),
}

impl CommandError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Create(_) | Self::NotFound { .. } | Self::Find(_) => 1,
        }
    }

    /// Machine-readable code for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Create(_) => "write_failed",
            Self::NotFound { .. } => "not_found",
            Self::Find(_) => "read_failed",
        }
    }
}
