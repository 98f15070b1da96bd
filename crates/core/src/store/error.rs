use std::path::PathBuf;

use thiserror::Error;

use crate::document::validate::ValidationError;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The document could not be read, parsed or written.
    #[error("storage unavailable at {}: {reason}", path.display())]
    StorageUnavailable { path: PathBuf, reason: String },

    /// An update targeted an id that is not in the collection.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    InvalidPatch(#[from] ValidationError),

    #[error("failed to encode {0}: {1}")]
    Encode(&'static str, serde_json::Error),
}

impl StoreError {
    pub(crate) fn storage(path: &std::path::Path, reason: impl ToString) -> Self {
        Self::StorageUnavailable {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}
