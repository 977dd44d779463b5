use std::path::PathBuf;

use lfs_types::ObjectId;

/// Errors from object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The object is absent, unreadable, or not a regular file.
    ///
    /// The underlying I/O error, if any, is kept for logging only.
    #[error("object not found: {oid}")]
    NotFound {
        oid: ObjectId,
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl StoreError {
    pub(crate) fn not_found(oid: &ObjectId, path: PathBuf, source: std::io::Error) -> Self {
        Self::NotFound {
            oid: oid.clone(),
            path,
            source: Some(source),
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
