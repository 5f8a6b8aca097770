use std::io;
use std::path::PathBuf;

/// Errors from durable store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store path does not name a file.
    #[error("store path has no file name: {0}")]
    InvalidPath(PathBuf),

    /// I/O error while reading or staging a document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The atomic rename that commits a staged document failed. The
    /// previously committed document is untouched.
    #[error("failed to commit document: {0}")]
    Commit(#[source] io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
