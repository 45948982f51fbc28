use thiserror::Error;

/// Errors emitted by storage backends.
#[derive(Debug, Error)]
pub(crate) enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid storage key `{key}`")]
    InvalidKey { key: String },
}
