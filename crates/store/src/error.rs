use thiserror::Error;

/// Errors that can occur during object-store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A storage backend error occurred.
    #[error("object store error: {0}")]
    Backend(String),

    /// The configured backend name is not recognized.
    #[error("unknown store backend '{0}' (expected 'memory' or 's3')")]
    UnknownBackend(String),
}
