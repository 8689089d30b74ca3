use thiserror::Error;

/// Errors raised while building content blocks.
///
/// Duplicates are not errors: they are policy rejections reported through
/// [`crate::BatchReport`]. Nothing here is fatal to the process; every
/// failure is scoped to one user action.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// The classifier rejected the file.
    #[error("unsupported file type: {name}")]
    Unsupported {
        /// Name of the rejected file.
        name: String,
    },

    /// Reading the file's bytes failed.
    #[error("failed to read '{name}': {source}")]
    Read {
        /// Name of the unreadable file.
        name: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The upload round trip failed.
    #[error("failed to upload '{name}': {source}")]
    Upload {
        /// Name of the file whose upload failed.
        name: String,
        /// Underlying transport or service error.
        #[source]
        source: drawbridge_client::Error,
    },

    /// A block constructor rejected its inputs.
    #[error(transparent)]
    Block(#[from] drawbridge_core::BlockError),
}
