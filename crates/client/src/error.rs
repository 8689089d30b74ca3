use thiserror::Error;

/// Errors returned by the upload client.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or the response body could not be read.
    #[error("connection error: {0}")]
    Connection(String),

    /// The service answered with a non-success status.
    ///
    /// 400-class statuses are validation rejections (missing file part,
    /// disallowed extension); 500-class statuses are store failures. Either
    /// way the upload did not happen.
    #[error("upload rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Human-readable message from the service's error body.
        message: String,
    },

    /// A success response carried an unexpected body.
    #[error("failed to deserialize response: {0}")]
    Deserialization(String),

    /// The client itself was misconfigured.
    #[error("invalid client configuration: {0}")]
    Configuration(String),
}
