use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use drawbridge_store::StoreError;

/// Errors surfaced by the upload route.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The multipart body carried no `file` part.
    #[error("missing file part in multipart body")]
    MissingFile,

    /// The file's extension is not an accepted drawing format.
    #[error("file type not allowed: '{0}' (expected a CAD drawing)")]
    DisallowedExtension(String),

    /// The multipart body could not be parsed.
    #[error("malformed multipart body: {0}")]
    Multipart(String),

    /// Writing to the object store failed.
    ///
    /// Callers must treat this as a failed upload; no partial write is
    /// visible.
    #[error("upload failed: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingFile | Self::DisallowedExtension(_) | Self::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
