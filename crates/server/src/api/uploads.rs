use axum::Json;
use axum::extract::{Multipart, State};
use bytes::Bytes;
use chrono::Utc;
use tracing::{debug, info, instrument};

use drawbridge_core::media;
use drawbridge_core::{StoredObject, StoredObjectMeta};
use drawbridge_store::GeneratedKey;

use super::AppState;
use super::schemas::ErrorResponse;
use crate::error::UploadError;

/// One file extracted from the multipart body.
struct IncomingPart {
    file_name: String,
    declared_media_type: String,
    data: Bytes,
}

/// `POST /v1/uploads` -- store one drawing file and return its location.
///
/// The body must be multipart with a single part named `file`. The file's
/// name must end in a recognized CAD extension; everything else is rejected
/// before the store is touched. Each accepted upload gets a fresh store key,
/// so no existing object is ever overwritten.
#[utoipa::path(
    post,
    path = "/v1/uploads",
    tag = "Uploads",
    summary = "Upload a drawing",
    description = "Stores one CAD drawing in the object store and returns its key, bucket, region, and metadata.",
    request_body(content = Object, content_type = "multipart/form-data", description = "Multipart body with one part named 'file'"),
    responses(
        (status = 200, description = "File stored", body = StoredObject),
        (status = 400, description = "Missing file part or disallowed extension", body = ErrorResponse),
        (status = 500, description = "Object store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state, multipart))]
pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<StoredObject>, UploadError> {
    let part = extract_file_part(multipart)
        .await?
        .ok_or(UploadError::MissingFile)?;

    if media::cad_extension(&part.file_name).is_none() {
        return Err(UploadError::DisallowedExtension(part.file_name));
    }

    let mime_type = resolve_mime_type(&part.file_name, &part.declared_media_type);
    let uploaded_at = Utc::now();
    let generated = GeneratedKey::generate(&part.file_name, uploaded_at);
    let size = part.data.len() as u64;

    debug!(key = %generated.key, size, "writing upload to object store");
    state.store.put(&generated.key, &mime_type, part.data).await?;

    info!(
        key = %generated.key,
        original_name = %part.file_name,
        size,
        "upload stored"
    );

    Ok(Json(StoredObject {
        key: generated.key,
        bucket: state.store_config.bucket.clone(),
        region: state.store_config.region.clone(),
        metadata: StoredObjectMeta {
            filename: generated.filename,
            original_name: part.file_name,
            size,
            mime_type,
            uploaded_at,
        },
    }))
}

/// Pull the `file` part out of the multipart body, if present.
async fn extract_file_part(mut multipart: Multipart) -> Result<Option<IncomingPart>, UploadError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Multipart(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_owned();
        let declared_media_type = field.content_type().unwrap_or_default().to_owned();
        let data = field
            .bytes()
            .await
            .map_err(|e| UploadError::Multipart(e.to_string()))?;

        return Ok(Some(IncomingPart {
            file_name,
            declared_media_type,
            data,
        }));
    }

    Ok(None)
}

/// The MIME type recorded for the stored object.
///
/// Browsers routinely report drawing files as `text/plain` or nothing at
/// all; in that case the type is derived from the extension.
fn resolve_mime_type(file_name: &str, declared: &str) -> String {
    if declared.is_empty() || declared == "text/plain" {
        return media::media_type_for_cad(file_name)
            .unwrap_or("application/octet-stream")
            .to_owned();
    }
    declared.to_owned()
}
