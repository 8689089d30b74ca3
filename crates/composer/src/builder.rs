use std::sync::Arc;

use tracing::{debug, instrument};

use drawbridge_core::media::{self, Category, PDF_MEDIA_TYPE};
use drawbridge_core::{ContentBlock, encoding};

use crate::error::ComposeError;
use crate::source::IncomingFile;
use crate::uploader::Uploader;

/// Builds one content block per accepted file.
///
/// The per-file pipeline is linear, with no retries at this layer:
/// classify, then either read-and-encode inline or relay to the uploader.
pub struct ContentBlockBuilder {
    uploader: Arc<dyn Uploader>,
}

impl ContentBlockBuilder {
    /// Create a builder that relays store-bound files to `uploader`.
    pub fn new(uploader: Arc<dyn Uploader>) -> Self {
        Self { uploader }
    }

    /// Build the content block for one file.
    #[instrument(skip(self, file), fields(name = %file.name))]
    pub async fn build(&self, file: &IncomingFile) -> Result<ContentBlock, ComposeError> {
        let category = media::classify(&file.name, &file.media_type);
        debug!(?category, "classified file");

        match category {
            Category::Unsupported => Err(ComposeError::Unsupported {
                name: file.name.clone(),
            }),
            Category::Image => {
                let data = file.read().await?;
                let block =
                    ContentBlock::image(&file.media_type, encoding::encode(&data), &file.name)?;
                Ok(block)
            }
            Category::Pdf => {
                let data = file.read().await?;
                // Media type pinned to the document type regardless of what
                // the source declared.
                Ok(ContentBlock::inline_file(
                    PDF_MEDIA_TYPE,
                    encoding::encode(&data),
                    &file.name,
                ))
            }
            Category::CadLike | Category::CodeLike => {
                let media_type = upload_media_type(file, category);
                let data = file.read().await?;
                let object = self
                    .uploader
                    .upload(&file.name, &media_type, data)
                    .await
                    .map_err(|e| ComposeError::Upload {
                        name: file.name.clone(),
                        source: e,
                    })?;
                Ok(ContentBlock::remote_file(object))
            }
        }
    }
}

/// The media type sent with an upload.
///
/// CAD files routinely arrive with an empty or `text/plain` declared type;
/// the extension is authoritative there.
fn upload_media_type(file: &IncomingFile, category: Category) -> String {
    if category == Category::CadLike
        && (file.media_type.is_empty() || file.media_type == "text/plain")
    {
        return media::media_type_for_cad(&file.name)
            .unwrap_or("application/octet-stream")
            .to_owned();
    }
    file.media_type.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cad_media_type_repaired_from_extension() {
        let file = IncomingFile::from_bytes("plan.dwg", "", &b"x"[..]);
        assert_eq!(upload_media_type(&file, Category::CadLike), "image/vnd.dwg");

        let file = IncomingFile::from_bytes("plan.dxf", "text/plain", &b"x"[..]);
        assert_eq!(upload_media_type(&file, Category::CadLike), "image/vnd.dxf");
    }

    #[test]
    fn declared_media_type_kept_when_meaningful() {
        let file = IncomingFile::from_bytes("plan.dwg", "application/acad", &b"x"[..]);
        assert_eq!(upload_media_type(&file, Category::CadLike), "application/acad");

        let file = IncomingFile::from_bytes("tool.py", "text/x-python", &b"x"[..]);
        assert_eq!(upload_media_type(&file, Category::CodeLike), "text/x-python");
    }
}
