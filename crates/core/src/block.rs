use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by content-block constructors.
#[derive(Debug, Error)]
pub enum BlockError {
    /// The media type passed to [`ContentBlock::image`] is not an image type.
    #[error("media type '{0}' is not an image type")]
    NotAnImage(String),
}

/// Coarse kind of a content block, used by consumers and by the duplicate
/// policy in the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// An inline-encoded image.
    Image,
    /// A file, either inline-encoded or store-referenced.
    File,
}

/// Location and metadata of an object held in the remote store.
///
/// This is the wire shape returned by the upload service; field names are
/// part of the HTTP contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StoredObject {
    /// Object key within the bucket. Unique per upload.
    #[serde(rename = "s3_key")]
    pub key: String,
    /// Bucket the object was written to.
    #[serde(rename = "s3_bucket")]
    pub bucket: String,
    /// Region of the bucket.
    #[serde(rename = "s3_region")]
    pub region: String,
    /// Upload metadata.
    pub metadata: StoredObjectMeta,
}

/// Metadata recorded for a stored object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StoredObjectMeta {
    /// Generated basename of the stored object (`{uuid}.{ext}`).
    pub filename: String,
    /// Original file name, preserved verbatim for display and duplicate
    /// detection.
    pub original_name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME content type recorded at upload time.
    pub mime_type: String,
    /// When the object was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

/// One attachment's typed representation.
///
/// A block is either inline-encoded (base64 data embedded in the message
/// payload) or a reference to an object in the remote store, never both.
/// Blocks are immutable once constructed; consumers discriminate
/// exhaustively on the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Inline base64-encoded image.
    Image {
        /// Image media type (always `image/...`).
        media_type: String,
        /// Base64 data, no transport prefix.
        data: String,
        /// Display name.
        name: String,
    },
    /// Inline base64-encoded file (PDF and friends).
    InlineFile {
        /// File media type.
        media_type: String,
        /// Base64 data, no transport prefix.
        data: String,
        /// Original file name.
        name: String,
    },
    /// Reference to an object held in the remote store.
    RemoteFile {
        /// Store location and metadata.
        object: StoredObject,
    },
}

impl ContentBlock {
    /// Build an inline image block.
    ///
    /// Rejects media types that do not start with `image/`.
    pub fn image(
        media_type: impl Into<String>,
        data: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, BlockError> {
        let media_type = media_type.into();
        if !media_type.starts_with("image/") {
            return Err(BlockError::NotAnImage(media_type));
        }
        Ok(Self::Image {
            media_type,
            data: data.into(),
            name: name.into(),
        })
    }

    /// Build an inline file block.
    pub fn inline_file(
        media_type: impl Into<String>,
        data: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::InlineFile {
            media_type: media_type.into(),
            data: data.into(),
            name: name.into(),
        }
    }

    /// Wrap a stored object as a remote-reference block.
    pub fn remote_file(object: StoredObject) -> Self {
        Self::RemoteFile { object }
    }

    /// The coarse kind of this block.
    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Image { .. } => BlockKind::Image,
            Self::InlineFile { .. } | Self::RemoteFile { .. } => BlockKind::File,
        }
    }

    /// Returns `true` when the block carries inline data rather than a store
    /// reference.
    pub fn is_inline(&self) -> bool {
        !matches!(self, Self::RemoteFile { .. })
    }

    /// The name shown to the user; for remote blocks this is the original
    /// file name, not the generated store basename.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Image { name, .. } | Self::InlineFile { name, .. } => name,
            Self::RemoteFile { object } => &object.metadata.original_name,
        }
    }

    /// The media type carried by the block.
    pub fn media_type(&self) -> &str {
        match self {
            Self::Image { media_type, .. } | Self::InlineFile { media_type, .. } => media_type,
            Self::RemoteFile { object } => &object.metadata.mime_type,
        }
    }
}
