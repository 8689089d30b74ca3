use std::path::PathBuf;

use bytes::Bytes;

use drawbridge_core::EncodingError;
use drawbridge_core::encoding;

use crate::error::ComposeError;

/// Where a file's bytes come from.
#[derive(Debug, Clone)]
pub enum FileSource {
    /// Bytes already in memory (paste, tests).
    Memory(Bytes),
    /// A file on disk, read lazily.
    Path(PathBuf),
}

/// One file handed to the composer by a user action.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    /// File name as reported by the source. Preserved verbatim.
    pub name: String,
    /// Declared media type; may be empty or generic, the classifier copes.
    pub media_type: String,
    source: FileSource,
}

impl IncomingFile {
    /// A file whose bytes are already in memory.
    pub fn from_bytes(
        name: impl Into<String>,
        media_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            source: FileSource::Memory(data.into()),
        }
    }

    /// A file on disk, read when the block is built.
    pub fn from_path(
        name: impl Into<String>,
        media_type: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            source: FileSource::Path(path.into()),
        }
    }

    /// A pasted `data:` URL. The transport prefix is stripped and the
    /// payload decoded before it enters the pipeline.
    pub fn from_data_url(
        name: impl Into<String>,
        media_type: impl Into<String>,
        url: &str,
    ) -> Result<Self, EncodingError> {
        let data = encoding::decode_data_url(url)?;
        Ok(Self::from_bytes(name, media_type, data))
    }

    /// Read the full byte stream.
    ///
    /// Suspends until every byte is available; a failing read surfaces as
    /// [`ComposeError::Read`].
    pub async fn read(&self) -> Result<Bytes, ComposeError> {
        match &self.source {
            FileSource::Memory(data) => Ok(data.clone()),
            FileSource::Path(path) => {
                let data = tokio::fs::read(path).await.map_err(|e| ComposeError::Read {
                    name: self.name.clone(),
                    source: e,
                })?;
                Ok(Bytes::from(data))
            }
        }
    }
}
