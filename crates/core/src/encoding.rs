//! Base64 helpers for inline-encoded blocks.
//!
//! Inline block data is always bare standard base64. Some ingestion paths
//! (paste, in particular) hand over `data:` URLs; the transport prefix is
//! stripped before the payload enters a block.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Errors from decoding inline payloads.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// The payload is not valid base64.
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// Encode raw bytes as standard base64, without any transport prefix.
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode a bare base64 payload.
pub fn decode(text: &str) -> Result<Vec<u8>, EncodingError> {
    Ok(STANDARD.decode(text.trim())?)
}

/// Strip a `data:<media-type>;base64,` transport prefix if present.
///
/// Idempotent: text without a prefix is returned unchanged.
pub fn strip_data_url(text: &str) -> &str {
    if let Some(rest) = text.strip_prefix("data:")
        && let Some(idx) = rest.find(";base64,")
    {
        return &rest[idx + ";base64,".len()..];
    }
    text
}

/// Strip any transport prefix, then decode.
pub fn decode_data_url(text: &str) -> Result<Vec<u8>, EncodingError> {
    decode(strip_data_url(text))
}
