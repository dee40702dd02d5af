//! `data:` URIs with base64 payloads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{MediaError, MediaResult};

const FALLBACK_MIME: &str = "application/octet-stream";

/// A parsed `data:<mime>;base64,<payload>` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Encodes bytes as `data:<mime>;base64,<payload>`.
/// An empty MIME type becomes `application/octet-stream`.
pub fn encode_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = match mime_type.trim() {
        "" => FALLBACK_MIME,
        m => m,
    };
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Parses a base64 data URI back into its MIME type and bytes.
pub fn parse_data_uri(uri: &str) -> MediaResult<DataUri> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| MediaError::InvalidDataUri("missing 'data:' scheme".to_string()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| MediaError::InvalidDataUri("missing ',' separator".to_string()))?;

    let mime_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| MediaError::InvalidDataUri("only base64 payloads are supported".to_string()))?;

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| MediaError::InvalidDataUri(format!("base64 decode failed: {e}")))?;

    Ok(DataUri {
        mime_type: if mime_type.is_empty() {
            FALLBACK_MIME.to_string()
        } else {
            mime_type.to_string()
        },
        bytes,
    })
}
