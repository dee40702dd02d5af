//! Upload input: the bytes of a picked file together with what the
//! browser (or the file name) claims it is.

use std::path::Path;
use std::sync::Arc;

/// A user-selected image file, before validation.
///
/// Bytes are shared, so handing the input to the decode worker does not
/// copy the payload.
#[derive(Debug, Clone)]
pub struct RawImageInput {
    bytes: Arc<[u8]>,
    declared_mime_type: String,
    byte_size: u64,
}

impl RawImageInput {
    pub fn new(bytes: impl Into<Vec<u8>>, declared_mime_type: impl Into<String>) -> Self {
        let bytes: Vec<u8> = bytes.into();
        let bytes: Arc<[u8]> = Arc::from(bytes);
        RawImageInput {
            byte_size: bytes.len() as u64,
            bytes,
            declared_mime_type: declared_mime_type.into(),
        }
    }

    /// Reads a file from disk, deriving the declared type from its
    /// extension the way a file picker does.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        Ok(RawImageInput::new(bytes, mime_from_extension(path)))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    pub fn declared_mime_type(&self) -> &str {
        &self.declared_mime_type
    }

    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }
}

/// MIME type for a file name; empty when unknown, like `File.type`.
pub fn mime_from_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_follows_bytes() {
        let input = RawImageInput::new(vec![0u8; 10], "image/png");
        assert_eq!(input.byte_size(), 10);
        assert_eq!(input.declared_mime_type(), "image/png");
    }

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_from_extension(Path::new("a/b/Photo.JPG")), "image/jpeg");
        assert_eq!(mime_from_extension(Path::new("x.webp")), "image/webp");
        assert_eq!(mime_from_extension(Path::new("notes.txt")), "");
        assert_eq!(mime_from_extension(Path::new("no_extension")), "");
    }

    #[tokio::test]
    async fn test_from_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("swatch.png");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let input = RawImageInput::from_path(&path).await.unwrap();
        assert_eq!(input.bytes(), &[1, 2, 3]);
        assert_eq!(input.declared_mime_type(), "image/png");
    }
}
