//! # Media Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UploadRejection   file refused before any decoding                     │
//! │  ├── UnsupportedType   not JPEG / PNG / WebP                            │
//! │  └── TooLarge          more than 5 MiB                                  │
//! │                                                                         │
//! │  MediaError        anything that stops a normalization                  │
//! │  ├── Rejected          wraps UploadRejection                            │
//! │  ├── Decode            bytes are not a readable image                   │
//! │  ├── Encode            JPEG encoder failed                              │
//! │  ├── InvalidOptions    zero max width / height                          │
//! │  ├── InvalidDataUri    parse_data_uri input malformed                   │
//! │  ├── Io                reading the upload from disk                     │
//! │  └── Task              blocking worker panicked or was cancelled        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Why an upload was refused by validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("Unsupported image type '{mime_type}'")]
    UnsupportedType { mime_type: String },

    #[error("Image is {size} bytes, limit is {max} bytes")]
    TooLarge { size: u64, max: u64 },
}

impl UploadRejection {
    /// Message shown inline under the upload field.
    pub fn user_message(&self) -> String {
        match self {
            UploadRejection::UnsupportedType { .. } => {
                "Поддерживаются только файлы JPG, PNG и WebP".to_string()
            }
            UploadRejection::TooLarge { max, .. } => {
                format!("Размер файла не должен превышать {}", format_size(*max))
            }
        }
    }
}

/// Byte count in the largest binary unit that keeps it at least 1,
/// with one decimal when it is not a whole number of that unit.
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    let (unit, suffix) = if bytes >= MB {
        (MB, "MB")
    } else if bytes >= KB {
        (KB, "KB")
    } else {
        return format!("{}B", bytes);
    };

    if bytes % unit == 0 {
        format!("{}{}", bytes / unit, suffix)
    } else {
        format!("{:.1}{}", bytes as f64 / unit as f64, suffix)
    }
}

/// Image pipeline errors.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Upload rejected: {0}")]
    Rejected(#[from] UploadRejection),

    /// The bytes could not be decoded as an image.
    #[error("Failed to decode image: {reason}")]
    Decode { reason: String },

    #[error("Failed to encode image: {reason}")]
    Encode { reason: String },

    #[error("Invalid normalize options: {0}")]
    InvalidOptions(String),

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image worker failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for MediaError {
    fn from(err: tokio::task::JoinError) -> Self {
        MediaError::Task(err.to_string())
    }
}

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(5 * 1024 * 1024), "5MB");
        assert_eq!(format_size(1536 * 1024), "1.5MB");
        assert_eq!(format_size(512 * 1024), "512KB");
        assert_eq!(format_size(1500), "1.5KB");
        assert_eq!(format_size(100), "100B");
        assert_eq!(format_size(0), "0B");
    }

    #[test]
    fn test_user_messages() {
        let too_large = UploadRejection::TooLarge {
            size: 6 * 1024 * 1024,
            max: 5 * 1024 * 1024,
        };
        assert_eq!(
            too_large.user_message(),
            "Размер файла не должен превышать 5MB"
        );

        let small_limit = UploadRejection::TooLarge { size: 600 * 1024, max: 512 * 1024 };
        assert_eq!(
            small_limit.user_message(),
            "Размер файла не должен превышать 512KB"
        );

        let gif = UploadRejection::UnsupportedType {
            mime_type: "image/gif".to_string(),
        };
        assert_eq!(gif.to_string(), "Unsupported image type 'image/gif'");
    }
}
