//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Command Function  ── Result<T, ApiError>                               │
//! │         │                                                               │
//! │         ├── StoreError::NotFound          ──┐                           │
//! │         ├── CoreError::EmptyCart          ──┤                           │
//! │         ├── ValidationError::Required     ──┼──► ApiError { code, msg } │
//! │         ├── MediaError::Rejected / Decode ──┤                           │
//! │         └── not an admin                  ──┘                           │
//! │                                                                         │
//! │  Frontend receives:                                                     │
//! │  { "code": "UPLOAD_REJECTED",                                           │
//! │    "message": "Размер файла не должен превышать 5MB" }                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Upload rejections carry the localized message that is shown inline
//! under the file field; everything else carries the English error text.

use serde::Serialize;

use paintshop_core::{CoreError, ValidationError};
use paintshop_media::MediaError;
use paintshop_store::StoreError;

use crate::state::ConfigError;

/// Error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// No signed-in user for an operation that needs one (401)
    Unauthorized,

    /// Signed-in user lacks the admin flag (403)
    Forbidden,

    /// Cart cannot be used for the operation (empty, unsellable product)
    CartError,

    /// Upload refused before decoding (type or size)
    UploadRejected,

    /// Upload could not be decoded or re-encoded
    ImageError,

    /// Repository failure (500)
    StorageError,

    /// Bad configuration value
    ConfigError,

    /// Internal error (500)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Forbidden, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Unauthorized, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts repository errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            StoreError::Duplicate { field, value } => ApiError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            StoreError::LockPoisoned(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Storage lock poisoned: {}", e);
                ApiError::new(ErrorCode::StorageError, "Storage is unavailable")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::EmptyCart => ApiError::cart("Cart is empty"),
            CoreError::NotPurchasable { product_id } => ApiError::cart(format!(
                "Product {} is not available for purchase",
                product_id
            )),
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts image pipeline errors to API errors.
impl From<MediaError> for ApiError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::Rejected(rejection) => {
                ApiError::new(ErrorCode::UploadRejected, rejection.user_message())
            }
            MediaError::Decode { .. } | MediaError::Encode { .. } => {
                ApiError::new(ErrorCode::ImageError, err.to_string())
            }
            MediaError::InvalidOptions(_) | MediaError::InvalidDataUri(_) => {
                ApiError::validation(err.to_string())
            }
            MediaError::Io(e) => ApiError::new(ErrorCode::ImageError, format!("Cannot read image: {}", e)),
            MediaError::Task(e) => {
                tracing::error!("Image worker failed: {}", e);
                ApiError::internal("Image processing failed")
            }
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use paintshop_media::UploadRejection;

    #[test]
    fn test_serializes_screaming_code() {
        let err = ApiError::not_found("Product", "42");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 42");
    }

    #[test]
    fn test_rejection_uses_user_message() {
        let err = ApiError::from(MediaError::from(UploadRejection::UnsupportedType {
            mime_type: "image/gif".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::UploadRejected);
        assert_eq!(err.message, "Поддерживаются только файлы JPG, PNG и WebP");
    }

    #[test]
    fn test_decode_failure_is_image_error() {
        let err = ApiError::from(MediaError::Decode {
            reason: "bad header".to_string(),
        });
        assert_eq!(err.code, ErrorCode::ImageError);
    }

    #[test]
    fn test_core_errors() {
        assert_eq!(ApiError::from(CoreError::EmptyCart).code, ErrorCode::CartError);
        let validation = CoreError::from(ValidationError::Required {
            field: "name".to_string(),
        });
        assert_eq!(ApiError::from(validation).code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_store_errors() {
        let err = ApiError::from(StoreError::not_found("Order", "o-1"));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Order not found: o-1");
    }
}
