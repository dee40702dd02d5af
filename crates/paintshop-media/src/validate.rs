//! # Upload Validation
//!
//! Refuses files the normalizer should never see.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  declared type ∈ { image/jpeg, image/jpg, image/png, image/webp } ?    │
//! │       │ no  → UnsupportedType   (regardless of size)                    │
//! │       ▼ yes                                                             │
//! │  byte size ≤ 5 MiB (5 242 880) ?                                        │
//! │       │ no  → TooLarge                                                  │
//! │       ▼ yes                                                             │
//! │  accepted                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The type check trusts the declared type. A mislabelled file is caught
//! later, when decoding fails.

use tracing::warn;

use crate::error::UploadRejection;
use crate::input::RawImageInput;

/// MIME types accepted for product images.
pub const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Largest accepted upload, in bytes (5 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Receives the user-facing message when an upload is refused.
pub trait RejectionNotifier {
    fn notify(&self, rejection: &UploadRejection);
}

/// Notifier that only writes the rejection to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl RejectionNotifier for LogNotifier {
    fn notify(&self, rejection: &UploadRejection) {
        warn!(%rejection, message = %rejection.user_message(), "Image upload rejected");
    }
}

/// Size limit and allow-list applied to an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadRules {
    pub allowed_mime_types: &'static [&'static str],
    pub max_bytes: u64,
}

impl Default for UploadRules {
    fn default() -> Self {
        UploadRules {
            allowed_mime_types: ALLOWED_MIME_TYPES,
            max_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

impl UploadRules {
    /// Default allow-list with a different size cap.
    pub fn with_max_bytes(max_bytes: u64) -> Self {
        UploadRules {
            max_bytes,
            ..UploadRules::default()
        }
    }

    /// Pure check, no notification. The declared type must match an
    /// allowed one exactly, case included.
    pub fn check(&self, file: &RawImageInput) -> Result<(), UploadRejection> {
        let mime_type = file.declared_mime_type();

        if !self.allowed_mime_types.contains(&mime_type) {
            return Err(UploadRejection::UnsupportedType {
                mime_type: mime_type.to_string(),
            });
        }

        if file.byte_size() > self.max_bytes {
            return Err(UploadRejection::TooLarge {
                size: file.byte_size(),
                max: self.max_bytes,
            });
        }

        Ok(())
    }

    /// Checks the file and tells `notifier` when it is refused.
    /// Callers must not proceed to normalization on `false`.
    pub fn validate(&self, file: &RawImageInput, notifier: &dyn RejectionNotifier) -> bool {
        match self.check(file) {
            Ok(()) => true,
            Err(rejection) => {
                notifier.notify(&rejection);
                false
            }
        }
    }
}

/// [`UploadRules::check`] with the default rules.
pub fn check(file: &RawImageInput) -> Result<(), UploadRejection> {
    UploadRules::default().check(file)
}

/// [`UploadRules::validate`] with the default rules.
pub fn validate(file: &RawImageInput, notifier: &dyn RejectionNotifier) -> bool {
    UploadRules::default().validate(file, notifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<UploadRejection>>);

    impl RejectionNotifier for Recorder {
        fn notify(&self, rejection: &UploadRejection) {
            self.0.borrow_mut().push(rejection.clone());
        }
    }

    fn file(size: usize, mime: &str) -> RawImageInput {
        RawImageInput::new(vec![0u8; size], mime)
    }

    #[test]
    fn test_size_boundary() {
        let recorder = Recorder::default();

        assert!(validate(&file(5 * 1024 * 1024, "image/jpeg"), &recorder));
        assert!(recorder.0.borrow().is_empty());

        assert!(!validate(&file(5 * 1024 * 1024 + 1, "image/jpeg"), &recorder));
        assert_eq!(
            *recorder.0.borrow(),
            vec![UploadRejection::TooLarge {
                size: 5 * 1024 * 1024 + 1,
                max: MAX_UPLOAD_BYTES,
            }]
        );
    }

    #[test]
    fn test_gif_rejected_regardless_of_size() {
        for size in [0, 10, 5 * 1024 * 1024 + 1] {
            let result = check(&file(size, "image/gif"));
            assert!(matches!(result, Err(UploadRejection::UnsupportedType { .. })));
        }
    }

    #[test]
    fn test_allowed_types() {
        for mime in ["image/jpeg", "image/jpg", "image/png", "image/webp"] {
            assert!(check(&file(10, mime)).is_ok(), "{mime} should be accepted");
        }
        assert!(check(&file(10, "")).is_err());
        assert!(check(&file(10, "IMAGE/PNG")).is_err());
        assert!(check(&file(10, " image/png")).is_err());
        assert!(check(&file(10, "image/svg+xml")).is_err());
    }

    #[test]
    fn test_custom_limit() {
        let rules = UploadRules::with_max_bytes(100);
        assert!(rules.check(&file(100, "image/png")).is_ok());
        assert!(rules.check(&file(101, "image/png")).is_err());
    }
}
