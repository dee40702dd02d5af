//! # paintshop-media: Product Image Normalizer
//!
//! Turns an image picked in the admin product form into something safe to
//! store next to the product: a JPEG no larger than 800 × 800, inlined as
//! a data URI.
//!
//! ## Module Organization
//!
//! | Module | Responsibility |
//! |---|---|
//! | [`input`] | `RawImageInput`: bytes + declared MIME type + size |
//! | [`validate`] | MIME allow-list and 5 MiB cap, rejection notifier |
//! | [`dimensions`] | Pure target-size calculation |
//! | [`normalizer`] | Async decode → resize → JPEG encode |
//! | [`data_uri`] | `data:<mime>;base64,<payload>` encode / parse |
//! | [`error`] | `MediaError`, `UploadRejection` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use paintshop_media::{validate, ImageNormalizer, LogNotifier, RawImageInput};
//!
//! # async fn upload(bytes: Vec<u8>) -> Result<(), paintshop_media::MediaError> {
//! let file = RawImageInput::new(bytes, "image/png");
//! if !validate::validate(&file, &LogNotifier) {
//!     return Ok(());
//! }
//! let image = ImageNormalizer::default().normalize(&file).await?;
//! println!("{}x{} {}", image.width, image.height, &image.data_uri[..30]);
//! # Ok(())
//! # }
//! ```

pub mod data_uri;
pub mod dimensions;
pub mod error;
pub mod input;
pub mod normalizer;
pub mod validate;

pub use data_uri::{encode_data_uri, parse_data_uri, DataUri};
pub use dimensions::target_dimensions;
pub use error::{MediaError, MediaResult, UploadRejection};
pub use input::RawImageInput;
pub use normalizer::{ImageNormalizer, NormalizeOptions, NormalizedImage};
pub use validate::{LogNotifier, RejectionNotifier, UploadRules};
