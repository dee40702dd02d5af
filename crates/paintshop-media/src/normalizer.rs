//! # Image Normalizer
//!
//! Decodes an upload, shrinks it to fit the configured box and re-encodes
//! it as a JPEG data URI.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  normalize(file)                                                        │
//! │     │                                                                   │
//! │     ├── acquire DecodeHandle         (live_handles += 1)                │
//! │     │                                                                   │
//! │     ├── spawn_blocking ────────────────────────────────────────┐        │
//! │     │      decode bytes      ── error → MediaError::Decode      │        │
//! │     │      target_dimensions                                    │        │
//! │     │      resize_exact (Triangle), skipped when unchanged      │        │
//! │     │      JPEG at round(quality × 100)                         │        │
//! │     │      drop DecodeHandle    (live_handles -= 1, any path)   │        │
//! │     │◄──────────────────────────────────────────────────────────┘        │
//! │     │                                                                   │
//! │     └── NormalizedImage { data_uri, width, height }                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each call owns its own handle and worker task; calls do not share state
//! beyond the handle counter, so concurrent uploads are independent.
//! In-flight calls cannot be cancelled.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ExtendedColorType, GenericImageView, ImageEncoder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data_uri::encode_data_uri;
use crate::dimensions::target_dimensions;
use crate::error::{MediaError, MediaResult};
use crate::input::RawImageInput;

/// Quality used when the requested one is outside `0.0..=1.0`.
pub const FALLBACK_QUALITY: f32 = 0.92;

// =============================================================================
// Options / Output
// =============================================================================

/// Output bounds and JPEG quality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeOptions {
    pub max_width: u32,
    pub max_height: u32,
    /// JPEG quality factor in `0.0..=1.0`.
    pub quality: f32,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions {
            max_width: 800,
            max_height: 800,
            quality: 0.8,
        }
    }
}

impl NormalizeOptions {
    fn check(&self) -> MediaResult<()> {
        if self.max_width == 0 || self.max_height == 0 {
            return Err(MediaError::InvalidOptions(format!(
                "max dimensions must be positive, got {}x{}",
                self.max_width, self.max_height
            )));
        }
        Ok(())
    }

    /// Encoder quality on the 1..=100 scale.
    pub fn jpeg_quality(&self) -> u8 {
        let quality = if (0.0..=1.0).contains(&self.quality) {
            self.quality
        } else {
            FALLBACK_QUALITY
        };
        ((quality * 100.0).round() as u8).max(1)
    }
}

/// A re-encoded image ready to be stored on a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedImage {
    /// `data:image/jpeg;base64,...`
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
}

// =============================================================================
// Decode handle
// =============================================================================

/// Scoped claim on the decoder; released when dropped.
struct DecodeHandle {
    live: Arc<AtomicUsize>,
}

impl DecodeHandle {
    fn acquire(live: &Arc<AtomicUsize>) -> Self {
        live.fetch_add(1, Ordering::SeqCst);
        DecodeHandle {
            live: Arc::clone(live),
        }
    }
}

impl Drop for DecodeHandle {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

// =============================================================================
// Normalizer
// =============================================================================

/// Resizes and re-encodes product images.
#[derive(Debug, Clone, Default)]
pub struct ImageNormalizer {
    options: NormalizeOptions,
    live_handles: Arc<AtomicUsize>,
}

impl ImageNormalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        ImageNormalizer {
            options,
            live_handles: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Decode handles currently held by in-flight calls.
    pub fn live_handles(&self) -> usize {
        self.live_handles.load(Ordering::SeqCst)
    }

    /// Normalizes with the configured options.
    ///
    /// Does not validate; run [`crate::validate`] first.
    pub async fn normalize(&self, file: &RawImageInput) -> MediaResult<NormalizedImage> {
        self.normalize_with(file, self.options).await
    }

    /// Normalizes with explicit options.
    ///
    /// # Errors
    /// - `InvalidOptions` when a max dimension is zero
    /// - `Decode` when the bytes are not a readable image
    /// - `Encode` when the JPEG encoder fails
    pub async fn normalize_with(
        &self,
        file: &RawImageInput,
        options: NormalizeOptions,
    ) -> MediaResult<NormalizedImage> {
        options.check()?;

        let handle = DecodeHandle::acquire(&self.live_handles);
        let bytes = file.shared_bytes();

        let image = tokio::task::spawn_blocking(move || {
            let _handle = handle;
            encode_bounded(&bytes, options)
        })
        .await??;

        debug!(
            width = image.width,
            height = image.height,
            encoded_len = image.data_uri.len(),
            "Image normalized"
        );
        Ok(image)
    }

    /// Inlines the raw bytes as a data URI of the declared type, without
    /// decoding or resizing.
    pub async fn convert_to_inline_data(&self, file: &RawImageInput) -> MediaResult<String> {
        let bytes = file.shared_bytes();
        let mime_type = file.declared_mime_type().to_string();

        let uri = tokio::task::spawn_blocking(move || encode_data_uri(&mime_type, &bytes)).await?;

        debug!(
            bytes = file.byte_size(),
            encoded_len = uri.len(),
            "Image inlined"
        );
        Ok(uri)
    }
}

fn encode_bounded(bytes: &[u8], options: NormalizeOptions) -> MediaResult<NormalizedImage> {
    let decoded = image::load_from_memory(bytes).map_err(|e| MediaError::Decode {
        reason: e.to_string(),
    })?;

    let (orig_width, orig_height) = decoded.dimensions();
    let (width, height) =
        target_dimensions(orig_width, orig_height, options.max_width, options.max_height);

    let resized = if (width, height) == (orig_width, orig_height) {
        decoded
    } else {
        decoded.resize_exact(width, height, FilterType::Triangle)
    };

    let rgb = resized.to_rgb8();
    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, options.jpeg_quality())
        .write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
        .map_err(|e| MediaError::Encode {
            reason: e.to_string(),
        })?;

    Ok(NormalizedImage {
        data_uri: encode_data_uri("image/jpeg", &jpeg),
        width,
        height,
    })
}
