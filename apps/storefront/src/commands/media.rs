//! # Media Commands
//!
//! Product image uploads from the admin form.
//!
//! ## Upload Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  File picked                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UploadRules::check ── refused ──► LogNotifier + UPLOAD_REJECTED        │
//! │       │ ok                          (localized message for the form)    │
//! │       ▼                                                                 │
//! │  prepare_upload: normalize ── decode fails ──► IMAGE_ERROR              │
//! │  inline_upload:  convert_to_inline_data                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  data URI, stored as Product.image                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed normalization is returned to the caller; there is no silent
//! fallback to the raw bytes.

use tracing::{debug, info};

use paintshop_core::{Product, ProductPatch};
use paintshop_media::{
    ImageNormalizer, LogNotifier, MediaError, NormalizedImage, RawImageInput, RejectionNotifier,
};

use crate::commands::account::require_admin;
use crate::error::ApiError;
use crate::state::{DataState, StoreConfig};

fn check_upload(config: &StoreConfig, file: &RawImageInput) -> Result<(), ApiError> {
    config.upload_rules().check(file).map_err(|rejection| {
        LogNotifier.notify(&rejection);
        ApiError::from(MediaError::from(rejection))
    })
}

/// Validates and normalizes an upload to the configured bounds.
pub async fn prepare_upload(
    config: &StoreConfig,
    images: &ImageNormalizer,
    file: &RawImageInput,
) -> Result<NormalizedImage, ApiError> {
    debug!(
        mime_type = %file.declared_mime_type(),
        bytes = file.byte_size(),
        "prepare_upload command"
    );
    check_upload(config, file)?;
    Ok(images.normalize(file).await?)
}

/// Validates an upload and inlines it unchanged.
pub async fn inline_upload(
    config: &StoreConfig,
    images: &ImageNormalizer,
    file: &RawImageInput,
) -> Result<String, ApiError> {
    debug!(bytes = file.byte_size(), "inline_upload command");
    check_upload(config, file)?;
    Ok(images.convert_to_inline_data(file).await?)
}

/// Normalizes an upload and stores it as the product's image (admin).
pub async fn set_product_image(
    data: &DataState,
    config: &StoreConfig,
    images: &ImageNormalizer,
    user_id: &str,
    product_id: &str,
    file: &RawImageInput,
) -> Result<Product, ApiError> {
    require_admin(data, user_id)?;
    let image = prepare_upload(config, images, file).await?;

    let patch = ProductPatch {
        image: Some(image.data_uri),
        ..ProductPatch::default()
    };
    let product = data
        .catalog()
        .update(product_id, patch)?
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    info!(
        product_id = %product_id,
        width = image.width,
        height = image.height,
        "Product image replaced"
    );
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::catalog::get_product;
    use crate::commands::test_support::{app, ADMIN_ID, SHOPPER_ID};
    use crate::error::ErrorCode;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> RawImageInput {
        let img = RgbImage::from_fn(width, height, |x, _| image::Rgb([(x % 256) as u8, 90, 200]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        RawImageInput::new(bytes, "image/png")
    }

    #[tokio::test]
    async fn test_prepare_upload_bounds_image() {
        let app = app();
        let image = prepare_upload(&app.config, &app.images, &png(1600, 800))
            .await
            .unwrap();

        assert_eq!((image.width, image.height), (800, 400));
        assert!(image.data_uri.starts_with("data:image/jpeg;base64,"));
    }

    #[tokio::test]
    async fn test_gif_is_rejected_with_form_message() {
        let app = app();
        let gif = RawImageInput::new(b"GIF89a".to_vec(), "image/gif");

        let err = prepare_upload(&app.config, &app.images, &gif).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::UploadRejected);
        assert_eq!(err.message, "Поддерживаются только файлы JPG, PNG и WebP");
    }

    #[tokio::test]
    async fn test_corrupt_upload_surfaces_decode_error() {
        let app = app();
        let corrupt = RawImageInput::new(vec![0xFF; 128], "image/jpeg");

        let err = prepare_upload(&app.config, &app.images, &corrupt)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ImageError);
        assert_eq!(app.images.live_handles(), 0);
    }

    #[tokio::test]
    async fn test_inline_upload_keeps_bytes() {
        let app = app();
        let file = RawImageInput::new(vec![7u8; 10], "image/webp");

        let uri = inline_upload(&app.config, &app.images, &file).await.unwrap();
        let parsed = paintshop_media::parse_data_uri(&uri).unwrap();
        assert_eq!(parsed.bytes, vec![7u8; 10]);
    }

    #[tokio::test]
    async fn test_set_product_image() {
        let app = app();

        let product = set_product_image(&app.data, &app.config, &app.images, ADMIN_ID, "4", &png(64, 64))
            .await
            .unwrap();
        assert!(product.image.starts_with("data:image/jpeg;base64,"));
        assert_eq!(get_product(&app.data, "4").unwrap(), product);

        let err = set_product_image(&app.data, &app.config, &app.images, SHOPPER_ID, "4", &png(8, 8))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
