//! Pure calculation of the output size for a normalized image.
//!
//! Only the longer side is checked against its limit:
//!
//! ```text
//! width > height ?
//!   yes: width  > max_width  → height = ⌊height × max_width  / width⌋,  width  = max_width
//!   no:  height > max_height → width  = ⌊width  × max_height / height⌋, height = max_height
//! otherwise unchanged (never upscales)
//! ```
//!
//! With unequal limits the shorter side is not checked, so an 1000 × 900
//! image with limits 2000 × 500 stays 1000 × 900.

/// Output `(width, height)` for an image of `width × height`.
///
/// Fractional results are truncated, as a canvas does when given a
/// fractional size. A side never drops below 1 pixel.
///
/// # Examples
/// ```
/// use paintshop_media::target_dimensions;
///
/// assert_eq!(target_dimensions(1600, 800, 800, 800), (800, 400));
/// assert_eq!(target_dimensions(400, 300, 800, 800), (400, 300));
/// ```
pub fn target_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width > height {
        if width > max_width {
            return (max_width, scale(height, max_width, width));
        }
    } else if height > max_height {
        return (scale(width, max_height, height), max_height);
    }
    (width, height)
}

// ⌊side × numerator / denominator⌋, at least 1
fn scale(side: u32, numerator: u32, denominator: u32) -> u32 {
    let scaled = u64::from(side) * u64::from(numerator) / u64::from(denominator);
    (scaled as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_is_scaled_to_max_width() {
        assert_eq!(target_dimensions(1600, 800, 800, 800), (800, 400));
        assert_eq!(target_dimensions(1000, 333, 800, 800), (800, 266));
    }

    #[test]
    fn portrait_is_scaled_to_max_height() {
        assert_eq!(target_dimensions(600, 1200, 800, 800), (400, 800));
    }

    #[test]
    fn square_uses_height_branch() {
        assert_eq!(target_dimensions(1000, 1000, 800, 800), (800, 800));
        assert_eq!(target_dimensions(1000, 1000, 900, 500), (500, 500));
    }

    #[test]
    fn small_images_are_unchanged() {
        assert_eq!(target_dimensions(400, 300, 800, 800), (400, 300));
        assert_eq!(target_dimensions(800, 800, 800, 800), (800, 800));
    }

    #[test]
    fn shorter_side_is_not_checked() {
        // landscape within max_width, height over max_height
        assert_eq!(target_dimensions(1000, 900, 2000, 500), (1000, 900));
    }

    #[test]
    fn extreme_aspect_keeps_one_pixel() {
        assert_eq!(target_dimensions(10_000, 1, 800, 800), (800, 1));
    }
}
