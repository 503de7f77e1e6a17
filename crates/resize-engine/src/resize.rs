//! Aspect-ratio-preserving resize to a fixed width.

use image::DynamicImage;
use tracing::debug;

use crate::{Dimensions, ResampleFilter, Result};

/// Resize an image to a target width while maintaining aspect ratio.
///
/// The height is truncated (see [`Dimensions::scale_to_width`]) and the
/// image is resampled to exactly that size with `filter`.
/// Returns the original image unchanged if it already has the target size.
pub fn resize_to_width(
    img: &DynamicImage,
    width: u32,
    filter: ResampleFilter,
) -> Result<DynamicImage> {
    let original = Dimensions::of(img);
    let target = original.scale_to_width(width)?;

    if target == original {
        debug!(
            width,
            height = original.height,
            "Image already at target size, skipping resize"
        );
        return Ok(img.clone());
    }

    debug!(
        orig_w = original.width,
        orig_h = original.height,
        new_width = target.width,
        new_height = target.height,
        %filter,
        "Resizing image to target width"
    );

    Ok(img.resize_exact(target.width, target.height, filter.filter_type()))
}
