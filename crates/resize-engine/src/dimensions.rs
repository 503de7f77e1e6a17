//! Image dimensions and aspect-ratio preserving scaling.

use std::fmt;

use image::{DynamicImage, GenericImageView};

use crate::{ResizeError, Result};

/// Width and height of an image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Dimensions of a decoded image.
    pub fn of(img: &DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        Self { width, height }
    }

    /// Scale to `target_width` while keeping the aspect ratio.
    ///
    /// The new height is `floor(height * target_width / width)`: the ratio is
    /// truncated, never rounded. Computed in `u64` so large images cannot
    /// overflow the intermediate product.
    pub fn scale_to_width(self, target_width: u32) -> Result<Self> {
        if target_width == 0 {
            return Err(ResizeError::InvalidTargetWidth(target_width));
        }
        let degenerate = || ResizeError::DegenerateDimensions {
            original: self,
            target_width,
        };
        if self.width == 0 {
            return Err(degenerate());
        }

        let scaled = u64::from(self.height) * u64::from(target_width) / u64::from(self.width);
        let height = u32::try_from(scaled).map_err(|_| degenerate())?;
        if height == 0 {
            return Err(degenerate());
        }

        Ok(Self {
            width: target_width,
            height,
        })
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Formats as a `(width, height)` tuple.
impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn scaled(width: u32, height: u32) -> Dimensions {
        Dimensions::new(width, height).scale_to_width(300).unwrap()
    }

    #[test]
    fn test_scale_landscape_exact_ratio() {
        assert_eq!(scaled(1200, 800), Dimensions::new(300, 200));
        assert_eq!(scaled(900, 600), Dimensions::new(300, 200));
    }

    #[test]
    fn test_scale_truncates_instead_of_rounding() {
        // 100 * 300 / 301 = 99.66..
        assert_eq!(scaled(301, 100), Dimensions::new(300, 99));
        // 2 * 300 / 450 = 1.33..
        assert_eq!(scaled(450, 2), Dimensions::new(300, 1));
    }

    #[test]
    fn test_scale_portrait_upscale() {
        assert_eq!(scaled(150, 400), Dimensions::new(300, 800));
    }

    #[test]
    fn test_scale_already_at_target_width() {
        assert_eq!(scaled(300, 123), Dimensions::new(300, 123));
    }

    #[test]
    fn test_scale_matches_floor_formula() {
        for (w, h) in [(640, 480), (1920, 1080), (7, 13), (4000, 30), (333, 777)] {
            let d = scaled(w, h);
            assert_eq!(d.width, 300);
            assert_eq!(d.height, h * 300 / w, "source {w}x{h}");
        }
    }

    #[test]
    fn test_scale_large_dimensions_do_not_overflow() {
        let d = Dimensions::new(u32::MAX, u32::MAX).scale_to_width(300).unwrap();
        assert_eq!(d, Dimensions::new(300, 300));
    }

    #[test]
    fn test_scale_rejects_zero_target() {
        let err = Dimensions::new(100, 100).scale_to_width(0).unwrap_err();
        assert!(matches!(err, ResizeError::InvalidTargetWidth(0)));
    }

    #[test]
    fn test_scale_rejects_zero_source_width() {
        let err = Dimensions::new(0, 100).scale_to_width(300).unwrap_err();
        assert!(matches!(err, ResizeError::DegenerateDimensions { .. }));
    }

    #[test]
    fn test_scale_rejects_collapsed_height() {
        // 3 * 300 / 1000 = 0.9
        let err = Dimensions::new(1000, 3).scale_to_width(300).unwrap_err();
        match err {
            ResizeError::DegenerateDimensions {
                original,
                target_width,
            } => {
                assert_eq!(original, Dimensions::new(1000, 3));
                assert_eq!(target_width, 300);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_scale_rejects_height_overflow() {
        let err = Dimensions::new(1, u32::MAX).scale_to_width(2).unwrap_err();
        assert!(matches!(err, ResizeError::DegenerateDimensions { .. }));
    }

    #[test]
    fn test_display_as_tuple() {
        assert_eq!(Dimensions::new(1200, 800).to_string(), "(1200, 800)");
    }

    #[test]
    fn test_of_image() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(12, 5, Luma([0])));
        assert_eq!(Dimensions::of(&img), Dimensions::new(12, 5));
        assert_eq!(Dimensions::from((12, 5)), Dimensions::of(&img));
    }
}
