// Sprite sheet image shared by every animation cut from it

use crate::core::math::IntRect;
use image::{DynamicImage, RgbaImage};

/// A decoded sprite sheet
///
/// Frames reference sub-rectangles of this image; the pixels themselves are
/// held once and shared through `Arc<SpriteSheet>`.
pub struct SpriteSheet {
    /// Name used in logs and GPU labels (usually the file name)
    label: String,
    image: RgbaImage,
}

impl SpriteSheet {
    /// Wrap an already decoded image, converting it to RGBA8
    pub fn from_image(label: &str, image: DynamicImage) -> Self {
        Self::from_rgba(label, image.to_rgba8())
    }

    pub fn from_rgba(label: &str, image: RgbaImage) -> Self {
        Self {
            label: label.to_string(),
            image,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Raw RGBA pixels, row-major
    pub fn pixels(&self) -> &RgbaImage {
        &self.image
    }

    /// Check whether a region lies entirely inside the sheet
    pub fn contains(&self, region: &IntRect) -> bool {
        region.fits_within(self.width(), self.height())
    }
}

impl std::fmt::Debug for SpriteSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpriteSheet")
            .field("label", &self.label)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(width: u32, height: u32) -> SpriteSheet {
        SpriteSheet::from_rgba("test", RgbaImage::new(width, height))
    }

    #[test]
    fn test_sheet_dimensions() {
        let sheet = sheet(576, 256);
        assert_eq!(sheet.width(), 576);
        assert_eq!(sheet.height(), 256);
        assert_eq!(sheet.label(), "test");
    }

    #[test]
    fn test_contains() {
        let sheet = sheet(576, 256);
        assert!(sheet.contains(&IntRect::new(512, 192, 64, 64)));
        assert!(!sheet.contains(&IntRect::new(576, 0, 64, 64)));
        assert!(!sheet.contains(&IntRect::new(0, 200, 64, 64)));
    }

    #[test]
    fn test_from_image_converts_to_rgba() {
        let rgb = DynamicImage::new_rgb8(8, 4);
        let sheet = SpriteSheet::from_image("rgb", rgb);
        assert_eq!(sheet.pixels().as_raw().len(), 8 * 4 * 4);
    }

    #[test]
    fn test_debug_omits_pixels() {
        let debug = format!("{:?}", sheet(2, 2));
        assert_eq!(debug, "SpriteSheet { label: \"test\", width: 2, height: 2 }");
    }
}
