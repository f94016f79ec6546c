use std::path::Path;

use egui::Vec2;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};

use crate::error::EditorError;
use crate::metadata::ExifData;

/// The image the session edits: decoded pixels plus the EXIF fields of the
/// file they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    pixels: DynamicImage,
    exif: ExifData,
}

impl Picture {
    pub fn new(pixels: DynamicImage, exif: ExifData) -> Self {
        Self { pixels, exif }
    }

    /// A picture with no metadata
    pub fn from_pixels(pixels: DynamicImage) -> Self {
        Self::new(pixels, ExifData::default())
    }

    /// Decode the file at `path` and read its EXIF block.
    pub fn open(path: &Path) -> Result<Self, EditorError> {
        let pixels = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        log::debug!("Decoded {}: {}x{}", path.display(), pixels.width(), pixels.height());

        let exif = ExifData::read(path).unwrap_or_else(|err| {
            log::warn!("Ignoring unreadable EXIF in {}: {}", path.display(), err);
            ExifData::default()
        });

        Ok(Self { pixels, exif })
    }

    /// Encode to `path`, format chosen from the extension.
    pub fn save(&self, path: &Path) -> Result<(), EditorError> {
        // JPEG has no alpha channel
        if matches!(ImageFormat::from_path(path), Ok(ImageFormat::Jpeg)) {
            DynamicImage::ImageRgb8(self.pixels.to_rgb8()).save(path)?;
        } else {
            self.pixels.save(path)?;
        }
        log::info!("Saved {}", path.display());
        Ok(())
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }

    pub fn exif(&self) -> &ExifData {
        &self.exif
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> Vec2 {
        let (width, height) = self.pixels.dimensions();
        egui::vec2(width as f32, height as f32)
    }

    /// Same metadata, new pixels
    pub fn with_pixels(&self, pixels: DynamicImage) -> Self {
        Self {
            pixels,
            exif: self.exif.clone(),
        }
    }

    /// Egui texture data for the central panel
    pub fn to_color_image(&self) -> egui::ColorImage {
        let rgba = self.pixels.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
    }
}

/// Shrink `width`x`height` in steps of 1% of the original size until it fits
/// inside `max`. Sizes that already fit are returned unchanged.
pub fn fit_within(width: u32, height: u32, max: Vec2) -> (u32, u32) {
    let (mut w, mut h) = (width as f32, height as f32);
    let (step_w, step_h) = (w / 100.0, h / 100.0);

    let mut steps = 0;
    while (w > max.x || h > max.y) && steps < 99 {
        w -= step_w;
        h -= step_h;
        steps += 1;
    }

    ((w as u32).max(1), (h as u32).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_keeps_small_images() {
        assert_eq!(fit_within(200, 100, egui::vec2(1300.0, 721.0)), (200, 100));
    }

    #[test]
    fn test_fit_shrinks_by_percent_steps() {
        // 2000x1000 needs 35 steps of 20x10 to fit under 1300 wide
        assert_eq!(fit_within(2000, 1000, egui::vec2(1300.0, 721.0)), (1300, 650));
    }

    #[test]
    fn test_fit_never_collapses_to_zero() {
        let (w, h) = fit_within(500, 500, egui::vec2(0.0, 0.0));
        assert!(w >= 1 && h >= 1);
    }
}
