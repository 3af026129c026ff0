//! Raster surface the mosaic is drawn on.
//!
//! The canvas starts as a copy of the clipped source image and is overwritten
//! one tile row at a time. A generation run borrows it mutably for its whole
//! duration, so only one run can draw on a canvas at a time.

use crate::geometry::ClipRegion;
use crate::glyph::Glyph;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use image::{imageops, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Fully transparent pixel used when clearing tile rectangles.
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Mutable RGBA drawing surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a blank (transparent) canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Current pixel contents.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Resize to `width`×`height`, discarding all content.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::new(width, height);
    }

    /// Replace the canvas with the clipped part of `source`.
    ///
    /// The canvas takes the region's dimensions.
    pub fn draw_base(&mut self, source: &RgbaImage, region: &ClipRegion) {
        self.image = imageops::crop_imm(
            source,
            region.offset_x,
            region.offset_y,
            region.width,
            region.height,
        )
        .to_image();
    }

    /// Reset a rectangle to transparent. Parts outside the canvas are ignored.
    pub fn clear_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        let x_end = x.saturating_add(width).min(self.width());
        let y_end = y.saturating_add(height).min(self.height());

        for py in y..y_end {
            for px in x..x_end {
                self.image.put_pixel(px, py, TRANSPARENT);
            }
        }
    }

    /// Composite a glyph over the canvas with its top-left corner at (x, y).
    pub fn draw_glyph(&mut self, glyph: &Glyph, x: u32, y: u32) {
        imageops::overlay(&mut self.image, glyph.image(), x as i64, y as i64);
    }

    /// Encode the canvas as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut buffer = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
        Ok(buffer)
    }

    /// Encode the canvas as an embeddable `data:image/png;base64,...` URL.
    pub fn to_data_url(&self) -> Result<String, image::ImageError> {
        let png = self.encode_png()?;
        Ok(format!(
            "data:image/png;base64,{}",
            BASE64_STANDARD.encode(png)
        ))
    }

    /// Write the canvas to `path`, choosing the format from the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        self.image.save(path)
    }
}
