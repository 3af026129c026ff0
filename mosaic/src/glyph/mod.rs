//! Glyphs: the rendered stand-in for one tile.
//!
//! A glyph arrives as SVG text (from the cache or the provider) and is
//! rasterized to exactly one tile before it is drawn on the canvas.

mod decode;
mod resolver;

pub use decode::decode_svg;
pub use resolver::GlyphResolver;

use image::RgbaImage;
use thiserror::Error;

/// Errors turning SVG text into a raster glyph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GlyphError {
    /// The SVG could not be parsed
    #[error("invalid SVG: {0}")]
    Parse(String),

    /// The SVG declares an empty drawing area
    #[error("SVG has empty size {width}x{height}")]
    EmptySize { width: f32, height: f32 },

    /// A raster surface of the requested size could not be allocated
    #[error("cannot allocate {width}x{height} glyph raster")]
    Raster { width: u32, height: u32 },
}

/// Tile-sized RGBA raster of a decoded glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    image: RgbaImage,
}

impl Glyph {
    /// Wrap an already rasterized image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel data of the glyph.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}
