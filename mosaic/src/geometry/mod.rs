//! Tile dimensions and source clipping.
//!
//! A source image rarely divides evenly into tiles. Before the tile grid is
//! built, the excess edge pixels are trimmed so that the remaining region is an
//! exact multiple of the tile size, centered within the original image.

mod clip;

pub use clip::{clip_region, ClipRegion};

use std::fmt;
use thiserror::Error;

/// Default tile width in pixels.
pub const DEFAULT_TILE_WIDTH: u32 = 16;

/// Default tile height in pixels.
pub const DEFAULT_TILE_HEIGHT: u32 = 16;

/// Errors raised while validating mosaic geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A tile dimension was zero
    #[error("tile size must be non-zero, got {width}x{height}")]
    ZeroTileSize { width: u32, height: u32 },

    /// The source image cannot hold a single tile in at least one dimension
    #[error(
        "image {image_width}x{image_height} is smaller than one {tile_width}x{tile_height} tile"
    )]
    ImageTooSmall {
        image_width: u32,
        image_height: u32,
        tile_width: u32,
        tile_height: u32,
    },
}

/// Size of one mosaic tile in pixels.
///
/// Both dimensions are guaranteed non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSize {
    width: u32,
    height: u32,
}

impl TileSize {
    /// Create a tile size, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::ZeroTileSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Tile width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Tile height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels covered by one tile.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_TILE_WIDTH,
            height: DEFAULT_TILE_HEIGHT,
        }
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_size_rejects_zero_width() {
        let err = TileSize::new(0, 10).unwrap_err();
        assert_eq!(
            err,
            GeometryError::ZeroTileSize {
                width: 0,
                height: 10
            }
        );
    }

    #[test]
    fn test_tile_size_rejects_zero_height() {
        assert!(TileSize::new(10, 0).is_err());
    }

    #[test]
    fn test_tile_size_default() {
        let tile = TileSize::default();
        assert_eq!(tile.width(), DEFAULT_TILE_WIDTH);
        assert_eq!(tile.height(), DEFAULT_TILE_HEIGHT);
    }

    #[test]
    fn test_tile_size_pixel_count() {
        let tile = TileSize::new(10, 4).unwrap();
        assert_eq!(tile.pixel_count(), 40);
    }

    #[test]
    fn test_tile_size_display() {
        let tile = TileSize::new(16, 8).unwrap();
        assert_eq!(tile.to_string(), "16x8");
    }

    #[test]
    fn test_image_too_small_display() {
        let err = GeometryError::ImageTooSmall {
            image_width: 5,
            image_height: 20,
            tile_width: 10,
            tile_height: 10,
        };
        assert_eq!(err.to_string(), "image 5x20 is smaller than one 10x10 tile");
    }
}
