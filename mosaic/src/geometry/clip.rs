//! Centered clipping of the source image to whole tiles.

use super::{GeometryError, TileSize};

/// Sub-rectangle of the source image that divides evenly into tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRegion {
    /// Clipped width, a multiple of the tile width
    pub width: u32,
    /// Clipped height, a multiple of the tile height
    pub height: u32,
    /// Left edge of the region within the source image
    pub offset_x: u32,
    /// Top edge of the region within the source image
    pub offset_y: u32,
}

impl ClipRegion {
    /// Number of tile columns in the region.
    pub fn columns(&self, tile: TileSize) -> u32 {
        self.width / tile.width()
    }

    /// Number of tile rows in the region.
    pub fn rows(&self, tile: TileSize) -> u32 {
        self.height / tile.height()
    }
}

/// Compute the largest centered region of a `width`×`height` image that is an
/// exact multiple of `tile`.
///
/// Remainder pixels are split between both edges, with the odd pixel (if any)
/// going to the right/bottom edge.
///
/// # Errors
///
/// Returns [`GeometryError::ImageTooSmall`] when the image cannot hold a single
/// tile in either dimension, since the resulting region would have zero area.
///
/// # Example
///
/// ```
/// use mosaic::geometry::{clip_region, TileSize};
///
/// let tile = TileSize::new(10, 10).unwrap();
/// let region = clip_region(45, 23, tile).unwrap();
///
/// assert_eq!((region.width, region.height), (40, 20));
/// assert_eq!((region.offset_x, region.offset_y), (2, 1));
/// ```
pub fn clip_region(width: u32, height: u32, tile: TileSize) -> Result<ClipRegion, GeometryError> {
    let remainder_x = width % tile.width();
    let remainder_y = height % tile.height();

    let region = ClipRegion {
        width: width - remainder_x,
        height: height - remainder_y,
        offset_x: remainder_x / 2,
        offset_y: remainder_y / 2,
    };

    if region.width == 0 || region.height == 0 {
        return Err(GeometryError::ImageTooSmall {
            image_width: width,
            image_height: height,
            tile_width: tile.width(),
            tile_height: tile.height(),
        });
    }

    Ok(region)
}
