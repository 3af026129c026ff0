//! Grid of tile colors for a whole clipped region.

use super::average::average_tile;
use crate::color::ColorHex;
use crate::geometry::{ClipRegion, TileSize};
use image::RgbaImage;

/// Average colors of every tile, rows top-to-bottom, columns left-to-right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    rows: Vec<Vec<ColorHex>>,
}

impl TileGrid {
    /// Number of tile rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of tile columns (zero for an empty grid).
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Colors of a single row, or `None` past the last row.
    pub fn row(&self, index: usize) -> Option<&[ColorHex]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Iterate over rows in rendering order.
    pub fn rows(&self) -> impl Iterator<Item = &[ColorHex]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Color at the given cell.
    pub fn get(&self, col: usize, row: usize) -> Option<ColorHex> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Every distinct color in the grid, sorted.
    pub fn distinct_colors(&self) -> Vec<ColorHex> {
        let mut colors: Vec<ColorHex> = self.rows.iter().flatten().copied().collect();
        colors.sort();
        colors.dedup();
        colors
    }
}

/// Average every tile of `region` into a [`TileGrid`].
///
/// The grid is `region.width / tile.width` columns by
/// `region.height / tile.height` rows.
pub fn compute_tile_grid(image: &RgbaImage, region: &ClipRegion, tile: TileSize) -> TileGrid {
    let columns = region.columns(tile);
    let rows = (0..region.rows(tile))
        .map(|row| {
            (0..columns)
                .map(|col| average_tile(image, region, tile, col, row))
                .collect()
        })
        .collect();

    TileGrid { rows }
}
