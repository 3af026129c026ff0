//! Tile averaging.
//!
//! Reduces every tile of the clipped source region to a single average color,
//! producing the [`TileGrid`] that drives rendering.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐     ┌──────────────────────┐
//! │   RgbaImage (source) │────▶│  clip_region()       │
//! └──────────────────────┘     └──────────┬───────────┘
//!                                         │ ClipRegion
//!                                         ▼
//!                              ┌──────────────────────┐
//!                              │  compute_tile_grid() │
//!                              │  average_tile() ×N   │
//!                              └──────────┬───────────┘
//!                                         │ TileGrid
//!                                         ▼
//!                                  row renderer
//! ```

mod average;
mod grid;

pub use average::average_tile;
pub use grid::{compute_tile_grid, TileGrid};
