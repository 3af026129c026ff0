//! Mosaic - photo mosaics built from color-matched glyphs
//!
//! A source photo is clipped to a whole number of tiles, each tile is reduced
//! to its average color, and every tile is replaced by a glyph (an SVG
//! fetched from a color service) for that color. Glyphs are cached by color
//! and tile size, and the mosaic is drawn row by row onto a canvas.
//!
//! # High-Level API
//!
//! [`orchestrator::MosaicGenerator`] runs the whole pipeline:
//!
//! ```ignore
//! use mosaic::cache::MemoryGlyphCache;
//! use mosaic::geometry::TileSize;
//! use mosaic::orchestrator::MosaicGenerator;
//! use mosaic::provider::{AsyncReqwestClient, ColorServiceProvider, DEFAULT_SERVICE_URL};
//!
//! let provider = ColorServiceProvider::new(AsyncReqwestClient::new()?, DEFAULT_SERVICE_URL);
//! let mut generator = MosaicGenerator::new(provider, MemoryGlyphCache::default());
//!
//! let photo = image::open("photo.jpg")?.to_rgba8();
//! let output = generator.generate(&photo, None, TileSize::default()).await?;
//! std::fs::write("mosaic.txt", output.rendered_image)?;
//! ```

pub mod cache;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod glyph;
pub mod logging;
pub mod orchestrator;
pub mod provider;
pub mod render;
pub mod tile;

pub use error::MosaicError;

/// Version of the mosaic library and CLI.
///
/// Synchronized across the workspace from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
