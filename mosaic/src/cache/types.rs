//! Core types for the glyph cache.

use crate::color::ColorHex;
use crate::geometry::TileSize;
use std::fmt;
use thiserror::Error;

/// Prefix shared by every glyph cache key.
///
/// Stores that hold unrelated data only ever have keys with this prefix
/// removed when the glyph cache is cleared.
pub const KEY_PREFIX: &str = "mosaic-";

/// Cache key uniquely identifying a glyph.
///
/// Glyphs are rendered at the tile size, so the same color at a different
/// tile size is a different entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphKey {
    /// Average tile color
    pub color: ColorHex,
    /// Tile dimensions the glyph is rendered for
    pub tile: TileSize,
}

impl GlyphKey {
    /// Create a new cache key.
    pub fn new(color: ColorHex, tile: TileSize) -> Self {
        Self { color, tile }
    }

    /// Storage form of the key: `mosaic-{color}-{width}-{height}`.
    pub fn storage_key(&self) -> String {
        self.to_string()
    }

    /// Parse a storage key back into a [`GlyphKey`].
    ///
    /// Returns `None` for keys that were not produced by [`storage_key`](Self::storage_key).
    pub fn from_storage_key(s: &str) -> Option<Self> {
        let rest = s.strip_prefix(KEY_PREFIX)?;
        let mut parts = rest.split('-');

        let color = parts.next()?.parse().ok()?;
        let width = parts.next()?.parse().ok()?;
        let height = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }

        let tile = TileSize::new(width, height).ok()?;
        Some(Self { color, tile })
    }
}

impl fmt::Display for GlyphKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}-{}-{}",
            KEY_PREFIX,
            self.color,
            self.tile.width(),
            self.tile.height()
        )
    }
}

/// Cache-related errors.
#[derive(Debug, Error)]
pub enum CacheError {
    /// I/O error during cache operations
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Storing the entry would exceed the configured byte budget
    #[error("Cache capacity exceeded: current={current}, entry={entry}, limit={limit}")]
    CapacityExceeded {
        current: usize,
        entry: usize,
        limit: usize,
    },
}
