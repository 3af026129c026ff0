//! Error type for mosaic generation.
//!
//! Every failure of a generation run surfaces as one [`MosaicError`]. Cache
//! write failures are absent on purpose: the resolver recovers from them
//! locally.

use crate::color::ColorHex;
use crate::geometry::GeometryError;
use crate::glyph::GlyphError;
use crate::provider::ProviderError;
use thiserror::Error;

/// Errors that abort a mosaic generation run.
#[derive(Debug, Error)]
pub enum MosaicError {
    /// Tile size or source dimensions cannot produce a mosaic
    #[error("invalid geometry: {0}")]
    Geometry(#[from] GeometryError),

    /// The glyph provider failed for a tile color
    #[error("glyph lookup failed for {color}: {source}")]
    Lookup {
        color: ColorHex,
        source: ProviderError,
    },

    /// A cached or fetched glyph could not be rasterized
    #[error("glyph decode failed for {color}: {source}")]
    Decode { color: ColorHex, source: GlyphError },

    /// The finished canvas could not be encoded
    #[error("image encoding failed: {0}")]
    Encode(String),
}

impl MosaicError {
    /// Color of the tile that failed, for lookup and decode errors.
    pub fn color(&self) -> Option<ColorHex> {
        match self {
            MosaicError::Lookup { color, .. } | MosaicError::Decode { color, .. } => Some(*color),
            _ => None,
        }
    }
}
