//! Offline glyph provider.
//!
//! Renders the same kind of glyph the color service returns (a filled ellipse
//! inscribed in the tile) without touching the network. Used by the CLI's
//! offline mode and as a deterministic provider in tests.

use super::types::{GlyphProvider, ProviderError};
use crate::color::ColorHex;
use crate::geometry::TileSize;

/// Glyph provider that synthesizes SVG locally.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalGlyphProvider {
    tile: TileSize,
}

impl LocalGlyphProvider {
    /// Create a provider rendering glyphs at `tile` size.
    pub fn new(tile: TileSize) -> Self {
        Self { tile }
    }

    /// SVG document for `color`.
    pub fn render(&self, color: ColorHex) -> String {
        let (w, h) = (self.tile.width() as f32, self.tile.height() as f32);
        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}"><ellipse cx="{cx}" cy="{cy}" rx="{cx}" ry="{cy}" fill="#{color}"/></svg>"##,
            w = w,
            h = h,
            cx = w / 2.0,
            cy = h / 2.0,
            color = color
        )
    }
}

impl GlyphProvider for LocalGlyphProvider {
    async fn fetch_glyph(&self, color: ColorHex) -> Result<String, ProviderError> {
        Ok(self.render(color))
    }

    fn name(&self) -> &str {
        "local"
    }
}
