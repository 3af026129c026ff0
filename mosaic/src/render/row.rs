//! Fan-out/fan-in rendering of a single tile row.

use crate::cache::GlyphCache;
use crate::canvas::Canvas;
use crate::color::ColorHex;
use crate::error::MosaicError;
use crate::geometry::TileSize;
use crate::glyph::GlyphResolver;
use crate::provider::GlyphProvider;
use futures::future::try_join_all;
use tracing::{debug, instrument};

/// Resolve and draw one row of tiles.
///
/// Every color in `colors` is resolved concurrently on the calling task. The
/// row is drawn only once all resolutions have succeeded: each destination
/// tile is cleared, then its glyph is drawn at
/// (`column × tile.width`, `row_index × tile.height`), in ascending column
/// order.
///
/// # Errors
///
/// Fails with the first resolution error. Outstanding resolutions are
/// dropped and nothing from this row is drawn.
#[instrument(skip_all, fields(row = row_index, tiles = colors.len()))]
pub async fn render_row<P, C>(
    resolver: &GlyphResolver<P, C>,
    colors: &[ColorHex],
    row_index: u32,
    tile: TileSize,
    canvas: &mut Canvas,
) -> Result<(), MosaicError>
where
    P: GlyphProvider,
    C: GlyphCache,
{
    let glyphs = try_join_all(colors.iter().map(|&color| resolver.resolve(color, tile))).await?;

    let y = row_index * tile.height();
    for (col, glyph) in glyphs.iter().enumerate() {
        let x = col as u32 * tile.width();
        canvas.clear_rect(x, y, tile.width(), tile.height());
        canvas.draw_glyph(glyph, x, y);
    }

    debug!(row = row_index, tiles = glyphs.len(), "Row drawn");
    Ok(())
}
