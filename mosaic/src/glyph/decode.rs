//! SVG rasterization.

use super::{Glyph, GlyphError};
use crate::geometry::TileSize;
use image::{Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};

/// Rasterize SVG text into a glyph of exactly one tile.
///
/// The SVG is scaled to fill the tile regardless of its declared size, so a
/// service that renders at a different resolution still yields tile-sized
/// glyphs.
///
/// # Errors
///
/// Returns [`GlyphError::Parse`] for malformed SVG and
/// [`GlyphError::EmptySize`] when the document has no drawing area.
pub fn decode_svg(svg: &str, tile: TileSize) -> Result<Glyph, GlyphError> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .map_err(|e| GlyphError::Parse(e.to_string()))?;

    let size = tree.size();
    if size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(GlyphError::EmptySize {
            width: size.width(),
            height: size.height(),
        });
    }

    let (width, height) = (tile.width(), tile.height());
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(GlyphError::Raster { width, height })?;

    let transform = tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(Glyph::from_image(pixmap_to_image(&pixmap)))
}

/// Convert a premultiplied pixmap into a straight-alpha RGBA image.
fn pixmap_to_image(pixmap: &tiny_skia::Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let pixels = pixmap.pixels();

    RgbaImage::from_fn(width, pixmap.height(), |x, y| {
        let c = pixels[(y * width + x) as usize].demultiply();
        Rgba([c.red(), c.green(), c.blue(), c.alpha()])
    })
}
