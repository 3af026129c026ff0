//! Mosaic generation implementation

use super::types::MosaicOutput;
use crate::cache::GlyphCache;
use crate::canvas::Canvas;
use crate::error::MosaicError;
use crate::geometry::{clip_region, TileSize};
use crate::glyph::GlyphResolver;
use crate::provider::GlyphProvider;
use crate::render::render_row;
use crate::tile::compute_tile_grid;
use image::RgbaImage;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Drives a full mosaic run: clip, average, then render rows top to bottom.
///
/// Owns the glyph resolver and, through it, the glyph cache. `generate` takes
/// `&mut self`, so runs on one generator never overlap and cannot clear the
/// cache from under each other.
///
/// # Example
///
/// ```ignore
/// use mosaic::cache::MemoryGlyphCache;
/// use mosaic::geometry::TileSize;
/// use mosaic::orchestrator::MosaicGenerator;
/// use mosaic::provider::{AsyncReqwestClient, ColorServiceProvider};
///
/// let provider = ColorServiceProvider::new(AsyncReqwestClient::new()?, "http://localhost:8765");
/// let mut generator = MosaicGenerator::new(provider, MemoryGlyphCache::default());
///
/// let photo = image::open("photo.jpg")?.to_rgba8();
/// let output = generator.generate(&photo, None, TileSize::default()).await?;
/// println!("rendered in {:.1} ms", output.execution_time_ms());
/// ```
pub struct MosaicGenerator<P, C> {
    resolver: GlyphResolver<P, C>,
}

impl<P, C> MosaicGenerator<P, C>
where
    P: GlyphProvider,
    C: GlyphCache,
{
    /// Creates a new generator over a glyph provider and cache.
    pub fn new(provider: P, cache: C) -> Self {
        Self {
            resolver: GlyphResolver::new(provider, cache),
        }
    }

    /// The glyph cache used by this generator.
    pub fn cache(&self) -> &C {
        self.resolver.cache()
    }

    /// The glyph provider used by this generator.
    pub fn provider(&self) -> &P {
        self.resolver.provider()
    }

    /// Render `image` as a mosaic of `tile`-sized glyphs.
    ///
    /// The glyph cache is cleared first, so entries from earlier runs (or other
    /// tile sizes) never leak into this one. `canvas`, when given, is resized
    /// to the clipped image, seeded with the clipped source pixels and then
    /// overdrawn row by row; it holds the finished mosaic afterwards. Without a
    /// canvas a scratch one is used.
    ///
    /// Rows are rendered strictly in order; each row is fully drawn before the
    /// next starts.
    ///
    /// # Errors
    ///
    /// - [`MosaicError::Geometry`] if the image is smaller than one tile
    ///   (reported before anything is drawn)
    /// - [`MosaicError::Lookup`] / [`MosaicError::Decode`] if any glyph of any
    ///   row fails; rendering stops at that row
    /// - [`MosaicError::Encode`] if the finished canvas cannot be encoded
    pub async fn generate(
        &mut self,
        image: &RgbaImage,
        canvas: Option<&mut Canvas>,
        tile: TileSize,
    ) -> Result<MosaicOutput, MosaicError> {
        let start = Instant::now();

        if let Err(e) = self.resolver.cache().clear() {
            warn!(error = %e, "Failed to clear glyph cache before generation");
        }

        let region = clip_region(image.width(), image.height(), tile)?;

        let mut scratch = Canvas::default();
        let canvas = canvas.unwrap_or(&mut scratch);
        canvas.resize(region.width, region.height);
        canvas.draw_base(image, &region);

        let grid = compute_tile_grid(image, &region, tile);
        debug!(
            columns = grid.column_count(),
            rows = grid.row_count(),
            tile = %tile,
            offset_x = region.offset_x,
            offset_y = region.offset_y,
            "Tile grid computed"
        );

        for (row_index, colors) in grid.rows().enumerate() {
            render_row(&self.resolver, colors, row_index as u32, tile, canvas).await?;
        }

        let rendered_image = canvas
            .to_data_url()
            .map_err(|e| MosaicError::Encode(e.to_string()))?;
        let execution_time = start.elapsed();

        info!(
            width = region.width,
            height = region.height,
            tiles = grid.row_count() * grid.column_count(),
            cached_glyphs = self.resolver.cache().len(),
            elapsed_ms = execution_time.as_millis() as u64,
            "Mosaic generated"
        );

        Ok(MosaicOutput {
            rendered_image,
            execution_time,
            grid,
            region,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{GlyphKey, MemoryGlyphCache};
    use crate::color::ColorHex;
    use crate::geometry::GeometryError;
    use crate::provider::{LocalGlyphProvider, ProviderError};
    use image::Rgba;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn tile() -> TileSize {
        TileSize::new(4, 4).unwrap()
    }

    fn generator(
        cache: Arc<MemoryGlyphCache>,
    ) -> MosaicGenerator<LocalGlyphProvider, Arc<MemoryGlyphCache>> {
        MosaicGenerator::new(LocalGlyphProvider::new(tile()), cache)
    }

    #[tokio::test]
    async fn test_canvas_is_resized_to_clipped_region() {
        let mut generator = generator(Arc::new(MemoryGlyphCache::new(1 << 20)));
        let image = RgbaImage::from_pixel(10, 9, Rgba([50, 60, 70, 255]));
        let mut canvas = Canvas::new(100, 100);

        let output = generator
            .generate(&image, Some(&mut canvas), tile())
            .await
            .unwrap();

        assert_eq!((canvas.width(), canvas.height()), (8, 8));
        assert_eq!((output.region.offset_x, output.region.offset_y), (1, 0));
        assert_eq!(output.grid.row_count(), 2);
        assert_eq!(output.grid.column_count(), 2);
    }

    #[tokio::test]
    async fn test_too_small_image_is_rejected_before_drawing() {
        let mut generator = generator(Arc::new(MemoryGlyphCache::new(1 << 20)));
        let image = RgbaImage::new(3, 40);
        let mut canvas = Canvas::new(2, 2);

        let err = generator
            .generate(&image, Some(&mut canvas), tile())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            MosaicError::Geometry(GeometryError::ImageTooSmall { .. })
        ));
        assert_eq!(canvas, Canvas::new(2, 2));
    }

    #[tokio::test]
    async fn test_cache_is_cleared_at_start() {
        let cache = Arc::new(MemoryGlyphCache::new(1 << 20));
        let stale = GlyphKey::new(ColorHex::new(1, 2, 3), TileSize::new(99, 99).unwrap());
        cache.put(stale, "<svg/>".to_string()).unwrap();

        let mut generator = generator(Arc::clone(&cache));
        let image = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        generator.generate(&image, None, tile()).await.unwrap();

        assert!(!cache.contains(&stale));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_output_is_png_data_url() {
        let mut generator = generator(Arc::new(MemoryGlyphCache::new(1 << 20)));
        let image = RgbaImage::from_pixel(8, 4, Rgba([200, 0, 0, 255]));

        let output = generator.generate(&image, None, tile()).await.unwrap();

        assert!(output.rendered_image.starts_with("data:image/png;base64,"));
        assert!(output.execution_time_ms() >= 0.0);
    }

    /// Provider that fails for black and renders ellipses otherwise.
    struct BlackFails {
        calls: AtomicUsize,
    }

    impl GlyphProvider for BlackFails {
        async fn fetch_glyph(&self, color: ColorHex) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if color == ColorHex::new(0, 0, 0) {
                return Err(ProviderError::HttpError("HTTP 502".to_string()));
            }
            Ok(LocalGlyphProvider::new(TileSize::default()).render(color))
        }

        fn name(&self) -> &str {
            "black-fails"
        }
    }

    #[tokio::test]
    async fn test_row_failure_aborts_generation() {
        let mut generator = MosaicGenerator::new(
            BlackFails {
                calls: AtomicUsize::new(0),
            },
            MemoryGlyphCache::new(1 << 20),
        );
        // Top row white, bottom row black
        let image = RgbaImage::from_fn(32, 32, |_, y| {
            if y < 16 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        });
        let mut canvas = Canvas::default();

        let err = generator
            .generate(&image, Some(&mut canvas), TileSize::default())
            .await
            .unwrap_err();

        assert_eq!(err.color(), Some(ColorHex::new(0, 0, 0)));
        assert!(generator.provider().calls.load(Ordering::SeqCst) >= 2);
        // First row was redrawn (the ellipse leaves the corner clear), second
        // row still shows the source pixels
        assert_eq!(canvas.image().get_pixel(0, 0)[3], 0);
        assert_eq!(*canvas.image().get_pixel(0, 16), Rgba([0, 0, 0, 255]));
    }
}
