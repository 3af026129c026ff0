//! Cache-first glyph resolution.

use super::{decode_svg, Glyph};
use crate::cache::{GlyphCache, GlyphKey};
use crate::color::ColorHex;
use crate::error::MosaicError;
use crate::geometry::TileSize;
use crate::provider::GlyphProvider;
use tracing::{trace, warn};

/// Resolves tile colors to glyphs, consulting the cache before the provider.
///
/// Freshly fetched glyphs are written to the cache. A failed write (usually a
/// full store) empties the cache and resolution continues with the fetched
/// data; the caller never sees the write failure.
pub struct GlyphResolver<P, C> {
    provider: P,
    cache: C,
}

impl<P, C> GlyphResolver<P, C>
where
    P: GlyphProvider,
    C: GlyphCache,
{
    /// Create a resolver over a provider and the cache it populates.
    pub fn new(provider: P, cache: C) -> Self {
        Self { provider, cache }
    }

    /// The cache this resolver reads and populates.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// The provider consulted on cache misses.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve `color` to a glyph rendered at `tile` size.
    ///
    /// # Errors
    ///
    /// - [`MosaicError::Lookup`] if the provider fails (not retried)
    /// - [`MosaicError::Decode`] if the SVG cannot be rasterized
    pub async fn resolve(&self, color: ColorHex, tile: TileSize) -> Result<Glyph, MosaicError> {
        let key = GlyphKey::new(color, tile);

        if let Some(svg) = self.cache.get(&key) {
            trace!(key = %key, "Glyph cache hit");
            return decode_svg(&svg, tile).map_err(|source| MosaicError::Decode { color, source });
        }

        trace!(key = %key, provider = self.provider.name(), "Glyph cache miss");
        let svg = self
            .provider
            .fetch_glyph(color)
            .await
            .map_err(|source| MosaicError::Lookup { color, source })?;

        let glyph = decode_svg(&svg, tile).map_err(|source| MosaicError::Decode { color, source });

        if let Err(e) = self.cache.put(key, svg) {
            warn!(key = %key, error = %e, "Failed to cache glyph, clearing glyph cache");
            if let Err(e) = self.cache.clear() {
                warn!(error = %e, "Failed to clear glyph cache");
            }
        }

        glyph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheError, CacheStats, MemoryGlyphCache};
    use crate::provider::ProviderError;
    use image::Rgba;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn svg_for(color: ColorHex) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"4\" height=\"4\"><rect width=\"4\" height=\"4\" fill=\"#{}\"/></svg>",
            color
        )
    }

    /// Provider that renders solid squares and counts calls.
    #[derive(Default)]
    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl GlyphProvider for CountingProvider {
        async fn fetch_glyph(&self, color: ColorHex) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(svg_for(color))
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    struct FailingProvider;

    impl GlyphProvider for FailingProvider {
        async fn fetch_glyph(&self, _color: ColorHex) -> Result<String, ProviderError> {
            Err(ProviderError::HttpError("connection refused".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    /// Cache that rejects every write and counts clears.
    #[derive(Default)]
    struct FullCache {
        clears: AtomicUsize,
    }

    impl GlyphCache for FullCache {
        fn get(&self, _key: &GlyphKey) -> Option<String> {
            None
        }

        fn put(&self, _key: GlyphKey, svg: String) -> Result<(), CacheError> {
            Err(CacheError::CapacityExceeded {
                current: 0,
                entry: svg.len(),
                limit: 0,
            })
        }

        fn contains(&self, _key: &GlyphKey) -> bool {
            false
        }

        fn clear(&self) -> Result<(), CacheError> {
            self.clears.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn len(&self) -> usize {
            0
        }

        fn stats(&self) -> CacheStats {
            CacheStats::new()
        }
    }

    fn tile() -> TileSize {
        TileSize::new(4, 4).unwrap()
    }

    #[tokio::test]
    async fn test_miss_fetches_and_populates_cache() {
        let resolver = GlyphResolver::new(CountingProvider::default(), MemoryGlyphCache::new(4096));
        let color = ColorHex::new(12, 34, 56);

        let glyph = resolver.resolve(color, tile()).await.unwrap();

        assert_eq!(*glyph.image().get_pixel(1, 1), Rgba([12, 34, 56, 255]));
        assert!(resolver.cache().contains(&GlyphKey::new(color, tile())));
        assert_eq!(resolver.provider().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_hit_skips_provider() {
        let resolver = GlyphResolver::new(CountingProvider::default(), MemoryGlyphCache::new(4096));
        let color = ColorHex::new(1, 2, 3);

        let first = resolver.resolve(color, tile()).await.unwrap();
        let second = resolver.resolve(color, tile()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(resolver.provider().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_different_tile_size_is_a_miss() {
        let resolver = GlyphResolver::new(CountingProvider::default(), MemoryGlyphCache::new(4096));
        let color = ColorHex::new(1, 2, 3);

        resolver.resolve(color, tile()).await.unwrap();
        let glyph = resolver
            .resolve(color, TileSize::new(2, 2).unwrap())
            .await
            .unwrap();

        assert_eq!((glyph.width(), glyph.height()), (2, 2));
        assert_eq!(resolver.provider().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_store_failure_clears_cache_and_still_resolves() {
        let cache = Arc::new(FullCache::default());
        let resolver = GlyphResolver::new(CountingProvider::default(), Arc::clone(&cache));

        let glyph = resolver.resolve(ColorHex::new(0, 255, 0), tile()).await;

        assert!(glyph.is_ok());
        assert_eq!(cache.clears.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_full_memory_cache_is_emptied() {
        // Each entry is 127 bytes: room for exactly one
        let cache = Arc::new(MemoryGlyphCache::new(200));
        let resolver = GlyphResolver::new(CountingProvider::default(), Arc::clone(&cache));

        resolver.resolve(ColorHex::new(1, 1, 1), tile()).await.unwrap();
        assert_eq!(cache.len(), 1);

        resolver.resolve(ColorHex::new(2, 2, 2), tile()).await.unwrap();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().write_failures, 1);
    }

    #[tokio::test]
    async fn test_lookup_failure_propagates() {
        let resolver = GlyphResolver::new(FailingProvider, MemoryGlyphCache::new(4096));

        let err = resolver
            .resolve(ColorHex::new(9, 9, 9), tile())
            .await
            .unwrap_err();

        assert!(matches!(err, MosaicError::Lookup { .. }));
        assert!(resolver.cache().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_cache_entry_is_decode_error() {
        let cache = MemoryGlyphCache::new(4096);
        let color = ColorHex::new(5, 5, 5);
        cache
            .put(GlyphKey::new(color, tile()), "garbage".to_string())
            .unwrap();
        let resolver = GlyphResolver::new(CountingProvider::default(), cache);

        let err = resolver.resolve(color, tile()).await.unwrap_err();

        assert!(matches!(err, MosaicError::Decode { .. }));
        assert_eq!(resolver.provider().calls.load(Ordering::SeqCst), 0);
    }
}
