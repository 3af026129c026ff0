//! Cache trait definition for dependency injection.

use crate::cache::types::{CacheError, GlyphKey};
use crate::cache::CacheStats;
use std::sync::Arc;

/// Key-value store for serialized glyphs.
///
/// Values are the SVG text returned by the glyph service. Implementations
/// use interior mutability: all resolutions of a row share one cache through
/// `&self` while they are in flight.
///
/// # Example
///
/// ```
/// use mosaic::cache::{GlyphCache, GlyphKey, MemoryGlyphCache};
/// use mosaic::color::ColorHex;
/// use mosaic::geometry::TileSize;
///
/// fn lookup(cache: &dyn GlyphCache, key: &GlyphKey) -> String {
///     if let Some(svg) = cache.get(key) {
///         svg
///     } else {
///         let svg = String::from("<svg/>");
///         cache.put(*key, svg.clone()).ok();
///         svg
///     }
/// }
///
/// let cache = MemoryGlyphCache::new(1024);
/// let key = GlyphKey::new(ColorHex::new(1, 2, 3), TileSize::default());
/// assert_eq!(lookup(&cache, &key), "<svg/>");
/// assert!(cache.contains(&key));
/// ```
pub trait GlyphCache: Send + Sync {
    /// Get the cached glyph for `key`.
    fn get(&self, key: &GlyphKey) -> Option<String>;

    /// Store a glyph.
    ///
    /// Fails with [`CacheError::CapacityExceeded`] when the entry does not fit
    /// in the store's budget. Nothing is evicted to make room.
    fn put(&self, key: GlyphKey, svg: String) -> Result<(), CacheError>;

    /// Check if a key exists in the cache.
    fn contains(&self, key: &GlyphKey) -> bool;

    /// Remove every glyph entry.
    fn clear(&self) -> Result<(), CacheError>;

    /// Number of cached glyphs.
    fn len(&self) -> usize;

    /// Whether the cache holds no glyphs.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the cache counters.
    fn stats(&self) -> CacheStats;
}

impl<T: GlyphCache + ?Sized> GlyphCache for Arc<T> {
    fn get(&self, key: &GlyphKey) -> Option<String> {
        (**self).get(key)
    }

    fn put(&self, key: GlyphKey, svg: String) -> Result<(), CacheError> {
        (**self).put(key, svg)
    }

    fn contains(&self, key: &GlyphKey) -> bool {
        (**self).contains(key)
    }

    fn clear(&self) -> Result<(), CacheError> {
        (**self).clear()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn stats(&self) -> CacheStats {
        (**self).stats()
    }
}

impl GlyphCache for Box<dyn GlyphCache> {
    fn get(&self, key: &GlyphKey) -> Option<String> {
        (**self).get(key)
    }

    fn put(&self, key: GlyphKey, svg: String) -> Result<(), CacheError> {
        (**self).put(key, svg)
    }

    fn contains(&self, key: &GlyphKey) -> bool {
        (**self).contains(key)
    }

    fn clear(&self) -> Result<(), CacheError> {
        (**self).clear()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn stats(&self) -> CacheStats {
        (**self).stats()
    }
}

/// No-op cache implementation that never caches.
///
/// Every lookup misses, so every glyph is fetched. Useful for measuring the
/// cost of the glyph service alone.
#[derive(Debug, Clone, Default)]
pub struct NoOpCache;

impl NoOpCache {
    pub fn new() -> Self {
        Self
    }
}

impl GlyphCache for NoOpCache {
    fn get(&self, _key: &GlyphKey) -> Option<String> {
        None
    }

    fn put(&self, _key: GlyphKey, _svg: String) -> Result<(), CacheError> {
        Ok(())
    }

    fn contains(&self, _key: &GlyphKey) -> bool {
        false
    }

    fn clear(&self) -> Result<(), CacheError> {
        Ok(())
    }

    fn len(&self) -> usize {
        0
    }

    fn stats(&self) -> CacheStats {
        CacheStats::new()
    }
}
