//! In-memory glyph cache with a fixed byte budget.

use crate::cache::r#trait::GlyphCache;
use crate::cache::types::{CacheError, GlyphKey};
use crate::cache::CacheStats;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Default memory budget: 5 MB, the usual per-origin web storage quota.
pub const DEFAULT_MEMORY_CACHE_SIZE: usize = 5 * 1024 * 1024;

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<GlyphKey, String>,
    size_bytes: usize,
    stats: CacheStats,
}

/// In-memory cache for serialized glyphs.
///
/// Behaves like a quota-limited storage area: once the budget is reached,
/// `put` fails instead of evicting older entries. Callers decide what to do
/// about a full store.
#[derive(Debug)]
pub struct MemoryGlyphCache {
    inner: Mutex<Inner>,
    max_size_bytes: usize,
}

impl MemoryGlyphCache {
    /// Create a new memory cache with the given size limit.
    ///
    /// # Arguments
    ///
    /// * `max_size_bytes` - Maximum total size of stored keys and values
    pub fn new(max_size_bytes: usize) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            max_size_bytes,
        }
    }

    /// Get the current size of the cache in bytes.
    pub fn size_bytes(&self) -> usize {
        self.inner.lock().size_bytes
    }

    /// Get the maximum size of the cache in bytes.
    pub fn max_size_bytes(&self) -> usize {
        self.max_size_bytes
    }

    /// Bytes an entry occupies: key and value, as a string store counts them.
    fn entry_size(key: &GlyphKey, svg: &str) -> usize {
        key.storage_key().len() + svg.len()
    }
}

impl Default for MemoryGlyphCache {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_CACHE_SIZE)
    }
}

impl GlyphCache for MemoryGlyphCache {
    fn get(&self, key: &GlyphKey) -> Option<String> {
        let mut inner = self.inner.lock();
        let found = inner.entries.get(key).cloned();
        match found {
            Some(svg) => {
                inner.stats.record_hit();
                Some(svg)
            }
            None => {
                inner.stats.record_miss();
                None
            }
        }
    }

    fn put(&self, key: GlyphKey, svg: String) -> Result<(), CacheError> {
        let mut inner = self.inner.lock();

        let entry = Self::entry_size(&key, &svg);
        let replaced = inner
            .entries
            .get(&key)
            .map_or(0, |old| Self::entry_size(&key, old));
        let current = inner.size_bytes - replaced;

        if current + entry > self.max_size_bytes {
            inner.stats.record_write_failure();
            return Err(CacheError::CapacityExceeded {
                current,
                entry,
                limit: self.max_size_bytes,
            });
        }

        inner.entries.insert(key, svg);
        inner.size_bytes = current + entry;
        let (size, count) = (inner.size_bytes, inner.entries.len());
        inner.stats.record_write();
        inner.stats.update_size(size, count);

        Ok(())
    }

    fn contains(&self, key: &GlyphKey) -> bool {
        self.inner.lock().entries.contains_key(key)
    }

    fn clear(&self) -> Result<(), CacheError> {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.size_bytes = 0;
        inner.stats.record_clear();
        Ok(())
    }

    fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    fn stats(&self) -> CacheStats {
        self.inner.lock().stats.clone()
    }
}
