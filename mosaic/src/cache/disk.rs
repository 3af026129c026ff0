//! Persistent glyph cache backed by a directory of SVG files.

use crate::cache::r#trait::GlyphCache;
use crate::cache::types::{CacheError, GlyphKey, KEY_PREFIX};
use crate::cache::CacheStats;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default disk budget: 50 MB.
pub const DEFAULT_DISK_CACHE_SIZE: usize = 50 * 1024 * 1024;

/// File extension used for cached glyphs.
const GLYPH_EXTENSION: &str = "svg";

#[derive(Debug, Default)]
struct Index {
    /// Cached glyphs and their file sizes
    entries: HashMap<GlyphKey, usize>,
    size_bytes: usize,
    stats: CacheStats,
}

/// Disk cache storing one `<key>.svg` file per glyph.
///
/// Survives process restarts: existing files are indexed when the cache is
/// opened. Like [`MemoryGlyphCache`](super::MemoryGlyphCache), writes beyond
/// the byte budget fail rather than evict. Files whose names are not glyph
/// keys are left alone, including by [`clear`](GlyphCache::clear).
#[derive(Debug)]
pub struct DiskGlyphCache {
    cache_dir: PathBuf,
    index: Mutex<Index>,
    max_size_bytes: usize,
}

impl DiskGlyphCache {
    /// Open (or create) a disk cache rooted at `cache_dir`.
    ///
    /// # Arguments
    ///
    /// * `cache_dir` - Directory holding the glyph files
    /// * `max_size_bytes` - Maximum total size of glyph files
    pub fn open(cache_dir: impl Into<PathBuf>, max_size_bytes: usize) -> Result<Self, CacheError> {
        let cache_dir = cache_dir.into();
        fs::create_dir_all(&cache_dir)?;

        let cache = Self {
            cache_dir,
            index: Mutex::new(Index::default()),
            max_size_bytes,
        };
        cache.scan_cache_dir()?;

        Ok(cache)
    }

    /// Root directory of the cache.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Total size of indexed glyph files in bytes.
    pub fn size_bytes(&self) -> usize {
        self.index.lock().size_bytes
    }

    /// Get the maximum size of the cache in bytes.
    pub fn max_size_bytes(&self) -> usize {
        self.max_size_bytes
    }

    /// Path of the file backing `key`.
    pub fn glyph_path(&self, key: &GlyphKey) -> PathBuf {
        self.cache_dir
            .join(format!("{}.{}", key.storage_key(), GLYPH_EXTENSION))
    }

    /// Build the index from glyph files already on disk.
    fn scan_cache_dir(&self) -> Result<(), CacheError> {
        let mut index = self.index.lock();
        index.entries.clear();
        index.size_bytes = 0;

        for entry in fs::read_dir(&self.cache_dir)? {
            let entry = entry?;
            let Some(key) = glyph_key_for_path(&entry.path()) else {
                continue;
            };
            let size = entry.metadata()?.len() as usize;
            index.entries.insert(key, size);
            index.size_bytes += size;
        }

        let (size, count) = (index.size_bytes, index.entries.len());
        index.stats.update_size(size, count);
        debug!(
            cache_dir = %self.cache_dir.display(),
            entries = count,
            size_bytes = size,
            "Indexed disk glyph cache"
        );

        Ok(())
    }
}

/// Delete every glyph file in `cache_dir`.
///
/// Each entry leaves the index as its file goes, so on error the index
/// still matches the files left behind.
fn remove_glyph_files(cache_dir: &Path, index: &mut Index) -> Result<(), CacheError> {
    for entry in fs::read_dir(cache_dir)? {
        let path = entry?.path();
        let Some(key) = glyph_key_for_path(&path) else {
            continue;
        };
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        if let Some(size) = index.entries.remove(&key) {
            index.size_bytes -= size;
        }
    }
    Ok(())
}

/// Recover the glyph key from a `mosaic-*.svg` file name.
fn glyph_key_for_path(path: &Path) -> Option<GlyphKey> {
    if path.extension()? != GLYPH_EXTENSION {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if !stem.starts_with(KEY_PREFIX) {
        return None;
    }
    GlyphKey::from_storage_key(stem)
}

impl GlyphCache for DiskGlyphCache {
    fn get(&self, key: &GlyphKey) -> Option<String> {
        if !self.index.lock().entries.contains_key(key) {
            self.index.lock().stats.record_miss();
            return None;
        }

        match fs::read_to_string(self.glyph_path(key)) {
            Ok(svg) => {
                self.index.lock().stats.record_hit();
                Some(svg)
            }
            Err(e) => {
                // File vanished or is unreadable - drop it from the index
                warn!(key = %key, error = %e, "Failed to read cached glyph");
                let mut index = self.index.lock();
                if let Some(size) = index.entries.remove(key) {
                    index.size_bytes -= size;
                }
                index.stats.record_miss();
                None
            }
        }
    }

    fn put(&self, key: GlyphKey, svg: String) -> Result<(), CacheError> {
        let mut index = self.index.lock();

        let entry = svg.len();
        let replaced = index.entries.get(&key).copied().unwrap_or(0);
        let current = index.size_bytes - replaced;

        if current + entry > self.max_size_bytes {
            index.stats.record_write_failure();
            return Err(CacheError::CapacityExceeded {
                current,
                entry,
                limit: self.max_size_bytes,
            });
        }

        if let Err(e) = fs::write(self.glyph_path(&key), &svg) {
            index.stats.record_write_failure();
            return Err(e.into());
        }

        index.entries.insert(key, entry);
        index.size_bytes = current + entry;
        let (size, count) = (index.size_bytes, index.entries.len());
        index.stats.record_write();
        index.stats.update_size(size, count);

        Ok(())
    }

    fn contains(&self, key: &GlyphKey) -> bool {
        self.index.lock().entries.contains_key(key)
    }

    fn clear(&self) -> Result<(), CacheError> {
        let mut index = self.index.lock();

        if let Err(e) = remove_glyph_files(&self.cache_dir, &mut index) {
            let (size, count) = (index.size_bytes, index.entries.len());
            index.stats.update_size(size, count);
            warn!(
                cache_dir = %self.cache_dir.display(),
                remaining = count,
                error = %e,
                "Disk glyph cache only partially cleared"
            );
            return Err(e);
        }

        index.entries.clear();
        index.size_bytes = 0;
        index.stats.record_clear();

        Ok(())
    }

    fn len(&self) -> usize {
        self.index.lock().entries.len()
    }

    fn stats(&self) -> CacheStats {
        self.index.lock().stats.clone()
    }
}
