//! Glyph cache.
//!
//! Stores the SVG text returned by the glyph service, keyed by color and tile
//! size, so repeated colors are rendered without another network round trip.
//! Backends share the [`GlyphCache`] trait and a fixed byte budget: a full
//! store rejects writes instead of evicting.

mod disk;
mod memory;
mod stats;
mod r#trait;
mod types;

pub use disk::{DiskGlyphCache, DEFAULT_DISK_CACHE_SIZE};
pub use memory::{MemoryGlyphCache, DEFAULT_MEMORY_CACHE_SIZE};
pub use r#trait::{GlyphCache, NoOpCache};
pub use stats::CacheStats;
pub use types::{CacheError, GlyphKey, KEY_PREFIX};
