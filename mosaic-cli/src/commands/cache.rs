//! Disk cache management CLI commands.

use clap::Subcommand;
use mosaic::cache::{DiskGlyphCache, GlyphCache};
use mosaic::config::{format_size, ConfigFile};

use crate::error::CliError;

/// Cache action subcommands.
#[derive(Debug, Subcommand)]
pub enum CacheAction {
    /// Delete every cached glyph from the disk cache
    Clear,
    /// Show disk cache statistics
    Stats,
}

/// Run a cache subcommand.
pub fn run(action: CacheAction) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let settings = &config.cache;
    let cache = DiskGlyphCache::open(&settings.directory, settings.disk_size)?;

    match action {
        CacheAction::Clear => {
            println!("Clearing disk cache at: {}", cache.cache_dir().display());

            let glyphs = cache.len();
            let bytes = cache.size_bytes();
            cache.clear()?;

            println!("Deleted {} glyphs, freed {}", glyphs, format_size(bytes));
        }
        CacheAction::Stats => {
            println!("Disk cache: {}", cache.cache_dir().display());
            println!("  Glyphs: {}", cache.len());
            println!(
                "  Size:   {} of {}",
                format_size(cache.size_bytes()),
                format_size(cache.max_size_bytes())
            );
        }
    }

    Ok(())
}
