//! Common types and setting resolution shared across CLI commands.

use clap::ValueEnum;
use mosaic::config::{CacheBackend, ConfigFile};
use mosaic::geometry::TileSize;

use crate::error::CliError;

/// Glyph cache selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum CacheChoice {
    /// In-process cache, discarded when the command exits
    Memory,
    /// One SVG file per glyph in the configured cache directory
    Disk,
}

impl From<CacheChoice> for CacheBackend {
    fn from(choice: CacheChoice) -> Self {
        match choice {
            CacheChoice::Memory => CacheBackend::Memory,
            CacheChoice::Disk => CacheBackend::Disk,
        }
    }
}

/// Resolve the tile size; CLI values take precedence over the config file.
pub fn resolve_tile_size(
    cli_width: Option<u32>,
    cli_height: Option<u32>,
    config: &ConfigFile,
) -> Result<TileSize, CliError> {
    let width = cli_width.unwrap_or(config.tile.width);
    let height = cli_height.unwrap_or(config.tile.height);
    TileSize::new(width, height).map_err(CliError::from)
}

/// Resolve the cache backend from CLI args and config.
pub fn resolve_cache_backend(cli_cache: Option<CacheChoice>, config: &ConfigFile) -> CacheBackend {
    cli_cache
        .map(CacheBackend::from)
        .unwrap_or(config.cache.backend)
}

/// Resolve the color service URL from CLI args and config.
pub fn resolve_service_url(cli_url: Option<String>, config: &ConfigFile) -> String {
    cli_url.unwrap_or_else(|| config.service.url.clone())
}
