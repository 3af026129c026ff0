//! Default values for every configuration setting.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;
use crate::cache::{DEFAULT_DISK_CACHE_SIZE, DEFAULT_MEMORY_CACHE_SIZE};
use crate::geometry::{DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH};
use crate::logging::DEFAULT_LOG_FILE;
use crate::provider::{DEFAULT_SERVICE_URL, DEFAULT_TIMEOUT_SECS};

/// Default disk cache directory (`~/.cache/mosaic`).
pub fn default_cache_directory() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| config_directory().join("cache"))
        .join("mosaic")
}

/// Default log file (`~/.mosaic/mosaic.log`).
pub fn default_log_file() -> PathBuf {
    config_directory().join(DEFAULT_LOG_FILE)
}

impl Default for TileSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_TILE_WIDTH,
            height: DEFAULT_TILE_HEIGHT,
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVICE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            memory_size: DEFAULT_MEMORY_CACHE_SIZE,
            directory: default_cache_directory(),
            disk_size: DEFAULT_DISK_CACHE_SIZE,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            tile: TileSettings::default(),
            service: ServiceSettings::default(),
            cache: CacheSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}
