//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and glyph cache
//! construction so command handlers stay small.

use crate::error::CliError;
use mosaic::cache::{DiskGlyphCache, GlyphCache, MemoryGlyphCache};
use mosaic::config::{format_size, CacheBackend, ConfigFile};
use mosaic::logging::{init_logging, LoggingGuard};
use tracing::info;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Keeps logging active while the runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    config: ConfigFile,
}

impl CliRunner {
    /// Load config and initialize logging.
    ///
    /// # Arguments
    ///
    /// * `debug` - Default to debug-level logging when `RUST_LOG` is unset
    /// * `verbose` - Mirror log output to stdout
    pub fn new(debug: bool, verbose: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let logging_guard = init_logging(&config.logging.file, verbose, debug)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("mosaic v{}", mosaic::VERSION);
        info!("mosaic CLI: {} command", command);
    }

    /// Build the glyph cache for `backend` using the configured budgets.
    pub fn create_cache(&self, backend: CacheBackend) -> Result<Box<dyn GlyphCache>, CliError> {
        let settings = &self.config.cache;
        match backend {
            CacheBackend::Memory => {
                info!(budget = %format_size(settings.memory_size), "Using memory glyph cache");
                Ok(Box::new(MemoryGlyphCache::new(settings.memory_size)))
            }
            CacheBackend::Disk => {
                let cache = DiskGlyphCache::open(&settings.directory, settings.disk_size)?;
                info!(
                    directory = %settings.directory.display(),
                    budget = %format_size(settings.disk_size),
                    "Using disk glyph cache"
                );
                Ok(Box::new(cache))
            }
        }
    }
}
