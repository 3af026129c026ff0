//! User configuration for mosaic generation.
//!
//! Settings live in `~/.mosaic/config.ini`. A missing file means defaults;
//! every key is optional and overlays the default value.
//!
//! # Example
//!
//! ```
//! use mosaic::config::{parse_size, CacheBackend, ConfigFile};
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.tile.width, 16);
//! assert_eq!(config.cache.backend, CacheBackend::Memory);
//! assert_eq!(parse_size("5MB").unwrap(), config.cache.memory_size);
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod size;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use parser::expand_tilde;
pub use settings::{
    CacheBackend, CacheSettings, ConfigFile, LoggingSettings, ServiceSettings, TileSettings,
};
pub use size::{format_size, parse_size, SizeParseError};
