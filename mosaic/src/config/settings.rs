//! Settings structs, one per `[section]` of the INI file.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub tile: TileSettings,
    pub service: ServiceSettings,
    pub cache: CacheSettings,
    pub logging: LoggingSettings,
}

/// Tile dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSettings {
    pub width: u32,
    pub height: u32,
}

/// Color service connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    /// Base URL; glyphs are fetched from `{url}/color/{hex}`
    pub url: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

/// Where glyphs are cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheBackend {
    /// In-process, lost on exit
    #[default]
    Memory,
    /// One file per glyph under [`CacheSettings::directory`]
    Disk,
}

impl CacheBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheBackend::Memory => "memory",
            CacheBackend::Disk => "disk",
        }
    }
}

impl fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(CacheBackend::Memory),
            "disk" => Ok(CacheBackend::Disk),
            other => Err(format!("unknown cache backend '{}'", other)),
        }
    }
}

/// Glyph cache configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    pub backend: CacheBackend,
    /// Memory cache budget in bytes
    pub memory_size: usize,
    /// Disk cache directory
    pub directory: PathBuf,
    /// Disk cache budget in bytes
    pub disk_size: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
