//! CLI error handling with user-friendly messages.

use mosaic::cache::CacheError;
use mosaic::config::ConfigFileError;
use mosaic::geometry::GeometryError;
use mosaic::provider::ProviderError;
use mosaic::MosaicError;
use std::fmt;
use std::path::PathBuf;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file could not be loaded or written
    Config(ConfigFileError),
    /// Tile size is unusable
    Geometry(GeometryError),
    /// Failed to create the HTTP client
    HttpClient(ProviderError),
    /// Failed to open the glyph cache
    Cache(CacheError),
    /// Failed to read the source photo
    ImageRead {
        path: PathBuf,
        error: image::ImageError,
    },
    /// Mosaic generation failed
    Generate(MosaicError),
    /// Failed to write the output file
    FileWrite { path: PathBuf, error: String },
}

impl CliError {
    /// Exit the process with an error message and hints.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Generate(MosaicError::Lookup { .. }) => {
                eprintln!();
                eprintln!("Make sure the color service is reachable:");
                eprintln!("  1. Check the URL with --service-url or [service] url in config.ini");
                eprintln!("  2. Or render without the service using --offline");
            }
            CliError::Geometry(_) | CliError::Generate(MosaicError::Geometry(_)) => {
                eprintln!();
                eprintln!("Try a smaller tile with --tile-width / --tile-height.");
            }
            CliError::Config(ConfigFileError::InvalidValue { .. }) => {
                eprintln!();
                eprintln!(
                    "Fix the value in {} or regenerate it with: mosaic init --force",
                    mosaic::config::config_file_path().display()
                );
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Geometry(e) => write!(f, "Invalid tile size: {}", e),
            CliError::HttpClient(e) => write!(f, "Failed to create HTTP client: {}", e),
            CliError::Cache(e) => write!(f, "Glyph cache error: {}", e),
            CliError::ImageRead { path, error } => {
                write!(f, "Failed to read image '{}': {}", path.display(), error)
            }
            CliError::Generate(e) => write!(f, "Mosaic generation failed: {}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path.display(), error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Geometry(e) => Some(e),
            CliError::HttpClient(e) => Some(e),
            CliError::Cache(e) => Some(e),
            CliError::ImageRead { error, .. } => Some(error),
            CliError::Generate(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<GeometryError> for CliError {
    fn from(e: GeometryError) -> Self {
        CliError::Geometry(e)
    }
}

impl From<CacheError> for CliError {
    fn from(e: CacheError) -> Self {
        CliError::Cache(e)
    }
}

impl From<MosaicError> for CliError {
    fn from(e: MosaicError) -> Self {
        CliError::Generate(e)
    }
}
