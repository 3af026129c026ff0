//! Init command - write a default config file.

use mosaic::config::{config_file_path, ConfigFile};
use std::path::Path;

use crate::error::CliError;

/// Run the init command.
///
/// An existing config file is left alone unless `force` is set.
pub fn run(force: bool) -> Result<(), CliError> {
    let path = config_file_path();
    if write_default_config(&path, force)? {
        println!("Wrote default configuration to {}", path.display());
    } else {
        println!("Configuration already exists at {}", path.display());
        println!("Use --force to overwrite it with defaults.");
    }
    Ok(())
}

/// Write defaults to `path`; returns whether the file was written.
fn write_default_config(path: &Path, force: bool) -> Result<bool, CliError> {
    if path.exists() && !force {
        return Ok(false);
    }
    ConfigFile::default().save_to(path)?;
    Ok(true)
}
