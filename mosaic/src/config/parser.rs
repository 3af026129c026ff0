//! INI parsing: maps section keys onto [`ConfigFile`] fields.

use ini::{Ini, Properties};
use std::path::PathBuf;
use std::str::FromStr;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use super::size::parse_size;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    if let Some(section) = ini.section(Some("tile")) {
        if let Some(v) = section.get("width") {
            config.tile.width = parse_dimension("width", v)?;
        }
        if let Some(v) = section.get("height") {
            config.tile.height = parse_dimension("height", v)?;
        }
    }

    if let Some(section) = ini.section(Some("service")) {
        if let Some(v) = non_empty(section, "url") {
            if !v.starts_with("http://") && !v.starts_with("https://") {
                return Err(invalid("service", "url", v, "must start with http:// or https://"));
            }
            config.service.url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = section.get("timeout") {
            config.service.timeout = parse_positive(
                "service",
                "timeout",
                v,
                "must be a positive integer (seconds)",
            )?;
        }
    }

    if let Some(section) = ini.section(Some("cache")) {
        if let Some(v) = section.get("backend") {
            config.cache.backend = v
                .parse()
                .map_err(|_| invalid("cache", "backend", v, "must be 'memory' or 'disk'"))?;
        }
        if let Some(v) = section.get("memory_size") {
            config.cache.memory_size = parse_size(v).map_err(|_| {
                invalid("cache", "memory_size", v, "expected format like '5MB' or '512KB'")
            })?;
        }
        if let Some(v) = non_empty(section, "directory") {
            config.cache.directory = expand_tilde(v);
        }
        if let Some(v) = section.get("disk_size") {
            config.cache.disk_size = parse_size(v).map_err(|_| {
                invalid("cache", "disk_size", v, "expected format like '50MB' or '1GB'")
            })?;
        }
    }

    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = non_empty(section, "file") {
            config.logging.file = expand_tilde(v);
        }
    }

    Ok(config)
}

fn non_empty<'a>(section: &'a Properties, key: &str) -> Option<&'a str> {
    section.get(key).map(str::trim).filter(|v| !v.is_empty())
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a non-zero integer.
fn parse_positive<T>(
    section: &str,
    key: &str,
    value: &str,
    reason: &str,
) -> Result<T, ConfigFileError>
where
    T: FromStr + PartialEq + Default,
{
    match value.trim().parse::<T>() {
        Ok(n) if n != T::default() => Ok(n),
        _ => Err(invalid(section, key, value, reason)),
    }
}

fn parse_dimension(key: &str, value: &str) -> Result<u32, ConfigFileError> {
    parse_positive("tile", key, value, "must be a positive number of pixels")
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
