//! INI serialization: renders a [`ConfigFile`] as commented `config.ini` text.

use std::path::Path;

use super::settings::ConfigFile;
use super::size::format_size;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[tile]
; Tile size in pixels. Each tile of the source photo becomes one glyph.
width = {}
height = {}

[service]
; Color service base URL; glyphs are fetched from <url>/color/<hex>
url = {}
; Request timeout in seconds
timeout = {}

[cache]
; Glyph cache backend: memory (per run) or disk (kept between runs)
backend = {}
; Memory cache budget (e.g. 5MB, 512KB)
memory_size = {}
; Disk cache location and budget
directory = {}
disk_size = {}

[logging]
; Log file, cleared at the start of every run
file = {}
"#,
        config.tile.width,
        config.tile.height,
        config.service.url,
        config.service.timeout,
        config.cache.backend,
        format_size(config.cache.memory_size),
        path_to_string(&config.cache.directory),
        format_size(config.cache.disk_size),
        path_to_string(&config.logging.file),
    )
}

/// Render a path for the config file, abbreviating the home directory to `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ini::Ini;

    #[test]
    fn test_output_is_valid_ini() {
        let content = to_config_string(&ConfigFile::default());
        let ini = Ini::load_from_str(&content).unwrap();

        let tile = ini.section(Some("tile")).unwrap();
        assert_eq!(tile.get("width"), Some("16"));
        assert_eq!(tile.get("height"), Some("16"));

        let cache = ini.section(Some("cache")).unwrap();
        assert_eq!(cache.get("backend"), Some("memory"));
        assert_eq!(cache.get("memory_size"), Some("5MB"));
        assert_eq!(cache.get("disk_size"), Some("50MB"));
    }

    #[test]
    fn test_home_paths_abbreviated() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path_to_string(&home.join("glyphs")), "~/glyphs");
        }
        assert_eq!(path_to_string(Path::new("/srv/glyphs")), "/srv/glyphs");
    }
}
