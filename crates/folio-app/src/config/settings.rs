//! Settings loading

use std::path::{Path, PathBuf};

use folio_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "folio";
const CONFIG_FILENAME: &str = "config.toml";

/// Default settings location: `<config_dir>/folio/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match load_settings_from(path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("{}, using defaults", e);
            Settings::default()
        }
    }
}

/// Load settings from `path`, reporting a missing or malformed file
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::config_not_found(path));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;

    toml::from_str(&content)
        .map_err(|e| Error::config_invalid(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_valid_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[ui]
icons = "nerd_fonts"
row_height_px = 20
scroll_step = 5

[behavior]
opener = "firefox"
resume_path = "/srv/cv.pdf"
"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(settings.ui.row_height_px, 20);
        assert_eq!(settings.ui.scroll_step, 5);
        assert_eq!(settings.behavior.opener, "firefox");
        assert_eq!(settings.behavior.resume_path, PathBuf::from("/srv/cv.pdf"));
    }

    #[test]
    fn test_load_malformed_file_gives_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui\nicons = ").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_strict_load_reports_errors() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("missing.toml");
        let err = load_settings_from(&missing).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));

        let bad = temp.path().join("bad.toml");
        std::fs::write(&bad, "[ui]\nicons = \"emoji\"\n").unwrap();
        let err = load_settings_from(&bad).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_default_config_path_ends_with_folio_config() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("folio/config.toml"));
        }
    }
}
