//! Configuration types

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::scroll_watcher::DEFAULT_ROW_HEIGHT_PX;
use folio_core::content::RESUME_FILE;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Icon rendering mode for the TUI.
///
/// Unicode works in every terminal; Nerd Font glyphs need a patched font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Unicode,
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

impl FromStr for IconMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unicode" => Ok(IconMode::Unicode),
            "nerd_fonts" | "nerd-fonts" | "nerdfonts" => Ok(IconMode::NerdFonts),
            other => Err(format!(
                "unknown icon mode '{}' (expected 'unicode' or 'nerd_fonts')",
                other
            )),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,

    /// Pixel height assumed for one terminal row when reporting scroll offsets
    #[serde(default = "default_row_height_px")]
    pub row_height_px: u32,

    /// Rows moved per line-scroll key or wheel notch
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            row_height_px: default_row_height_px(),
            scroll_step: default_scroll_step(),
        }
    }
}

fn default_row_height_px() -> u32 {
    DEFAULT_ROW_HEIGHT_PX
}

fn default_scroll_step() -> u16 {
    3
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Command used to open links and the resume (empty = platform default)
    #[serde(default)]
    pub opener: String,

    /// Location of the resume document
    #[serde(default = "default_resume_path")]
    pub resume_path: PathBuf,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            opener: String::new(),
            resume_path: default_resume_path(),
        }
    }
}

fn default_resume_path() -> PathBuf {
    PathBuf::from(RESUME_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert_eq!(settings.ui.row_height_px, 16);
        assert_eq!(settings.ui.scroll_step, 3);
        assert!(settings.behavior.opener.is_empty());
        assert_eq!(settings.behavior.resume_path, PathBuf::from("resume.pdf"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [ui]
            icons = "nerd_fonts"
            "#,
        )
        .unwrap();
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(settings.ui.row_height_px, 16);
        assert_eq!(settings.behavior, BehaviorSettings::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_icon_mode_parse() {
        assert_eq!("unicode".parse::<IconMode>(), Ok(IconMode::Unicode));
        assert_eq!("nerd_fonts".parse::<IconMode>(), Ok(IconMode::NerdFonts));
        assert_eq!("nerd-fonts".parse::<IconMode>(), Ok(IconMode::NerdFonts));
        assert!("emoji".parse::<IconMode>().is_err());
    }

    #[test]
    fn test_icon_mode_display_round_trips_through_serde_name() {
        assert_eq!(IconMode::NerdFonts.to_string(), "nerd_fonts");
        assert_eq!(IconMode::Unicode.to_string(), "unicode");
    }
}
