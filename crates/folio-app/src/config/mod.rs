//! Configuration file parsing for folio
//!
//! A single optional TOML file, by default `<config_dir>/folio/config.toml`.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, load_settings_from};
pub use types::*;
