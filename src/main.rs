//! folio - A personal portfolio rendered in the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use folio_app::config::{self, IconMode};
use folio_core::prelude::*;

/// folio - A personal portfolio rendered in the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "A personal portfolio rendered in the terminal", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to <config_dir>/folio/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Icon set: unicode or nerd_fonts
    #[arg(long, value_name = "MODE")]
    icons: Option<IconMode>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    folio_core::logging::init()?;

    let mut settings = match args.config.or_else(config::default_config_path) {
        Some(path) => config::load_settings(&path),
        None => {
            warn!("No config directory available, using defaults");
            config::Settings::default()
        }
    };
    if let Some(icons) = args.icons {
        settings.ui.icons = icons;
    }
    info!("Icon mode: {}", settings.ui.icons);

    let result = folio_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("folio exiting");
    result
}
