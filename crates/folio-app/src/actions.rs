//! Action handlers: UpdateAction dispatch and background opener spawning

use std::path::Path;
use std::process::Command;

use folio_core::prelude::*;

use crate::handler::UpdateAction;
use crate::state::AppState;

/// Perform an action returned by `update`.
///
/// Scroll requests are applied to the viewport; openers run detached and
/// only log on failure.
pub fn handle_action(action: UpdateAction, state: &mut AppState) {
    match action {
        UpdateAction::SmoothScroll(request) => {
            // A new request replaces any in-flight animation
            state.viewport.animate_to(request.top);
        }

        UpdateAction::OpenResume { path } => {
            let opener = state.settings.behavior.opener.clone();
            tokio::spawn(async move {
                if !resume_available(&path) {
                    let err = Error::opener(path.display().to_string(), "file not found");
                    warn!("{}", err);
                    return;
                }
                if let Err(e) = open_target(&path.to_string_lossy(), &opener) {
                    error!("{}", Error::opener(path.display().to_string(), e.to_string()));
                }
            });
        }

        UpdateAction::OpenUrl { url } => {
            let opener = state.settings.behavior.opener.clone();
            tokio::spawn(async move {
                if let Err(e) = open_target(&url, &opener) {
                    error!("{}", Error::opener(url.as_str(), e.to_string()));
                }
            });
        }
    }
}

/// Open a URL or file.
///
/// If `opener` is non-empty, uses it as the command.
/// Otherwise uses the platform-default opener.
pub fn open_target(target: &str, opener: &str) -> std::io::Result<()> {
    info!("Opening {}", target);

    if !opener.is_empty() {
        Command::new(opener).arg(target).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(target).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(target).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", target]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}

/// Whether the resume document can be opened at all
pub fn resume_available(path: &Path) -> bool {
    path.is_file()
}
