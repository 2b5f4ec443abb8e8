//! Terminal setup and restoration

use std::io::{stdout, Stdout, Write};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use folio_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Subscription to scroll (mouse wheel) events.
///
/// Mouse capture is enabled while the guard lives and released when it is
/// dropped, whichever way the event loop exits.
#[derive(Debug)]
pub struct ScrollSubscription<W: Write = Stdout> {
    out: W,
}

impl ScrollSubscription<Stdout> {
    pub fn acquire() -> Result<Self> {
        Self::with_writer(stdout())
    }
}

impl<W: Write> ScrollSubscription<W> {
    /// Enable mouse capture on `out`, releasing it on the same writer when dropped
    pub fn with_writer(mut out: W) -> Result<Self> {
        execute!(out, EnableMouseCapture)
            .map_err(|e| Error::TerminalInit(format!("Failed to enable mouse capture: {}", e)))?;
        debug!("Scroll subscription acquired");
        Ok(Self { out })
    }
}

impl<W: Write> Drop for ScrollSubscription<W> {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, DisableMouseCapture) {
            warn!("Failed to release mouse capture: {}", e);
        } else {
            debug!("Scroll subscription released");
        }
    }
}
