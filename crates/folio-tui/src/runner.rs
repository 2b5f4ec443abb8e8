//! Main TUI runner - entry point and event loop

use folio_app::config::Settings;
use folio_app::message::Message;
use folio_app::process::process_message;
use folio_app::signals;
use folio_app::state::AppState;
use folio_core::prelude::*;
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the portfolio TUI until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    // Mouse capture lives exactly as long as the loop
    let result = match terminal::ScrollSubscription::acquire() {
        Ok(_subscription) => {
            let mut state = AppState::with_settings(settings);

            // Unified message channel for out-of-band messages (signals)
            let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
            signals::spawn_signal_handler(msg_tx);

            run_loop(&mut term, &mut state, msg_rx)
        }
        Err(e) => Err(e),
    };

    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        // Keep scroll bounds in sync with what will be drawn
        let size = terminal.size().context("Failed to query terminal size")?;
        let (total_rows, visible_rows) =
            render::measure(state, Rect::new(0, 0, size.width, size.height));
        if total_rows != state.viewport.total_rows || visible_rows != state.viewport.visible_rows
        {
            process_message(
                state,
                Message::ViewportMeasured {
                    total_rows,
                    visible_rows,
                },
            );
        }

        // Render
        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    info!("Event loop finished");
    Ok(())
}
