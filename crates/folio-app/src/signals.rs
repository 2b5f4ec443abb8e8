//! OS shutdown signals, delivered to the event loop as `Message::Quit`

use std::fmt;
use std::future::Future;

use tokio::sync::mpsc;

use crate::message::Message;
use folio_core::prelude::*;

/// The signal that ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => f.write_str("interrupt"),
            ShutdownSignal::Terminate => f.write_str("terminate"),
        }
    }
}

/// Listen for SIGINT/SIGTERM (Ctrl+C on Windows) in the background
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(forward_quit(next_shutdown_signal(), tx));
}

/// Wait for `signal` and turn it into a quit message.
///
/// Returns whether the quit reached the event loop. A closed channel means
/// the loop already finished, which is not an error.
pub async fn forward_quit<F>(signal: F, tx: mpsc::Sender<Message>) -> bool
where
    F: Future<Output = Result<ShutdownSignal>>,
{
    let signal = match signal.await {
        Ok(signal) => signal,
        Err(e) => {
            error!("Shutdown signal listener failed: {}", e);
            return false;
        }
    };

    info!("Received {} signal, quitting", signal);
    if tx.send(Message::Quit).await.is_err() {
        debug!("Event loop already gone, dropping quit");
        return false;
    }
    true
}

#[cfg(unix)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("cannot listen for {}: {}", name, e)))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    Ok(tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
    })
}

#[cfg(windows)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}
