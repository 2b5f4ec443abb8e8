//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `navigation`: Section selection, menu and theme transitions
//! - `scroll`: Viewport scrolling and threshold observation
//! - `contact`: Contact form handlers

pub(crate) mod contact;
pub(crate) mod keys;
pub mod navigation;
pub(crate) mod scroll;
pub(crate) mod update;


use std::path::PathBuf;

use crate::message::Message;
use crate::scroll_watcher::ScrollRequest;

// Re-export main entry point
pub use update::update;

pub use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Move the viewport; the host animates smooth requests over several ticks
    SmoothScroll(ScrollRequest),

    /// Open the resume document with the platform opener
    OpenResume { path: PathBuf },

    /// Open an outbound link with the platform opener
    OpenUrl { url: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
