//! folio-app - Application state and navigation logic for folio
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! portfolio view: a single [`AppState`] owning the [`ViewState`], a
//! [`Message`] enum, and the `handler::update` function that maps messages to
//! state transitions and [`UpdateAction`]s for the host to perform.
//!
//! Nothing here depends on a terminal library; keys arrive as [`InputKey`].

pub mod actions;
pub mod config;
pub mod contact_form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod scroll_watcher;
pub mod signals;
pub mod state;
pub mod viewport;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use scroll_watcher::{ScrollBehavior, ScrollRequest, ScrollWatcher, SCROLL_TOP_THRESHOLD_PX};
pub use state::{AppState, NavOrigin, UiMode, ViewState};
