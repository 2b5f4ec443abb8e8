//! folio-tui - Terminal UI for folio
//!
//! Provides the ratatui-based host for the portfolio: widgets, layout,
//! theming, event polling and the main event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
