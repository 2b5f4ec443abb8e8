//! Abstract input key event, independent of terminal library.
//!
//! Keys are converted from crossterm at the TUI boundary so that the
//! navigation logic can be driven from tests without a terminal.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

impl InputKey {
    /// Section selected by a digit key (`1` = home ... `6` = contact)
    pub fn section_digit(&self) -> Option<usize> {
        match self {
            InputKey::Char(c @ '1'..='6') => c.to_digit(10).map(|d| d as usize - 1),
            _ => None,
        }
    }
}
