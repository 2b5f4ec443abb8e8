//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::NavOrigin;
use folio_core::SectionId;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (drives smooth scrolling)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Show a section
    SelectSection { id: SectionId, origin: NavOrigin },

    /// Show the next section (wrapping)
    NextSection,

    /// Show the previous section (wrapping)
    PreviousSection,

    /// Open or close the drop-down menu
    ToggleMenu,

    /// Move the menu highlight up
    MenuUp,

    /// Move the menu highlight down
    MenuDown,

    /// Select the highlighted menu entry
    MenuConfirm,

    ToggleDarkMode,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    /// Smooth scroll back to the top
    ScrollToTop,
    ScrollToBottom,

    /// Body dimensions measured after layout
    ViewportMeasured {
        total_rows: usize,
        visible_rows: usize,
    },

    // ─────────────────────────────────────────────────────────
    // External Openers
    // ─────────────────────────────────────────────────────────
    OpenResume,

    /// Open the profile link bound to this key
    OpenLink(char),

    // ─────────────────────────────────────────────────────────
    // Contact Form Messages
    // ─────────────────────────────────────────────────────────
    EnterContactForm,
    LeaveContactForm,
    ContactInput(char),
    ContactBackspace,
    ContactFocusNext,
    ContactFocusPrev,
    ContactSubmit,
    DismissAcknowledgement,
}
