//! Application state (Model in TEA pattern)

use folio_core::{SectionId, Theme};

use crate::config::Settings;
use crate::contact_form::ContactFormState;
use crate::scroll_watcher::ScrollWatcher;
use crate::viewport::ViewportState;

/// The four fields that drive the whole view.
///
/// Session-local; never persisted. Changed only by the navigation handlers
/// and the scroll watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub active_section: SectionId,
    pub menu_open: bool,
    pub dark_mode: bool,
    pub past_scroll_threshold: bool,
}

impl ViewState {
    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }
}

/// Where a section selection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOrigin {
    /// Navigation bar / direct shortcut; leaves the menu as it is
    Desktop,
    /// Drop-down menu entry; closes the menu
    MobileMenu,
}

/// Current input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Normal,

    /// Typing into the contact form
    ContactForm,

    /// "Message sent" dialog is showing
    Acknowledgement,
}

/// Application phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub view: ViewState,

    pub ui_mode: UiMode,

    /// Highlighted entry of the drop-down menu
    pub menu_cursor: SectionId,

    /// Scroll position of the section body
    pub viewport: ViewportState,

    pub scroll_watcher: ScrollWatcher,

    pub contact_form: ContactFormState,

    pub settings: Settings,

    pub phase: AppPhase,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a new AppState with settings.
    ///
    /// Settings never affect the initial [`ViewState`].
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            view: ViewState::default(),
            ui_mode: UiMode::Normal,
            menu_cursor: SectionId::default(),
            viewport: ViewportState::new(),
            scroll_watcher: ScrollWatcher::new(settings.ui.row_height_px),
            contact_form: ContactFormState::new(),
            settings,
            phase: AppPhase::Running,
        }
    }

    pub fn theme(&self) -> Theme {
        self.view.theme()
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Rows moved by one line-scroll step
    pub fn scroll_step(&self) -> usize {
        usize::from(self.settings.ui.scroll_step.max(1))
    }
}
