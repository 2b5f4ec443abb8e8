//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use folio_core::content::link_for_key;
use folio_core::SectionId;
use tracing::debug;

use super::{contact, keys::handle_key, navigation, scroll, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => scroll::handle_tick(state),

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectSection { id, origin } => navigation::select_section(state, id, origin),
        Message::NextSection => navigation::next_section(state),
        Message::PreviousSection => navigation::previous_section(state),
        Message::ToggleMenu => navigation::toggle_menu(state),
        Message::MenuUp => navigation::menu_cursor_up(state),
        Message::MenuDown => navigation::menu_cursor_down(state),
        Message::MenuConfirm => navigation::menu_confirm(state),
        Message::ToggleDarkMode => navigation::toggle_dark_mode(state),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::ViewportMeasured {
            total_rows,
            visible_rows,
        } => scroll::handle_viewport_measured(state, total_rows, visible_rows),

        // ─────────────────────────────────────────────────────────
        // External Openers
        // ─────────────────────────────────────────────────────────
        Message::OpenResume => {
            if state.view.active_section != SectionId::Home {
                return UpdateResult::none();
            }
            UpdateResult::action(UpdateAction::OpenResume {
                path: state.settings.behavior.resume_path.clone(),
            })
        }

        Message::OpenLink(key) => {
            if !matches!(
                state.view.active_section,
                SectionId::About | SectionId::Contact
            ) {
                return UpdateResult::none();
            }
            match link_for_key(key) {
                Some(link) => UpdateResult::action(UpdateAction::OpenUrl {
                    url: link.url.to_string(),
                }),
                None => {
                    debug!("No profile link bound to '{}'", key);
                    UpdateResult::none()
                }
            }
        }

        // ─────────────────────────────────────────────────────────
        // Contact Form Messages
        // ─────────────────────────────────────────────────────────
        Message::EnterContactForm => contact::handle_enter_form(state),
        Message::LeaveContactForm => contact::handle_leave_form(state),
        Message::ContactInput(c) => contact::handle_input(state, c),
        Message::ContactBackspace => contact::handle_backspace(state),
        Message::ContactFocusNext => contact::handle_focus_next(state),
        Message::ContactFocusPrev => contact::handle_focus_prev(state),
        Message::ContactSubmit => contact::handle_submit(state),
        Message::DismissAcknowledgement => contact::handle_dismiss(state),
    }
}
