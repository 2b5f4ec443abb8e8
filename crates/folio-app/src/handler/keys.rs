//! Key event handlers for different UI modes

use crate::contact_form::FormField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, NavOrigin, UiMode};
use folio_core::SectionId;

/// Convert key events to messages based on current UI mode.
///
/// The acknowledgement dialog takes precedence over the menu, and the menu
/// over the contact form.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Acknowledgement => handle_key_acknowledgement(key),
        _ if state.view.menu_open => handle_key_menu(key),
        UiMode::ContactForm => handle_key_contact_form(state, key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

fn section_for_digit(key: InputKey) -> Option<SectionId> {
    key.section_digit().and_then(SectionId::from_index)
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(id) = section_for_digit(key) {
        return Some(Message::SelectSection {
            id,
            origin: NavOrigin::Desktop,
        });
    }

    let section = state.view.active_section;
    match key {
        // Quit
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Sections
        InputKey::Tab | InputKey::Right => Some(Message::NextSection),
        InputKey::BackTab | InputKey::Left => Some(Message::PreviousSection),

        // Chrome
        InputKey::Char('m') => Some(Message::ToggleMenu),
        InputKey::Char('d') => Some(Message::ToggleDarkMode),

        // Scrolling
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::Char('t') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),

        // Section-specific affordances
        InputKey::Char('r') if section == SectionId::Home => Some(Message::OpenResume),
        InputKey::Char(c @ ('g' | 'l' | 'c'))
            if matches!(section, SectionId::About | SectionId::Contact) =>
        {
            Some(Message::OpenLink(c))
        }
        InputKey::Char('i') | InputKey::Enter if section == SectionId::Contact => {
            Some(Message::EnterContactForm)
        }

        _ => None,
    }
}

/// Handle key events while the drop-down menu is open
fn handle_key_menu(key: InputKey) -> Option<Message> {
    if let Some(id) = section_for_digit(key) {
        return Some(Message::SelectSection {
            id,
            origin: NavOrigin::MobileMenu,
        });
    }

    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::MenuUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::MenuDown),
        InputKey::Enter => Some(Message::MenuConfirm),
        InputKey::Char('m') | InputKey::Esc => Some(Message::ToggleMenu),
        InputKey::Char('d') => Some(Message::ToggleDarkMode),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events while typing into the contact form
fn handle_key_contact_form(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::LeaveContactForm),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Tab => Some(Message::ContactFocusNext),
        InputKey::BackTab => Some(Message::ContactFocusPrev),
        InputKey::Backspace => Some(Message::ContactBackspace),
        InputKey::Enter => match state.contact_form.focus {
            FormField::Message => Some(Message::ContactInput('\n')),
            FormField::Send => Some(Message::ContactSubmit),
            FormField::Name | FormField::Email => Some(Message::ContactFocusNext),
        },
        InputKey::Char(c) => Some(Message::ContactInput(c)),
        _ => None,
    }
}

/// Handle key events while the acknowledgement dialog is showing
fn handle_key_acknowledgement(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => {
            Some(Message::DismissAcknowledgement)
        }
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
