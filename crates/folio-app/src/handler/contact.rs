//! Contact form handlers

use crate::state::{AppState, UiMode};
use folio_core::SectionId;

use super::UpdateResult;

pub fn handle_enter_form(state: &mut AppState) -> UpdateResult {
    if state.view.active_section == SectionId::Contact {
        state.ui_mode = UiMode::ContactForm;
    }
    UpdateResult::none()
}

pub fn handle_leave_form(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::ContactForm {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    state.contact_form.input(c);
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    state.contact_form.backspace();
    UpdateResult::none()
}

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    state.contact_form.focus_next();
    UpdateResult::none()
}

pub fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    state.contact_form.focus_prev();
    UpdateResult::none()
}

/// Produce the local acknowledgement; nothing is sent anywhere
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let ack = state.contact_form.submit();
    tracing::info!("Contact form submitted locally: {}", ack);
    state.ui_mode = UiMode::Acknowledgement;
    UpdateResult::none()
}

pub fn handle_dismiss(state: &mut AppState) -> UpdateResult {
    state.contact_form.dismiss();
    if state.ui_mode == UiMode::Acknowledgement {
        state.ui_mode = UiMode::ContactForm;
    }
    UpdateResult::none()
}
