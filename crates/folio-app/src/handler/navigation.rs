//! Navigation handlers: section selection, drop-down menu and theme.
//!
//! These are the only transitions of `active_section`, `menu_open` and
//! `dark_mode`. None of them perform I/O.

use crate::state::{AppState, NavOrigin, UiMode};
use folio_core::SectionId;

use super::UpdateResult;

/// Show section `id`.
///
/// Selecting from the drop-down menu also closes it; a desktop selection
/// leaves the menu as it was. The scroll position is kept: the next
/// `ViewportMeasured` clamps it to the new body's height.
pub fn select_section(state: &mut AppState, id: SectionId, origin: NavOrigin) -> UpdateResult {
    if state.view.active_section != id {
        tracing::debug!(
            "Section {} -> {} ({:?})",
            state.view.active_section,
            id,
            origin
        );
        state.view.active_section = id;

        if state.ui_mode == UiMode::ContactForm {
            state.ui_mode = UiMode::Normal;
        }
    }

    state.menu_cursor = id;
    if origin == NavOrigin::MobileMenu {
        state.view.menu_open = false;
    }
    UpdateResult::none()
}

/// Show the next section (wrapping)
pub fn next_section(state: &mut AppState) -> UpdateResult {
    let id = state.view.active_section.next();
    select_section(state, id, NavOrigin::Desktop)
}

/// Show the previous section (wrapping)
pub fn previous_section(state: &mut AppState) -> UpdateResult {
    let id = state.view.active_section.prev();
    select_section(state, id, NavOrigin::Desktop)
}

/// Open or close the drop-down menu.
///
/// Opening places the highlight on the active section.
pub fn toggle_menu(state: &mut AppState) -> UpdateResult {
    state.view.menu_open = !state.view.menu_open;
    if state.view.menu_open {
        state.menu_cursor = state.view.active_section;
    }
    UpdateResult::none()
}

pub fn toggle_dark_mode(state: &mut AppState) -> UpdateResult {
    state.view.dark_mode = !state.view.dark_mode;
    tracing::debug!("Theme: {:?}", state.view.theme());
    UpdateResult::none()
}

pub fn menu_cursor_up(state: &mut AppState) -> UpdateResult {
    if state.view.menu_open {
        state.menu_cursor = state.menu_cursor.prev();
    }
    UpdateResult::none()
}

pub fn menu_cursor_down(state: &mut AppState) -> UpdateResult {
    if state.view.menu_open {
        state.menu_cursor = state.menu_cursor.next();
    }
    UpdateResult::none()
}

/// Select the highlighted entry as a drop-down menu selection
pub fn menu_confirm(state: &mut AppState) -> UpdateResult {
    if !state.view.menu_open {
        return UpdateResult::none();
    }
    let id = state.menu_cursor;
    select_section(state, id, NavOrigin::MobileMenu)
}
