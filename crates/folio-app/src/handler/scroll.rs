//! Scroll message handlers
//!
//! Every change of the viewport offset is reported to the scroll watcher so
//! the threshold flag always reflects the latest position.

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

fn observe(state: &mut AppState) {
    state
        .scroll_watcher
        .observe_rows(&mut state.view, state.viewport.offset);
}

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    let step = state.scroll_step();
    state.viewport.scroll_up(step);
    observe(state);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    let step = state.scroll_step();
    state.viewport.scroll_down(step);
    observe(state);
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.viewport.page_up();
    observe(state);
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.viewport.page_down();
    observe(state);
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.viewport.jump_to_bottom();
    observe(state);
    UpdateResult::none()
}

/// Ask the host for a smooth scroll back to the top
pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    UpdateResult::action(UpdateAction::SmoothScroll(
        state.scroll_watcher.scroll_to_top(),
    ))
}

/// Layout measured new body dimensions
pub fn handle_viewport_measured(
    state: &mut AppState,
    total_rows: usize,
    visible_rows: usize,
) -> UpdateResult {
    state.viewport.update_metrics(total_rows, visible_rows);
    observe(state);
    UpdateResult::none()
}

/// Advance an in-flight smooth scroll by one frame
pub fn handle_tick(state: &mut AppState) -> UpdateResult {
    if state.viewport.step_animation() {
        observe(state);
    }
    UpdateResult::none()
}
