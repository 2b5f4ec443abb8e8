//! Full-screen rendering tests

use super::{measure, view, view_with_section_key};
use crate::test_utils::{create_test_state_on, TestTerminal};
use folio_app::message::Message;
use folio_app::process::process_message;
use folio_app::state::{AppState, UiMode};
use folio_app::InputKey;
use folio_core::SectionId;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn render_buffer(state: &AppState) -> Buffer {
    let mut term = TestTerminal::with_size(WIDTH, HEIGHT);
    term.draw_with(|frame| view(frame, state));
    term.buffer().clone()
}

fn render_screen(state: &AppState) -> String {
    let mut term = TestTerminal::with_size(WIDTH, HEIGHT);
    term.draw_with(|frame| view(frame, state));
    term.content()
}

fn marker(id: SectionId) -> &'static str {
    match id {
        SectionId::Home => "Aspiring Full-Stack Developer",
        SectionId::About => "About Me",
        SectionId::Projects => "Projects & Internships",
        SectionId::Skills => "Programming Languages",
        SectionId::Education => "B.Tech Computer Science Engineering",
        SectionId::Contact => "Contact Me",
    }
}

// ===========================================================================
// Section content
// ===========================================================================

#[test]
fn test_each_section_renders_its_own_content() {
    for id in SectionId::ALL {
        let content = render_screen(&create_test_state_on(id));
        for other in SectionId::ALL {
            assert_eq!(
                content.contains(marker(other)),
                other == id,
                "{:?} screen vs {:?} marker",
                id,
                other
            );
        }
    }
}

#[test]
fn test_unknown_section_key_renders_home() {
    let state = AppState::new();
    let mut term = TestTerminal::with_size(WIDTH, HEIGHT);
    term.draw_with(|frame| view_with_section_key(frame, &state, "blog"));
    let fallback = term.buffer().clone();

    assert_eq!(fallback, render_buffer(&state));
}

#[test]
fn test_home_shows_resume_affordance() {
    let content = render_screen(&AppState::new());
    assert!(content.contains("View Resume"));
    assert!(content.contains("Subbarayudu Yadhati"));
}

#[test]
fn test_links_shown_on_about_and_contact() {
    for id in SectionId::ALL {
        let content = render_screen(&create_test_state_on(id));
        let has_links = content.contains("github.com/subbu-yadhati");
        assert_eq!(
            has_links,
            matches!(id, SectionId::About | SectionId::Contact),
            "{:?}",
            id
        );
    }
}

// ===========================================================================
// Theme
// ===========================================================================

#[test]
fn test_dark_mode_changes_every_section() {
    for id in SectionId::ALL {
        let light = create_test_state_on(id);
        let mut dark = create_test_state_on(id);
        process_message(&mut dark, Message::ToggleDarkMode);

        let light_buf = render_buffer(&light);
        let dark_buf = render_buffer(&dark);
        assert_ne!(light_buf, dark_buf, "{:?}", id);

        // Same text, different styling
        assert_eq!(render_screen(&light), render_screen(&dark).replace('☀', "☾"));
    }
}

#[test]
fn test_double_toggle_restores_rendering() {
    let initial = AppState::new();
    let mut state = AppState::new();
    process_message(&mut state, Message::ToggleDarkMode);
    process_message(&mut state, Message::ToggleDarkMode);

    assert_eq!(render_buffer(&initial), render_buffer(&state));
}

// ===========================================================================
// Scroll-to-top affordance
// ===========================================================================

#[test]
fn test_top_affordance_follows_threshold_flag() {
    let mut state = AppState::new();
    assert!(!render_screen(&state).contains("TOP"));

    state.view.past_scroll_threshold = true;
    assert!(render_screen(&state).contains("▲ TOP"));
}

#[test]
fn test_top_affordance_at_pixel_boundary() {
    let mut state = AppState::new();
    let watcher = state.scroll_watcher;

    watcher.observe(&mut state.view, 300);
    assert!(!render_screen(&state).contains("TOP"));

    watcher.observe(&mut state.view, 301);
    assert!(render_screen(&state).contains("TOP"));
}

// ===========================================================================
// Overlays
// ===========================================================================

#[test]
fn test_menu_lists_sections() {
    let mut state = AppState::new();
    process_message(&mut state, Message::ToggleMenu);

    let content = render_screen(&state);
    assert!(content.contains(" Menu "));
    assert!(content.contains("› "));
    assert!(content.contains("✕"));
}

#[test]
fn test_contact_form_values_and_acknowledgement() {
    let mut state = create_test_state_on(SectionId::Contact);
    process_message(&mut state, Message::EnterContactForm);
    for c in "Ada".chars() {
        process_message(&mut state, Message::Key(InputKey::Char(c)));
    }
    assert_eq!(state.ui_mode, UiMode::ContactForm);
    // Scroll the form into view
    let (total, visible) = measure(&state, Rect::new(0, 0, WIDTH, HEIGHT));
    process_message(
        &mut state,
        Message::ViewportMeasured {
            total_rows: total,
            visible_rows: visible,
        },
    );
    process_message(&mut state, Message::ScrollToBottom);
    assert!(render_screen(&state).contains("│ Ada█"));

    process_message(&mut state, Message::ContactSubmit);
    let content = render_screen(&state);
    assert!(content.contains("Message sent! (Demo only)"));
    assert!(content.contains("Enter dismiss"));
}

// ===========================================================================
// Responsive layout and measurement
// ===========================================================================

#[test]
fn test_narrow_terminal_hides_nav_labels() {
    let state = AppState::new();
    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &state));

    assert!(!term.line_contains(1, "Education"));
    assert!(term.line_contains(1, "☰"));
}

#[test]
fn test_measure_reflects_content_height() {
    let area = Rect::new(0, 0, WIDTH, HEIGHT);
    let (home_total, visible) = measure(&AppState::new(), area);
    let (projects_total, _) = measure(&create_test_state_on(SectionId::Projects), area);

    assert_eq!(visible, usize::from(HEIGHT) - 3 - 1 - 2);
    assert!(projects_total > home_total);
}

#[test]
fn test_menu_shrinks_visible_rows() {
    let area = Rect::new(0, 0, WIDTH, HEIGHT);
    let mut state = AppState::new();
    let (_, closed) = measure(&state, area);
    state.view.menu_open = true;
    let (_, open) = measure(&state, area);

    assert_eq!(closed - open, usize::from(crate::layout::MENU_HEIGHT));
}
