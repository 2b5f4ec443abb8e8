//! Main render/view function (View in TEA pattern)

use folio_app::state::{AppState, UiMode};
use folio_core::SectionRegistry;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::{icons::IconSet, palette::Palette};
use crate::{layout, widgets};

#[cfg(test)]
mod tests;

/// Render the complete UI (View function in TEA)
///
/// Pure: reads the state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    view_with_section_key(frame, state, state.view.active_section.key());
}

/// Render with the body resolved from an identifier string.
///
/// Unknown identifiers render the home section.
pub fn view_with_section_key(frame: &mut Frame, state: &AppState, key: &str) {
    let area = frame.area();
    let palette = Palette::for_theme(state.theme());
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

    let areas = layout::create(area, state.view.menu_open);

    frame.render_widget(widgets::NavBar::new(&state.view, palette, icons), areas.nav);

    if let Some(menu_area) = areas.menu {
        frame.render_widget(
            widgets::MobileMenu::new(state.view.active_section, state.menu_cursor, palette, icons),
            menu_area,
        );
    }

    let body = SectionRegistry::standard().body_for_key(key);
    let lines = section_lines(key, state, layout::body_content(areas.body).width);
    frame.render_widget(
        widgets::SectionView::new(&body, lines, palette, icons)
            .offset(state.viewport.offset)
            .focused(state.ui_mode == UiMode::ContactForm),
        areas.body,
    );

    if state.view.past_scroll_threshold {
        let button = widgets::ScrollTopButton::new(palette, icons);
        let button_area = button.area(areas.body);
        frame.render_widget(button, button_area);
    }

    frame.render_widget(widgets::HintBar::new(state, palette), areas.hints);

    if let Some(message) = state.contact_form.acknowledgement {
        frame.render_widget(widgets::AckDialog::new(message, palette), area);
    }
}

/// Styled lines of a section body at the given text width
pub fn section_lines(key: &str, state: &AppState, width: u16) -> Vec<Line<'static>> {
    let body = SectionRegistry::standard().body_for_key(key);
    widgets::body_lines(
        &body,
        &widgets::BodyContext {
            palette: Palette::for_theme(state.theme()),
            icons: IconSet::new(state.settings.ui.icons),
            width: usize::from(width),
            form: &state.contact_form,
            form_active: state.ui_mode == UiMode::ContactForm,
        },
    )
}

/// Content height and visible height of the active section for a screen area
pub fn measure(state: &AppState, area: Rect) -> (usize, usize) {
    let areas = layout::create(area, state.view.menu_open);
    let content = layout::body_content(areas.body);
    let lines = section_lines(state.view.active_section.key(), state, content.width);
    (lines.len(), usize::from(content.height))
}
