//! Context-sensitive key hints

use folio_app::state::{AppState, UiMode};
use folio_core::SectionId;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::theme::{palette::Palette, styles};

/// Key/description pairs for the current mode
pub fn hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    if state.ui_mode == UiMode::Acknowledgement {
        return vec![("Enter", "dismiss")];
    }
    if state.view.menu_open {
        return vec![
            ("↑↓", "move"),
            ("Enter", "select"),
            ("1-6", "jump"),
            ("m", "close"),
        ];
    }
    if state.ui_mode == UiMode::ContactForm {
        return vec![
            ("Tab", "next field"),
            ("Enter", "newline/send"),
            ("Esc", "done"),
        ];
    }

    let mut hints = vec![
        ("1-6", "sections"),
        ("←→", "prev/next"),
        ("m", "menu"),
        ("d", "theme"),
        ("j/k", "scroll"),
        ("t", "top"),
    ];
    match state.view.active_section {
        SectionId::Home => hints.push(("r", "resume")),
        SectionId::About => hints.push(("g/l/c", "links")),
        SectionId::Contact => {
            hints.push(("g/l/c", "links"));
            hints.push(("i", "write"));
        }
        _ => {}
    }
    hints.push(("q", "quit"));
    hints
}

pub struct HintBar<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> HintBar<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }
}

impl Widget for HintBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, description)) in hints(self.state).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(key, styles::keybinding(p)));
            spans.push(Span::styled(format!(" {}", description), styles::text_muted(p)));
        }
        Line::from(spans)
            .style(Style::default().bg(p.bg))
            .render(area, buf);
    }
}
