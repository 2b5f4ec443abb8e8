//! Navigation bar: owner name, section labels, theme and menu toggles

use folio_app::ViewState;
use folio_core::content::PROFILE;
use folio_core::{Icon, SectionId};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::theme::{icons::IconSet, palette::Palette, styles};

pub struct NavBar<'a> {
    view: &'a ViewState,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> NavBar<'a> {
    pub fn new(view: &'a ViewState, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            view,
            palette,
            icons,
        }
    }

    fn labels(&self) -> Vec<Span<'static>> {
        SectionId::ALL
            .iter()
            .map(|id| {
                let style = if *id == self.view.active_section {
                    styles::nav_active(self.palette)
                } else {
                    styles::nav_inactive(self.palette)
                };
                Span::styled(format!(" {} ", id.label()), style)
            })
            .collect()
    }

    fn controls(&self) -> Vec<Span<'static>> {
        // Sun offers the way back to light, moon the way to dark
        let toggle = if self.view.dark_mode {
            Icon::Sun
        } else {
            Icon::Moon
        };
        let menu = if self.view.menu_open {
            Icon::Close
        } else {
            Icon::Menu
        };
        vec![
            Span::styled(
                self.icons.glyph(toggle),
                Style::default().fg(self.palette.toggle),
            ),
            Span::raw("  "),
            Span::styled(self.icons.glyph(menu), styles::text_primary(self.palette)),
            Span::raw(" "),
        ]
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false).style(Style::default().bg(p.bg));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let name = Line::from(vec![
            Span::raw(" "),
            Span::styled(PROFILE.name, styles::accent_bold(p)),
        ]);
        let labels = self.labels();
        let controls = self.controls();

        let labels_width: usize = labels.iter().map(|s| s.width()).sum();
        let controls_width: usize = controls.iter().map(|s| s.width()).sum();
        let desktop = usize::from(inner.width) >= name.width() + labels_width + controls_width + 4;

        let mut right = Vec::new();
        if desktop {
            right.extend(labels);
            right.push(Span::raw("  "));
        }
        right.extend(controls);

        name.render(inner, buf);
        Line::from(right).right_aligned().render(inner, buf);
    }
}
