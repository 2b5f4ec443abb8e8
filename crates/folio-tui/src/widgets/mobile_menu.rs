//! Drop-down section menu

use folio_core::{SectionId, SectionRegistry};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::{icons::IconSet, palette::Palette, styles};

pub struct MobileMenu<'a> {
    active: SectionId,
    cursor: SectionId,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> MobileMenu<'a> {
    pub fn new(active: SectionId, cursor: SectionId, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            active,
            cursor,
            palette,
            icons,
        }
    }
}

impl Widget for MobileMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, true)
            .title(" Menu ")
            .style(Style::default().bg(p.surface));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line<'static>> = SectionRegistry::standard()
            .iter()
            .map(|descriptor| {
                let id = descriptor.id;
                let marker = if id == self.cursor { "› " } else { "  " };
                let label_style = if id == self.active {
                    styles::accent_bold(p)
                } else {
                    styles::text_primary(p)
                };
                let line = Line::from(vec![
                    Span::styled(marker, styles::accent(p)),
                    Span::styled(
                        format!("{} {}", self.icons.glyph(descriptor.icon), descriptor.label),
                        label_style,
                    ),
                    Span::styled(format!("  {}", id.index() + 1), styles::text_muted(p)),
                ]);
                if id == self.cursor {
                    line.patch_style(styles::menu_cursor(p))
                } else {
                    line
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;
    use folio_app::config::IconMode;

    #[test]
    fn test_lists_every_section_with_cursor() {
        let mut term = TestTerminal::with_size(30, 8);
        let area = term.area();
        term.render_widget(
            MobileMenu::new(
                SectionId::Home,
                SectionId::Skills,
                &LIGHT,
                IconSet::new(IconMode::Unicode),
            ),
            area,
        );

        assert!(term.line_contains(0, "Menu"));
        for (row, id) in SectionId::ALL.iter().enumerate() {
            assert!(term.line_contains(row as u16 + 1, id.label()));
        }
        assert!(term.line_contains(4, "› "));
        assert!(!term.line_contains(1, "› "));
    }
}
