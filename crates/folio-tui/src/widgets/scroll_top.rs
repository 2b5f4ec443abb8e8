//! Scroll-to-top affordance, shown once the page is scrolled past the threshold

use folio_core::Icon;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::theme::{icons::IconSet, palette::Palette, styles};

pub struct ScrollTopButton<'a> {
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> ScrollTopButton<'a> {
    pub fn new(palette: &'a Palette, icons: IconSet) -> Self {
        Self { palette, icons }
    }

    fn label(&self) -> String {
        format!(" {} TOP ", self.icons.glyph(Icon::ChevronUp))
    }

    /// Position on the bottom border of the body, right-aligned
    pub fn area(&self, body: Rect) -> Rect {
        let width = u16::try_from(self.label().width())
            .unwrap_or(u16::MAX)
            .min(body.width);
        Rect {
            x: body.right().saturating_sub(width + 2).max(body.x),
            y: body.bottom().saturating_sub(1),
            width,
            height: body.height.min(1),
        }
    }
}

impl Widget for ScrollTopButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from(Span::styled(self.label(), styles::button(self.palette))).render(area, buf);
    }
}
