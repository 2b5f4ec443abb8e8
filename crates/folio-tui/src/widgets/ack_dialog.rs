//! Contact form acknowledgement dialog

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Widget};

use super::modal_overlay;
use crate::theme::{palette::Palette, styles};

pub struct AckDialog<'a> {
    message: &'a str,
    palette: &'a Palette,
}

impl<'a> AckDialog<'a> {
    pub fn new(message: &'a str, palette: &'a Palette) -> Self {
        Self { message, palette }
    }
}

impl Widget for AckDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        modal_overlay::dim_background(buf, area, p);

        let width = u16::try_from(self.message.len() + 8).unwrap_or(u16::MAX);
        let modal = modal_overlay::centered_rect(width, 6, area);
        modal_overlay::render_shadow(buf, modal, p);
        Clear.render(modal, buf);

        let block = styles::modal_block(p, " Contact ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(self.message, styles::text_bold(p))).centered(),
            Line::default(),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding(p)),
                Span::styled(" OK", styles::text_muted(p)),
            ])
            .centered(),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
