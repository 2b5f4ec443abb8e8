//! Section body widget
//!
//! Turns a host-agnostic [`SectionBody`] into styled, pre-wrapped lines and
//! draws them as a scrollable panel. The same lines are used to measure the
//! content height, so scrolling bounds always match what is drawn.

use folio_app::contact_form::{ContactFormState, FormField};
use folio_core::content::PROFILE_LINKS;
use folio_core::{BodyNode, Card, Icon, SectionBody, SectionRegistry};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::layout;
use crate::theme::{icons::IconSet, palette::Palette, styles};

/// Everything a body needs besides its nodes
#[derive(Debug, Clone, Copy)]
pub struct BodyContext<'a> {
    pub palette: &'a Palette,
    pub icons: IconSet,
    /// Available text width in columns
    pub width: usize,
    pub form: &'a ContactFormState,
    /// Whether the contact form has keyboard focus
    pub form_active: bool,
}

/// Greedy word wrap by display width.
///
/// Words longer than `width` are kept whole and clipped when drawn.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Build the lines of a section body
pub fn body_lines(body: &SectionBody, ctx: &BodyContext<'_>) -> Vec<Line<'static>> {
    let p = ctx.palette;
    let mut lines = Vec::new();

    if let Some(title) = body.title {
        lines.push(Line::from(Span::styled(title.to_string(), styles::text_bold(p))).centered());
        lines.push(Line::from(Span::styled("────────", styles::accent(p))).centered());
        lines.push(Line::default());
    }

    for node in &body.nodes {
        push_node(&mut lines, node, ctx);
    }
    lines
}

fn push_node(lines: &mut Vec<Line<'static>>, node: &BodyNode, ctx: &BodyContext<'_>) {
    let p = ctx.palette;
    match node {
        BodyNode::Hero {
            initials,
            name,
            tagline,
            quote,
        } => {
            lines.push(Line::from(Span::styled("╭──────╮", styles::accent(p))).centered());
            lines.push(
                Line::from(vec![
                    Span::styled("│", styles::accent(p)),
                    Span::styled(format!("  {}  ", initials), styles::accent_bold(p)),
                    Span::styled("│", styles::accent(p)),
                ])
                .centered(),
            );
            lines.push(Line::from(Span::styled("╰──────╯", styles::accent(p))).centered());
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(name.to_string(), styles::text_bold(p))).centered());
            lines.push(Line::from(Span::styled(tagline.to_string(), styles::accent(p))).centered());
            lines.push(Line::default());
            let quote_style = styles::text_muted(p).add_modifier(Modifier::ITALIC);
            for row in wrap_text(quote, ctx.width) {
                lines.push(Line::from(Span::styled(row, quote_style)).centered());
            }
        }

        BodyNode::ResumeButton => {
            lines.push(
                Line::from(vec![
                    Span::styled(
                        format!(" {} View Resume ", ctx.icons.glyph(Icon::Download)),
                        styles::button(p),
                    ),
                    Span::styled("  r", styles::keybinding(p)),
                ])
                .centered(),
            );
        }

        BodyNode::Subheading(text) => {
            lines.push(Line::from(Span::styled(text.to_string(), styles::accent_bold(p))));
        }

        BodyNode::Paragraph(text) => {
            for row in wrap_text(text, ctx.width) {
                lines.push(Line::from(Span::styled(row, styles::text_secondary(p))));
            }
        }

        BodyNode::Bullets(items) => {
            for item in items.iter() {
                for (i, row) in wrap_text(item, ctx.width.saturating_sub(4))
                    .into_iter()
                    .enumerate()
                {
                    let marker = if i == 0 { "  • " } else { "    " };
                    lines.push(Line::from(vec![
                        Span::styled(marker, styles::accent(p)),
                        Span::styled(row, styles::text_secondary(p)),
                    ]));
                }
            }
        }

        BodyNode::Links => {
            for link in PROFILE_LINKS {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{} {:<9}", ctx.icons.glyph(link.icon), link.name),
                        styles::text_bold(p),
                    ),
                    Span::styled(link.url, styles::link(p)),
                    Span::styled(format!("  {}", link.key), styles::keybinding(p)),
                ]));
            }
        }

        BodyNode::Card(card) => push_card(lines, card, ctx),

        BodyNode::ChipGroup { title, chips } => {
            lines.push(Line::from(Span::styled(title.to_string(), styles::text_bold(p))));
            lines.extend(chip_lines(chips, ctx.width, p));
            lines.push(Line::default());
        }

        BodyNode::ContactDetail { icon, label, value } => {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", ctx.icons.glyph(*icon)), styles::accent(p)),
                Span::styled(format!("{}: ", label), styles::text_muted(p)),
                Span::styled(value.to_string(), styles::text_primary(p)),
            ]));
        }

        BodyNode::ContactForm => push_form(lines, ctx),

        BodyNode::Spacer => lines.push(Line::default()),
    }
}

fn push_card(lines: &mut Vec<Line<'static>>, card: &Card, ctx: &BodyContext<'_>) {
    let p = ctx.palette;
    let bar = || Span::styled("▎ ", styles::accent(p));
    let inner_width = ctx.width.saturating_sub(2);

    let mut title = vec![bar()];
    if let Some(icon) = card.icon {
        title.push(Span::styled(
            format!("{} ", ctx.icons.glyph(icon)),
            styles::accent(p),
        ));
    }
    title.push(Span::styled(card.title, styles::text_bold(p)));
    lines.push(Line::from(title));

    if let Some(subtitle) = card.subtitle {
        lines.push(Line::from(vec![bar(), Span::styled(subtitle, styles::accent(p))]));
    }

    if let Some(description) = card.description {
        for row in wrap_text(description, inner_width) {
            lines.push(Line::from(vec![
                bar(),
                Span::styled(row, styles::text_secondary(p)),
            ]));
        }
    }

    for chip_line in chip_lines(card.tags, inner_width, p) {
        let mut spans = vec![bar()];
        spans.extend(chip_line.spans);
        lines.push(Line::from(spans));
    }

    if !card.meta.is_empty() {
        let mut spans = vec![bar()];
        for (i, (icon, text)) in card.meta.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(
                format!("{} {}", ctx.icons.glyph(*icon), text),
                styles::text_muted(p),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
}

/// Pack chips into lines no wider than `width`
fn chip_lines(chips: &[&'static str], width: usize, p: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for chip in chips {
        let chip_width = chip.width() + 2;
        if used > 0 && used + 1 + chip_width > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if used > 0 {
            spans.push(Span::raw(" "));
            used += 1;
        }
        spans.push(Span::styled(format!(" {} ", chip), styles::chip(p)));
        used += chip_width;
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

fn push_form(lines: &mut Vec<Line<'static>>, ctx: &BodyContext<'_>) {
    let p = ctx.palette;
    let form = ctx.form;

    lines.push(Line::from(Span::styled("Send a Message", styles::accent_bold(p))));

    for field in [FormField::Name, FormField::Email, FormField::Message] {
        let focused = ctx.form_active && form.focus == field;
        let (label_style, edge_style) = if focused {
            (styles::accent_bold(p), styles::border_active(p))
        } else {
            (styles::text_muted(p), styles::border_inactive(p))
        };
        lines.push(Line::from(Span::styled(field.label(), label_style)));

        let mut rows: Vec<&str> = form.value(field).split('\n').collect();
        let cursor_row = rows.len() - 1;
        if field == FormField::Message {
            while rows.len() < 3 {
                rows.push("");
            }
        }
        for (i, row) in rows.into_iter().enumerate() {
            let mut spans = vec![
                Span::styled("│ ", edge_style),
                Span::styled(row.to_string(), styles::text_primary(p)),
            ];
            if focused && i == cursor_row {
                spans.push(Span::styled("█", styles::accent(p)));
            }
            lines.push(Line::from(spans));
        }
    }

    lines.push(Line::default());
    let send_style = if ctx.form_active && form.focus == FormField::Send {
        styles::button(p)
    } else {
        styles::chip(p)
    };
    lines.push(Line::from(Span::styled(
        format!(" {} ", FormField::Send.label()),
        send_style,
    )));

    if !ctx.form_active {
        lines.push(Line::from(vec![
            Span::styled("i", styles::keybinding(p)),
            Span::styled(" write a message", styles::text_muted(p)),
        ]));
    }
}

/// Scrollable section panel
pub struct SectionView<'a> {
    body: &'a SectionBody,
    lines: Vec<Line<'static>>,
    palette: &'a Palette,
    icons: IconSet,
    offset: usize,
    focused: bool,
}

impl<'a> SectionView<'a> {
    pub fn new(
        body: &'a SectionBody,
        lines: Vec<Line<'static>>,
        palette: &'a Palette,
        icons: IconSet,
    ) -> Self {
        Self {
            body,
            lines,
            palette,
            icons,
            offset: 0,
            focused: false,
        }
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SectionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let bg = Style::default().bg(p.section_bg(self.body.section));
        let descriptor = SectionRegistry::standard().get(self.body.section);

        let block = styles::glass_block(p, self.focused)
            .title(Span::styled(
                format!(" {} {} ", self.icons.glyph(descriptor.icon), descriptor.label),
                styles::accent_bold(p),
            ))
            .style(bg);
        block.render(area, buf);

        let scroll = u16::try_from(self.offset).unwrap_or(u16::MAX);
        Paragraph::new(self.lines)
            .style(bg.fg(p.text))
            .scroll((scroll, 0))
            .render(layout::body_content(area), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};
    use folio_app::config::IconMode;
    use folio_core::SectionId;

    fn text_of(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    fn lines_for(id: SectionId, palette: &Palette, form: &ContactFormState) -> Vec<Line<'static>> {
        let body = SectionRegistry::standard().get(id).render_body();
        body_lines(
            &body,
            &BodyContext {
                palette,
                icons: IconSet::new(IconMode::Unicode),
                width: 60,
                form,
                form_active: false,
            },
        )
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let rows = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(
            rows,
            vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]
        );
        assert!(rows.iter().all(|r| r.width() <= 10));
    }

    #[test]
    fn test_wrap_text_empty_gives_one_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrap_text_keeps_long_word_whole() {
        assert_eq!(wrap_text("a verylongword b", 4), vec!["a", "verylongword", "b"]);
    }

    #[test]
    fn test_chip_lines_wrap() {
        let lines = chip_lines(&["Java", "Python", "C"], 15, &LIGHT);
        assert_eq!(text_of(&lines), vec![" Java   Python ", " C "]);
    }

    #[test]
    fn test_home_lines_show_profile() {
        let form = ContactFormState::new();
        let text = text_of(&lines_for(SectionId::Home, &LIGHT, &form)).join("\n");
        assert!(text.contains("SY"));
        assert!(text.contains("Subbarayudu Yadhati"));
        assert!(text.contains("Aspiring Full-Stack Developer"));
        assert!(text.contains("View Resume"));
    }

    #[test]
    fn test_same_text_in_both_themes() {
        let form = ContactFormState::new();
        for id in SectionId::ALL {
            let light = lines_for(id, &LIGHT, &form);
            let dark = lines_for(id, &DARK, &form);
            assert_eq!(text_of(&light), text_of(&dark), "{}", id);
            assert_ne!(light, dark, "styling should differ for {}", id);
        }
    }

    #[test]
    fn test_contact_form_shows_values_and_cursor() {
        let mut form = ContactFormState::new();
        for c in "Ada".chars() {
            form.input(c);
        }
        let body = SectionRegistry::standard()
            .get(SectionId::Contact)
            .render_body();
        let lines = body_lines(
            &body,
            &BodyContext {
                palette: &LIGHT,
                icons: IconSet::new(IconMode::Unicode),
                width: 60,
                form: &form,
                form_active: true,
            },
        );
        let text = text_of(&lines);
        assert!(text.contains(&"│ Ada█".to_string()));
        assert!(!text.iter().any(|l| l.contains("write a message")));
    }

    #[test]
    fn test_multiline_message_rows() {
        let mut form = ContactFormState::new();
        form.focus = FormField::Message;
        for c in "a\nb\nc\nd".chars() {
            form.input(c);
        }
        let text = text_of(&lines_for(SectionId::Contact, &LIGHT, &form));
        for row in ["│ a", "│ b", "│ c", "│ d"] {
            assert!(text.contains(&row.to_string()), "missing {row}");
        }
    }
}
