//! Semantic style builders.
//!
//! Every builder takes the active palette so the theme is threaded through
//! all widgets rather than read from a global.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn text_bold(p: &Palette) -> Style {
    text_primary(p).add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    accent(p).add_modifier(Modifier::BOLD)
}

/// Filled button / highlighted control
pub fn button(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent_contrast)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

pub fn link(p: &Palette) -> Style {
    accent(p).add_modifier(Modifier::UNDERLINED)
}

pub fn chip(p: &Palette) -> Style {
    Style::default().fg(p.chip_fg).bg(p.chip_bg)
}

pub fn keybinding(p: &Palette) -> Style {
    accent_bold(p)
}

// --- Navigation ---
pub fn nav_active(p: &Palette) -> Style {
    accent_bold(p).add_modifier(Modifier::UNDERLINED)
}

pub fn nav_inactive(p: &Palette) -> Style {
    text_secondary(p)
}

/// Menu entry under the cursor
pub fn menu_cursor(p: &Palette) -> Style {
    Style::default().fg(p.text).bg(p.surface)
}

// --- Border styles ---
pub fn border_inactive(p: &Palette) -> Style {
    Style::default().fg(p.border)
}

pub fn border_active(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active(p)
        } else {
            border_inactive(p)
        })
}

pub fn modal_block<'a>(p: &Palette, title: &'a str) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active(p))
        .style(Style::default().bg(p.surface))
}
