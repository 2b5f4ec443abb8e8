//! Icon set for the TUI.
//!
//! Resolves [`Icon`] slots at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - Nerd Font glyphs (requires Nerd Font installed)

use folio_app::config::IconMode;
use folio_core::Icon;

/// Runtime icon resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn glyph(&self, icon: Icon) -> &'static str {
        match self.mode {
            IconMode::Unicode => unicode(icon),
            IconMode::NerdFonts => nerd_font(icon),
        }
    }
}

fn unicode(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "\u{2302}",          // ⌂
        Icon::User => "\u{263a}",          // ☺
        Icon::Briefcase => "\u{25a3}",     // ▣
        Icon::Code => "\u{03bb}",          // λ
        Icon::GraduationCap => "\u{25c8}", // ◈
        Icon::Mail => "\u{2709}",          // ✉
        Icon::Phone => "\u{260e}",         // ☎
        Icon::MapPin => "\u{2316}",        // ⌖
        Icon::Github => "\u{2387}",        // ⎇
        Icon::Linkedin => "in",
        Icon::Download => "\u{21e9}",      // ⇩
        Icon::Menu => "\u{2630}",          // ☰
        Icon::Close => "\u{2715}",         // ✕
        Icon::Sun => "\u{2600}",           // ☀
        Icon::Moon => "\u{263e}",          // ☾
        Icon::ChevronUp => "\u{25b2}",     // ▲
        Icon::Calendar => "\u{25a6}",      // ▦
        Icon::Award => "\u{2605}",         // ★
    }
}

fn nerd_font(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "\u{f015}",          // nf-fa-home
        Icon::User => "\u{f007}",          // nf-fa-user
        Icon::Briefcase => "\u{f0b1}",     // nf-fa-briefcase
        Icon::Code => "\u{f121}",          // nf-fa-code
        Icon::GraduationCap => "\u{f19d}", // nf-fa-graduation_cap
        Icon::Mail => "\u{f0e0}",          // nf-fa-envelope
        Icon::Phone => "\u{f095}",         // nf-fa-phone
        Icon::MapPin => "\u{f041}",        // nf-fa-map_marker
        Icon::Github => "\u{f09b}",        // nf-fa-github
        Icon::Linkedin => "\u{f0e1}",      // nf-fa-linkedin
        Icon::Download => "\u{f019}",      // nf-fa-download
        Icon::Menu => "\u{f0c9}",          // nf-fa-bars
        Icon::Close => "\u{f00d}",         // nf-fa-times
        Icon::Sun => "\u{f185}",           // nf-fa-sun_o
        Icon::Moon => "\u{f186}",          // nf-fa-moon_o
        Icon::ChevronUp => "\u{f077}",     // nf-fa-chevron_up
        Icon::Calendar => "\u{f073}",      // nf-fa-calendar
        Icon::Award => "\u{f091}",         // nf-fa-trophy
    }
}
