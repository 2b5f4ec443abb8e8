//! Colour palettes for the light and dark themes.
//!
//! Values follow the Tailwind gray and blue scales.

use folio_core::{SectionId, Theme};
use ratatui::style::Color;

/// All colours a widget may use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub bg: Color,
    pub surface: Color,

    // --- Text ---
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Accent ---
    pub accent: Color,
    /// Text drawn on top of the accent colour
    pub accent_contrast: Color,

    pub border: Color,

    // --- Chips / tags ---
    pub chip_bg: Color,
    pub chip_fg: Color,

    /// Theme-toggle glyph
    pub toggle: Color,

    /// Backgrounds of the six sections, in navigation order
    sections: [Color; 6],
}

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(255, 255, 255),
    surface: Color::Rgb(249, 250, 251),
    text: Color::Rgb(17, 24, 39),
    text_secondary: Color::Rgb(75, 85, 99),
    text_muted: Color::Rgb(107, 114, 128),
    accent: Color::Rgb(37, 99, 235),
    accent_contrast: Color::Rgb(255, 255, 255),
    border: Color::Rgb(229, 231, 235),
    chip_bg: Color::Rgb(219, 234, 254),
    chip_fg: Color::Rgb(30, 64, 175),
    toggle: Color::Rgb(55, 65, 81),
    sections: [
        Color::Rgb(239, 246, 255), // home: blue-50
        Color::Rgb(255, 255, 255),
        Color::Rgb(249, 250, 251),
        Color::Rgb(255, 255, 255),
        Color::Rgb(249, 250, 251),
        Color::Rgb(255, 255, 255),
    ],
};

pub const DARK: Palette = Palette {
    bg: Color::Rgb(17, 24, 39),
    surface: Color::Rgb(31, 41, 55),
    text: Color::Rgb(255, 255, 255),
    text_secondary: Color::Rgb(209, 213, 219),
    text_muted: Color::Rgb(156, 163, 175),
    accent: Color::Rgb(96, 165, 250),
    accent_contrast: Color::Rgb(17, 24, 39),
    border: Color::Rgb(55, 65, 81),
    chip_bg: Color::Rgb(30, 58, 138),
    chip_fg: Color::Rgb(191, 219, 254),
    toggle: Color::Rgb(250, 204, 21),
    sections: [
        Color::Rgb(17, 24, 39),
        Color::Rgb(31, 41, 55),
        Color::Rgb(17, 24, 39),
        Color::Rgb(31, 41, 55),
        Color::Rgb(17, 24, 39),
        Color::Rgb(31, 41, 55),
    ],
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    pub fn section_bg(&self, id: SectionId) -> Color {
        self.sections[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_theme() {
        assert_eq!(Palette::for_theme(Theme::Light), &LIGHT);
        assert_eq!(Palette::for_theme(Theme::Dark), &DARK);
    }

    #[test]
    fn test_every_section_background_differs_between_themes() {
        for id in SectionId::ALL {
            assert_ne!(LIGHT.section_bg(id), DARK.section_bg(id), "{}", id);
        }
    }

    #[test]
    fn test_text_differs_from_background() {
        for palette in [&LIGHT, &DARK] {
            assert_ne!(palette.text, palette.bg);
            assert_ne!(palette.accent_contrast, palette.accent);
        }
    }
}
