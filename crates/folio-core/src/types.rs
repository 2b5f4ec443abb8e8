//! Core domain types: section identifiers, theme and icon slots

use std::fmt;
use std::str::FromStr;

/// Identifier of one of the six portfolio sections.
///
/// The set is closed: every value of this type names a section that exists
/// in the registry, so lookups by `SectionId` cannot miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Education,
    Contact,
}

impl SectionId {
    /// All sections in navigation order
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Education,
        SectionId::Contact,
    ];

    /// Lower-case identifier string (`"home"`, `"about"`, ...)
    pub fn key(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    /// Display label used in the navigation bar and menu
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Education => "Education",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in navigation order (0-based)
    pub fn index(&self) -> usize {
        match self {
            SectionId::Home => 0,
            SectionId::About => 1,
            SectionId::Projects => 2,
            SectionId::Skills => 3,
            SectionId::Education => 4,
            SectionId::Contact => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<SectionId> {
        Self::ALL.get(index).copied()
    }

    /// Next section, wrapping from Contact back to Home
    pub fn next(&self) -> SectionId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping from Home back to Contact
    pub fn prev(&self) -> SectionId {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an identifier outside the known set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section identifier: {:?}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.key() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Visual theme variant.
///
/// Every section renders the same content in both variants; only styling differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Icon slots used by the content and chrome.
///
/// Glyphs are resolved by the display layer so that content stays glyph-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    User,
    Briefcase,
    Code,
    GraduationCap,
    Mail,
    Phone,
    MapPin,
    Github,
    Linkedin,
    Download,
    Menu,
    Close,
    Sun,
    Moon,
    ChevronUp,
    Calendar,
    Award,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(SectionId::from_index(i), Some(*id));
        }
        assert_eq!(SectionId::from_index(6), None);
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(SectionId::default(), SectionId::Home);
    }

    #[test]
    fn test_next_and_prev_wrap() {
        assert_eq!(SectionId::Home.next(), SectionId::About);
        assert_eq!(SectionId::Contact.next(), SectionId::Home);
        assert_eq!(SectionId::Home.prev(), SectionId::Contact);
        assert_eq!(SectionId::Skills.prev(), SectionId::Projects);
    }

    #[test]
    fn test_next_prev_are_inverse() {
        for id in SectionId::ALL {
            assert_eq!(id.next().prev(), id);
            assert_eq!(id.prev().next(), id);
        }
    }

    #[test]
    fn test_parse_known_keys() {
        for id in SectionId::ALL {
            assert_eq!(id.key().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = "blog".parse::<SectionId>().unwrap_err();
        assert_eq!(err, UnknownSection("blog".to_string()));
        assert!(err.to_string().contains("blog"));
        // Keys are case-sensitive, like the identifiers they mirror
        assert!("Home".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_labels_in_order() {
        let labels: Vec<&str> = SectionId::ALL.iter().map(|id| id.label()).collect();
        insta::assert_snapshot!(
            labels.join(" | "),
            @"Home | About | Projects | Skills | Education | Contact"
        );
    }

    #[test]
    fn test_theme_from_dark_mode() {
        assert_eq!(Theme::from_dark_mode(false), Theme::Light);
        assert_eq!(Theme::from_dark_mode(true), Theme::Dark);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }
}
