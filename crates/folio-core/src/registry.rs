//! Section registry: the fixed, ordered list of section descriptors
//!
//! Each descriptor pairs a [`SectionId`] with its label, icon and a body
//! builder. Bodies are host-agnostic trees of [`BodyNode`]s; the display
//! layer decides how each node looks in a given theme.

use std::sync::LazyLock;

use crate::content::{
    ABOUT_PARAGRAPH, CONTACT_DETAILS, EDUCATION, INTERESTS, PROFILE, PROJECTS, SKILLS,
};
use crate::types::{Icon, SectionId};

/// A card-like block (project, education entry)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub icon: Option<Icon>,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub meta: Vec<(Icon, &'static str)>,
}

/// One node of a section body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyNode {
    /// Profile hero: avatar initials, name, tagline and quote
    Hero {
        initials: &'static str,
        name: &'static str,
        tagline: &'static str,
        quote: &'static str,
    },
    /// "View Resume" affordance that opens the static resume asset
    ResumeButton,
    Subheading(&'static str),
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
    /// The outbound profile links
    Links,
    Card(Card),
    /// A labelled group of chips (skills)
    ChipGroup {
        title: &'static str,
        chips: &'static [&'static str],
    },
    ContactDetail {
        icon: Icon,
        label: &'static str,
        value: &'static str,
    },
    /// The decorative contact form; its field values live in application state
    ContactForm,
    Spacer,
}

/// Rendered body of a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBody {
    pub section: SectionId,
    pub title: Option<&'static str>,
    pub nodes: Vec<BodyNode>,
}

/// Immutable description of one section
#[derive(Debug, Clone, Copy)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub label: &'static str,
    pub icon: Icon,
    body: fn() -> SectionBody,
}

impl SectionDescriptor {
    pub fn render_body(&self) -> SectionBody {
        (self.body)()
    }
}

/// Ordered registry of all sections
#[derive(Debug)]
pub struct SectionRegistry {
    descriptors: [SectionDescriptor; 6],
}

static STANDARD: LazyLock<SectionRegistry> = LazyLock::new(SectionRegistry::build);

impl SectionRegistry {
    /// The registry of the portfolio, built once on first use
    pub fn standard() -> &'static SectionRegistry {
        &STANDARD
    }

    fn build() -> Self {
        let descriptor = |id: SectionId, icon: Icon, body: fn() -> SectionBody| {
            SectionDescriptor {
                id,
                label: id.label(),
                icon,
                body,
            }
        };

        Self {
            descriptors: [
                descriptor(SectionId::Home, Icon::Home, home_body),
                descriptor(SectionId::About, Icon::User, about_body),
                descriptor(SectionId::Projects, Icon::Briefcase, projects_body),
                descriptor(SectionId::Skills, Icon::Code, skills_body),
                descriptor(SectionId::Education, Icon::GraduationCap, education_body),
                descriptor(SectionId::Contact, Icon::Mail, contact_body),
            ],
        }
    }

    /// Descriptor for a known section
    pub fn get(&self, id: SectionId) -> &SectionDescriptor {
        &self.descriptors[id.index()]
    }

    /// Descriptor for an identifier string, if it names a known section
    pub fn get_by_key(&self, key: &str) -> Option<&SectionDescriptor> {
        self.descriptors.iter().find(|d| d.id.key() == key)
    }

    /// Body for an identifier string.
    ///
    /// Unknown identifiers fall back to the first (home) section.
    pub fn body_for_key(&self, key: &str) -> SectionBody {
        match self.get_by_key(key) {
            Some(descriptor) => descriptor.render_body(),
            None => {
                tracing::debug!("Unknown section {:?}, falling back to home", key);
                self.descriptors[0].render_body()
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────
// Section bodies
// ─────────────────────────────────────────────────────────────────

fn home_body() -> SectionBody {
    SectionBody {
        section: SectionId::Home,
        title: None,
        nodes: vec![
            BodyNode::Hero {
                initials: PROFILE.initials,
                name: PROFILE.name,
                tagline: PROFILE.tagline,
                quote: PROFILE.quote,
            },
            BodyNode::Spacer,
            BodyNode::ResumeButton,
        ],
    }
}

fn about_body() -> SectionBody {
    SectionBody {
        section: SectionId::About,
        title: Some("About Me"),
        nodes: vec![
            BodyNode::Paragraph(ABOUT_PARAGRAPH),
            BodyNode::Spacer,
            BodyNode::Subheading("Interests"),
            BodyNode::Bullets(INTERESTS),
            BodyNode::Spacer,
            BodyNode::Links,
        ],
    }
}

fn projects_body() -> SectionBody {
    let mut nodes = Vec::new();
    for category in PROJECTS {
        nodes.push(BodyNode::Subheading(category.name));
        for project in category.items {
            nodes.push(BodyNode::Card(Card {
                icon: None,
                title: project.title,
                subtitle: project.company,
                description: Some(project.description),
                tags: project.tech,
                meta: Vec::new(),
            }));
        }
        nodes.push(BodyNode::Spacer);
    }
    SectionBody {
        section: SectionId::Projects,
        title: Some("Projects & Internships"),
        nodes,
    }
}

fn skills_body() -> SectionBody {
    SectionBody {
        section: SectionId::Skills,
        title: Some("Skills"),
        nodes: SKILLS
            .iter()
            .map(|category| BodyNode::ChipGroup {
                title: category.name,
                chips: category.skills,
            })
            .collect(),
    }
}

fn education_body() -> SectionBody {
    SectionBody {
        section: SectionId::Education,
        title: Some("Education"),
        nodes: EDUCATION
            .iter()
            .map(|entry| {
                BodyNode::Card(Card {
                    icon: Some(Icon::GraduationCap),
                    title: entry.degree,
                    subtitle: Some(entry.institution),
                    description: None,
                    tags: &[],
                    meta: vec![(Icon::Calendar, entry.period), (Icon::Award, entry.grade)],
                })
            })
            .collect(),
    }
}

fn contact_body() -> SectionBody {
    let mut nodes: Vec<BodyNode> = CONTACT_DETAILS
        .iter()
        .map(|detail| BodyNode::ContactDetail {
            icon: detail.icon,
            label: detail.label,
            value: detail.value,
        })
        .collect();
    nodes.push(BodyNode::Spacer);
    nodes.push(BodyNode::Subheading("Connect with me"));
    nodes.push(BodyNode::Links);
    nodes.push(BodyNode::Spacer);
    nodes.push(BodyNode::ContactForm);
    SectionBody {
        section: SectionId::Contact,
        title: Some("Contact Me"),
        nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_six_sections_in_order() {
        let registry = SectionRegistry::standard();
        assert_eq!(registry.len(), 6);
        let ids: Vec<SectionId> = registry.iter().map(|d| d.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
    }

    #[test]
    fn test_get_returns_matching_descriptor() {
        let registry = SectionRegistry::standard();
        for id in SectionId::ALL {
            let descriptor = registry.get(id);
            assert_eq!(descriptor.id, id);
            assert_eq!(descriptor.label, id.label());
            assert_eq!(descriptor.render_body().section, id);
        }
    }

    #[test]
    fn test_get_by_key() {
        let registry = SectionRegistry::standard();
        assert_eq!(
            registry.get_by_key("skills").map(|d| d.id),
            Some(SectionId::Skills)
        );
        assert!(registry.get_by_key("blog").is_none());
        assert!(registry.get_by_key("").is_none());
    }

    #[test]
    fn test_unknown_key_falls_back_to_home() {
        let registry = SectionRegistry::standard();
        let fallback = registry.body_for_key("does-not-exist");
        let home = registry.body_for_key("home");
        assert_eq!(fallback, home);
        assert_eq!(fallback.section, SectionId::Home);
    }

    #[test]
    fn test_bodies_are_deterministic() {
        let registry = SectionRegistry::standard();
        for descriptor in registry.iter() {
            assert_eq!(descriptor.render_body(), descriptor.render_body());
        }
    }

    #[test]
    fn test_links_listed_on_about_and_contact_only() {
        let registry = SectionRegistry::standard();
        let with_links: Vec<SectionId> = registry
            .iter()
            .filter(|d| {
                d.render_body()
                    .nodes
                    .iter()
                    .any(|n| matches!(n, BodyNode::Links))
            })
            .map(|d| d.id)
            .collect();
        assert_eq!(with_links, vec![SectionId::About, SectionId::Contact]);
    }

    #[test]
    fn test_only_contact_has_form() {
        let registry = SectionRegistry::standard();
        for descriptor in registry.iter() {
            let has_form = descriptor
                .render_body()
                .nodes
                .iter()
                .any(|n| matches!(n, BodyNode::ContactForm));
            assert_eq!(has_form, descriptor.id == SectionId::Contact);
        }
    }

    #[test]
    fn test_education_cards_carry_period_and_grade() {
        let body = SectionRegistry::standard()
            .get(SectionId::Education)
            .render_body();
        let cards: Vec<&Card> = body
            .nodes
            .iter()
            .filter_map(|n| match n {
                BodyNode::Card(card) => Some(card),
                _ => None,
            })
            .collect();
        assert_eq!(cards.len(), 3);
        assert_eq!(
            cards[0].meta,
            vec![(Icon::Calendar, "2023 - 2027"), (Icon::Award, "CGPA: 9.27")]
        );
    }
}
