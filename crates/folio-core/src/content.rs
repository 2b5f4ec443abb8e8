//! Static portfolio content
//!
//! Immutable literal data. Nothing here is validated beyond being well-formed
//! for display.

use crate::types::Icon;

/// Owner profile shown on the home section
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub tagline: &'static str,
    pub quote: &'static str,
}

/// An outbound profile link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: Icon,
    /// Key that opens this link from the sections that list it
    pub key: char,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub company: Option<&'static str>,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectCategory {
    pub name: &'static str,
    pub items: &'static [Project],
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub grade: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactDetail {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Subbarayudu Yadhati",
    initials: "SY",
    tagline: "Aspiring Full-Stack Developer",
    quote: "\"Solving real-world problems with clean, efficient code.\"",
};

/// Static resume asset, resolved relative to the working directory unless configured
pub const RESUME_FILE: &str = "resume.pdf";

pub const ABOUT_PARAGRAPH: &str = "I'm a passionate Computer Science Engineering student at \
VIT-AP University with a strong foundation in full-stack development. Currently maintaining a \
CGPA of 9.27, I'm dedicated to creating innovative solutions that bridge the gap between \
technology and user experience.";

pub const INTERESTS: &[&str] = &[
    "Building user-friendly websites",
    "Exploring Data Science",
    "Working on real-world challenges",
];

pub const PROFILE_LINKS: &[ProfileLink] = &[
    ProfileLink {
        name: "GitHub",
        url: "https://github.com/subbu-yadhati",
        icon: Icon::Github,
        key: 'g',
    },
    ProfileLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/subbarayudu-yadhati-a63727331/",
        icon: Icon::Linkedin,
        key: 'l',
    },
    ProfileLink {
        name: "LeetCode",
        url: "https://leetcode.com/u/subbu_yadhati/",
        icon: Icon::Code,
        key: 'c',
    },
];

pub const PROJECTS: &[ProjectCategory] = &[
    ProjectCategory {
        name: "Internships",
        items: &[
            Project {
                title: "Hotel Booking System",
                company: Some("Ethnus"),
                description: "Developed a comprehensive hotel booking system with separate admin \
                    and user dashboards, featuring room management, booking system, and user \
                    authentication.",
                tech: &["React", "Node.js", "MongoDB", "Express"],
            },
            Project {
                title: "Web Development Projects",
                company: Some("Prodigy InfoTech"),
                description: "Created multiple web projects including landing pages, interactive \
                    Tic-Tac-Toe game, stopwatch application, and portfolio websites.",
                tech: &["HTML", "CSS", "JavaScript", "React"],
            },
        ],
    },
    ProjectCategory {
        name: "Personal Projects",
        items: &[Project {
            title: "Portfolio Website",
            company: None,
            description: "Responsive personal portfolio website built with React.js and Tailwind \
                CSS, featuring dark mode, smooth animations, and modern UI design.",
            tech: &["React", "Tailwind CSS", "JavaScript"],
        }],
    },
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming Languages",
        skills: &["Java", "Python", "C", "C++", "JavaScript"],
    },
    SkillCategory {
        name: "Web Technologies",
        skills: &["HTML", "CSS", "React", "Express"],
    },
    SkillCategory {
        name: "Databases",
        skills: &["SQL", "MongoDB"],
    },
    SkillCategory {
        name: "Tools",
        skills: &["Git", "GitHub", "VS Code"],
    },
    SkillCategory {
        name: "Concepts",
        skills: &["OOP", "DBMS", "DSA"],
    },
];

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        degree: "B.Tech Computer Science Engineering",
        institution: "VIT-AP University",
        period: "2023 - 2027",
        grade: "CGPA: 9.27",
    },
    EducationEntry {
        degree: "Intermediate",
        institution: "S.R Jr College",
        period: "2021 - 2023",
        grade: "97.1%",
    },
    EducationEntry {
        degree: "SSC",
        institution: "ZPHS Palukur",
        period: "2020 - 2021",
        grade: "99.67%",
    },
];

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        icon: Icon::MapPin,
        label: "Location",
        value: "Nandyal, Andhra Pradesh",
    },
    ContactDetail {
        icon: Icon::Mail,
        label: "Email",
        value: "subbarayuduyadhati@gmail.com",
    },
    ContactDetail {
        icon: Icon::Phone,
        label: "Phone",
        value: "7386623536",
    },
];

/// Acknowledgement shown after "sending" the contact form
pub const CONTACT_ACKNOWLEDGEMENT: &str = "Message sent! (Demo only)";

/// Find a profile link by its shortcut key
pub fn link_for_key(key: char) -> Option<&'static ProfileLink> {
    PROFILE_LINKS.iter().find(|link| link.key == key)
}
