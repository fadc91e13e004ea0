//! The hardcoded portfolio content.
//!
//! Tables are `'static` and never mutated; [`portfolio()`] bundles them for
//! the renderer and the exporters.

mod career;
mod credentials;

pub use career::{EDUCATION, EDUCATION_HIGHLIGHT, EXPERIENCE, EXPERIENCE_HIGHLIGHTS, PROJECTS};
pub use credentials::{CERTIFICATIONS, PUBLICATIONS, SKILLS};

use crate::models::{ContactLink, LinkKind, Portfolio, Profile, SummarySegment};

pub static PROFILE: Profile = Profile {
    name: "SUJAL KAMANNA",
    headline: "Software Developer | Data Analyst",
    links: &[
        ContactLink {
            label: "+91 - 9325309121",
            uri: "tel:+919325309121",
            kind: LinkKind::Phone,
        },
        ContactLink {
            label: "sujalkamanna2003@gmail.com",
            uri: "mailto:sujalkamanna2003@gmail.com",
            kind: LinkKind::Email,
        },
        ContactLink {
            label: "LinkedIn: sujalkamanna",
            uri: "https://www.linkedin.com/in/sujalkamanna",
            kind: LinkKind::Web,
        },
        ContactLink {
            label: "GitHub: sujalkamanna",
            uri: "https://github.com/sujalkamanna",
            kind: LinkKind::Web,
        },
    ],
    summary: &[
        SummarySegment::highlight("Python Developer"),
        SummarySegment::plain(" with expertise in "),
        SummarySegment::highlight("Data Analysis"),
        SummarySegment::plain(" and scalable web development. Skilled in "),
        SummarySegment::highlight("Power BI"),
        SummarySegment::plain(" visualization and "),
        SummarySegment::highlight("Agile"),
        SummarySegment::plain(
            " methodologies, with a strong ability to collaborate on innovative software solutions.",
        ),
    ],
    key_skills: &["Python", "Data Analysis", "Power BI", "Agile", "Web Development"],
    last_updated: "July 2025",
};

/// The shipped portfolio.
pub fn portfolio() -> Portfolio {
    Portfolio {
        profile: &PROFILE,
        education: EDUCATION,
        education_highlight: EDUCATION_HIGHLIGHT,
        experience: EXPERIENCE,
        experience_highlights: EXPERIENCE_HIGHLIGHTS,
        projects: PROJECTS,
        publications: PUBLICATIONS,
        certifications: CERTIFICATIONS,
        skills: SKILLS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_tables_are_not_empty() {
        let p = portfolio();
        assert!(!p.education.is_empty());
        assert!(!p.experience.is_empty());
        assert!(!p.projects.is_empty());
        assert!(!p.publications.is_empty());
        assert!(!p.certifications.is_empty());
        assert!(!p.skills.is_empty());
    }

    #[test]
    fn test_contact_links_use_known_schemes() {
        for link in PROFILE.links {
            assert!(
                link.uri.starts_with("tel:")
                    || link.uri.starts_with("mailto:")
                    || link.uri.starts_with("https://"),
                "unexpected scheme in {}",
                link.uri
            );
        }
    }
}
