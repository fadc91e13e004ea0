//! Typed portfolio records.
//!
//! Each section of the portfolio is a fixed table of one of these entry
//! types. Categorical fields are closed enums implementing [`Category`], so
//! an out-of-set value cannot be constructed in-process; the string-keyed
//! mapping functions in [`crate::derivation`] still carry a fallback for keys
//! that arrive from anywhere else.

pub mod certification;
pub mod education;
pub mod experience;
pub mod profile;
pub mod project;
pub mod publication;
pub mod skill;

pub use certification::{Certification, CertificationCategory, CertificationLevel};
pub use education::{EducationEntry, EducationLevel};
pub use experience::{Experience, ExperienceType};
pub use profile::{ContactLink, LinkKind, Profile, SummarySegment};
pub use project::{Project, ProjectCategory, ProjectStatus};
pub use publication::{Impact, Publication, PublicationStatus, PublicationType};
pub use skill::{Skill, SkillCategory, SkillGroup};

use serde::Serialize;

/// A closed set of string-keyed values.
///
/// `ALL` is the declaration order, which is also the order filter chips and
/// per-category statistics are shown in.
pub trait Category: Copy + Eq + std::fmt::Debug + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// The stable key, e.g. `"in-progress"` or `"soft-skills"`.
    fn key(&self) -> &'static str;

    /// Look up a member by its key.
    fn parse(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }

    /// Human label: the key with its first hyphen turned into a space.
    fn label(&self) -> String {
        self.key().replacen('-', " ", 1)
    }

    /// Upper-cased label used on status and type badges.
    fn badge(&self) -> String {
        self.label().to_uppercase()
    }
}

/// Everything shown on the page, in one borrowable bundle.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Portfolio {
    pub profile: &'static Profile,
    pub education: &'static [EducationEntry],
    /// Headline stat next to the highest qualification: (label, value)
    pub education_highlight: (&'static str, &'static str),
    pub experience: &'static [Experience],
    /// Career summary row: (label, value)
    pub experience_highlights: &'static [(&'static str, &'static str)],
    pub projects: &'static [Project],
    pub publications: &'static [Publication],
    pub certifications: &'static [Certification],
    pub skills: &'static [SkillCategory],
}
