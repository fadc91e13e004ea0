//! Certification entries.

use serde::Serialize;

use super::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CertificationCategory {
    Technical,
    Analytics,
    Management,
    SoftSkills,
}

impl Category for CertificationCategory {
    const ALL: &'static [Self] = &[
        Self::Technical,
        Self::Analytics,
        Self::Management,
        Self::SoftSkills,
    ];

    fn key(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Analytics => "analytics",
            Self::Management => "management",
            Self::SoftSkills => "soft-skills",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CertificationLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl Category for CertificationLevel {
    const ALL: &'static [Self] = &[Self::Beginner, Self::Intermediate, Self::Advanced];

    fn key(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Certification {
    pub name: &'static str,
    pub provider: &'static str,
    pub category: CertificationCategory,
    pub level: CertificationLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<&'static str>,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<&'static str>,
}
