//! Education timeline entries.

use serde::Serialize;

use super::Category;

/// Stage of schooling an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationLevel {
    Undergraduate,
    Secondary,
    Primary,
}

impl Category for EducationLevel {
    const ALL: &'static [Self] = &[Self::Undergraduate, Self::Secondary, Self::Primary];

    fn key(&self) -> &'static str {
        match self {
            Self::Undergraduate => "undergraduate",
            Self::Secondary => "secondary",
            Self::Primary => "primary",
        }
    }
}

impl EducationLevel {
    /// Rank used to pick the highest qualification (higher is more advanced).
    pub fn rank(&self) -> u8 {
        match self {
            Self::Undergraduate => 3,
            Self::Secondary => 2,
            Self::Primary => 1,
        }
    }
}

/// One school or degree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationEntry {
    pub institution: &'static str,
    pub location: &'static str,
    pub details: &'static str,
    pub degree: &'static str,
    /// Free-form score, e.g. `"CGPA: 8.06"` or `"87.33%"`.
    pub score: &'static str,
    pub year: &'static str,
    pub level: EducationLevel,
    /// Recorded honour shown when the entry is expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinction: Option<&'static str>,
}

impl EducationEntry {
    /// Line shown in the expanded card.
    pub fn achievement(&self) -> String {
        match self.distinction {
            Some(text) => text.to_string(),
            None => format!("Achieved {} in {}", self.score, self.degree),
        }
    }
}
