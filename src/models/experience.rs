//! Work experience entries.

use serde::Serialize;

use super::Category;

/// Employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceType {
    Internship,
    Fulltime,
    Contract,
}

impl Category for ExperienceType {
    const ALL: &'static [Self] = &[Self::Internship, Self::Fulltime, Self::Contract];

    fn key(&self) -> &'static str {
        match self {
            Self::Internship => "internship",
            Self::Fulltime => "fulltime",
            Self::Contract => "contract",
        }
    }

    /// Capitalized key, e.g. `"Internship"`.
    fn label(&self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// One position held.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    #[serde(rename = "type")]
    pub kind: ExperienceType,
    pub skills: &'static [&'static str],
    pub description: &'static str,
}

impl Experience {
    pub fn achievement(&self) -> &'static str {
        match self.kind {
            ExperienceType::Internship => "Successfully completed internship with positive feedback",
            _ => "Delivered exceptional results and exceeded expectations",
        }
    }
}
