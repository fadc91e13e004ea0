//! Project showcase entries.

use serde::Serialize;

use super::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    Web,
    Data,
    Mobile,
    Desktop,
}

impl Category for ProjectCategory {
    const ALL: &'static [Self] = &[Self::Web, Self::Data, Self::Mobile, Self::Desktop];

    fn key(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Data => "data",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl Category for ProjectStatus {
    const ALL: &'static [Self] = &[Self::Completed, Self::InProgress, Self::Planned];

    fn key(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
        }
    }
}

/// One project card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: ProjectCategory,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<&'static str>,
    pub featured: bool,
}
