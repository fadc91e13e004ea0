//! Research publication entries.

use serde::Serialize;

use super::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PublicationType {
    Journal,
    Conference,
    Preprint,
    Book,
}

impl Category for PublicationType {
    const ALL: &'static [Self] = &[Self::Journal, Self::Conference, Self::Preprint, Self::Book];

    fn key(&self) -> &'static str {
        match self {
            Self::Journal => "journal",
            Self::Conference => "conference",
            Self::Preprint => "preprint",
            Self::Book => "book",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PublicationStatus {
    Published,
    Accepted,
    UnderReview,
    Draft,
}

impl Category for PublicationStatus {
    const ALL: &'static [Self] = &[
        Self::Published,
        Self::Accepted,
        Self::UnderReview,
        Self::Draft,
    ];

    fn key(&self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Accepted => "accepted",
            Self::UnderReview => "under-review",
            Self::Draft => "draft",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Category for Impact {
    const ALL: &'static [Self] = &[Self::High, Self::Medium, Self::Low];

    fn key(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// One paper.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Publication {
    pub title: &'static str,
    pub link_text: &'static str,
    pub link_url: &'static str,
    pub source: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: PublicationType,
    pub status: PublicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<Impact>,
    /// Absent counts are treated as zero by the aggregations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<&'static str>,
    pub keywords: &'static [&'static str],
}
