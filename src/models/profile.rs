//! Header and summary content.

use serde::Serialize;

/// What kind of resource a contact link hands off to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    Phone,
    Email,
    Web,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactLink {
    pub label: &'static str,
    pub uri: &'static str,
    pub kind: LinkKind,
}

/// A run of summary text, optionally emphasized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarySegment {
    pub text: &'static str,
    pub highlight: bool,
}

impl SummarySegment {
    pub const fn plain(text: &'static str) -> Self {
        Self {
            text,
            highlight: false,
        }
    }

    pub const fn highlight(text: &'static str) -> Self {
        Self {
            text,
            highlight: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub links: &'static [ContactLink],
    pub summary: &'static [SummarySegment],
    pub key_skills: &'static [&'static str],
    pub last_updated: &'static str,
}

impl Profile {
    /// Summary as plain text.
    pub fn summary_text(&self) -> String {
        self.summary.iter().map(|s| s.text).collect()
    }
}
