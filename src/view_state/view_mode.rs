//! Two-valued layout switches.

/// Card layout of the certifications section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CertificationView {
    #[default]
    Grid,
    List,
}

impl CertificationView {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

/// Density of the skills section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillView {
    #[default]
    Overview,
    Detailed,
}

impl SkillView {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Overview => Self::Detailed,
            Self::Detailed => Self::Overview,
        }
    }

    /// Label of the toggle control: names the mode it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::Overview => "Detailed",
            Self::Detailed => "Overview",
        }
    }
}

/// Reading or editing the professional summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryMode {
    #[default]
    Reading,
    Editing,
}

impl SummaryMode {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Reading => Self::Editing,
            Self::Editing => Self::Reading,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing)
    }
}
