//! Section identities and the state each one owns.

use super::{CertificationView, ExpandState, FilterState, SkillView, SummaryMode};
use crate::models::{CertificationCategory, SkillGroup};

/// Sections in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Header,
    Summary,
    Education,
    Experience,
    Projects,
    Publications,
    Certifications,
    Skills,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::Header,
        SectionId::Summary,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Publications,
        SectionId::Certifications,
        SectionId::Skills,
    ];

    /// Card title; the header card has none.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            SectionId::Header => None,
            SectionId::Summary => Some("Profile Summary"),
            SectionId::Education => Some("Education"),
            SectionId::Experience => Some("Professional Experience"),
            SectionId::Projects => Some("Projects"),
            SectionId::Publications => Some("Publications"),
            SectionId::Certifications => Some("Certifications"),
            SectionId::Skills => Some("Skills"),
        }
    }

    /// Position on the page, used for the entrance stagger.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryState {
    pub mode: SummaryMode,
}

impl SummaryState {
    /// The Edit/Cancel control.
    pub fn toggle_edit(&mut self) {
        self.mode = self.mode.toggle();
    }

    /// "Save Changes": there is nothing to persist, it only leaves edit mode.
    pub fn save(&mut self) {
        self.mode = SummaryMode::Reading;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CertificationsState {
    pub filter: FilterState<CertificationCategory>,
    pub view: CertificationView,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillsState {
    pub filter: FilterState<SkillGroup>,
    pub view: SkillView,
}

/// All section states of one mounted page.
///
/// Nothing here is shared between sections; `Default` is the freshly
/// mounted state and [`PortfolioState::remount`] returns to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortfolioState {
    pub summary: SummaryState,
    pub education: ExpandState,
    pub experience: ExpandState,
    pub projects: ExpandState,
    pub publications: ExpandState,
    pub certifications: CertificationsState,
    pub skills: SkillsState,
}

impl PortfolioState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remount(&mut self) {
        *self = Self::default();
    }

    /// Accordion state of a list section.
    pub fn expand_state_mut(&mut self, section: SectionId) -> Option<&mut ExpandState> {
        match section {
            SectionId::Education => Some(&mut self.education),
            SectionId::Experience => Some(&mut self.experience),
            SectionId::Projects => Some(&mut self.projects),
            SectionId::Publications => Some(&mut self.publications),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        assert_eq!(SectionId::Header.index(), 0);
        assert_eq!(SectionId::Skills.index(), 7);
        assert_eq!(SectionId::Header.title(), None);
        assert_eq!(SectionId::Experience.title(), Some("Professional Experience"));
    }

    #[test]
    fn test_sections_do_not_share_expansion() {
        let mut state = PortfolioState::new();
        state.expand_state_mut(SectionId::Projects).unwrap().toggle(0, 3);
        assert_eq!(state.projects.expanded(), Some(0));
        assert_eq!(state.publications.expanded(), None);
        assert_eq!(state.education.expanded(), None);
    }

    #[test]
    fn test_remount_resets_everything() {
        let mut state = PortfolioState::new();
        state.education.toggle(1, 3);
        state.certifications.filter.select(Some(CertificationCategory::Analytics));
        state.skills.view = state.skills.view.toggle();
        state.summary.toggle_edit();
        state.remount();
        assert_eq!(state, PortfolioState::default());
    }

    #[test]
    fn test_non_list_sections_have_no_accordion() {
        let mut state = PortfolioState::new();
        assert!(state.expand_state_mut(SectionId::Skills).is_none());
        assert!(state.expand_state_mut(SectionId::Header).is_none());
    }

    #[test]
    fn test_save_leaves_edit_mode() {
        let mut summary = SummaryState::default();
        summary.toggle_edit();
        assert!(summary.mode.is_editing());
        summary.save();
        assert!(!summary.mode.is_editing());
    }
}
