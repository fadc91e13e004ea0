//! Clickable regions.
//!
//! The page composer reports where each actionable target landed; the
//! renderer registers the visible ones here every frame, and the event loop
//! hit-tests mouse positions against the last frame's registrations.

use ratatui::layout::Rect;

use crate::models::{CertificationCategory, SkillGroup};
use crate::traits::OpenAction;
use crate::view_state::{CertificationView, SectionId};

/// What activating a target does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Tap an entry of a list section: expand it, or collapse it if open
    ToggleEntry { section: SectionId, index: usize },

    /// Certification filter chip; `None` is "All"
    SelectCertificationFilter(Option<CertificationCategory>),
    /// Grid / list switch
    SetCertificationView(CertificationView),

    /// Skill group chip; `None` is "All Categories"
    SelectSkillFilter(Option<SkillGroup>),
    /// Overview / detailed toggle
    ToggleSkillView,

    /// Summary Edit / Cancel
    ToggleSummaryEdit,
    /// Summary "Save Changes"
    SaveSummary,

    /// Hand a URI to the platform
    OpenLink {
        uri: &'static str,
        action: OpenAction,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Hit areas of the last rendered frame.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// Registration order; later entries sit on top
    areas: Vec<HitArea>,
    hovered: Option<usize>,
    /// Last known mouse position; survives `clear`
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start of each render. The pointer position is kept so
    /// [`refresh_hover`](Self::refresh_hover) can restore the hover.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea::new(rect, action));
    }

    /// Topmost (last registered) action containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|i| self.areas[i].action)
    }

    /// Returns true when the hovered area changed and a redraw is due.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        self.pointer = Some((x, y));
        let previous = self.hovered.map(|i| self.areas[i].rect);
        self.refresh_hover();
        previous != self.hovered().map(|a| a.rect)
    }

    /// Re-resolve the hovered area after a new set of registrations.
    pub fn refresh_hover(&mut self) {
        self.hovered = self.pointer.and_then(|(x, y)| self.find_index(x, y));
    }

    pub fn hovered(&self) -> Option<&HitArea> {
        self.hovered.and_then(|i| self.areas.get(i))
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOGGLE: ClickAction = ClickAction::ToggleEntry {
        section: SectionId::Projects,
        index: 0,
    };

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(Rect::new(10, 10, 20, 1), TOGGLE);
        assert!(area.contains(10, 10));
        assert!(area.contains(29, 10));
        assert!(!area.contains(30, 10));
        assert!(!area.contains(10, 11));
        assert!(!area.contains(9, 10));
    }

    #[test]
    fn test_zero_size_area_contains_nothing() {
        let area = HitArea::new(Rect::new(5, 5, 0, 0), TOGGLE);
        assert!(!area.contains(5, 5));
    }

    #[test]
    fn test_later_registration_wins() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 40, 1), TOGGLE);
        registry.register(Rect::new(4, 0, 6, 1), ClickAction::ToggleSkillView);

        assert_eq!(registry.hit_test(5, 0), Some(ClickAction::ToggleSkillView));
        assert_eq!(registry.hit_test(20, 0), Some(TOGGLE));
        assert_eq!(registry.hit_test(20, 1), None);
    }

    #[test]
    fn test_update_hover_reports_changes() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 10, 1), TOGGLE);

        assert!(registry.update_hover(2, 0));
        assert!(!registry.update_hover(3, 0));
        assert_eq!(registry.hovered().map(|a| a.action), Some(TOGGLE));
        assert!(registry.update_hover(2, 5));
        assert!(registry.hovered().is_none());
    }

    #[test]
    fn test_clear_keeps_pointer_for_next_frame() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 10, 1), TOGGLE);
        registry.update_hover(1, 0);
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.hovered().is_none());

        registry.register(Rect::new(0, 0, 10, 1), TOGGLE);
        registry.refresh_hover();
        assert_eq!(registry.hovered().map(|a| a.action), Some(TOGGLE));
    }
}
