//! Focus, section jumps and scrolling.
//!
//! Targets live in page order, so moving focus is moving an index. After
//! every relayout [`App::sync_page`] finds the focused target again by its
//! action, since expanding an entry or switching a filter shifts indices.

use super::App;
use crate::ui::interaction::{handle_click_action, ClickAction};
use crate::ui::layout::LayoutContext;
use crate::ui::page::{compose, Page, PageTarget, RenderContext};
use crate::view_state::SectionId;

/// Rows moved per mouse wheel notch.
pub const WHEEL_STEP: usize = 3;

impl App {
    /// Compose the page for a viewport and sync focus and scroll with it.
    pub fn layout(&mut self, width: u16, height: u16) -> Page {
        let ctx = RenderContext::new(LayoutContext::new(width, height), self.scroll);
        let page = compose(&self.portfolio, &self.state, &ctx);
        self.sync_page(&page, height as usize);
        page
    }

    pub fn sync_page(&mut self, page: &Page, viewport_height: usize) {
        self.targets = page.targets.clone();
        self.sections = page.sections.clone();
        self.page_height = page.height();
        self.viewport_height = viewport_height;
        self.max_scroll = self.page_height.saturating_sub(viewport_height);

        self.focus = self.resolve_focus();
        let focused = self.focused_target().copied();
        self.focused_action = focused.map(|t| t.action);
        self.focused_section = focused.map(|t| t.section);

        if self.follow_focus {
            self.follow_focus = false;
            self.scroll_focus_into_view();
        }
        self.scroll = self.scroll.min(self.max_scroll);
    }

    /// Same action if it survived the relayout, else the nearest earlier
    /// target of the same section, else the clamped index.
    fn resolve_focus(&self) -> Option<usize> {
        let index = self.focus?;
        if self.targets.is_empty() {
            return None;
        }
        if let Some(action) = self.focused_action {
            if let Some(found) = self.targets.iter().position(|t| t.action == action) {
                return Some(found);
            }
        }
        let clamped = index.min(self.targets.len() - 1);
        let same_section = self.targets[..=clamped]
            .iter()
            .rposition(|t| Some(t.section) == self.focused_section);
        Some(same_section.unwrap_or(clamped))
    }

    pub fn focused_target(&self) -> Option<&PageTarget> {
        self.focus.and_then(|i| self.targets.get(i))
    }

    fn set_focus(&mut self, index: usize) {
        if let Some(target) = self.targets.get(index).copied() {
            self.focus = Some(index);
            self.focused_action = Some(target.action);
            self.focused_section = Some(target.section);
            self.follow_focus = true;
            self.mark_dirty();
        }
    }

    /// Focus the target with this action, without scrolling (mouse clicks).
    pub fn focus_action(&mut self, action: ClickAction) {
        if let Some(index) = self.targets.iter().position(|t| t.action == action) {
            self.set_focus(index);
            self.follow_focus = false;
        }
    }

    /// First target at or below the top of the viewport, for the first
    /// focus move; the last target when scrolled past all of them.
    fn first_visible_target(&self) -> Option<usize> {
        self.targets
            .iter()
            .position(|t| t.row >= self.scroll)
            .or_else(|| self.targets.len().checked_sub(1))
    }

    pub(super) fn clear_focus(&mut self) {
        self.focus = None;
        self.focused_action = None;
        self.focused_section = None;
    }

    pub fn focus_next(&mut self) {
        let next = match self.focus {
            None => self.first_visible_target(),
            Some(i) => Some((i + 1).min(self.targets.len().saturating_sub(1))),
        };
        if let Some(index) = next {
            self.set_focus(index);
        }
    }

    pub fn focus_prev(&mut self) {
        let prev = match self.focus {
            None => self.first_visible_target(),
            Some(i) => Some(i.saturating_sub(1)),
        };
        if let Some(index) = prev {
            self.set_focus(index);
        }
    }

    /// Section the user is "in": the focused one, else the one at the top.
    pub fn current_section(&self) -> SectionId {
        self.focused_target()
            .map(|t| t.section)
            .or_else(|| {
                self.sections
                    .iter()
                    .find(|s| (s.start..s.end).contains(&self.scroll))
                    .map(|s| s.id)
            })
            .unwrap_or(SectionId::Header)
    }

    /// Jump to the first target of the next section that has one.
    pub fn next_section(&mut self) {
        let current = self.current_section().index();
        let target = SectionId::ALL[current + 1..]
            .iter()
            .find_map(|id| self.targets.iter().position(|t| t.section == *id));
        if let Some(index) = target {
            self.set_focus(index);
        }
    }

    /// Jump to the first target of the current section, or of the previous
    /// one when already there.
    pub fn prev_section(&mut self) {
        let current = self.current_section();
        let first_here = self.targets.iter().position(|t| t.section == current);
        if first_here.is_some() && first_here != self.focus {
            if let Some(index) = first_here {
                self.set_focus(index);
            }
            return;
        }
        let target = SectionId::ALL[..current.index()]
            .iter()
            .rev()
            .find_map(|id| self.targets.iter().position(|t| t.section == *id));
        if let Some(index) = target {
            self.set_focus(index);
        }
    }

    /// Keep the focused target, plus its section title when it is the
    /// section's first target, inside the viewport.
    fn scroll_focus_into_view(&mut self) {
        let Some(target) = self.focused_target().copied() else {
            return;
        };
        let viewport = self.viewport_height.max(1);
        let bottom = target.row + target.height as usize;
        let top = self
            .sections
            .iter()
            .find(|s| s.id == target.section && s.start + 1 == target.row)
            .map_or(target.row, |s| s.start);

        if top < self.scroll {
            self.scroll = top;
        } else if bottom > self.scroll + viewport {
            self.scroll = bottom.saturating_sub(viewport);
        }
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let scroll = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta as usize)
        }
        .min(self.max_scroll);
        if scroll != self.scroll {
            self.scroll = scroll;
            self.mark_dirty();
        }
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.viewport_height.saturating_sub(1).max(1) as isize);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.viewport_height.saturating_sub(1).max(1) as isize));
    }

    pub fn scroll_to_top(&mut self) {
        if !self.targets.is_empty() {
            self.set_focus(0);
        }
        self.scroll = 0;
        self.mark_dirty();
    }

    /// Show the end of the page, focusing the last target still on screen.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll;
        match self.targets.iter().rposition(|t| t.row >= self.max_scroll) {
            Some(last) => {
                self.set_focus(last);
                self.follow_focus = false;
            }
            None => self.clear_focus(),
        }
        self.mark_dirty();
    }

    /// Activate the focused target, as Enter or Space does.
    pub fn activate_focused(&mut self) {
        if let Some(action) = self.focused_target().map(|t| t.action) {
            handle_click_action(self, action);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::config::AppConfig;
    use crate::ui::interaction::ClickAction;
    use crate::view_state::SectionId;

    fn app() -> App {
        let mut app = App::new(AppConfig::new().with_animations(false));
        app.layout(100, 30);
        app
    }

    #[test]
    fn test_first_move_focuses_first_target() {
        let mut app = app();
        assert!(app.focus.is_none());
        app.focus_next();
        assert_eq!(app.focus, Some(0));
        assert_eq!(app.focused_target().unwrap().section, SectionId::Header);
    }

    #[test]
    fn test_focus_stops_at_ends() {
        let mut app = app();
        app.focus_next();
        app.focus_prev();
        assert_eq!(app.focus, Some(0));

        let last = app.targets.len() - 1;
        for _ in 0..app.targets.len() + 5 {
            app.focus_next();
        }
        assert_eq!(app.focus, Some(last));
    }

    #[test]
    fn test_next_section_skips_to_following_section() {
        let mut app = app();
        app.focus_next();
        app.next_section();
        assert_eq!(app.focused_target().unwrap().section, SectionId::Summary);
        app.next_section();
        assert_eq!(app.focused_target().unwrap().section, SectionId::Education);
        app.prev_section();
        assert_eq!(app.focused_target().unwrap().section, SectionId::Summary);
    }

    #[test]
    fn test_focus_survives_relayout() {
        let mut app = app();
        app.next_section();
        app.next_section();
        app.next_section();
        let before = app.focused_target().unwrap().action;
        assert!(matches!(before, ClickAction::ToggleEntry { section: SectionId::Experience, .. }));

        app.activate_focused();
        app.layout(100, 30);
        assert_eq!(app.focused_target().unwrap().action, before);
        assert_eq!(app.state.experience.expanded(), Some(0));
    }

    #[test]
    fn test_focus_follows_into_view() {
        let mut app = app();
        for _ in 0..app.targets.len() {
            app.focus_next();
        }
        app.layout(100, 30);
        let target = *app.focused_target().unwrap();
        assert!(app.scroll > 0);
        assert!(target.row >= app.scroll);
        assert!(target.row + (target.height as usize) <= app.scroll + 30);

        app.scroll_to_top();
        app.layout(100, 30);
        assert_eq!(app.scroll, 0);
        assert_eq!(app.focus, Some(0));
    }

    #[test]
    fn test_end_keeps_focus_on_screen() {
        let mut app = app();
        app.scroll_to_bottom();
        app.layout(100, 30);
        assert_eq!(app.scroll, app.max_scroll);
        if let Some(target) = app.focused_target() {
            assert!(target.row >= app.scroll);
        }
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = app();
        app.scroll_by(-5);
        assert_eq!(app.scroll, 0);
        app.scroll_by(100_000);
        assert_eq!(app.scroll, app.max_scroll);
        assert!(app.max_scroll > 0);
    }

    #[test]
    fn test_save_summary_moves_focus_back_to_toggle() {
        let mut app = app();
        app.next_section();
        assert_eq!(app.focused_target().unwrap().action, ClickAction::ToggleSummaryEdit);
        app.activate_focused();
        app.layout(100, 30);
        app.focus_next();
        assert_eq!(app.focused_target().unwrap().action, ClickAction::SaveSummary);

        app.activate_focused();
        app.layout(100, 30);
        assert_eq!(app.focused_target().unwrap().action, ClickAction::ToggleSummaryEdit);
    }
}
