//! Click action handler for page targets.
//!
//! Mouse clicks and keyboard activation both end up here, so a target
//! behaves the same however it is reached.

use super::hit_area::ClickAction;
use crate::app::App;

/// Apply a target's action to the App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        ClickAction::ToggleEntry { section, index } => {
            let len = app.section_len(section);
            if let Some(expand) = app.state.expand_state_mut(section) {
                let changed = expand.toggle(index, len);
                tracing::debug!(?section, index, changed, expanded = ?expand.expanded(), "Click: ToggleEntry");
            }
        }
        ClickAction::SelectCertificationFilter(category) => {
            app.state.certifications.filter.select(category);
            tracing::debug!(?category, "Click: SelectCertificationFilter");
        }
        ClickAction::SetCertificationView(view) => {
            app.state.certifications.view = view;
            tracing::debug!(?view, "Click: SetCertificationView");
        }
        ClickAction::SelectSkillFilter(group) => {
            app.state.skills.filter.select(group);
            tracing::debug!(?group, "Click: SelectSkillFilter");
        }
        ClickAction::ToggleSkillView => {
            app.state.skills.view = app.state.skills.view.toggle();
            tracing::debug!(view = ?app.state.skills.view, "Click: ToggleSkillView");
        }
        ClickAction::ToggleSummaryEdit => {
            app.state.summary.toggle_edit();
            tracing::debug!(mode = ?app.state.summary.mode, "Click: ToggleSummaryEdit");
        }
        ClickAction::SaveSummary => {
            app.state.summary.save();
            tracing::debug!("Click: SaveSummary");
        }
        ClickAction::OpenLink { uri, action } => {
            tracing::debug!(uri, ?action, "Click: OpenLink");
            app.open_link(uri, action);
        }
    }
}
