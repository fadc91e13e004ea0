//! Profile summary with its Edit/Cancel toggle.
//!
//! Edit mode only frames the text and offers "Save Changes"; nothing is
//! editable and nothing is saved.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{dim, stat};
use crate::models::Profile;
use crate::ui::components::{tag, Chip};
use crate::ui::helpers::wrap_segments;
use crate::ui::interaction::ClickAction;
use crate::ui::page::{RenderContext, SectionView};
use crate::ui::theme::{COLOR_EDIT_FRAME, COLOR_HIGHLIGHT, COLOR_TEXT, COLOR_VERIFIED};
use crate::view_state::{SectionId, SummaryState};

pub fn render(profile: &Profile, state: &SummaryState, ctx: &RenderContext) -> SectionView {
    let width = ctx.width();
    let editing = state.mode.is_editing();
    let mut view = SectionView::new(SectionId::Summary);

    let toggle = if editing { "Cancel" } else { "Edit" };
    view.push_chips(
        &[Chip::button(toggle).on_click(ClickAction::ToggleSummaryEdit)],
        0,
        ctx,
    );

    let highlight = Style::default()
        .fg(COLOR_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);
    let plain = Style::default().fg(COLOR_TEXT);
    let segments: Vec<(&str, Style)> = profile
        .summary
        .iter()
        .map(|s| (s.text, if s.highlight { highlight } else { plain }))
        .collect();

    if editing {
        let frame = Style::default().fg(COLOR_EDIT_FRAME);
        view.push(Line::from(Span::styled(
            format!("┌ Editing {}", "─".repeat(width.saturating_sub(10))),
            frame,
        )));
        for line in wrap_segments(&segments, width.saturating_sub(2)) {
            let mut spans = vec![Span::styled("│ ", frame)];
            spans.extend(line.spans);
            view.push(Line::from(spans));
        }
        view.push(Line::from(Span::styled(
            format!("└{}", "─".repeat(width.saturating_sub(1))),
            frame,
        )));
        view.push_chips(
            &[Chip::button("Save Changes").on_click(ClickAction::SaveSummary)],
            0,
            ctx,
        );
    } else {
        view.extend(wrap_segments(&segments, width));
    }

    view.blank();
    view.push(Line::from(stat("Key Skills", profile.key_skills.len())));
    view.push_flow(profile.key_skills.iter().map(|s| tag(s)).collect(), 0, width);
    view.blank();
    view.push(Line::from(vec![
        dim(format!("Last updated: {}  ", profile.last_updated)),
        Span::styled("✓ Verified", Style::default().fg(COLOR_VERIFIED)),
    ]));
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::ui::layout::LayoutContext;
    use crate::view_state::SummaryMode;

    fn text(view: &SectionView) -> String {
        view.lines.iter().map(|l| l.to_string()).collect::<Vec<_>>().join("\n")
    }

    fn ctx() -> RenderContext {
        RenderContext::new(LayoutContext::new(100, 40), 0)
    }

    #[test]
    fn test_reading_mode() {
        let view = render(&data::PROFILE, &SummaryState::default(), &ctx());
        let text = text(&view);
        assert!(text.contains("[Edit]"));
        assert!(!text.contains("Save Changes"));
        assert!(text.contains("Python Developer with expertise in Data Analysis"));
        assert!(text.contains("Last updated: July 2025"));
    }

    #[test]
    fn test_editing_mode_offers_save() {
        let state = SummaryState {
            mode: SummaryMode::Editing,
        };
        let view = render(&data::PROFILE, &state, &ctx());
        let text = text(&view);
        assert!(text.contains("[Cancel]"));
        assert!(text.contains("┌ Editing"));
        let actions: Vec<ClickAction> = view.targets.iter().map(|t| t.action).collect();
        assert_eq!(
            actions,
            vec![ClickAction::ToggleSummaryEdit, ClickAction::SaveSummary]
        );
    }
}
