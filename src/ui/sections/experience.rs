//! Work experience with company icons and skill previews.

use ratatui::text::Span;

use super::{
    achievement, description, detail_line, dim, empty_notice, entry_title, stat, stats_line,
    tag_spans, DETAIL_INDENT,
};
use crate::derivation::{company_icon, experience_type_color};
use crate::models::{Category, Experience};
use crate::ui::components::badge;
use crate::ui::interaction::ClickAction;
use crate::ui::page::{RenderContext, SectionView};
use crate::view_state::{ExpandState, SectionId};

pub fn render(
    entries: &[Experience],
    highlights: &[(&str, &str)],
    state: &ExpandState,
    ctx: &RenderContext,
) -> SectionView {
    let width = ctx.width();
    let mut view = SectionView::new(SectionId::Experience);

    if entries.is_empty() {
        view.push(empty_notice("No experience entries"));
    }

    for (index, entry) in entries.iter().enumerate() {
        let expanded = state.is_expanded(index);

        view.push_action(
            entry_title(company_icon(entry.company), entry.title, None, expanded, width),
            ClickAction::ToggleEntry {
                section: SectionId::Experience,
                index,
            },
        );
        view.push(detail_line(vec![
            Span::raw(entry.company.to_string()),
            dim(format!(" · {}", entry.location)),
        ]));
        view.push(detail_line(vec![
            badge(&entry.kind.badge(), experience_type_color(entry.kind.key())),
            Span::raw("  "),
            dim(entry.duration),
        ]));
        view.extend(description(entry.description, expanded, width));
        view.push_flow(tag_spans(entry.skills, expanded), DETAIL_INDENT, width);
        if expanded {
            view.extend(achievement(entry.achievement(), width));
        }
        view.blank();
    }

    if !highlights.is_empty() {
        view.push(stats_line(
            highlights
                .iter()
                .map(|(label, value)| stat(label, value))
                .collect(),
        ));
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::ui::layout::LayoutContext;

    fn render_with(state: &ExpandState) -> String {
        let ctx = RenderContext::new(LayoutContext::new(100, 40), 0);
        render(data::EXPERIENCE, data::EXPERIENCE_HIGHLIGHTS, state, &ctx)
            .lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_collapsed_skills_preview() {
        let text = render_with(&ExpandState::new());
        assert!(text.contains("#Python #Django #Web Development +1"));
        assert!(!text.contains("#Performance Optimization"));
        assert!(text.contains("[INTERNSHIP]"));
    }

    #[test]
    fn test_expanded_shows_all_skills_and_achievement() {
        let mut state = ExpandState::new();
        state.toggle(0, data::EXPERIENCE.len());
        let text = render_with(&state);
        assert!(text.contains("#Performance Optimization"));
        assert!(text.contains("Successfully completed internship with positive feedback"));
    }

    #[test]
    fn test_career_summary_row() {
        assert!(render_with(&ExpandState::new()).contains("Total Experience 2+ Months"));
    }
}
