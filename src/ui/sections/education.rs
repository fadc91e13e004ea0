//! Education timeline.

use ratatui::text::Span;

use super::{achievement, detail_line, dim, empty_notice, entry_title, stat, stats_line};
use crate::aggregate::highest_qualification;
use crate::derivation::{glyph_of, level_icon, score_color};
use crate::models::{Category, EducationEntry};
use crate::ui::components::badge;
use crate::ui::interaction::ClickAction;
use crate::ui::page::{RenderContext, SectionView};
use crate::view_state::{ExpandState, SectionId};

pub fn render(
    entries: &[EducationEntry],
    highlight: (&str, &str),
    state: &ExpandState,
    ctx: &RenderContext,
) -> SectionView {
    let width = ctx.width();
    let mut view = SectionView::new(SectionId::Education);

    if entries.is_empty() {
        view.push(empty_notice("No education entries"));
    }

    for (index, entry) in entries.iter().enumerate() {
        let expanded = state.is_expanded(index);
        let glyph = glyph_of(entry.level, level_icon);

        view.push_action(
            entry_title(glyph, entry.institution, None, expanded, width),
            ClickAction::ToggleEntry {
                section: SectionId::Education,
                index,
            },
        );
        view.push(detail_line(vec![Span::raw(entry.details.to_string())]));
        view.push(detail_line(vec![
            badge(entry.score, score_color(entry.score)),
            Span::raw(" "),
            badge(&entry.level.badge(), glyph.color),
            Span::raw("  "),
            dim(format!("{} · {}", entry.year, entry.location)),
        ]));
        if expanded {
            view.extend(achievement(&entry.achievement(), width));
        }
        view.blank();
    }

    view.push(stats_line(vec![
        stat("Highest Qualification", highest_qualification(entries)),
        stat(highlight.0, highlight.1),
    ]));
    view
}
