//! Skills by group, as chips or as a detailed list.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{detail_line, dim, empty_notice, stat, stats_line, DETAIL_INDENT};
use crate::aggregate::{certified_skills, total_skills};
use crate::derivation::{glyph_of, palette, skill_group_icon};
use crate::models::{Category, SkillCategory};
use crate::ui::components::{badge, filter_chips, icon, Chip};
use crate::ui::interaction::ClickAction;
use crate::ui::page::{RenderContext, SectionView};
use crate::ui::theme::{COLOR_ACCENT, COLOR_TEXT, COLOR_VERIFIED};
use crate::view_state::{SectionId, SkillView, SkillsState};

fn render_group(view: &mut SectionView, group: &SkillCategory, mode: SkillView, width: usize) {
    let glyph = glyph_of(group.group, skill_group_icon);
    view.push(Line::from(vec![
        icon(glyph),
        Span::styled(
            format!(" {}", group.group.label()),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        dim(format!(
            "  {} skills · {} certified",
            group.skills.len(),
            group.certified_count()
        )),
    ]));

    match mode {
        SkillView::Overview => {
            let chips = group
                .skills
                .iter()
                .map(|skill| {
                    if skill.certified {
                        Span::styled(
                            format!("{} ✓", skill.name),
                            Style::default().fg(COLOR_VERIFIED),
                        )
                    } else {
                        Span::styled(skill.name.to_string(), Style::default().fg(COLOR_TEXT))
                    }
                })
                .flat_map(|chip| [Span::raw("·"), chip])
                .skip(1)
                .collect();
            view.push_flow(chips, DETAIL_INDENT, width);
        }
        SkillView::Detailed => {
            for skill in group.skills {
                let mut spans = vec![Span::styled(
                    format!("• {}", skill.name),
                    Style::default().fg(COLOR_TEXT),
                )];
                if skill.certified {
                    spans.push(Span::raw(" "));
                    spans.push(badge("Certified", palette::EMERALD));
                }
                view.push(detail_line(spans));
            }
        }
    }
    view.blank();
}

pub fn render(groups: &[SkillCategory], state: &SkillsState, ctx: &RenderContext) -> SectionView {
    let width = ctx.width();
    let mut view = SectionView::new(SectionId::Skills);

    view.push(stats_line(vec![
        stat("Skills", total_skills(groups)),
        stat("Certified", certified_skills(groups)),
        stat("Categories", groups.len()),
    ]));
    view.blank();

    // Chip counts are skills shown under the chip, not groups
    let categories: Vec<_> = groups
        .iter()
        .map(|g| (g.group, g.group.label(), g.skills.len()))
        .collect();
    let chips = filter_chips(
        "All Categories",
        total_skills(groups),
        state.filter.selected(),
        &categories,
        ClickAction::SelectSkillFilter,
    );
    view.push_chips(&chips, 0, ctx);
    view.push_chips(
        &[Chip::button(state.view.toggle_label()).on_click(ClickAction::ToggleSkillView)],
        0,
        ctx,
    );
    view.blank();

    let shown = state.filter.apply(groups, |g| g.group);
    if shown.is_empty() {
        view.push(empty_notice("No skills in this category"));
    }
    for group in shown {
        render_group(&mut view, group, state.view, width);
    }
    view
}
