//! Projects with status badges and code/demo links.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use super::{
    description, detail_line, empty_notice, entry_title, stat, stats_line, tag_spans,
    DETAIL_INDENT,
};
use crate::aggregate::{completed_projects, featured_projects, project_technology_count};
use crate::derivation::{glyph_of, palette, project_category_icon, project_status_color};
use crate::models::{Category, Project};
use crate::traits::OpenAction;
use crate::ui::components::{badge, Chip};
use crate::ui::interaction::ClickAction;
use crate::ui::page::{RenderContext, SectionView};
use crate::ui::theme::hex_color;
use crate::view_state::{ExpandState, SectionId};

fn link_chips(project: &Project) -> Vec<Chip> {
    let mut chips = Vec::new();
    if let Some(uri) = project.github_url {
        chips.push(Chip::link("View Code").on_click(ClickAction::OpenLink {
            uri,
            action: OpenAction::SourceCode,
        }));
    }
    if let Some(uri) = project.live_url {
        chips.push(Chip::link("Live Demo").on_click(ClickAction::OpenLink {
            uri,
            action: OpenAction::LiveDemo,
        }));
    }
    chips
}

pub fn render(projects: &[Project], state: &ExpandState, ctx: &RenderContext) -> SectionView {
    let width = ctx.width();
    let mut view = SectionView::new(SectionId::Projects);

    view.push(stats_line(vec![
        stat("Completed", completed_projects(projects)),
        stat("Featured", featured_projects(projects)),
        stat("Technologies", project_technology_count(projects)),
    ]));
    view.blank();

    if projects.is_empty() {
        view.push(empty_notice("No projects"));
    }

    for (index, project) in projects.iter().enumerate() {
        let expanded = state.is_expanded(index);
        let glyph = glyph_of(project.category, project_category_icon);
        let featured = project.featured.then(|| {
            Span::styled(
                "★ Featured",
                Style::default()
                    .fg(hex_color(palette::GOLD))
                    .add_modifier(Modifier::BOLD),
            )
        });

        view.push_action(
            entry_title(glyph, project.title, featured, expanded, width),
            ClickAction::ToggleEntry {
                section: SectionId::Projects,
                index,
            },
        );
        view.push(detail_line(vec![
            badge(&project.status.badge(), project_status_color(project.status.key())),
            Span::raw(" "),
            badge(&project.category.badge(), glyph.color),
        ]));
        view.extend(description(project.description, expanded, width));
        view.push_flow(tag_spans(project.technologies, expanded), DETAIL_INDENT, width);

        if expanded {
            let links = link_chips(project);
            if links.is_empty() {
                view.push(detail_line(vec![super::dim("No public links")]));
            } else {
                view.push_chips(&links, DETAIL_INDENT, ctx);
            }
        }
        view.blank();
    }
    view
}
