//! Publications with impact badges and citation metrics.

use ratatui::text::Span;

use super::{
    description, detail_line, dim, empty_notice, entry_title, stat, stats_line, tag_spans,
    DETAIL_INDENT,
};
use crate::aggregate::{h_index, published_count, total_citations};
use crate::derivation::{glyph_of, impact_color, publication_status_color, publication_type_icon};
use crate::models::{Category, Publication};
use crate::traits::OpenAction;
use crate::ui::components::{badge, Chip};
use crate::ui::helpers::wrap_text;
use crate::ui::interaction::ClickAction;
use crate::ui::page::{RenderContext, SectionView};
use crate::view_state::{ExpandState, SectionId};

pub fn render(publications: &[Publication], state: &ExpandState, ctx: &RenderContext) -> SectionView {
    let width = ctx.width();
    let mut view = SectionView::new(SectionId::Publications);

    view.push(stats_line(vec![
        stat("Published", published_count(publications)),
        stat("Citations", total_citations(publications)),
        stat("h-index", h_index(publications)),
    ]));
    view.blank();

    if publications.is_empty() {
        view.push(empty_notice("No publications"));
    }

    for (index, publication) in publications.iter().enumerate() {
        let expanded = state.is_expanded(index);
        let glyph = glyph_of(publication.kind, publication_type_icon);

        view.push_action(
            entry_title(glyph, publication.title, None, expanded, width),
            ClickAction::ToggleEntry {
                section: SectionId::Publications,
                index,
            },
        );

        let mut badges = vec![
            badge(
                &publication.status.badge(),
                publication_status_color(publication.status.key()),
            ),
            Span::raw(" "),
            badge(&publication.kind.badge(), glyph.color),
        ];
        if let Some(impact) = publication.impact {
            badges.push(Span::raw(" "));
            badges.push(badge(
                &format!("{} IMPACT", impact.badge()),
                impact_color(Some(impact.key())),
            ));
        }
        view.push(detail_line(badges));
        let byline = format!("{} · {}", publication.source, publication.date);
        for line in wrap_text(&byline, width.saturating_sub(DETAIL_INDENT)) {
            view.push(detail_line(vec![dim(line)]));
        }
        view.extend(description(publication.description, expanded, width));
        view.push_flow(tag_spans(publication.keywords, expanded), DETAIL_INDENT, width);

        if expanded {
            if let Some(citations) = publication.citations {
                view.push(detail_line(vec![dim("Citations "), Span::raw(citations.to_string())]));
            }
            let mut links = vec![Chip::link(publication.link_text).on_click(ClickAction::OpenLink {
                uri: publication.link_url,
                action: OpenAction::Publication,
            })];
            if let Some(doi) = publication.doi {
                links.push(Chip::link("DOI").on_click(ClickAction::OpenLink {
                    uri: doi,
                    action: OpenAction::Publication,
                }));
            }
            view.push_chips(&links, DETAIL_INDENT, ctx);
        }
        view.blank();
    }
    view
}
