//! Certifications with category filter and grid/list view.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::{dim, empty_notice, stat, stats_line, title_case};
use crate::aggregate::certification_counts;
use crate::derivation::{
    certification_category_color, certification_category_icon, certification_level_color,
    glyph_of,
};
use crate::models::{Category, Certification};
use crate::ui::components::{badge, filter_chips, icon, Chip};
use crate::ui::helpers::{padding_for, truncate_to_width};
use crate::ui::interaction::ClickAction;
use crate::ui::page::{RenderContext, SectionView};
use crate::ui::theme::{badge_style, icon_symbol, COLOR_TEXT, COLOR_VERIFIED};
use crate::view_state::{CertificationView, CertificationsState, SectionId};

/// Rows of one grid cell: name, provider, level/year/verified.
fn cell_lines(cert: &Certification, width: usize) -> [Vec<Span<'static>>; 3] {
    let glyph = glyph_of(cert.category, certification_category_icon);
    let name = truncate_to_width(cert.name, width.saturating_sub(2));
    let provider = truncate_to_width(cert.provider, width);

    let mut meta = vec![badge(&cert.level.badge(), certification_level_color(cert.level.key()))];
    if let Some(year) = cert.year {
        meta.push(dim(format!(" {year}")));
    }
    if cert.verified {
        meta.push(Span::styled(" ✓", Style::default().fg(COLOR_VERIFIED)));
    }

    [
        vec![
            icon(glyph),
            Span::raw(" "),
            Span::styled(name, Style::default().fg(COLOR_TEXT)),
        ],
        vec![dim(provider)],
        meta,
    ]
}

fn render_grid(view: &mut SectionView, certs: &[&Certification], ctx: &RenderContext) {
    let columns = ctx.layout.grid_columns();
    let cell_width = ctx.layout.grid_cell_width();
    let inner = cell_width.saturating_sub(1);

    for row in certs.chunks(columns) {
        let mut lines: [Vec<Span<'static>>; 3] = Default::default();
        for cert in row {
            for (line, cell) in lines.iter_mut().zip(cell_lines(cert, inner)) {
                let used: String = cell.iter().map(|s| s.content.as_ref()).collect();
                line.extend(cell);
                line.push(Span::raw(padding_for(&used, cell_width)));
            }
        }
        for line in lines {
            view.push(Line::from(line));
        }
        view.blank();
    }
}

fn render_list(view: &mut SectionView, certs: &[&Certification], ctx: &RenderContext) {
    let width = ctx.width();
    for cert in certs {
        let glyph = glyph_of(cert.category, certification_category_icon);
        let mut spans = vec![
            icon(glyph),
            Span::styled(format!(" {}", cert.name), Style::default().fg(COLOR_TEXT)),
            dim(format!("· {}", cert.provider)),
            badge(&cert.level.badge(), certification_level_color(cert.level.key())),
        ];
        if let Some(year) = cert.year {
            spans.push(dim(year));
        }
        if cert.verified {
            spans.push(Span::styled("✓ Verified", Style::default().fg(COLOR_VERIFIED)));
        }
        if let Some(id) = cert.credential_id {
            spans.push(dim(format!("ID: {id}")));
        }
        view.push_flow(spans, 0, width);
    }
}

pub fn render(
    certifications: &[Certification],
    state: &CertificationsState,
    ctx: &RenderContext,
) -> SectionView {
    let mut view = SectionView::new(SectionId::Certifications);
    let counts = certification_counts(certifications);

    let categories: Vec<_> = counts
        .iter()
        .map(|(category, count)| (*category, title_case(&category.label()), *count))
        .collect();
    let chips = filter_chips(
        "All",
        certifications.len(),
        state.filter.selected(),
        &categories,
        ClickAction::SelectCertificationFilter,
    );
    view.push_chips(&chips, 0, ctx);

    let views = [CertificationView::Grid, CertificationView::List].map(|mode| {
        let label = match mode {
            CertificationView::Grid => "Grid",
            CertificationView::List => "List",
        };
        Chip::new(label)
            .selected(state.view == mode)
            .on_click(ClickAction::SetCertificationView(mode))
    });
    view.push_chips(&views, 0, ctx);
    view.blank();

    let shown = state.filter.apply(certifications, |c| c.category);
    if shown.is_empty() {
        view.push(empty_notice("No certifications in this category"));
        view.blank();
    } else {
        match state.view {
            CertificationView::Grid => render_grid(&mut view, &shown, ctx),
            CertificationView::List => {
                render_list(&mut view, &shown, ctx);
                view.blank();
            }
        }
    }

    view.push(stats_line(
        counts
            .iter()
            .map(|(category, count)| {
                let glyph = certification_category_icon(category.key());
                let mut spans = vec![Span::styled(
                    format!("{} ", icon_symbol(glyph.icon)),
                    badge_style(certification_category_color(category.key())),
                )];
                spans.extend(stat(&title_case(&category.label()), count));
                spans
            })
            .collect(),
    ));
    view
}
