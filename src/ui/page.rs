//! Page composition.
//!
//! Every section renders into a [`SectionView`]: styled lines plus the
//! targets (clickable spans) it placed on them, in section-relative rows.
//! [`compose`] stacks the sections in page order behind a focus gutter and
//! resolves every target to an absolute page row. The staggered entrance is
//! applied afterwards, at draw time, so it never moves a target.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::components::Chip;
use super::interaction::ClickAction;
use super::layout::{breakpoints::GUTTER_WIDTH, LayoutContext};
use super::sections;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::models::Portfolio;
use crate::view_state::{PortfolioState, SectionId};

pub const FOOTER_TEXT: &str = "© 2025 • Built with ratatui";

// ============================================================================
// Render Context
// ============================================================================

/// What every section renderer gets to see besides its data and state.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub layout: LayoutContext,
    /// Rows scrolled past the top of the page, for parallax decoration
    pub scroll_y: usize,
}

impl RenderContext {
    pub fn new(layout: LayoutContext, scroll_y: usize) -> Self {
        Self { layout, scroll_y }
    }

    pub fn width(&self) -> usize {
        self.layout.content_width()
    }
}

// ============================================================================
// Section View
// ============================================================================

/// A clickable span inside a section, in section-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub row: usize,
    pub col: u16,
    pub width: u16,
    pub height: u16,
    pub action: ClickAction,
}

#[derive(Debug, Clone)]
pub struct SectionView {
    pub id: SectionId,
    pub lines: Vec<Line<'static>>,
    pub targets: Vec<Target>,
}

impl SectionView {
    pub fn new(id: SectionId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            targets: Vec::new(),
        }
    }

    pub fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = Line<'static>>) {
        self.lines.extend(lines);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Lines that together activate one action, e.g. a wrapped entry title.
    pub fn push_action(&mut self, lines: Vec<Line<'static>>, action: ClickAction) {
        if lines.is_empty() {
            return;
        }
        let width = lines.iter().map(Line::width).max().unwrap_or(0);
        self.targets.push(Target {
            row: self.lines.len(),
            col: 0,
            width: width as u16,
            height: lines.len() as u16,
            action,
        });
        self.lines.extend(lines);
    }

    /// Flow chips left to right, wrapping at `width`.
    pub fn push_chips(&mut self, chips: &[Chip], indent: usize, ctx: &RenderContext) {
        let width = ctx.width();
        let mut spans = vec![Span::raw(" ".repeat(indent))];
        let mut used = indent;
        let mut placed = 0;

        for chip in chips {
            let text = chip.text(&ctx.layout);
            let chip_width = text.width();
            if placed > 0 && used + 2 + chip_width > width {
                self.lines.push(Line::from(std::mem::take(&mut spans)));
                spans.push(Span::raw(" ".repeat(indent)));
                used = indent;
                placed = 0;
            }
            if placed > 0 {
                spans.push(Span::raw("  "));
                used += 2;
            }
            if let Some(action) = chip.action {
                self.targets.push(Target {
                    row: self.lines.len(),
                    col: used as u16,
                    width: chip_width as u16,
                    height: 1,
                    action,
                });
            }
            spans.push(Span::styled(text, chip.style()));
            used += chip_width;
            placed += 1;
        }

        if placed > 0 {
            self.lines.push(Line::from(spans));
        }
    }

    /// Flow plain spans (tags, badges) left to right, wrapping at `width`.
    pub fn push_flow(&mut self, items: Vec<Span<'static>>, indent: usize, width: usize) {
        let mut spans = vec![Span::raw(" ".repeat(indent))];
        let mut used = indent;
        let mut placed = 0;
        for item in items {
            let item_width = item.width();
            if placed > 0 && used + 1 + item_width > width {
                self.lines.push(Line::from(std::mem::take(&mut spans)));
                spans.push(Span::raw(" ".repeat(indent)));
                used = indent;
                placed = 0;
            }
            if placed > 0 {
                spans.push(Span::raw(" "));
                used += 1;
            }
            used += item_width;
            spans.push(item);
            placed += 1;
        }
        if placed > 0 {
            self.lines.push(Line::from(spans));
        }
    }
}

// ============================================================================
// Composed Page
// ============================================================================

/// A target resolved to absolute page coordinates (gutter included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTarget {
    pub section: SectionId,
    pub row: usize,
    pub col: u16,
    pub width: u16,
    pub height: u16,
    pub action: ClickAction,
}

/// Rows `start..end` of the page belong to `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub targets: Vec<PageTarget>,
    pub sections: Vec<SectionSpan>,
}

impl Page {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Section owning a page row; `None` for the footer.
    pub fn section_at(&self, row: usize) -> Option<SectionId> {
        self.sections
            .iter()
            .find(|s| (s.start..s.end).contains(&row))
            .map(|s| s.id)
    }

    /// Plain text of the page, one string per row.
    pub fn text(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.to_string()).collect()
    }
}

/// Render every section in page order.
pub fn build_sections(
    portfolio: &Portfolio,
    state: &PortfolioState,
    ctx: &RenderContext,
) -> Vec<SectionView> {
    SectionId::ALL
        .iter()
        .map(|id| match id {
            SectionId::Header => sections::header::render(portfolio.profile, ctx),
            SectionId::Summary => sections::summary::render(portfolio.profile, &state.summary, ctx),
            SectionId::Education => {
                sections::education::render(
                    portfolio.education,
                    portfolio.education_highlight,
                    &state.education,
                    ctx,
                )
            }
            SectionId::Experience => {
                sections::experience::render(
                    portfolio.experience,
                    portfolio.experience_highlights,
                    &state.experience,
                    ctx,
                )
            }
            SectionId::Projects => sections::projects::render(portfolio.projects, &state.projects, ctx),
            SectionId::Publications => {
                sections::publications::render(portfolio.publications, &state.publications, ctx)
            }
            SectionId::Certifications => sections::certifications::render(
                portfolio.certifications,
                &state.certifications,
                ctx,
            ),
            SectionId::Skills => sections::skills::render(portfolio.skills, &state.skills, ctx),
        })
        .collect()
}

/// Stack the sections into one page.
pub fn compose(portfolio: &Portfolio, state: &PortfolioState, ctx: &RenderContext) -> Page {
    let mut page = Page::default();
    let gutter = " ".repeat(GUTTER_WIDTH as usize);

    for view in build_sections(portfolio, state, ctx) {
        let start = page.lines.len();

        if let Some(title) = view.id.title() {
            page.lines.push(title_rule(title, ctx.width(), &gutter));
        }
        let offset = page.lines.len();

        for target in &view.targets {
            page.targets.push(PageTarget {
                section: view.id,
                row: offset + target.row,
                col: target.col + GUTTER_WIDTH,
                width: target.width,
                height: target.height,
                action: target.action,
            });
        }
        for line in view.lines {
            let mut spans = Vec::with_capacity(line.spans.len() + 1);
            spans.push(Span::raw(gutter.clone()));
            spans.extend(line.spans);
            page.lines.push(Line::from(spans).style(line.style));
        }
        page.lines.push(Line::default());

        page.sections.push(SectionSpan {
            id: view.id,
            start,
            end: page.lines.len(),
        });
    }

    page.lines.push(Line::from(vec![
        Span::raw(gutter),
        Span::styled(FOOTER_TEXT, Style::default().fg(COLOR_DIM)),
    ]));
    page
}

/// `── Title ─────` across the text column.
fn title_rule(title: &str, width: usize, gutter: &str) -> Line<'static> {
    let lead = "── ";
    let used = lead.width() + title.width() + 1;
    Line::from(vec![
        Span::raw(gutter.to_string()),
        Span::styled(lead, Style::default().fg(COLOR_BORDER)),
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            "─".repeat(width.saturating_sub(used)),
            Style::default().fg(COLOR_BORDER),
        ),
    ])
}

// ============================================================================
// Entrance
// ============================================================================

/// Delay between consecutive sections starting their entrance.
pub const ENTRANCE_STAGGER_MS: u64 = 100;
pub const ENTRANCE_DURATION_MS: u64 = 500;
/// Columns a section slides in from.
pub const ENTRANCE_SLIDE_COLS: usize = 6;

/// Timing of one section's entrance, from page mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    pub delay_ms: u64,
    pub duration_ms: u64,
}

impl Entrance {
    /// Delay grows with the section's position.
    pub fn for_index(index: usize) -> Self {
        Self {
            delay_ms: index as u64 * ENTRANCE_STAGGER_MS,
            duration_ms: ENTRANCE_DURATION_MS,
        }
    }

    /// Eased progress in `0.0..=1.0`.
    pub fn progress(&self, elapsed_ms: u64) -> f32 {
        if elapsed_ms <= self.delay_ms {
            return 0.0;
        }
        let t = ((elapsed_ms - self.delay_ms) as f32 / self.duration_ms as f32).min(1.0);
        // ease-out cubic
        1.0 - (1.0 - t).powi(3)
    }
}

/// Milliseconds after which every section has fully entered.
pub fn entrance_total_ms() -> u64 {
    let last = Entrance::for_index(SectionId::ALL.len() - 1);
    last.delay_ms + last.duration_ms
}

/// A line as it looks part way through its section's entrance.
///
/// Not started: blank. In flight: dimmed and shifted right. Done: unchanged.
pub fn apply_entrance(line: Line<'static>, progress: f32) -> Line<'static> {
    if progress >= 1.0 {
        return line;
    }
    if progress <= 0.0 {
        return Line::default();
    }
    let shift = ((1.0 - progress) * ENTRANCE_SLIDE_COLS as f32).round() as usize;
    let mut spans = Vec::with_capacity(line.spans.len() + 1);
    spans.push(Span::raw(" ".repeat(shift)));
    spans.extend(
        line.spans
            .into_iter()
            .map(|s| s.patch_style(Style::default().add_modifier(Modifier::DIM))),
    );
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn compose_default(width: u16) -> Page {
        let ctx = RenderContext::new(LayoutContext::new(width, 40), 0);
        compose(&data::portfolio(), &PortfolioState::new(), &ctx)
    }

    #[test]
    fn test_sections_in_page_order() {
        let page = compose_default(100);
        let ids: Vec<SectionId> = page.sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL);
        for pair in page.sections.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_targets_land_inside_their_section() {
        let page = compose_default(100);
        for target in &page.targets {
            assert_eq!(page.section_at(target.row), Some(target.section));
            assert!(target.col >= GUTTER_WIDTH);
        }
    }

    #[test]
    fn test_footer_is_last_line() {
        let page = compose_default(100);
        assert!(page.text().last().unwrap().contains(FOOTER_TEXT));
        assert_eq!(page.section_at(page.height() - 1), None);
    }

    #[test]
    fn test_titles_follow_section_order() {
        let text = compose_default(100).text().join("\n");
        let positions: Vec<usize> = SectionId::ALL
            .iter()
            .filter_map(|id| id.title())
            .map(|title| text.find(&format!("── {title} ")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_entrance_delay_increases_with_index() {
        let delays: Vec<u64> = (0..SectionId::ALL.len())
            .map(|i| Entrance::for_index(i).delay_ms)
            .collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_entrance_progress() {
        let entrance = Entrance::for_index(2);
        assert_eq!(entrance.progress(0), 0.0);
        assert_eq!(entrance.progress(200), 0.0);
        let mid = entrance.progress(450);
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(entrance.progress(700), 1.0);
        assert_eq!(entrance.progress(u64::MAX), 1.0);
    }

    #[test]
    fn test_apply_entrance_keeps_final_line() {
        let line = Line::from("Education");
        assert_eq!(apply_entrance(line.clone(), 1.0), line);
        assert_eq!(apply_entrance(line.clone(), 0.0).width(), 0);
        let sliding = apply_entrance(line, 0.5);
        assert!(sliding.to_string().ends_with("Education"));
        assert!(sliding.to_string().starts_with(' '));
    }
}
