//! Terminal rendering of the portfolio page.
//!
//! Each frame composes the whole page ([`page::compose`]), then draws the
//! window at the current scroll offset:
//! - section entrance (slide and fade) by section position
//! - the `▶` marker on the focused target's row
//! - hit areas for every visible target, underlined when hovered
//! - a one-row status bar with either the current notice or key hints

pub mod components;
pub mod helpers;
pub mod interaction;
pub mod layout;
pub mod page;
pub mod sections;
pub mod theme;

pub use interaction::handle_click_action;
pub use layout::LayoutContext;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::view_state::SectionId;
use page::{apply_entrance, Entrance, Page};
use theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_NOTICE_BG};

/// Gutter marker of the focused row.
pub const FOCUS_MARKER: &str = "▶ ";

const KEY_HINTS: &str = "j/k move · Tab section · Enter open · PgUp/PgDn scroll · r reset · q quit";

/// Render one frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());
    let body = chunks[0];

    let page = app.layout(body.width, body.height);
    draw_page(frame, app, &page, body);
    register_targets(frame, app, body);
    render_status_bar(frame, app, chunks[1]);
}

fn draw_page(frame: &mut Frame, app: &App, page: &Page, area: Rect) {
    let elapsed = app.elapsed_ms();
    let focused_row = app.focused_target().map(|t| t.row);

    let lines: Vec<Line<'static>> = page
        .lines
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(area.height as usize)
        .map(|(row, line)| {
            let mut line = line.clone();
            if Some(row) == focused_row {
                if let Some(gutter) = line.spans.first_mut() {
                    *gutter = Span::styled(
                        FOCUS_MARKER,
                        Style::default()
                            .fg(COLOR_ACCENT)
                            .add_modifier(Modifier::BOLD),
                    );
                }
            }
            let position = page
                .section_at(row)
                .map_or(SectionId::ALL.len(), |id| id.index());
            apply_entrance(line, Entrance::for_index(position).progress(elapsed))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Register hit areas for the visible part of every target.
///
/// Sections whose entrance has not started are drawn blank and get none.
fn register_targets(frame: &mut Frame, app: &mut App, area: Rect) {
    app.hit_registry.clear();
    let elapsed = app.elapsed_ms();
    let top = app.scroll;
    let bottom = top + area.height as usize;

    for target in &app.targets {
        if Entrance::for_index(target.section.index()).progress(elapsed) <= 0.0 {
            continue;
        }
        let first = target.row.max(top);
        let last = (target.row + target.height as usize).min(bottom);
        if first >= last {
            continue;
        }
        let x = area.x.saturating_add(target.col);
        let right = area.x.saturating_add(area.width);
        if x >= right {
            continue;
        }
        let rect = Rect::new(
            x,
            area.y + (first - top) as u16,
            target.width.min(right - x),
            (last - first) as u16,
        );
        app.hit_registry.register(rect, target.action);
    }
    app.hit_registry.refresh_hover();

    if let Some(hovered) = app.hit_registry.hovered() {
        frame
            .buffer_mut()
            .set_style(hovered.rect, Style::default().add_modifier(Modifier::UNDERLINED));
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.notice {
        Some(notice) => Line::from(vec![
            Span::styled(" ! ", Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)),
            Span::styled(notice.message.clone(), Style::default().fg(COLOR_HEADER)),
            Span::styled("  (Esc to dismiss)", Style::default().fg(COLOR_DIM)),
        ])
        .style(Style::default().bg(COLOR_NOTICE_BG)),
        None => Line::from(Span::styled(format!(" {}", KEY_HINTS), Style::default().fg(COLOR_DIM))),
    };
    frame.render_widget(Paragraph::new(line), area);
}
