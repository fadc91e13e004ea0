//! One renderer per portfolio section.
//!
//! Each `render` is a pure function of the section's table, its interaction
//! state and the [`RenderContext`](super::page::RenderContext); derived
//! counts are recomputed on every call.

pub mod certifications;
pub mod education;
pub mod experience;
pub mod header;
pub mod projects;
pub mod publications;
pub mod skills;
pub mod summary;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::components::{icon, overflow, tag};
use super::helpers::{clamp_lines, wrap_text};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_TEXT, COLOR_VERIFIED};
use crate::derivation::{tag_preview, Glyph};

/// Indent of entry details under their title.
pub const DETAIL_INDENT: usize = 4;
/// Collapsed entries show at most this many title lines.
pub const COLLAPSED_TITLE_LINES: usize = 2;
/// Collapsed entries show at most this many description lines.
pub const COLLAPSED_DESCRIPTION_LINES: usize = 3;

fn indent() -> Span<'static> {
    Span::raw(" ".repeat(DETAIL_INDENT))
}

/// `▸ ◆ Title` (or `▾` when expanded), wrapped; clamped while collapsed.
pub(crate) fn entry_title(
    glyph: Glyph,
    title: &str,
    suffix: Option<Span<'static>>,
    expanded: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let marker = if expanded { "▾ " } else { "▸ " };
    let wrapped = wrap_text(title, width.saturating_sub(DETAIL_INDENT));
    let wrapped = if expanded {
        wrapped
    } else {
        clamp_lines(wrapped, COLLAPSED_TITLE_LINES, width.saturating_sub(DETAIL_INDENT))
    };
    let title_style = Style::default()
        .fg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD);

    let last = wrapped.len().saturating_sub(1);
    let mut suffix = suffix;
    wrapped
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let mut spans = if i == 0 {
                vec![
                    Span::styled(marker, Style::default().fg(COLOR_DIM)),
                    icon(glyph),
                    Span::raw(" "),
                ]
            } else {
                vec![indent()]
            };
            spans.push(Span::styled(text, title_style));
            if i == last {
                if let Some(suffix) = suffix.take() {
                    spans.push(Span::raw(" "));
                    spans.push(suffix);
                }
            }
            Line::from(spans)
        })
        .collect()
}

/// Indented spans on one line.
pub(crate) fn detail_line(spans: Vec<Span<'static>>) -> Line<'static> {
    let mut line = vec![indent()];
    line.extend(spans);
    Line::from(line)
}

/// Indented, wrapped description; clamped while collapsed.
pub(crate) fn description(text: &str, expanded: bool, width: usize) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(DETAIL_INDENT);
    let wrapped = wrap_text(text, inner);
    let wrapped = if expanded {
        wrapped
    } else {
        clamp_lines(wrapped, COLLAPSED_DESCRIPTION_LINES, inner)
    };
    wrapped
        .into_iter()
        .map(|text| detail_line(vec![Span::styled(text, Style::default().fg(COLOR_TEXT))]))
        .collect()
}

/// Tag spans for the preview (or the whole list when expanded).
pub(crate) fn tag_spans(tags: &[&'static str], expanded: bool) -> Vec<Span<'static>> {
    let preview = tag_preview(tags, expanded);
    let mut spans: Vec<Span<'static>> = preview.shown.iter().map(|t| tag(t)).collect();
    if preview.hidden > 0 {
        spans.push(overflow(preview.hidden));
    }
    spans
}

/// The expanded-only achievement line.
pub(crate) fn achievement(text: &str, width: usize) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(DETAIL_INDENT + 2);
    wrap_text(text, inner)
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let lead = if i == 0 { "★ " } else { "  " };
            detail_line(vec![
                Span::styled(lead, Style::default().fg(COLOR_VERIFIED)),
                Span::styled(text, Style::default().fg(COLOR_TEXT)),
            ])
        })
        .collect()
}

/// `Label value` pair for stats rows.
pub(crate) fn stat(label: &str, value: impl ToString) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("{label} "), Style::default().fg(COLOR_DIM)),
        Span::styled(
            value.to_string(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
    ]
}

/// Stats joined with ` · `.
pub(crate) fn stats_line(stats: Vec<Vec<Span<'static>>>) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, stat) in stats.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(COLOR_DIM)));
        }
        spans.extend(stat);
    }
    Line::from(spans)
}

/// `"soft skills"` to `"Soft Skills"`.
pub(crate) fn title_case(label: &str) -> String {
    label
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub(crate) fn dim(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(COLOR_DIM))
}

/// Message shown in place of an empty table.
pub(crate) fn empty_notice(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
    ))
}
