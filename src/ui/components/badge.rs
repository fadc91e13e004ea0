//! Inline badges and tags.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::derivation::Glyph;
use crate::ui::theme::{badge_style, hex_color, icon_symbol, COLOR_DIM, COLOR_TEXT};

/// `[TEXT]` in a derived color.
pub fn badge(text: &str, color: &str) -> Span<'static> {
    Span::styled(format!("[{text}]"), badge_style(color))
}

/// An icon symbol in its derived color.
pub fn icon(glyph: Glyph) -> Span<'static> {
    Span::styled(
        icon_symbol(glyph.icon).to_string(),
        Style::default().fg(hex_color(glyph.color)),
    )
}

/// `#tag` for technologies, skills and keywords.
pub fn tag(text: &str) -> Span<'static> {
    Span::styled(format!("#{text}"), Style::default().fg(COLOR_TEXT))
}

/// The `+N` chip after a collapsed tag preview.
pub fn overflow(hidden: usize) -> Span<'static> {
    Span::styled(
        format!("+{hidden}"),
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
    )
}
