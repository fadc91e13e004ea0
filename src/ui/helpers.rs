//! Text measuring, wrapping and clamping.
//!
//! All widths are display columns measured with `unicode-width`, so CJK and
//! other wide glyphs wrap where the terminal actually draws them.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const ELLIPSIS: char = '…';

/// Split a single word into chunks of at most `width` columns.
fn split_to_width(word: &str, width: usize) -> Vec<String> {
    if word.width() <= width {
        return vec![word.to_string()];
    }
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = 0;
    for c in word.chars() {
        let c_width = c.width().unwrap_or(0);
        if chunk_width + c_width > width && !chunk.is_empty() {
            chunks.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk.push(c);
        chunk_width += c_width;
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}

/// Word-wrap plain text. Empty or all-whitespace text yields no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        for piece in split_to_width(word, width) {
            let piece_width = piece.width();
            if current_width > 0 && current_width + 1 + piece_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(&piece);
            current_width += piece_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Word-wrap styled segments into lines.
///
/// Adjacent segments without whitespace between them stay glued, so a
/// highlighted phrase followed by a comma does not gain a space.
pub fn wrap_segments(segments: &[(&str, Style)], width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut line_width = 0;
    let mut open_word = false;

    for (text, style) in segments {
        let mut glue = open_word && !text.starts_with(char::is_whitespace);
        for word in text.split_whitespace() {
            for piece in split_to_width(word, width) {
                let piece_width = piece.width();
                let gap = usize::from(line_width > 0 && !glue);
                if line_width > 0 && line_width + gap + piece_width > width {
                    lines.push(Line::from(std::mem::take(&mut spans)));
                    line_width = 0;
                } else if gap == 1 {
                    spans.push(Span::raw(" "));
                    line_width += 1;
                }
                spans.push(Span::styled(piece, *style));
                line_width += piece_width;
                glue = false;
            }
        }
        if !text.trim().is_empty() {
            open_word = !text.ends_with(char::is_whitespace);
        }
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

/// Cut a string to `width` columns, ending in an ellipsis when cut.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    let budget = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let c_width = c.width().unwrap_or(0);
        if used + c_width > budget {
            break;
        }
        out.push(c);
        used += c_width;
    }
    if width > 0 {
        out.push(ELLIPSIS);
    }
    out
}

/// Keep at most `max` lines; a cut is marked with an ellipsis on the last
/// kept line, which still fits in `width`.
pub fn clamp_lines(mut lines: Vec<String>, max: usize, width: usize) -> Vec<String> {
    if lines.len() <= max {
        return lines;
    }
    lines.truncate(max);
    if let Some(last) = lines.last_mut() {
        let mut marked = truncate_to_width(last, width.saturating_sub(1));
        if !marked.ends_with(ELLIPSIS) {
            marked.push(ELLIPSIS);
        }
        *last = marked;
    }
    lines
}

/// Spaces to pad `s` out to `width` columns.
pub fn padding_for(s: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(s.width()))
}
