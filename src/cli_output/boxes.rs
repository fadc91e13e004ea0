//! Simple line-based text output utilities.
//!
//! Everything writes into a `String` so the exporters stay testable; the
//! caller decides where the text goes.

use std::fmt::Write;

use crate::ui::helpers::wrap_text;

/// Line width for separators and wrapping.
pub const LINE_WIDTH: usize = 60;

/// The main header.
///
/// ```text
/// SUJAL KAMANNA
/// ════════════════════════════════════════════════════════════
/// ```
pub fn push_header(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "═".repeat(LINE_WIDTH));
}

/// The start of a section.
///
/// ```text
/// EDUCATION
/// ────────────────────────────────────────────────────────────
/// ```
pub fn push_section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", title.to_uppercase());
    let _ = writeln!(out, "{}", "─".repeat(LINE_WIDTH));
}

/// An entry title with its leading icon.
///
/// ```text
///   • Data Analyst Intern
/// ```
pub fn push_item(out: &mut String, icon: &str, text: &str) {
    let _ = writeln!(out, "  {} {}", icon, text);
}

/// Wrapped detail text under an item.
pub fn push_detail(out: &mut String, text: &str) {
    for line in wrap_text(text, LINE_WIDTH - 4) {
        let _ = writeln!(out, "    {}", line);
    }
}

/// `label: value` pairs, aligned on the colon.
///
/// ```text
///   Published:  2
///   Citations:  0
/// ```
pub fn push_summary(out: &mut String, rows: &[(&str, String)]) {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in rows {
        let _ = writeln!(out, "  {:<width$} {}", format!("{}:", label), value, width = width + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_section() {
        let mut out = String::new();
        push_header(&mut out, "NAME");
        push_section(&mut out, "Skills");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "NAME");
        assert_eq!(lines[1].chars().count(), LINE_WIDTH);
        assert_eq!(lines[3], "SKILLS");
    }

    #[test]
    fn test_detail_wraps() {
        let mut out = String::new();
        push_detail(&mut out, &"word ".repeat(30));
        assert!(out.lines().count() > 1);
        assert!(out.lines().all(|l| l.starts_with("    ") && l.len() <= LINE_WIDTH));
    }

    #[test]
    fn test_summary_alignment() {
        let mut out = String::new();
        push_summary(&mut out, &[("Skills", "61".into()), ("Categories", "5".into())]);
        assert_eq!(out, "  Skills:     61\n  Categories: 5\n");
    }
}
