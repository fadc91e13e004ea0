//! Colors and glyphs for the portfolio UI.
//!
//! Display attributes come out of `crate::derivation` as hex tokens and icon
//! names; this module turns them into terminal colors and symbols.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Dark Theme
// ============================================================================

/// Card borders and rules
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Focus marker and active chips
pub const COLOR_ACCENT: Color = Color::White;

/// Name in the header card
pub const COLOR_HEADER: Color = Color::White;

/// Body text
pub const COLOR_TEXT: Color = Color::Gray;

/// Secondary info (locations, dates, counters)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Highlighted phrases in the summary
pub const COLOR_HIGHLIGHT: Color = Color::Rgb(99, 102, 241); // indigo #6366F1

/// Verified and certified marks
pub const COLOR_VERIFIED: Color = Color::Rgb(16, 185, 129); // emerald #10B981

/// Notice bar background
pub const COLOR_NOTICE_BG: Color = Color::Rgb(40, 20, 20);

/// Edit frame in the summary card
pub const COLOR_EDIT_FRAME: Color = Color::Rgb(245, 158, 11); // amber #F59E0B

// ============================================================================
// Token Conversion
// ============================================================================

/// `#RRGGBB` to an RGB color; anything unparseable renders dim.
pub fn hex_color(token: &str) -> Color {
    token.parse::<Color>().unwrap_or(COLOR_DIM)
}

/// Bold text in the given token color.
pub fn badge_style(token: &str) -> Style {
    Style::default()
        .fg(hex_color(token))
        .add_modifier(Modifier::BOLD)
}

const ICON_SYMBOLS: &[(&str, &str)] = &[
    ("school", "◆"),
    ("book", "◇"),
    ("menu-book", "▤"),
    ("work", "■"),
    ("business", "▣"),
    ("computer", "▦"),
    ("code", "λ"),
    ("phone-android", "▯"),
    ("article", "¶"),
    ("event", "◎"),
    ("description", "≡"),
    ("analytics", "▲"),
    ("people", "☺"),
    ("layers", "▥"),
    ("build", "⚒"),
    ("category", "●"),
    ("language", "◍"),
];

/// Terminal symbol for an icon name.
pub fn icon_symbol(icon: &str) -> &'static str {
    ICON_SYMBOLS
        .iter()
        .find(|(name, _)| *name == icon)
        .map(|(_, symbol)| *symbol)
        .unwrap_or("•")
}
