//! Display attribute lookups.
//!
//! Every function here maps a categorical key (or a score string) to an icon
//! name and/or a hex color token. Keys outside the known set never fail:
//! each table carries its own fallback pair.

use crate::models::Category;

/// Hex color tokens shared by all lookups.
pub mod palette {
    pub const INDIGO: &str = "#6366F1";
    pub const VIOLET: &str = "#8B5CF6";
    pub const PURPLE: &str = "#7C3AED";
    pub const CYAN: &str = "#06B6D4";
    pub const BLUE: &str = "#3B82F6";
    pub const OCEAN: &str = "#0066CC";
    pub const EMERALD: &str = "#10B981";
    pub const AMBER: &str = "#F59E0B";
    pub const RED: &str = "#EF4444";
    pub const GOLD: &str = "#FFD700";
    /// Neutral gray used whenever a key is not recognized.
    pub const SLATE: &str = "#6B7280";
}

use palette::*;

/// Icon identifier plus color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub icon: &'static str,
    pub color: &'static str,
}

impl Glyph {
    pub const fn new(icon: &'static str, color: &'static str) -> Self {
        Self { icon, color }
    }
}

fn lookup<T: Copy>(table: &[(&str, T)], key: &str, fallback: T) -> T {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(fallback)
}

// ============================================================================
// Education
// ============================================================================

const LEVEL_ICONS: &[(&str, Glyph)] = &[
    ("undergraduate", Glyph::new("school", INDIGO)),
    ("secondary", Glyph::new("book", VIOLET)),
    ("primary", Glyph::new("menu-book", CYAN)),
];

pub const LEVEL_ICON_FALLBACK: Glyph = Glyph::new("school", INDIGO);

pub fn level_icon(level: &str) -> Glyph {
    lookup(LEVEL_ICONS, level, LEVEL_ICON_FALLBACK)
}

/// Color band of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Top,
    Mid,
    Low,
}

impl ScoreTier {
    pub fn color(&self) -> &'static str {
        match self {
            ScoreTier::Top => EMERALD,
            ScoreTier::Mid => AMBER,
            ScoreTier::Low => SLATE,
        }
    }
}

/// Values at or below this are read on the 10-point GPA scale, values above
/// it as percentages.
pub const GPA_SCALE_MAX: f64 = 10.0;

/// Extract the leading decimal number from a score string.
///
/// Every character that is neither an ASCII digit nor `.` is dropped, then
/// the longest `digits[.digits]` prefix of what remains is parsed. Returns
/// `None` when no digit survives.
pub fn parse_score(score: &str) -> Option<f64> {
    let stripped: String = score
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in stripped.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        } else {
            seen_digit = true;
        }
        end = i + 1;
    }

    if !seen_digit {
        return None;
    }
    stripped[..end].trim_end_matches('.').parse().ok()
}

/// Tier of a score string; unparseable input is the lowest tier.
///
/// GPA-like values use 8.0/7.0 and percentage-like values use 85/75.
pub fn score_tier(score: &str) -> ScoreTier {
    let Some(value) = parse_score(score) else {
        return ScoreTier::Low;
    };
    let (top, mid) = if value <= GPA_SCALE_MAX {
        (8.0, 7.0)
    } else {
        (85.0, 75.0)
    };
    if value >= top {
        ScoreTier::Top
    } else if value >= mid {
        ScoreTier::Mid
    } else {
        ScoreTier::Low
    }
}

pub fn score_color(score: &str) -> &'static str {
    score_tier(score).color()
}

// ============================================================================
// Experience
// ============================================================================

const COMPANY_ICONS: &[(&str, Glyph)] = &[
    ("infosys", Glyph::new("business", OCEAN)),
    ("elite softwares", Glyph::new("computer", PURPLE)),
];

pub const COMPANY_ICON_FALLBACK: Glyph = Glyph::new("work", INDIGO);

/// Company names are matched case-insensitively.
pub fn company_icon(company: &str) -> Glyph {
    lookup(COMPANY_ICONS, &company.to_lowercase(), COMPANY_ICON_FALLBACK)
}

const EXPERIENCE_TYPE_COLORS: &[(&str, &str)] = &[
    ("internship", AMBER),
    ("fulltime", EMERALD),
    ("contract", VIOLET),
];

pub fn experience_type_color(kind: &str) -> &'static str {
    lookup(EXPERIENCE_TYPE_COLORS, kind, SLATE)
}

// ============================================================================
// Projects
// ============================================================================

const PROJECT_CATEGORY_ICONS: &[(&str, Glyph)] = &[
    ("web", Glyph::new("language", BLUE)),
    ("data", Glyph::new("analytics", EMERALD)),
    ("mobile", Glyph::new("phone-android", VIOLET)),
    ("desktop", Glyph::new("computer", AMBER)),
];

pub const PROJECT_CATEGORY_FALLBACK: Glyph = Glyph::new("code", SLATE);

pub fn project_category_icon(category: &str) -> Glyph {
    lookup(PROJECT_CATEGORY_ICONS, category, PROJECT_CATEGORY_FALLBACK)
}

const PROJECT_STATUS_COLORS: &[(&str, &str)] = &[
    ("completed", EMERALD),
    ("in-progress", AMBER),
    ("planned", SLATE),
];

pub fn project_status_color(status: &str) -> &'static str {
    lookup(PROJECT_STATUS_COLORS, status, SLATE)
}

// ============================================================================
// Publications
// ============================================================================

const PUBLICATION_TYPE_ICONS: &[(&str, Glyph)] = &[
    ("journal", Glyph::new("article", BLUE)),
    ("conference", Glyph::new("event", EMERALD)),
    ("preprint", Glyph::new("description", AMBER)),
    ("book", Glyph::new("menu-book", VIOLET)),
];

pub const PUBLICATION_TYPE_FALLBACK: Glyph = Glyph::new("description", SLATE);

pub fn publication_type_icon(kind: &str) -> Glyph {
    lookup(PUBLICATION_TYPE_ICONS, kind, PUBLICATION_TYPE_FALLBACK)
}

const PUBLICATION_STATUS_COLORS: &[(&str, &str)] = &[
    ("published", EMERALD),
    ("accepted", BLUE),
    ("under-review", AMBER),
    ("draft", SLATE),
];

pub fn publication_status_color(status: &str) -> &'static str {
    lookup(PUBLICATION_STATUS_COLORS, status, SLATE)
}

const IMPACT_COLORS: &[(&str, &str)] = &[("high", RED), ("medium", AMBER), ("low", EMERALD)];

/// A missing impact gets the fallback color.
pub fn impact_color(impact: Option<&str>) -> &'static str {
    impact.map_or(SLATE, |key| lookup(IMPACT_COLORS, key, SLATE))
}

// ============================================================================
// Certifications
// ============================================================================

const CERTIFICATION_CATEGORY_ICONS: &[(&str, Glyph)] = &[
    ("technical", Glyph::new("code", BLUE)),
    ("analytics", Glyph::new("analytics", EMERALD)),
    ("management", Glyph::new("business", VIOLET)),
    ("soft-skills", Glyph::new("people", AMBER)),
];

pub const CERTIFICATION_CATEGORY_FALLBACK: Glyph = Glyph::new("school", SLATE);

pub fn certification_category_icon(category: &str) -> Glyph {
    lookup(
        CERTIFICATION_CATEGORY_ICONS,
        category,
        CERTIFICATION_CATEGORY_FALLBACK,
    )
}

pub fn certification_category_color(category: &str) -> &'static str {
    certification_category_icon(category).color
}

const CERTIFICATION_LEVEL_COLORS: &[(&str, &str)] = &[
    ("beginner", EMERALD),
    ("intermediate", AMBER),
    ("advanced", RED),
];

pub fn certification_level_color(level: &str) -> &'static str {
    lookup(CERTIFICATION_LEVEL_COLORS, level, SLATE)
}

// ============================================================================
// Skills
// ============================================================================

const SKILL_GROUP_ICONS: &[(&str, Glyph)] = &[
    ("programming-languages", Glyph::new("code", BLUE)),
    ("frameworks-libraries", Glyph::new("layers", EMERALD)),
    ("tools", Glyph::new("build", VIOLET)),
    ("soft-skills", Glyph::new("people", RED)),
    ("languages", Glyph::new("language", CYAN)),
];

pub const SKILL_GROUP_FALLBACK: Glyph = Glyph::new("category", SLATE);

pub fn skill_group_icon(group: &str) -> Glyph {
    lookup(SKILL_GROUP_ICONS, group, SKILL_GROUP_FALLBACK)
}

// ============================================================================
// Tag previews
// ============================================================================

/// Tags shown on a collapsed card before the `+N` chip.
pub const PREVIEW_TAGS: usize = 3;

/// The visible slice of a tag list and how many were held back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPreview<'a> {
    pub shown: &'a [&'static str],
    pub hidden: usize,
}

pub fn tag_preview<'a>(tags: &'a [&'static str], expanded: bool) -> TagPreview<'a> {
    if expanded || tags.len() <= PREVIEW_TAGS {
        TagPreview {
            shown: tags,
            hidden: 0,
        }
    } else {
        TagPreview {
            shown: &tags[..PREVIEW_TAGS],
            hidden: tags.len() - PREVIEW_TAGS,
        }
    }
}

/// Convenience for typed keys: `glyph_of(ProjectCategory::Web, project_category_icon)`.
pub fn glyph_of<C: Category>(value: C, f: fn(&str) -> Glyph) -> Glyph {
    f(value.key())
}
