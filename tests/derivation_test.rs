//! Mapping functions: every table key, its fallback, and score tiers.

use folio::derivation::{self, palette};
use folio::models::{Category, CertificationCategory, ProjectCategory, PublicationType, SkillGroup};

#[test]
fn test_every_known_key_has_a_non_fallback_icon() {
    for category in ProjectCategory::ALL {
        assert_ne!(
            derivation::project_category_icon(category.key()),
            derivation::PROJECT_CATEGORY_FALLBACK,
            "{:?}",
            category
        );
    }
    for kind in PublicationType::ALL {
        assert_ne!(derivation::publication_type_icon(kind.key()).color, palette::SLATE);
    }
    for category in CertificationCategory::ALL {
        assert_ne!(derivation::certification_category_color(category.key()), palette::SLATE);
    }
    for group in SkillGroup::ALL {
        assert_ne!(derivation::skill_group_icon(group.key()), derivation::SKILL_GROUP_FALLBACK);
    }
}

#[test]
fn test_unknown_keys_fall_back() {
    assert_eq!(derivation::project_status_color("archived"), palette::SLATE);
    assert_eq!(derivation::experience_type_color(""), palette::SLATE);
    assert_eq!(derivation::impact_color(None), palette::SLATE);
    assert_eq!(derivation::impact_color(Some("extreme")), palette::SLATE);
    assert_eq!(derivation::company_icon("Acme"), derivation::COMPANY_ICON_FALLBACK);
}

#[test]
fn test_company_lookup_ignores_case() {
    assert_eq!(
        derivation::company_icon("INFOSYS"),
        derivation::company_icon("infosys")
    );
    assert_ne!(derivation::company_icon("Elite Softwares"), derivation::COMPANY_ICON_FALLBACK);
}

#[test]
fn test_score_colors_on_both_scales() {
    assert_eq!(derivation::score_color("CGPA: 8.06"), palette::EMERALD);
    assert_eq!(derivation::score_color("7.2 CGPA"), palette::AMBER);
    assert_eq!(derivation::score_color("87.33%"), palette::EMERALD);
    assert_eq!(derivation::score_color("78%"), palette::AMBER);
    assert_eq!(derivation::score_color("60%"), palette::SLATE);
    assert_eq!(derivation::score_color("Pass"), palette::SLATE);
}

#[test]
fn test_parse_score_takes_leading_number() {
    assert_eq!(derivation::parse_score("CGPA: 8.06"), Some(8.06));
    assert_eq!(derivation::parse_score("87.33%"), Some(87.33));
    assert_eq!(derivation::parse_score("1.2.3"), Some(1.2));
    assert_eq!(derivation::parse_score("n/a"), None);
}

#[test]
fn test_tag_preview_holds_back_overflow() {
    let tags = ["a", "b", "c", "d", "e"];
    let preview = derivation::tag_preview(&tags, false);
    assert_eq!(preview.shown, &["a", "b", "c"]);
    assert_eq!(preview.hidden, 2);

    let expanded = derivation::tag_preview(&tags, true);
    assert_eq!(expanded.shown.len(), 5);
    assert_eq!(expanded.hidden, 0);

    assert_eq!(derivation::tag_preview(&tags[..3], false).hidden, 0);
}
