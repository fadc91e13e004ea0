//! Plain-text and JSON renditions of the portfolio.

use super::boxes::{push_detail, push_header, push_item, push_section, push_summary};
use crate::aggregate;
use crate::derivation::{self, glyph_of, Glyph};
use crate::error::FolioResult;
use crate::models::{Category, Portfolio};
use crate::ui::theme::icon_symbol;

fn bullet(glyph: Glyph) -> &'static str {
    icon_symbol(glyph.icon)
}

/// The whole portfolio with every entry expanded.
pub fn render_resume(portfolio: &Portfolio) -> String {
    let mut out = String::new();
    let profile = portfolio.profile;

    push_header(&mut out, profile.name);
    out.push_str(profile.headline);
    out.push('\n');
    for link in profile.links {
        push_item(&mut out, "-", link.label);
    }

    push_section(&mut out, "Profile Summary");
    push_detail(&mut out, &profile.summary_text());
    push_detail(&mut out, &format!("Key skills: {}", profile.key_skills.join(", ")));

    push_section(&mut out, "Education");
    for entry in portfolio.education {
        let icon = bullet(glyph_of(entry.level, derivation::level_icon));
        push_item(&mut out, icon, &format!("{} ({})", entry.details, entry.year));
        push_detail(&mut out, &format!("{} · {}", entry.institution, entry.location));
        push_detail(&mut out, &entry.achievement());
    }
    let (label, value) = portfolio.education_highlight;
    push_summary(
        &mut out,
        &[
            ("Highest Qualification", aggregate::highest_qualification(portfolio.education).to_string()),
            (label, value.to_string()),
        ],
    );

    push_section(&mut out, "Professional Experience");
    for job in portfolio.experience {
        let icon = bullet(derivation::company_icon(job.company));
        push_item(&mut out, icon, &format!("{} at {}", job.title, job.company));
        push_detail(&mut out, &format!("{} · {} · {}", job.duration, job.location, job.kind.label()));
        push_detail(&mut out, job.description);
        push_detail(&mut out, &format!("Skills: {}", job.skills.join(", ")));
    }
    let highlights: Vec<(&str, String)> = portfolio
        .experience_highlights
        .iter()
        .map(|(label, value)| (*label, value.to_string()))
        .collect();
    push_summary(&mut out, &highlights);

    push_section(&mut out, "Projects");
    for project in portfolio.projects {
        let icon = bullet(glyph_of(project.category, derivation::project_category_icon));
        let featured = if project.featured { " ★" } else { "" };
        push_item(&mut out, icon, &format!("{} [{}]{}", project.title, project.status.badge(), featured));
        push_detail(&mut out, project.description);
        push_detail(&mut out, &format!("Technologies: {}", project.technologies.join(", ")));
        for url in [project.github_url, project.live_url].into_iter().flatten() {
            push_detail(&mut out, url);
        }
    }
    push_summary(
        &mut out,
        &[
            ("Completed", aggregate::completed_projects(portfolio.projects).to_string()),
            ("Featured", aggregate::featured_projects(portfolio.projects).to_string()),
            ("Technologies", aggregate::project_technology_count(portfolio.projects).to_string()),
        ],
    );

    push_section(&mut out, "Publications");
    for publication in portfolio.publications {
        let icon = bullet(glyph_of(publication.kind, derivation::publication_type_icon));
        push_item(&mut out, icon, publication.title);
        push_detail(&mut out, &format!("{} · {} · {}", publication.source, publication.date, publication.status.badge()));
        push_detail(&mut out, publication.description);
        push_detail(&mut out, publication.link_url);
        if let Some(doi) = publication.doi {
            push_detail(&mut out, &format!("DOI: {}", doi));
        }
    }
    push_summary(
        &mut out,
        &[
            ("Published", aggregate::published_count(portfolio.publications).to_string()),
            ("Citations", aggregate::total_citations(portfolio.publications).to_string()),
            ("h-index", aggregate::h_index(portfolio.publications).to_string()),
        ],
    );

    push_section(&mut out, "Certifications");
    for cert in portfolio.certifications {
        let verified = if cert.verified { " ✓" } else { "" };
        push_item(
            &mut out,
            bullet(glyph_of(cert.category, derivation::certification_category_icon)),
            &format!("{}{}", cert.name, verified),
        );
        let mut meta = vec![cert.provider.to_string(), cert.level.label()];
        meta.extend(cert.year.map(str::to_string));
        meta.extend(cert.credential_id.map(|id| format!("ID: {}", id)));
        push_detail(&mut out, &meta.join(" · "));
    }

    push_section(&mut out, "Skills");
    for category in portfolio.skills {
        let names: Vec<String> = category
            .skills
            .iter()
            .map(|s| if s.certified { format!("{} ✓", s.name) } else { s.name.to_string() })
            .collect();
        push_item(
            &mut out,
            bullet(glyph_of(category.group, derivation::skill_group_icon)),
            &category.group.label(),
        );
        push_detail(&mut out, &names.join(", "));
    }
    push_summary(
        &mut out,
        &[
            ("Skills", aggregate::total_skills(portfolio.skills).to_string()),
            ("Certified", aggregate::certified_skills(portfolio.skills).to_string()),
            ("Categories", portfolio.skills.len().to_string()),
        ],
    );
    out
}

pub fn export_json(portfolio: &Portfolio) -> FolioResult<String> {
    Ok(serde_json::to_string_pretty(portfolio)?)
}
