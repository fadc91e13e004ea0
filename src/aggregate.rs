//! Summary statistics over the portfolio tables.
//!
//! All functions are single pass and side-effect free; callers recompute
//! them on every render. Empty tables produce zero (or `"N/A"` for the
//! textual ones).

use std::collections::HashSet;

use crate::models::{
    Category, Certification, CertificationCategory, EducationEntry, Project, ProjectStatus,
    Publication, PublicationStatus, SkillCategory,
};

/// Placeholder for textual summaries of an empty table.
pub const NOT_AVAILABLE: &str = "N/A";

pub fn count_where<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|item| predicate(*item)).count()
}

/// Sum of an optional numeric field, absent values counting as zero.
pub fn sum_by<T>(items: &[T], field: impl Fn(&T) -> Option<u32>) -> u64 {
    items.iter().map(|item| u64::from(field(item).unwrap_or(0))).sum()
}

/// Size of the union of every entry's tag list.
pub fn unique_tag_count<'a, T: 'a>(
    items: &'a [T],
    tags: impl Fn(&'a T) -> &'a [&'static str],
) -> usize {
    items
        .iter()
        .flat_map(|item| tags(item).iter().copied())
        .collect::<HashSet<&str>>()
        .len()
}

/// Number of entries per category member, in `C::ALL` order.
pub fn category_counts<T, C: Category>(items: &[T], category: impl Fn(&T) -> C) -> Vec<(C, usize)> {
    let mut counts: Vec<(C, usize)> = C::ALL.iter().map(|c| (*c, 0)).collect();
    for item in items {
        let key = category(item);
        if let Some(slot) = counts.iter_mut().find(|(c, _)| *c == key) {
            slot.1 += 1;
        }
    }
    counts
}

// ============================================================================
// Section-specific summaries
// ============================================================================

pub fn completed_projects(projects: &[Project]) -> usize {
    count_where(projects, |p| p.status == ProjectStatus::Completed)
}

pub fn featured_projects(projects: &[Project]) -> usize {
    count_where(projects, |p| p.featured)
}

pub fn project_technology_count(projects: &[Project]) -> usize {
    unique_tag_count(projects, |p| p.technologies)
}

pub fn published_count(publications: &[Publication]) -> usize {
    count_where(publications, |p| p.status == PublicationStatus::Published)
}

pub fn total_citations(publications: &[Publication]) -> u64 {
    sum_by(publications, |p| p.citations)
}

/// Largest `h` such that `h` publications have at least `h` citations each.
pub fn h_index(publications: &[Publication]) -> usize {
    let mut citations: Vec<u32> = publications
        .iter()
        .map(|p| p.citations.unwrap_or(0))
        .collect();
    citations.sort_unstable_by(|a, b| b.cmp(a));
    citations
        .iter()
        .enumerate()
        .take_while(|(i, c)| **c as usize > *i)
        .count()
}

pub fn certification_counts(certifications: &[Certification]) -> Vec<(CertificationCategory, usize)> {
    category_counts(certifications, |c| c.category)
}

pub fn total_skills(categories: &[SkillCategory]) -> usize {
    categories.iter().map(|c| c.skills.len()).sum()
}

pub fn certified_skills(categories: &[SkillCategory]) -> usize {
    categories.iter().map(SkillCategory::certified_count).sum()
}

/// Details line of the most advanced entry, or [`NOT_AVAILABLE`].
pub fn highest_qualification(education: &[EducationEntry]) -> &'static str {
    education
        .iter()
        .max_by_key(|e| e.level.rank())
        .map_or(NOT_AVAILABLE, |e| e.details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::models::{ProjectCategory, PublicationType};

    fn project(technologies: &'static [&'static str], status: ProjectStatus) -> Project {
        Project {
            title: "p",
            description: "",
            technologies,
            category: ProjectCategory::Web,
            status,
            github_url: None,
            live_url: None,
            featured: false,
        }
    }

    fn publication(citations: Option<u32>) -> Publication {
        Publication {
            title: "t",
            link_text: "View Paper",
            link_url: "https://example.com",
            source: "s",
            date: "2025",
            description: "",
            kind: PublicationType::Journal,
            status: PublicationStatus::Published,
            impact: None,
            citations,
            doi: None,
            keywords: &[],
        }
    }

    #[test]
    fn test_empty_tables_are_neutral() {
        assert_eq!(completed_projects(&[]), 0);
        assert_eq!(total_citations(&[]), 0);
        assert_eq!(project_technology_count(&[]), 0);
        assert_eq!(h_index(&[]), 0);
        assert_eq!(total_skills(&[]), 0);
        assert_eq!(highest_qualification(&[]), NOT_AVAILABLE);
        assert!(certification_counts(&[]).iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn test_unique_tags_is_set_union() {
        let projects = [
            project(&["Python", "Django"], ProjectStatus::Completed),
            project(&["Python", "SQL"], ProjectStatus::Planned),
        ];
        assert_eq!(project_technology_count(&projects), 3);
        assert_eq!(completed_projects(&projects), 1);
    }

    #[test]
    fn test_missing_citations_count_as_zero() {
        let pubs = [publication(Some(0)), publication(None)];
        assert_eq!(total_citations(&pubs), 0);
        assert_eq!(published_count(&pubs), 2);
    }

    #[test]
    fn test_h_index() {
        let pubs = [
            publication(Some(10)),
            publication(Some(3)),
            publication(Some(2)),
            publication(None),
        ];
        assert_eq!(h_index(&pubs), 2);
        assert_eq!(h_index(&[publication(Some(0))]), 0);
    }

    #[test]
    fn test_category_counts_follow_declaration_order() {
        let counts = certification_counts(data::CERTIFICATIONS);
        let keys: Vec<_> = counts.iter().map(|(c, _)| *c).collect();
        assert_eq!(keys, CertificationCategory::ALL);
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), data::CERTIFICATIONS.len());
    }

    #[test]
    fn test_shipped_summaries() {
        assert_eq!(completed_projects(data::PROJECTS), 3);
        assert_eq!(featured_projects(data::PROJECTS), 2);
        assert_eq!(project_technology_count(data::PROJECTS), 11);
        assert_eq!(published_count(data::PUBLICATIONS), 2);
        assert_eq!(total_citations(data::PUBLICATIONS), 0);
        assert_eq!(highest_qualification(data::EDUCATION), "BE in Computer Science");
        assert_eq!(total_skills(data::SKILLS), 61);
        assert_eq!(certified_skills(data::SKILLS), 12);
    }
}
