//! Summary statistics over custom and shipped tables.

use folio::aggregate;
use folio::data;
use folio::models::{Publication, PublicationStatus, PublicationType};

fn publication(status: PublicationStatus, citations: Option<u32>) -> Publication {
    Publication {
        title: "Paper",
        link_text: "View Paper",
        link_url: "https://example.com/paper.pdf",
        source: "Journal",
        date: "2025",
        description: "",
        kind: PublicationType::Journal,
        status,
        impact: None,
        citations,
        doi: None,
        keywords: &[],
    }
}

#[test]
fn test_empty_tables_yield_zero() {
    assert_eq!(aggregate::published_count(&[]), 0);
    assert_eq!(aggregate::total_citations(&[]), 0);
    assert_eq!(aggregate::featured_projects(&[]), 0);
    assert_eq!(aggregate::certified_skills(&[]), 0);
    assert_eq!(aggregate::highest_qualification(&[]), aggregate::NOT_AVAILABLE);
}

#[test]
fn test_absent_citations_sum_as_zero() {
    let pubs = [
        publication(PublicationStatus::Published, Some(0)),
        publication(PublicationStatus::Published, None),
    ];
    assert_eq!(aggregate::total_citations(&pubs), 0);
    assert_eq!(aggregate::published_count(&pubs), 2);
}

#[test]
fn test_only_published_entries_count() {
    let pubs = [
        publication(PublicationStatus::Published, Some(4)),
        publication(PublicationStatus::Draft, Some(1)),
        publication(PublicationStatus::UnderReview, None),
    ];
    assert_eq!(aggregate::published_count(&pubs), 1);
    assert_eq!(aggregate::total_citations(&pubs), 5);
    assert_eq!(aggregate::h_index(&pubs), 1);
}

#[test]
fn test_certification_counts_cover_every_entry() {
    let counts = aggregate::certification_counts(data::CERTIFICATIONS);
    let numbers: Vec<usize> = counts.iter().map(|(_, n)| *n).collect();
    assert_eq!(numbers, vec![4, 2, 2, 2]);
}
