//! Category filter chips.

use crate::models::Category;

/// Selected filter chip; `None` is the "All" chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState<C: Category> {
    selected: Option<C>,
}

impl<C: Category> Default for FilterState<C> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<C: Category> FilterState<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<C> {
        self.selected
    }

    /// Tap a chip: `Some(category)` selects it, `None` is "All".
    pub fn select(&mut self, chip: Option<C>) {
        self.selected = chip;
    }

    pub fn matches(&self, category: C) -> bool {
        self.selected.map_or(true, |selected| selected == category)
    }

    /// The entries that pass the filter, in table order.
    pub fn apply<'a, T>(&self, items: &'a [T], category: impl Fn(&T) -> C) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(category(*item))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CertificationCategory;

    #[test]
    fn test_all_matches_everything() {
        let filter = FilterState::<CertificationCategory>::new();
        assert!(CertificationCategory::ALL.iter().all(|c| filter.matches(*c)));
    }

    #[test]
    fn test_select_then_all_restores() {
        let items = [
            CertificationCategory::Technical,
            CertificationCategory::Analytics,
            CertificationCategory::Technical,
        ];
        let mut filter = FilterState::new();
        filter.select(Some(CertificationCategory::Technical));
        assert_eq!(filter.apply(&items, |c| *c).len(), 2);
        filter.select(None);
        assert_eq!(filter.apply(&items, |c| *c).len(), 3);
    }
}
