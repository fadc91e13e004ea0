//! Single-expansion accordion state.

/// Which entry of a list is expanded, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandState {
    expanded: Option<usize>,
}

impl ExpandState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Tap entry `index` of a list with `len` entries.
    ///
    /// Tapping the expanded entry collapses it; tapping any other entry
    /// expands that one instead. Indices outside the list are ignored.
    /// Returns whether the state changed.
    pub fn toggle(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        self.expanded = if self.is_expanded(index) {
            None
        } else {
            Some(index)
        };
        true
    }
}
