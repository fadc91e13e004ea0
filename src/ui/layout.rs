//! Responsive layout.
//!
//! `LayoutContext` carries the size of the page viewport and answers the few
//! layout questions the section renderers ask: how wide the text column is
//! and how many grid columns fit.

// ============================================================================
// Breakpoints
// ============================================================================

pub mod breakpoints {
    /// Below this the page drops to one column and short labels
    pub const SM_WIDTH: u16 = 80;
    /// Text column stops growing past this
    pub const MAX_CONTENT_WIDTH: u16 = 100;
    /// Columns reserved for the focus marker
    pub const GUTTER_WIDTH: u16 = 2;
    /// Right-hand breathing room
    pub const RIGHT_MARGIN: u16 = 2;
}

// ============================================================================
// Layout Context
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Width available to section text, after the gutter and margin.
    ///
    /// Never below 10 so wrapping always makes progress.
    pub fn content_width(&self) -> usize {
        self.width
            .saturating_sub(breakpoints::GUTTER_WIDTH + breakpoints::RIGHT_MARGIN)
            .min(breakpoints::MAX_CONTENT_WIDTH)
            .max(10) as usize
    }

    /// Columns in the certification grid.
    pub fn grid_columns(&self) -> usize {
        if self.is_narrow() {
            1
        } else {
            2
        }
    }

    /// Width of one grid cell, including its one-column separator.
    pub fn grid_cell_width(&self) -> usize {
        let columns = self.grid_columns();
        (self.content_width() + 1) / columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_width_bounds() {
        assert_eq!(LayoutContext::new(60, 20).content_width(), 56);
        assert_eq!(LayoutContext::new(300, 20).content_width(), 100);
        assert_eq!(LayoutContext::new(4, 20).content_width(), 10);
    }

    #[test]
    fn test_grid_columns_follow_breakpoint() {
        assert_eq!(LayoutContext::new(79, 24).grid_columns(), 1);
        assert_eq!(LayoutContext::new(80, 24).grid_columns(), 2);
        assert_eq!(LayoutContext::new(80, 24).grid_cell_width(), 38);
    }
}
