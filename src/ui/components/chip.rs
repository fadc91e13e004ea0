//! Chips: filter and view switches, buttons and links.
//!
//! A row of radio chips reads like a radio group: `●` marks the selected one.

use ratatui::style::{Modifier, Style};

use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HIGHLIGHT, COLOR_TEXT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipKind {
    /// `● Label (n)` / `○ Label (n)`
    Radio,
    /// `[Label]`
    Button,
    /// Underlined label
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub kind: ChipKind,
    pub label: String,
    /// Label on narrow terminals
    pub short_label: String,
    pub count: Option<usize>,
    pub selected: bool,
    pub action: Option<ClickAction>,
}

impl Chip {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            kind: ChipKind::Radio,
            short_label: label.clone(),
            label,
            count: None,
            selected: false,
            action: None,
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            kind: ChipKind::Button,
            ..Self::new(label)
        }
    }

    pub fn link(label: impl Into<String>) -> Self {
        Self {
            kind: ChipKind::Link,
            ..Self::new(label)
        }
    }

    pub fn with_short_label(mut self, short_label: impl Into<String>) -> Self {
        self.short_label = short_label.into();
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn on_click(mut self, action: ClickAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Display text, e.g. `● Technical (4)`.
    pub fn text(&self, ctx: &LayoutContext) -> String {
        let label = if ctx.is_narrow() {
            &self.short_label
        } else {
            &self.label
        };
        let label = match self.count {
            Some(count) => format!("{label} ({count})"),
            None => label.clone(),
        };
        match self.kind {
            ChipKind::Radio => {
                let marker = if self.selected { '●' } else { '○' };
                format!("{marker} {label}")
            }
            ChipKind::Button => format!("[{label}]"),
            ChipKind::Link => label,
        }
    }

    pub fn style(&self) -> Style {
        if self.kind == ChipKind::Link {
            Style::default()
                .fg(COLOR_HIGHLIGHT)
                .add_modifier(Modifier::UNDERLINED)
        } else if self.selected {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else if self.action.is_some() {
            Style::default().fg(COLOR_TEXT)
        } else {
            Style::default().fg(COLOR_DIM)
        }
    }
}

/// The "All" chip followed by one chip per category, with counts.
pub fn filter_chips<C: Copy + PartialEq>(
    all_label: &str,
    total: usize,
    selected: Option<C>,
    categories: &[(C, String, usize)],
    action: impl Fn(Option<C>) -> ClickAction,
) -> Vec<Chip> {
    let mut chips = Vec::with_capacity(categories.len() + 1);
    chips.push(
        Chip::new(all_label)
            .with_short_label("All")
            .with_count(total)
            .selected(selected.is_none())
            .on_click(action(None)),
    );
    for (category, label, count) in categories {
        chips.push(
            Chip::new(label.clone())
                .with_count(*count)
                .selected(selected == Some(*category))
                .on_click(action(Some(*category))),
        );
    }
    chips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_text() {
        let ctx = LayoutContext::new(100, 40);
        let chip = Chip::new("Technical").with_count(4).selected(true);
        assert_eq!(chip.text(&ctx), "● Technical (4)");
        assert_eq!(Chip::new("Grid").text(&ctx), "○ Grid");
        assert_eq!(Chip::button("Edit").text(&ctx), "[Edit]");
        assert_eq!(Chip::link("GitHub").text(&ctx), "GitHub");
    }

    #[test]
    fn test_narrow_uses_short_label() {
        let chip = Chip::new("All Categories").with_short_label("All");
        assert_eq!(chip.text(&LayoutContext::new(60, 20)), "○ All");
        assert_eq!(chip.text(&LayoutContext::new(100, 20)), "○ All Categories");
    }

    #[test]
    fn test_filter_chips_marks_selection() {
        let categories = vec![(1u8, "One".to_string(), 2), (2u8, "Two".to_string(), 3)];
        let chips = filter_chips("All", 5, Some(2u8), &categories, |_| ClickAction::ToggleSkillView);
        assert_eq!(chips.len(), 3);
        assert!(!chips[0].selected);
        assert!(chips[2].selected);
        assert_eq!(chips[0].count, Some(5));
    }
}
