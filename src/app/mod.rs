//! Application state for the TUI.
//!
//! [`App`] owns the per-section interaction state, which target has keyboard
//! focus, the scroll position and the notice bar. Its methods are split by
//! concern:
//! - `navigation` - focus movement, section jumps, scrolling, page sync
//! - `state_methods` - ticks, entrance clock, notices, terminal size
//! - `handlers` - key and mouse events

mod handlers;
mod navigation;
mod state_methods;

use crate::config::AppConfig;
use crate::data;
use crate::models::Portfolio;
use crate::traits::{ResourceOpener, SystemOpener};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::page::{PageTarget, SectionSpan};
use crate::view_state::{PortfolioState, SectionId};

/// Ephemeral message in the bottom bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    /// Tick at which the notice disappears
    pub expires_at: u64,
}

pub struct App {
    pub portfolio: Portfolio,
    /// Interaction state of every section
    pub state: PortfolioState,
    pub config: AppConfig,
    opener: Box<dyn ResourceOpener>,

    /// Hit areas registered by the last draw
    pub hit_registry: HitAreaRegistry,
    /// Targets of the last composed page, in page order
    pub targets: Vec<PageTarget>,
    /// Row ranges of the last composed page
    pub sections: Vec<SectionSpan>,

    /// Index into `targets` of the focused target
    pub focus: Option<usize>,
    /// What the focused target does, used to find it again after relayout
    focused_action: Option<ClickAction>,
    focused_section: Option<SectionId>,
    /// Scroll the focused target into view on the next sync
    follow_focus: bool,

    /// First visible page row
    pub scroll: usize,
    pub max_scroll: usize,
    pub page_height: usize,
    pub viewport_height: usize,

    pub terminal_width: u16,
    pub terminal_height: u16,

    pub notice: Option<Notice>,
    pub tick_count: u64,
    /// Tick the page was (re)mounted at; the entrance clock starts here
    pub mount_tick: u64,
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    /// App over the shipped portfolio, opening links with the system handler.
    pub fn new(config: AppConfig) -> Self {
        Self::with_opener(config, Box::new(SystemOpener))
    }

    pub fn with_opener(config: AppConfig, opener: Box<dyn ResourceOpener>) -> Self {
        Self::with_portfolio(data::portfolio(), config, opener)
    }

    pub fn with_portfolio(
        portfolio: Portfolio,
        config: AppConfig,
        opener: Box<dyn ResourceOpener>,
    ) -> Self {
        Self {
            portfolio,
            state: PortfolioState::new(),
            config,
            opener,
            hit_registry: HitAreaRegistry::new(),
            targets: Vec::new(),
            sections: Vec::new(),
            focus: None,
            focused_action: None,
            focused_section: None,
            follow_focus: false,
            scroll: 0,
            max_scroll: 0,
            page_height: 0,
            viewport_height: 0,
            terminal_width: 80,
            terminal_height: 24,
            notice: None,
            tick_count: 0,
            mount_tick: 0,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Entries in a list section's table.
    pub fn section_len(&self, section: SectionId) -> usize {
        match section {
            SectionId::Education => self.portfolio.education.len(),
            SectionId::Experience => self.portfolio.experience.len(),
            SectionId::Projects => self.portfolio.projects.len(),
            SectionId::Publications => self.portfolio.publications.len(),
            SectionId::Certifications => self.portfolio.certifications.len(),
            SectionId::Skills => self.portfolio.skills.len(),
            SectionId::Header | SectionId::Summary => 0,
        }
    }
}
