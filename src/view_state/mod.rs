//! Per-section interaction state.
//!
//! Each section owns a small state record that only it mutates. Transitions
//! are plain methods, so the renderer stays a pure function of
//! `(tables, PortfolioState)`.
//!
//! - [`ExpandState`]: at most one expanded entry
//! - [`FilterState`]: optional category selection ("All" is `None`)
//! - [`CertificationView`] / [`SkillView`] / [`SummaryMode`]: two-valued layout switches
//! - [`PortfolioState`]: one of each, per section

mod expand;
mod filter;
mod section;
mod view_mode;

pub use expand::ExpandState;
pub use filter::FilterState;
pub use section::{CertificationsState, PortfolioState, SectionId, SkillsState, SummaryState};
pub use view_mode::{CertificationView, SkillView, SummaryMode};
