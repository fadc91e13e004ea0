//! Reusable UI components.
//!
//! - `Chip` - radio chips, buttons and links
//! - `badge`, `tag`, `icon`, `overflow` - inline spans

mod badge;
mod chip;

pub use badge::{badge, icon, overflow, tag};
pub use chip::{filter_chips, Chip, ChipKind};
