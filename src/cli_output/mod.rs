//! Non-interactive output: the `--print` resume and the `--json` export.

mod boxes;
mod resume;

pub use boxes::LINE_WIDTH;
pub use resume::{export_json, render_resume};
