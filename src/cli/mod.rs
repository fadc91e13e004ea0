//! CLI module for folio.
//!
//! The dispatcher runs early in `main`, before the terminal is touched:
//!
//! ```ignore
//! use folio::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use version::{version_string, VERSION};

use std::io::Write;

use crate::cli_output::{export_json, render_resume};
use crate::data;
use crate::error::{FolioResult, ResultExt};

/// Run a CLI command if applicable, writing its output to `out`.
///
/// Returns `None` for [`CliCommand::RunTui`].
pub fn run_cli_command_to(command: &CliCommand, out: &mut impl Write) -> Option<FolioResult<()>> {
    let text = match command {
        CliCommand::RunTui { .. } => return None,
        CliCommand::Version => Ok(version_string()),
        CliCommand::Help => Ok(USAGE.to_string()),
        CliCommand::Print => Ok(render_resume(&data::portfolio())),
        CliCommand::Json => export_json(&data::portfolio()),
    };
    Some(text.and_then(|text| writeln!(out, "{}", text).operation("write to stdout")))
}

/// [`run_cli_command_to`] on stdout.
pub fn run_cli_command(command: &CliCommand) -> Option<FolioResult<()>> {
    run_cli_command_to(command, &mut std::io::stdout().lock())
}
