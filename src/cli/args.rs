//! Command-line argument parsing for folio.
//!
//! Flags are matched by hand; the first command flag wins and unknown
//! arguments are ignored.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Plain-text resume on stdout
    Print,
    /// Whole portfolio as pretty-printed JSON on stdout
    Json,
    /// Run the TUI application (default)
    RunTui { animations: bool },
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use folio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut animations = true;
    // Skip the program name
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--print" => return CliCommand::Print,
            "--json" => return CliCommand::Json,
            "--no-animation" => animations = false,
            _ => {}
        }
    }
    CliCommand::RunTui { animations }
}

pub const USAGE: &str = "\
Usage: folio [OPTIONS]

Browse the portfolio in the terminal.

Options:
      --print         Print the portfolio as plain text and exit
      --json          Print the portfolio as JSON and exit
      --no-animation  Skip the section entrance animation
  -h, --help          Print help
  -V, --version       Print version";
