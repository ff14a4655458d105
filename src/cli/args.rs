//! Command-line argument parsing for the multiview demo.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;

/// Options of a regular run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunOptions {
    /// Disable transition animations regardless of the config file.
    pub no_animations: bool,
    /// Directory holding the saved session.
    pub state: Option<PathBuf>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the demo (default)
    Run(RunOptions),
    /// Arguments could not be parsed
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// Unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use multiview::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["multiview".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--no-animations" => options.no_animations = true,
            "--state" => match args.next() {
                Some(path) => options.state = Some(PathBuf::from(path)),
                None => return CliCommand::Invalid("--state needs a directory".to_string()),
            },
            _ => {}
        }
    }
    CliCommand::Run(options)
}
