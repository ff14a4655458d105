//! CLI module for the multiview demo.
//!
//! Flags are handled before logging or the runtime start:
//!
//! ```ignore
//! use multiview::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::Version => handle_version_command(),
//!     CliCommand::Run(options) => run(options),
//!     ...
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{handle_help_command, handle_version_command, USAGE, VERSION};
