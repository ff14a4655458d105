//! Error category classification for unified error handling.
//!
//! Categories let callers decide how to react to an error without matching
//! on every concrete variant.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Programming errors (invalid engine state, unknown descriptor).
    /// Not retryable.
    Client,

    /// System/OS errors (settings files, permissions).
    /// May succeed once the underlying condition is fixed.
    System,

    /// Handler table errors (unknown view type, nested sub-views).
    /// Not retryable until the tables are corrected.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if an operation failing with this category may succeed
    /// when attempted again without code or configuration changes.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::System)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Client => "client",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Client => "Application error",
            ErrorCategory::System => "System error",
            ErrorCategory::Configuration => "View configuration problem",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Client => "This may be a bug. Please report this issue if it persists",
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::Configuration => "Check the registered view and node handler tables",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
