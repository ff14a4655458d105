//! Result type alias for engine operations.

use super::context::ErrorContext;
use super::multiview_error::MultiviewError;

/// Type alias for Results using MultiviewError.
pub type MultiviewResult<T> = Result<T, MultiviewError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    fn context(self, ctx: ErrorContext) -> MultiviewResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> MultiviewResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<MultiviewError>,
{
    fn context(self, ctx: ErrorContext) -> MultiviewResult<T> {
        self.map_err(|e| Into::<MultiviewError>::into(e).with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> MultiviewResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| Into::<MultiviewError>::into(e).with_context(f()))
    }
}
