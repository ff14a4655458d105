//! Unified error type for the view engine.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::context::ErrorContext;
use super::persist::PersistError;
use super::state::StateError;

/// Unified error type for the view engine.
///
/// Consolidates handler table, engine state and persistence errors so the
/// engine's public operations share one `Result` type.
#[derive(Debug)]
pub enum MultiviewError {
    /// Broken handler tables (unknown view type, nested sub-views).
    Config(ConfigError),

    /// Invalid request for the current engine state.
    State(StateError),

    /// Settings store or session (de)serialization failure.
    Persist(PersistError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<MultiviewError>,
        context: ErrorContext,
    },
}

impl MultiviewError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            MultiviewError::Config(_) => ErrorCategory::Configuration,
            MultiviewError::State(_) => ErrorCategory::Client,
            MultiviewError::Persist(_) => ErrorCategory::System,
            MultiviewError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if the application can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        match self {
            MultiviewError::Config(_) => false,
            MultiviewError::State(_) | MultiviewError::Persist(_) => true,
            MultiviewError::WithContext { error, .. } => error.is_recoverable(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            MultiviewError::Persist(err) => err.is_transient(),
            MultiviewError::WithContext { error, .. } => error.is_retryable(),
            _ => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            MultiviewError::Config(err) => format!("This view cannot be displayed: {}", err),
            MultiviewError::State(err) => format!("Navigation failed: {}", err),
            MultiviewError::Persist(err) => format!("Could not save or restore layout: {}", err),
            MultiviewError::WithContext { error, context } => {
                format!("{}\n\nContext: {}", error.user_message(), context)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            MultiviewError::Config(err) => err.error_code(),
            MultiviewError::State(err) => err.error_code(),
            MultiviewError::Persist(err) => err.error_code(),
            MultiviewError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        MultiviewError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            MultiviewError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &MultiviewError {
        match self {
            MultiviewError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for MultiviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MultiviewError::Config(err) => write!(f, "{}", err),
            MultiviewError::State(err) => write!(f, "{}", err),
            MultiviewError::Persist(err) => write!(f, "{}", err),
            MultiviewError::WithContext { error, context } => {
                write!(f, "{} ({})", error, context)
            }
        }
    }
}

impl std::error::Error for MultiviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MultiviewError::Config(err) => Some(err),
            MultiviewError::State(err) => Some(err),
            MultiviewError::Persist(err) => Some(err),
            MultiviewError::WithContext { error, .. } => error.source(),
        }
    }
}

impl From<ConfigError> for MultiviewError {
    fn from(err: ConfigError) -> Self {
        MultiviewError::Config(err)
    }
}

impl From<StateError> for MultiviewError {
    fn from(err: StateError) -> Self {
        MultiviewError::State(err)
    }
}

impl From<PersistError> for MultiviewError {
    fn from(err: PersistError) -> Self {
        MultiviewError::Persist(err)
    }
}

impl From<serde_json::Error> for MultiviewError {
    fn from(err: serde_json::Error) -> Self {
        MultiviewError::Persist(PersistError::Json(err))
    }
}
