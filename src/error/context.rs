//! Error context for enriched error information.

use chrono::{DateTime, Utc};

/// Context information attached to errors for debugging.
///
/// Records which engine operation failed and, when known, the navigation
/// path and view type involved.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Name of the operation that failed (e.g. `show_view`).
    pub operation: String,

    /// Navigation path of the descriptor involved.
    pub path: Option<String>,

    /// View type id involved.
    pub view_type: Option<String>,

    /// Optional component/module where the error originated.
    pub component: Option<String>,

    /// Timestamp when the error occurred.
    pub timestamp: DateTime<Utc>,
}

impl ErrorContext {
    /// Create a new ErrorContext for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            path: None,
            view_type: None,
            component: None,
            timestamp: Utc::now(),
        }
    }

    /// Set the navigation path for this context.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the view type for this context.
    pub fn with_view_type(mut self, view_type: impl Into<String>) -> Self {
        self.view_type = Some(view_type.into());
        self
    }

    /// Set the component for this context.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Get a formatted context string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];

        if let Some(ref path) = self.path {
            parts.push(format!("path={}", path));
        }
        if let Some(ref view_type) = self.view_type {
            parts.push(format!("view_type={}", view_type));
        }
        if let Some(ref component) = self.component {
            parts.push(format!("component={}", component));
        }
        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));

        parts.join(" ")
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.operation)?;

        if let Some(ref path) = self.path {
            write!(f, " path={}", path)?;
        }
        if let Some(ref view_type) = self.view_type {
            write!(f, " view={}", view_type)?;
        }

        Ok(())
    }
}
