//! Handler table (configuration) errors.
//!
//! These indicate a broken view/node handler table rather than a runtime
//! condition. They are never recoverable.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no view handler registered for view type '{0}'")]
    UnknownViewType(String),

    #[error("no node handler registered for '{0}'")]
    UnknownNodeHandler(String),

    #[error("no control factory registered for control type '{0}'")]
    UnknownControlType(String),

    #[error("node handler '{0}' declares no view types")]
    NoViewTypes(String),

    #[error("sub-view '{sub_view}' of '{view_type}' has sub-views of its own")]
    NestedSubView { view_type: String, sub_view: String },

    #[error("view type '{view_type}' is not available for node handler '{node_handler}'")]
    ViewTypeNotAvailable {
        view_type: String,
        node_handler: String,
    },

    #[error("'{0}' is registered twice")]
    DuplicateId(String),
}

impl ConfigError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::UnknownViewType(_) => "E_CFG_VIEW_TYPE",
            ConfigError::UnknownNodeHandler(_) => "E_CFG_NODE_HANDLER",
            ConfigError::UnknownControlType(_) => "E_CFG_CONTROL_TYPE",
            ConfigError::NoViewTypes(_) => "E_CFG_NO_VIEWS",
            ConfigError::NestedSubView { .. } => "E_CFG_NESTED",
            ConfigError::ViewTypeNotAvailable { .. } => "E_CFG_UNAVAILABLE",
            ConfigError::DuplicateId(_) => "E_CFG_DUPLICATE",
        }
    }
}
