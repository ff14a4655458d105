//! Engine state errors: the caller asked for something the current
//! composition cannot provide.

use thiserror::Error;

use crate::models::ViewDataId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("descriptor {0} is not in navigation history")]
    UnknownDescriptor(ViewDataId),

    #[error("no view is currently active")]
    NothingActive,

    #[error("sub-view '{0}' is not declared by the active view")]
    UnknownSubView(String),

    #[error("no action with id '{0}'")]
    UnknownAction(String),
}

impl StateError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StateError::UnknownDescriptor(_) => "E_STATE_DESCRIPTOR",
            StateError::NothingActive => "E_STATE_INACTIVE",
            StateError::UnknownSubView(_) => "E_STATE_SUB_VIEW",
            StateError::UnknownAction(_) => "E_STATE_ACTION",
        }
    }
}
