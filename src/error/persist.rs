//! Settings store and session persistence errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not determine the configuration directory")]
    NoConfigDirectory,

    #[error("unsupported session state version {found} (expected at most {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

impl PersistError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PersistError::Io {
            path: path.into(),
            source,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            PersistError::Io { .. } => "E_PERSIST_IO",
            PersistError::Json(_) => "E_PERSIST_JSON",
            PersistError::NoConfigDirectory => "E_PERSIST_NO_DIR",
            PersistError::UnsupportedVersion { .. } => "E_PERSIST_VERSION",
        }
    }

    /// Whether trying again later may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, PersistError::Io { source, .. } if matches!(
            source.kind(),
            std::io::ErrorKind::Interrupted
                | std::io::ErrorKind::WouldBlock
                | std::io::ErrorKind::TimedOut
        ))
    }
}
