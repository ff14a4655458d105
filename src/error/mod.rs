//! Error handling for the view engine.
//!
//! - **Error Categories**: classification for handling decisions
//! - **Domain errors**: handler tables ([`ConfigError`]), engine state
//!   ([`StateError`]) and persistence ([`PersistError`])
//! - **Unified type**: [`MultiviewError`] with optional [`ErrorContext`]
//! - **Result alias**: [`MultiviewResult<T>`] and the [`ResultExt`] trait
//!
//! | Category | Source | Recoverable |
//! |----------|--------|-------------|
//! | Configuration | missing view/node handler, nested sub-view | No |
//! | Client | unknown descriptor, nothing active | Yes |
//! | System | settings store I/O, JSON | Yes |
//!
//! Data source failures are not engine errors: they stay inside the
//! control that requested the data.

mod category;
mod config;
mod context;
mod multiview_error;
mod persist;
mod result;
mod state;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use context::ErrorContext;
pub use multiview_error::MultiviewError;
pub use persist::PersistError;
pub use result::{MultiviewResult, ResultExt};
pub use state::StateError;
