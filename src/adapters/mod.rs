//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`JsonFileStore`] - settings store writing one JSON file per key
//! - [`LogHost`] - control host that only logs, for headless runs
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::RecordingHost`] - records every host call
//! - [`mock::JournalControl`] - writes lifecycle hooks into a [`mock::Journal`]
//! - [`mock::MemoryStore`] - in-memory settings store
//! - [`mock::ManualProvider`] - data loads that resolve on demand

pub mod json_store;
pub mod log_host;
pub mod mock;

pub use json_store::JsonFileStore;
pub use log_host::LogHost;
pub use mock::{Journal, JournalControl, ManualProvider, MemoryStore, RecordingHost};
