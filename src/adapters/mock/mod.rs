//! Mock implementations for testing.
//!
//! These doubles let the engine run headless: no UI toolkit, no media
//! database and no file system.

pub mod control;
pub mod host;
pub mod provider;
pub mod store;

pub use control::{Journal, JournalControl, ShowHook};
pub use host::{HostOp, RecordingHost};
pub use provider::ManualProvider;
pub use store::MemoryStore;
