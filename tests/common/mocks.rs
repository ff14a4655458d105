//! Mock implementations for test fixtures.
//!
//! This module re-exports the mock implementations from
//! `multiview::adapters::mock`.

pub use multiview::adapters::mock::{
    HostOp, Journal, JournalControl, ManualProvider, MemoryStore, RecordingHost, ShowHook,
};
