//! Multiview - view composition and lifecycle engine for a media library
//! front-end.
//!
//! This library exposes modules for use in integration tests.

pub mod actions;
pub mod adapters;
pub mod cache;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod history;
pub mod library;
pub mod logging;
pub mod models;
pub mod persist;
pub mod registry;
pub mod scope;
pub mod traits;

pub use engine::{Multiview, NavigationTarget, ShowOptions};
pub use error::{MultiviewError, MultiviewResult};
