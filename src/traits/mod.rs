//! Trait seams between the engine and its collaborators.
//!
//! - [`Composable`] - lifecycle hooks implemented by every control
//! - [`ControlHost`] - renders controls into containers
//! - [`DataProvider`] - loads data lists and resolves titles
//! - [`SettingsStore`] - persists session state

pub mod composable;
pub mod host;
pub mod provider;
pub mod store;

pub use composable::{Composable, HideContext, InstanceId, ShowContext};
pub use host::{ControlHost, SlotSpec};
pub use provider::DataProvider;
pub use store::SettingsStore;
