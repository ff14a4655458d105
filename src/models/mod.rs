//! Data model of the view engine: descriptors, node handlers and view
//! handlers.

mod node;
mod view_data;
mod view_handler;

pub use node::{NodeHandler, NodeHandlerState, NodeRef};
pub use view_data::{
    ControlsState, DataItem, DataList, DataSource, DataSourceHandle, ViewData, ViewDataId,
    ViewLifecycle,
};
pub use view_handler::{AnimationPolicy, Placement, Position, SubViewDecl, ViewHandler};
