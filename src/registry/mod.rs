//! Typed handler registry.
//!
//! Maps view type ids to [`ViewHandler`]s, node handler ids to
//! [`NodeHandler`]s and control type ids to factories. Everything is
//! validated once in [`RegistryBuilder::build`]; lookups afterwards only
//! fail when a caller passes an id that was never registered.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::ConfigError;
use crate::models::{NodeHandler, NodeRef, ViewHandler};
use crate::traits::Composable;

/// Creates a fresh control instance.
pub type ControlFactory = Rc<dyn Fn() -> Box<dyn Composable>>;

pub struct HandlerRegistry {
    views: HashMap<String, Rc<ViewHandler>>,
    nodes: HashMap<String, Rc<NodeHandler>>,
    factories: HashMap<String, ControlFactory>,
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut views: Vec<_> = self.views.keys().collect();
        views.sort();
        let mut nodes: Vec<_> = self.nodes.keys().collect();
        nodes.sort();
        f.debug_struct("HandlerRegistry")
            .field("views", &views)
            .field("nodes", &nodes)
            .field("factories", &self.factories.len())
            .finish()
    }
}

impl HandlerRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn resolve(&self, view_type: &str) -> Result<Rc<ViewHandler>, ConfigError> {
        self.views
            .get(view_type)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownViewType(view_type.to_string()))
    }

    pub fn node_handler(&self, id: &str) -> Result<Rc<NodeHandler>, ConfigError> {
        self.nodes
            .get(id)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownNodeHandler(id.to_string()))
    }

    /// View types `node` can be rendered with; never empty.
    pub fn available_view_types(&self, node: &NodeRef) -> Result<Vec<String>, ConfigError> {
        let handler = self.node_handler(&node.handler)?;
        if handler.view_types.is_empty() {
            return Err(ConfigError::NoViewTypes(handler.id.clone()));
        }
        Ok(handler.view_types.clone())
    }

    pub fn create_control(&self, control_type: &str) -> Result<Box<dyn Composable>, ConfigError> {
        let factory = self
            .factories
            .get(control_type)
            .ok_or_else(|| ConfigError::UnknownControlType(control_type.to_string()))?;
        Ok(factory())
    }

    pub fn view_title(&self, view_type: &str) -> String {
        self.views
            .get(view_type)
            .map(|handler| handler.title.clone())
            .unwrap_or_else(|| view_type.to_string())
    }
}

#[derive(Default)]
pub struct RegistryBuilder {
    views: Vec<ViewHandler>,
    nodes: Vec<NodeHandler>,
    factories: Vec<(String, ControlFactory)>,
}

impl RegistryBuilder {
    pub fn view(mut self, handler: ViewHandler) -> Self {
        self.views.push(handler);
        self
    }

    pub fn node(mut self, handler: NodeHandler) -> Self {
        self.nodes.push(handler);
        self
    }

    pub fn control<F, C>(mut self, control_type: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> C + 'static,
        C: Composable + 'static,
    {
        let factory: ControlFactory = Rc::new(move || Box::new(factory()) as Box<dyn Composable>);
        self.factories.push((control_type.into(), factory));
        self
    }

    /// Validate the tables and build the registry.
    pub fn build(self) -> Result<HandlerRegistry, ConfigError> {
        let mut factories = HashMap::new();
        for (id, factory) in self.factories {
            if factories.insert(id.clone(), factory).is_some() {
                return Err(ConfigError::DuplicateId(id));
            }
        }

        let mut views = HashMap::new();
        for handler in self.views {
            if !factories.contains_key(&handler.main_control_type) {
                return Err(ConfigError::UnknownControlType(
                    handler.main_control_type.clone(),
                ));
            }
            let id = handler.id.clone();
            if views.insert(id.clone(), Rc::new(handler)).is_some() {
                return Err(ConfigError::DuplicateId(id));
            }
        }

        // Composition is exactly two levels deep.
        for handler in views.values() {
            for decl in &handler.sub_views {
                let sub = views
                    .get(&decl.view_type)
                    .ok_or_else(|| ConfigError::UnknownViewType(decl.view_type.clone()))?;
                if !sub.sub_views.is_empty() {
                    return Err(ConfigError::NestedSubView {
                        view_type: handler.id.clone(),
                        sub_view: decl.view_type.clone(),
                    });
                }
            }
        }

        let mut nodes = HashMap::new();
        for handler in self.nodes {
            if handler.view_types.is_empty() {
                return Err(ConfigError::NoViewTypes(handler.id.clone()));
            }
            for view_type in handler.view_types.iter().chain(handler.default_view.iter()) {
                if !views.contains_key(view_type) {
                    return Err(ConfigError::UnknownViewType(view_type.clone()));
                }
            }
            if let Some(default) = handler.default_view.as_deref() {
                if !handler.offers(default) {
                    return Err(ConfigError::ViewTypeNotAvailable {
                        view_type: default.to_string(),
                        node_handler: handler.id.clone(),
                    });
                }
            }
            let id = handler.id.clone();
            if nodes.insert(id.clone(), Rc::new(handler)).is_some() {
                return Err(ConfigError::DuplicateId(id));
            }
        }

        tracing::debug!(
            "Handler registry built: {} view(s), {} node handler(s), {} control type(s)",
            views.len(),
            nodes.len(),
            factories.len()
        );

        Ok(HandlerRegistry {
            views,
            nodes,
            factories,
        })
    }
}
