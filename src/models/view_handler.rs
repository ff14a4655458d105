//! Static view handler configuration.

use serde::{Deserialize, Serialize};

use crate::actions::Action;

/// Edge of the main control a sub-view is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Bottom,
    Left,
    Right,
}

/// Where a sub-view goes relative to the main control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Position,
    /// Placed inside the main control's scroll area instead of beside it.
    #[serde(default)]
    pub in_scroller: bool,
    #[serde(default)]
    pub has_splitter: bool,
}

impl Placement {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            in_scroller: false,
            has_splitter: false,
        }
    }

    pub fn top() -> Self {
        Self::new(Position::Top)
    }

    pub fn bottom() -> Self {
        Self::new(Position::Bottom)
    }

    pub fn left() -> Self {
        Self::new(Position::Left)
    }

    pub fn right() -> Self {
        Self::new(Position::Right)
    }

    pub fn in_scroller(mut self) -> Self {
        self.in_scroller = true;
        self
    }

    pub fn with_splitter(mut self) -> Self {
        self.has_splitter = true;
        self
    }
}

/// A sub-view declared by a view handler.
#[derive(Debug, Clone, PartialEq)]
pub struct SubViewDecl {
    pub view_type: String,
    pub placement: Placement,
    /// Permanent sub-views are always composed and cannot be toggled.
    pub permanent: bool,
    pub hidden_by_default: bool,
    /// Sub-views hidden whenever this one is shown.
    pub mutual_exclusive_with: Vec<String>,
}

impl SubViewDecl {
    pub fn new(view_type: impl Into<String>, placement: Placement) -> Self {
        Self {
            view_type: view_type.into(),
            placement,
            permanent: false,
            hidden_by_default: false,
            mutual_exclusive_with: Vec::new(),
        }
    }

    pub fn permanent(mut self) -> Self {
        self.permanent = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden_by_default = true;
        self
    }

    pub fn exclusive_with(mut self, view_type: impl Into<String>) -> Self {
        self.mutual_exclusive_with.push(view_type.into());
        self
    }
}

/// Whether transitions into/out of a view type animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationPolicy {
    #[default]
    Animate,
    Never,
}

/// How a view type id is rendered: main control plus flat sub-views.
#[derive(Debug, Clone)]
pub struct ViewHandler {
    pub id: String,
    pub title: String,
    /// Control factory id of the primary content, also the cache key.
    pub main_control_type: String,
    pub sub_views: Vec<SubViewDecl>,
    pub animation: AnimationPolicy,
    /// Whether detached controls may be kept in the control cache.
    pub reusable: bool,
    pub actions: Vec<Action>,
}

impl ViewHandler {
    pub fn new(id: impl Into<String>, main_control_type: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: id.clone(),
            id,
            main_control_type: main_control_type.into(),
            sub_views: Vec::new(),
            animation: AnimationPolicy::default(),
            reusable: true,
            actions: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn sub_view(mut self, decl: SubViewDecl) -> Self {
        self.sub_views.push(decl);
        self
    }

    pub fn no_animation(mut self) -> Self {
        self.animation = AnimationPolicy::Never;
        self
    }

    pub fn not_reusable(mut self) -> Self {
        self.reusable = false;
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn sub_view_decl(&self, view_type: &str) -> Option<(usize, &SubViewDecl)> {
        self.sub_views
            .iter()
            .enumerate()
            .find(|(_, decl)| decl.view_type == view_type)
    }

    pub fn animates(&self) -> bool {
        self.animation == AnimationPolicy::Animate
    }
}
