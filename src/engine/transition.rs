//! Transition animation planning. Animations are presentation only: by the
//! time one starts, every hook of the new composition has already run.

use crate::models::{ViewDataId, ViewHandler};

/// Movement through navigation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    /// Towards newer history entries.
    ZoomIn,
    /// Towards older history entries.
    ZoomOut,
}

impl Direction {
    /// Compare history positions of the outgoing and incoming descriptors.
    pub fn between(from: Option<usize>, to: Option<usize>) -> Self {
        match (from, to) {
            (Some(from), Some(to)) if to > from => Direction::ZoomIn,
            (Some(from), Some(to)) if to < from => Direction::ZoomOut,
            _ => Direction::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: Option<ViewDataId>,
    pub to: ViewDataId,
    pub view_type: String,
    pub direction: Direction,
}

/// Whether a transition between compositions should animate.
///
/// Never for a same-descriptor mode switch or the very first composition.
pub(crate) fn should_animate(
    enabled: bool,
    requested: bool,
    outgoing: Option<&ViewHandler>,
    incoming: &ViewHandler,
    same_descriptor: bool,
) -> bool {
    let Some(outgoing) = outgoing else {
        return false;
    };
    enabled && requested && !same_descriptor && outgoing.animates() && incoming.animates()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_between() {
        assert_eq!(Direction::between(Some(0), Some(1)), Direction::ZoomIn);
        assert_eq!(Direction::between(Some(2), Some(1)), Direction::ZoomOut);
        assert_eq!(Direction::between(Some(1), Some(1)), Direction::None);
        assert_eq!(Direction::between(None, Some(1)), Direction::None);
    }

    #[test]
    fn test_should_animate_rules() {
        let grid = ViewHandler::new("grid", "Grid");
        let still = ViewHandler::new("still", "Grid").no_animation();

        assert!(should_animate(true, true, Some(&grid), &grid, false));
        assert!(!should_animate(true, true, Some(&grid), &grid, true));
        assert!(!should_animate(true, false, Some(&grid), &grid, false));
        assert!(!should_animate(false, true, Some(&grid), &grid, false));
        assert!(!should_animate(true, true, Some(&grid), &still, false));
        assert!(!should_animate(true, true, Some(&still), &grid, false));
        assert!(!should_animate(true, true, None, &grid, false));
    }
}
