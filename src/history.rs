//! Navigation history: the owner of all view descriptors of a session.

use crate::models::{NodeRef, ViewData, ViewDataId};

/// Smallest history that can still hold the outgoing and incoming views.
const MIN_HISTORY: usize = 2;

/// Outcome of [`NavigationHistory::visit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub id: ViewDataId,
    /// The current entry already pointed at the same path.
    pub reused: bool,
    /// Number of descriptors dropped (forward entries or over the limit).
    pub evicted: usize,
}

#[derive(Debug)]
pub struct NavigationHistory {
    entries: Vec<ViewData>,
    current: Option<usize>,
    limit: usize,
    next_id: u64,
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_HISTORY_LIMIT)
    }
}

impl NavigationHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            current: None,
            limit: limit.max(MIN_HISTORY),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> ViewDataId {
        let id = ViewDataId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Make `node` the current entry, reusing the current descriptor when it
    /// has the same path. Forward entries are dropped.
    pub fn visit(&mut self, node: NodeRef) -> Visit {
        let path = node.path();
        if let Some(current) = self.current_entry() {
            if current.path == path {
                return Visit {
                    id: current.id(),
                    reused: true,
                    evicted: 0,
                };
            }
        }

        let keep = self.current.map_or(0, |index| index + 1);
        let mut evicted = self.evict_range(keep..self.entries.len());

        let id = self.allocate_id();
        self.entries.push(ViewData::new(id, node));
        self.current = Some(self.entries.len() - 1);

        if self.entries.len() > self.limit {
            let overflow = self.entries.len() - self.limit;
            evicted += self.evict_range(0..overflow);
            self.current = Some(self.entries.len() - 1);
        }

        tracing::debug!("History visit {} -> {} ({} evicted)", path, id, evicted);
        Visit {
            id,
            reused: false,
            evicted,
        }
    }

    fn evict_range(&mut self, range: std::ops::Range<usize>) -> usize {
        let mut count = 0;
        for mut data in self.entries.drain(range) {
            let released = data.release();
            tracing::trace!("Evicted {} ({}), released {} item(s)", data.path, data.id(), released);
            count += 1;
        }
        count
    }

    /// Append a descriptor restored from a saved session.
    pub(crate) fn push_restored(&mut self, node: NodeRef) -> &mut ViewData {
        let id = self.allocate_id();
        self.entries.push(ViewData::new(id, node));
        let index = self.entries.len() - 1;
        self.current = Some(index);
        &mut self.entries[index]
    }

    pub fn back(&mut self) -> Option<ViewDataId> {
        let index = self.current?.checked_sub(1)?;
        self.current = Some(index);
        Some(self.entries[index].id())
    }

    pub fn forward(&mut self) -> Option<ViewDataId> {
        let index = self.current? + 1;
        if index >= self.entries.len() {
            return None;
        }
        self.current = Some(index);
        Some(self.entries[index].id())
    }

    pub fn can_go_back(&self) -> bool {
        self.current.is_some_and(|index| index > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        self.current.is_some_and(|index| index + 1 < self.entries.len())
    }

    /// Make an existing descriptor current without touching other entries.
    pub fn select(&mut self, id: ViewDataId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.current = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn current_id(&self) -> Option<ViewDataId> {
        self.current_entry().map(ViewData::id)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    fn current_entry(&self) -> Option<&ViewData> {
        self.current.and_then(|index| self.entries.get(index))
    }

    pub fn index_of(&self, id: ViewDataId) -> Option<usize> {
        self.entries.iter().position(|data| data.id() == id)
    }

    pub fn get(&self, id: ViewDataId) -> Option<&ViewData> {
        self.entries.iter().find(|data| data.id() == id)
    }

    pub fn get_mut(&mut self, id: ViewDataId) -> Option<&mut ViewData> {
        self.entries.iter_mut().find(|data| data.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewData> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ViewData> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Drop every descriptor, releasing their tracked work.
    pub fn clear(&mut self) -> usize {
        self.current = None;
        let len = self.entries.len();
        self.evict_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(key: &str) -> NodeRef {
        NodeRef::new("album", key)
    }

    #[test]
    fn test_visit_same_path_reuses_descriptor() {
        let mut history = NavigationHistory::new(10);
        let first = history.visit(node("1"));
        let again = history.visit(node("1"));

        assert!(!first.reused);
        assert!(again.reused);
        assert_eq!(first.id, again.id);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_back_and_forward() {
        let mut history = NavigationHistory::new(10);
        let a = history.visit(node("a")).id;
        let b = history.visit(node("b")).id;

        assert_eq!(history.back(), Some(a));
        assert!(history.back().is_none());
        assert_eq!(history.forward(), Some(b));
        assert!(history.forward().is_none());
    }

    #[test]
    fn test_visit_after_back_drops_forward_entries() {
        let mut history = NavigationHistory::new(10);
        history.visit(node("a"));
        let b = history.visit(node("b")).id;
        history.back();

        let visit = history.visit(node("c"));

        assert_eq!(visit.evicted, 1);
        assert!(history.get(b).is_none());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut history = NavigationHistory::new(2);
        let a = history.visit(node("a")).id;
        history.visit(node("b"));
        let visit = history.visit(node("c"));

        assert_eq!(visit.evicted, 1);
        assert!(history.get(a).is_none());
        assert_eq!(history.len(), 2);
        assert_eq!(history.current_index(), Some(1));
    }

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(NavigationHistory::new(0).limit(), 2);
    }
}
