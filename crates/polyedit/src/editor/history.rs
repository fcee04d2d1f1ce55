//! Bounded undo stack of snapshots.

use std::collections::VecDeque;

#[derive(Clone, Debug)]
pub struct History<T> {
    snapshots: VecDeque<T>,
    limit: usize,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::with_limit(0)
    }
}

impl<T> History<T> {
    /// `limit == 0` keeps every snapshot.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            snapshots: VecDeque::new(),
            limit,
        }
    }

    /// Record the state as it was before a change; drops the oldest beyond `limit`.
    pub fn checkpoint(&mut self, state: T) {
        self.snapshots.push_back(state);
        if self.limit > 0 && self.snapshots.len() > self.limit {
            self.snapshots.pop_front();
        }
    }

    /// Most recent snapshot, removed from the stack.
    pub fn undo(&mut self) -> Option<T> {
        self.snapshots.pop_back()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_is_lifo_and_bounded() {
        let mut h = History::with_limit(2);
        h.checkpoint(1);
        h.checkpoint(2);
        h.checkpoint(3);
        assert_eq!(h.len(), 2);
        assert_eq!(h.undo(), Some(3));
        assert_eq!(h.undo(), Some(2));
        assert_eq!(h.undo(), None);
        assert!(h.is_empty());
    }

    #[test]
    fn unbounded_keeps_everything() {
        let mut h = History::default();
        for i in 0..100 {
            h.checkpoint(i);
        }
        assert_eq!(h.len(), 100);
        h.clear();
        assert_eq!(h.undo(), None);
    }
}
