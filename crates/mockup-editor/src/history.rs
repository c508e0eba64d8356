//! Bounded per-view undo/redo history.
//!
//! Each view owns a stack of whole-list snapshots and a cursor into it.
//! Undo and redo move the cursor; a new commit drops everything after the
//! cursor (the stale redo branch) before appending. When the stack grows
//! past its limit the oldest snapshot is evicted and the cursor follows,
//! so the newest snapshot stays current.

use mockup_core::model::DesignElement;

/// One immutable copy of a view's element list.
pub type Snapshot = Vec<DesignElement>;

#[derive(Debug, Clone, PartialEq)]
pub struct History {
    snapshots: Vec<Snapshot>,
    /// Always within `0..snapshots.len()`.
    index: usize,
    /// Maximum snapshots kept, at least 1.
    limit: usize,
}

impl History {
    /// Start with the empty list as snapshot 0.
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        let mut snapshots = Vec::with_capacity(limit.min(64));
        snapshots.push(Snapshot::new());
        Self {
            snapshots,
            index: 0,
            limit,
        }
    }

    /// Record `elements` as the new current snapshot.
    /// Returns `true` if the oldest snapshot was evicted to make room.
    pub fn commit(&mut self, elements: Snapshot) -> bool {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(elements);

        let evicted = self.snapshots.len() > self.limit;
        if evicted {
            self.snapshots.remove(0);
        }
        self.index = self.snapshots.len() - 1;
        evicted
    }

    /// Step back one snapshot and return it, or `None` at the oldest.
    pub fn undo(&mut self) -> Option<&[DesignElement]> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(&self.snapshots[self.index])
    }

    /// Step forward one snapshot and return it, or `None` at the newest.
    pub fn redo(&mut self) -> Option<&[DesignElement]> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(&self.snapshots[self.index])
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    pub fn current(&self) -> &[DesignElement] {
        &self.snapshots[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true: snapshot 0 always exists.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(n: usize) -> Snapshot {
        (0..n)
            .map(|i| DesignElement::text(i as f32, 0.0, "t"))
            .collect()
    }

    #[test]
    fn starts_with_empty_snapshot() {
        let history = History::new(50);
        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), 0);
        assert!(history.current().is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_redo_walks_snapshots() {
        let mut history = History::new(50);
        let one = snap(1);
        let two = snap(2);
        history.commit(one.clone());
        history.commit(two.clone());

        assert_eq!(history.undo(), Some(one.as_slice()));
        assert_eq!(history.undo(), Some(&[][..]));
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), Some(one.as_slice()));
        assert_eq!(history.redo(), Some(two.as_slice()));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn commit_discards_redo_branch() {
        let mut history = History::new(50);
        history.commit(snap(1));
        history.commit(snap(2));
        history.undo();
        assert!(history.can_redo());

        history.commit(snap(3));
        assert!(!history.can_redo());
        assert_eq!(history.len(), 3);
        assert_eq!(history.current().len(), 3);
    }

    #[test]
    fn limit_evicts_oldest() {
        let mut history = History::new(3);
        assert!(!history.commit(snap(1)));
        assert!(!history.commit(snap(2)));
        assert!(history.commit(snap(3)));
        assert!(history.commit(snap(4)));

        assert_eq!(history.len(), 3);
        assert_eq!(history.index(), 2);
        assert_eq!(history.current().len(), 4);

        let mut undo_count = 0;
        while history.undo().is_some() {
            undo_count += 1;
        }
        assert_eq!(undo_count, 2);
        // The oldest surviving snapshot, not the empty list
        assert_eq!(history.current().len(), 2);
    }

    #[test]
    fn limit_of_one_keeps_only_current() {
        let mut history = History::new(0);
        assert_eq!(history.limit(), 1);
        history.commit(snap(2));
        assert_eq!(history.len(), 1);
        assert!(!history.can_undo());
        assert_eq!(history.current().len(), 2);
    }
}
