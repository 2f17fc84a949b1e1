//! Undo history of whole-tree snapshots

use std::collections::VecDeque;

use crate::split::PanelNode;

/// Stack of prior trees, most recent last.
///
/// Each snapshot is an independent deep copy. With a limit set, pushing past
/// it drops the oldest snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditHistory {
    snapshots: VecDeque<PanelNode>,
    limit: Option<usize>,
}

impl EditHistory {
    /// Creates a history holding at most `limit` snapshots.
    ///
    /// `None` means unbounded. A limit of zero keeps nothing.
    #[must_use]
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            snapshots: VecDeque::new(),
            limit,
        }
    }

    /// Records a snapshot.
    pub fn push(&mut self, snapshot: PanelNode) {
        self.snapshots.push_back(snapshot);
        if let Some(limit) = self.limit {
            while self.snapshots.len() > limit {
                self.snapshots.pop_front();
            }
        }
    }

    /// Removes and returns the most recent snapshot.
    pub fn pop(&mut self) -> Option<PanelNode> {
        self.snapshots.pop_back()
    }

    /// Returns the number of snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drops every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
