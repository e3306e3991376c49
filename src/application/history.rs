use std::collections::VecDeque;

use crate::domain::{Grid, Spot};

/// Deep copy of the editable state taken before a mutation
#[derive(Clone, PartialEq, Debug)]
pub struct Snapshot {
    pub grid: Grid,
    pub spots: Vec<Spot>,
}

/// Bounded undo stack. When full, the oldest snapshot is dropped.
/// There is no redo.
pub struct History {
    snapshots: VecDeque<Snapshot>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            snapshots: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        if self.snapshots.len() == self.limit {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
