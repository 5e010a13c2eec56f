//! Ordered log of snapshots.

use super::snapshot::Snapshot;
use serde::Serialize;
use tracing::{debug, instrument};

/// Every snapshot reachable by forward play, index `k` holding the board
/// after `k` moves.
///
/// Always contains at least the game start snapshot. Entries are only ever
/// appended, or dropped from the tail by [`History::truncate_after`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the game start snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::game_start()],
        }
    }

    /// Number of snapshots, including game start.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// Index of the most recent snapshot.
    pub fn last_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Iterates snapshots from game start onward.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Drops every snapshot after `step`, returning how many were removed.
    ///
    /// A no-op when `step` is already the last index.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub(crate) fn truncate_after(&mut self, step: usize) -> usize {
        let keep = step + 1;
        let removed = self.snapshots.len().saturating_sub(keep);
        if removed > 0 {
            debug!(removed, "Discarding abandoned future");
            self.snapshots.truncate(keep);
        }
        removed
    }

    /// Appends a snapshot at the tail.
    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Test-only access used to corrupt history in invariant tests.
    #[cfg(test)]
    pub(crate) fn snapshots_mut(&mut self) -> &mut Vec<Snapshot> {
        &mut self.snapshots
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Indexes a snapshot by step; panics if the step does not exist.
impl std::ops::Index<usize> for History {
    type Output = Snapshot;

    fn index(&self, step: usize) -> &Snapshot {
        &self.snapshots[step]
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
