//! Bounded, linear undo/redo over whole snapshots.
//!
//! A [`History`] is a list of snapshots plus a cursor. Committing drops any
//! redo-able future, appends, and evicts from the front once the list grows
//! past its limit. Undo and redo only move the cursor.

use std::collections::VecDeque;

/// Number of snapshots retained when no limit is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Snapshot stack with a cursor.
///
/// Never empty: it is seeded with an initial snapshot and eviction always
/// keeps at least the newest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
    entries: VecDeque<T>,
    index: usize,
    limit: usize,
}

impl<T> History<T> {
    /// Create a history holding `initial`, with the default limit.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self::with_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    /// Create a history holding `initial` that retains at most `limit`
    /// snapshots (a limit of 0 is treated as 1).
    #[must_use]
    pub fn with_limit(initial: T, limit: usize) -> Self {
        let mut entries = VecDeque::with_capacity(limit.clamp(1, 64));
        entries.push_back(initial);
        Self {
            entries,
            index: 0,
            limit: limit.max(1),
        }
    }

    /// Record a new snapshot after the current one.
    pub fn commit(&mut self, snapshot: T) {
        let dropped = self.entries.len() - (self.index + 1);
        self.entries.truncate(self.index + 1);
        self.entries.push_back(snapshot);

        let evicted = self.entries.len().saturating_sub(self.limit);
        if evicted > 0 {
            self.entries.drain(..evicted);
        }
        self.index = self.entries.len() - 1;

        log::debug!(
            "history commit: {} entries, cursor {}, dropped {dropped} redo, evicted {evicted}",
            self.entries.len(),
            self.index
        );
    }

    /// Step back one snapshot. Returns `None` when already at the oldest.
    pub fn undo(&mut self) -> Option<&T> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        log::debug!("history undo: cursor {}", self.index);
        self.entries.get(self.index)
    }

    /// Step forward one snapshot. Returns `None` when already at the newest.
    pub fn redo(&mut self) -> Option<&T> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        log::debug!("history redo: cursor {}", self.index);
        self.entries.get(self.index)
    }

    /// The snapshot under the cursor.
    #[must_use]
    pub fn current(&self) -> &T {
        &self.entries[self.index]
    }

    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Cursor position, `0 <= index < len`.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Snapshots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}
