//! Linear undo/redo history over owned snapshots.
//!
//! The history never holds a reference into the live value: every entry is
//! an owned `S`, moved in when it stops being live. Undo and redo are exact
//! inverses along the maintained path; anything older than [`MAX_HISTORY`]
//! commits is forgotten.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Bound on the number of undoable commits.
pub const MAX_HISTORY: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History<S> {
    /// Older → newer.
    past: VecDeque<S>,
    /// Nearer → farther.
    future: VecDeque<S>,
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> History<S> {
    pub fn new() -> Self {
        Self {
            past: VecDeque::new(),
            future: VecDeque::new(),
        }
    }

    /// Commit `next`: the current live value becomes the newest past entry
    /// and the redo branch is discarded.
    pub fn record_and_apply(&mut self, live: &mut S, next: S) {
        let previous = std::mem::replace(live, next);
        self.push_past(previous);
        self.future.clear();
    }

    /// Step back one commit. Returns `false` (and changes nothing) when
    /// there is nothing to undo.
    pub fn undo(&mut self, live: &mut S) -> bool {
        let Some(snapshot) = self.past.pop_back() else {
            return false;
        };
        let current = std::mem::replace(live, snapshot);
        self.future.push_front(current);
        true
    }

    /// Step forward one commit. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self, live: &mut S) -> bool {
        let Some(snapshot) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(live, snapshot);
        self.push_past(current);
        true
    }

    fn push_past(&mut self, snapshot: S) {
        self.past.push_back(snapshot);
        while self.past.len() > MAX_HISTORY {
            self.past.pop_front();
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    /// Drop the oldest past entries and the farthest future entries beyond
    /// [`MAX_HISTORY`], for histories that did not come from `record_and_apply`.
    pub fn enforce_bound(&mut self) {
        while self.past.len() > MAX_HISTORY {
            self.past.pop_front();
        }
        self.future.truncate(MAX_HISTORY);
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
