//! # Undo/Redo History
//!
//! Snapshot-based history: before a mutation is applied, a deep copy of the
//! whole document (nodes, pointers, dirty flag) is pushed onto the past
//! stack. Undo swaps the live document with the most recent snapshot and
//! parks the displaced state on the future stack; redo is symmetric.
//!
//! ## Design
//!
//! - One snapshot per applied mutation, including per-keystroke style edits
//!   (maximal undo granularity; the resize controller bounds its own commit
//!   rate so a drag cannot flood the stack)
//! - Past is capped at [`MAX_HISTORY_DEPTH`]; the oldest snapshot is evicted
//!   first
//! - Any fresh mutation clears the future stack: no redo past a new edit
//! - Selection and hover travel inside snapshots, so undo restores the
//!   prior selection too

use pagewright_dom::PageDocument;

/// Maximum number of undo levels retained
pub const MAX_HISTORY_DEPTH: usize = 50;

/// Past/future snapshot stacks for one document
#[derive(Debug, Clone, Default)]
pub struct History {
    past: Vec<PageDocument>,
    future: Vec<PageDocument>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pre-mutation state. Evicts the oldest snapshot beyond the
    /// cap and discards any redo branch.
    pub fn checkpoint(&mut self, current: &PageDocument) {
        self.past.push(current.clone());
        if self.past.len() > MAX_HISTORY_DEPTH {
            self.past.remove(0);
        }
        self.future.clear();
    }

    /// Swap the live document with the most recent past snapshot.
    /// Returns false (no-op) when there is nothing to undo.
    pub fn undo(&mut self, current: &mut PageDocument) -> bool {
        match self.past.pop() {
            Some(snapshot) => {
                self.future.push(std::mem::replace(current, snapshot));
                true
            }
            None => false,
        }
    }

    /// Symmetric to [`History::undo`]
    pub fn redo(&mut self, current: &mut PageDocument) -> bool {
        match self.future.pop() {
            Some(snapshot) => {
                self.past.push(std::mem::replace(current, snapshot));
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    /// Drop all history (load path: loading is not undoable)
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
