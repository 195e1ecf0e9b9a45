//! Bounded snapshot history for undo/redo
//!
//! Manages undo and redo stacks of deep slide-list snapshots. The policy is
//! record-old-state-first: every mutating operation pushes the state it is
//! about to change, so the bottom of the undo stack is always the pristine
//! initial document. The live post-mutation state enters history only when
//! it is itself about to change — or, on undo, when it is stashed onto the
//! redo stack so that redo can return to it exactly.
//!
//! Recording clears the redo stack: this is a single-branch history, and a
//! mutation after an undo abandons the redo branch. Capacity is bounded;
//! overflowing drops the oldest snapshots, after which undo reaches the
//! oldest *retained* state rather than the true origin.
//!
//! Snapshots capture the slide sequence only. The active-slide pointer is
//! live state: restoring keeps the current pointer unless it no longer
//! resolves, in which case the engine repairs it.

use deck_model::Slide;

/// Default maximum number of retained snapshots.
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// A bounded, truncate-on-branch linear history of document snapshots.
#[derive(Debug, Clone)]
pub struct History {
    /// States that undo can restore, oldest first
    undo_stack: Vec<Vec<Slide>>,
    /// States that redo can restore, most recent last
    redo_stack: Vec<Vec<Slide>>,
    /// Maximum number of retained snapshots (at least 1)
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create an empty history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_HISTORY)
    }

    /// Create an empty history with a custom capacity (clamped to at least 1).
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Record the state that is about to be mutated.
    ///
    /// Clears the redo stack (the branch is abandoned), pushes a deep copy
    /// of `current`, and drops the oldest snapshots while over capacity.
    pub fn record(&mut self, current: &[Slide]) {
        self.redo_stack.clear();
        self.push_undo(current.to_vec());
    }

    /// Step back one snapshot.
    ///
    /// `live` is the current document state; it is stashed on the redo stack
    /// so a following redo restores it exactly. Returns the state to make
    /// live, or `None` when there is nothing to undo.
    pub fn undo(&mut self, live: &[Slide]) -> Option<Vec<Slide>> {
        let restored = self.undo_stack.pop()?;
        self.redo_stack.push(live.to_vec());
        Some(restored)
    }

    /// Step forward one snapshot, symmetric to [`History::undo`].
    pub fn redo(&mut self, live: &[Slide]) -> Option<Vec<Slide>> {
        let restored = self.redo_stack.pop()?;
        self.push_undo(live.to_vec());
        Some(restored)
    }

    /// Drop everything. Used when the document is replaced wholesale
    /// (new/load): the reset session is indistinguishable from a fresh one.
    pub fn reset(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Whether a step back is possible
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether a step forward is possible
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Total number of retained snapshots across both stacks
    pub fn len(&self) -> usize {
        self.undo_stack.len() + self.redo_stack.len()
    }

    /// Whether no snapshots are retained
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty() && self.redo_stack.is_empty()
    }

    /// Number of states undo can walk back through
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of states redo can walk forward through
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Configured capacity
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    fn push_undo(&mut self, snapshot: Vec<Slide>) {
        self.undo_stack.push(snapshot);
        while self.undo_stack.len() > self.max_entries {
            self.undo_stack.remove(0);
        }
    }
}
