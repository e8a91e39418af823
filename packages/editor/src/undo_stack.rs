//! # Undo/Redo Stack
//!
//! Tracks composition history and enables undo/redo.
//!
//! ## Design
//!
//! - States are immutable snapshots, so each entry stores the state before
//!   and after an action rather than an inverse operation
//! - Undo restores `before` and moves the entry to the redo stack
//! - Redo restores `after`
//! - New entries clear the redo stack
//! - Batches group several actions into one undo step
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//! stack.record(before, after, Some("Add section"));
//!
//! let restored = stack.undo();   // Some(before)
//! let again = stack.redo();      // Some(after)
//! ```

use crate::store::EditorState;

/// One undo step
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub before: EditorState,
    pub after: EditorState,

    /// Optional description of this step
    pub description: Option<String>,
}

/// Undo/redo stack for a composition
#[derive(Debug)]
pub struct UndoStack {
    /// Applied steps (most recent last)
    undo_stack: Vec<HistoryEntry>,

    /// Undone steps (most recent last)
    redo_stack: Vec<HistoryEntry>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Batch being built; `None` inside means nothing recorded yet
    current_batch: Option<Option<HistoryEntry>>,

    batch_description: Option<String>,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
            batch_description: None,
        }
    }

    /// Record a state transition
    pub fn record(&mut self, before: EditorState, after: EditorState, description: Option<&str>) {
        match &mut self.current_batch {
            Some(Some(batch)) => {
                // Keep the batch's original `before`
                batch.after = after;
            }
            Some(slot @ None) => {
                *slot = Some(HistoryEntry {
                    before,
                    after,
                    description: None,
                });
            }
            None => self.push_entry(HistoryEntry {
                before,
                after,
                description: description.map(str::to_string),
            }),
        }
    }

    /// Start a batch (undone/redone as one step)
    pub fn begin_batch(&mut self) {
        self.current_batch = Some(None);
        self.batch_description = None;
    }

    /// End the current batch and push it to the undo stack
    pub fn end_batch(&mut self) {
        if let Some(Some(mut batch)) = self.current_batch.take() {
            batch.description = self.batch_description.take();
            self.push_entry(batch);
        }
        self.batch_description = None;
    }

    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if self.current_batch.is_some() {
            self.batch_description = Some(description.into());
        }
    }

    pub fn is_batching(&self) -> bool {
        self.current_batch.is_some()
    }

    fn push_entry(&mut self, entry: HistoryEntry) {
        self.undo_stack.push(entry);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // New action invalidates the future
        self.redo_stack.clear();
    }

    /// Undo the most recent step, returning the state to restore
    pub fn undo(&mut self) -> Option<EditorState> {
        let entry = self.undo_stack.pop()?;
        let before = entry.before.clone();
        self.redo_stack.push(entry);
        Some(before)
    }

    /// Redo the most recently undone step, returning the state to restore
    pub fn redo(&mut self) -> Option<EditorState> {
        let entry = self.redo_stack.pop()?;
        let after = entry.after.clone();
        self.undo_stack.push(entry);
        Some(after)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
        self.batch_description = None;
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
