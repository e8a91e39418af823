//! # Pagecraft Editor
//!
//! Composition engine for the page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ sections: SectionRegistry (catalog)         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: composition state + actions         │
//! │  - Reducer: transition(state, action)       │
//! │  - ReorderEngine, TemplateExpander          │
//! │  - AI patch parse / diff / merge            │
//! │  - Undo history, edit sessions              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ host: renderer table, AI transport, storage │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Order is the only authority**: sections render top to bottom
//! 2. **Selection is a position**: kept valid across every action
//! 3. **Total actions**: bad input is a no-op, never a failure
//! 4. **Merge, never replace**: AI proposals only touch accepted keys
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::{Action, CompositionStore};
//!
//! let mut store = CompositionStore::new(registry);
//! store.dispatch(Action::Add { section_id: "hero-1".into() });
//! store.dispatch(Action::Reorder { from: 0, to: 2 });
//! store.undo();
//! ```

mod ai;
mod ai_patch;
mod composition;
mod document;
mod errors;
mod id_generator;
mod reorder;
mod session;
mod store;
mod template;
mod undo_stack;

pub use ai::{assist, AiProposal, AiRequest, AiResponse, CompletionTransport};
pub use ai_patch::{
    changed_keys, merge, merge_all, parse_completion, parse_completion_traced, values_equal,
    ParseStrategy,
};
pub use composition::{position_of, PageSection, Selection};
pub use document::{PageDocument, PageFile, PageStatus};
pub use errors::{AiError, EditorError, TransportError};
pub use id_generator::IDGenerator;
pub use reorder::{move_item, reorder, shift_selection};
pub use session::{AiTicket, EditSession};
pub use store::{Action, CompositionStore, Dispatch, EditorState, Reducer};
pub use template::{expand, expand_template};
pub use undo_stack::{HistoryEntry, UndoStack};

// Re-export catalog types for convenience
pub use pagecraft_sections::{Props, SectionRegistry};
