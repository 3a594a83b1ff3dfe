//! # Pagewright Editor
//!
//! Document editing engine for the page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ dom: PageDocument (node tree + pointers)    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Editor + mutations + history        │
//! │  - Apply mutations with validation          │
//! │  - Snapshot-based undo/redo (capped at 50)  │
//! │  - Attach policy consulted per add attempt  │
//! │  - Load/save of the persisted tree shape    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The document is the source of truth**: visual layers are derived
//!    views and always re-derivable.
//! 2. **Total operations**: invalid references are silent no-ops; no
//!    mutation leaves the tree with dangling references.
//! 3. **Selection is not history**: select/hover changes never produce an
//!    undo step.
//!
//! ## Usage
//!
//! ```rust
//! use pagewright_editor::Editor;
//!
//! let mut editor = Editor::with_defaults();
//! let outcome = editor.add_node("Section", None, None);
//! let section = outcome.created().unwrap().clone();
//!
//! editor.add_node("Heading", Some(&section), None);
//! editor.undo();
//! assert_eq!(editor.document().len(), 1);
//! ```

mod editor;
mod errors;
mod export;
mod history;
mod mutations;

pub use editor::{EditOutcome, Editor};
pub use errors::EditorError;
pub use export::SavedPage;
pub use history::{History, MAX_HISTORY_DEPTH};
pub use mutations::{MarkFixed, Mutation, MutationError};

// Re-export common types for convenience
pub use pagewright_dom::{
    AllowAll, AttachPolicy, Attachment, Breakpoint, ComponentCatalog, Node, NodeId, PageDocument,
    PropMap, StyleMap, StyleProperty, StyleValue,
};
