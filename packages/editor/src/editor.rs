//! # Editor Handle
//!
//! Owns one `PageDocument` plus its history and drives every mutation
//! through validation and snapshot capture. This is the complete surface
//! by which a rendering or persistence layer edits the document.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit → Resolve → Save
//!   ↓      ↓        ↓       ↓
//! Saved  Mutations Styles  SavedPage
//! Page   +history  (eval)
//! ```
//!
//! The editor is an owned value, not a global: tests and embedders create
//! as many independent editors as they need.

use crate::export::SavedPage;
use crate::history::History;
use crate::mutations::{MarkFixed, Mutation, MutationError};
use pagewright_dom::{
    AllowAll, AttachPolicy, Breakpoint, ComponentCatalog, NodeId, PageDocument, PropMap, StyleMap,
};
use tracing::{debug, instrument};

/// Result of submitting a mutation
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// The mutation ran; `created` holds the id of any node it made
    Applied { created: Option<NodeId> },

    /// The attach policy said no. The reason is surfaced verbatim and no
    /// mutation occurred. Expected and recoverable, not a fault.
    Rejected { reason: Option<String> },

    /// A reference pointed at nothing (or a move would cycle): silent no-op
    Skipped,
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied { .. })
    }

    /// Id of the node an applied mutation created, if any
    pub fn created(&self) -> Option<&NodeId> {
        match self {
            EditOutcome::Applied { created } => created.as_ref(),
            _ => None,
        }
    }
}

/// Editable page document
pub struct Editor {
    doc: PageDocument,
    history: History,
    catalog: ComponentCatalog,
    policy: Box<dyn AttachPolicy>,

    /// Increments on each applied mutation
    version: u64,
}

impl Editor {
    pub fn new(catalog: ComponentCatalog, policy: Box<dyn AttachPolicy>) -> Self {
        Self::with_document(PageDocument::new(), catalog, policy)
    }

    /// Built-in catalog, permissive attach policy
    pub fn with_defaults() -> Self {
        Self::new(ComponentCatalog::builtin(), Box::new(AllowAll))
    }

    pub fn with_document(
        doc: PageDocument,
        catalog: ComponentCatalog,
        policy: Box<dyn AttachPolicy>,
    ) -> Self {
        Self {
            doc,
            history: History::new(),
            catalog,
            policy,
            version: 0,
        }
    }

    /// Read access for tree traversal by rendering consumers
    pub fn document(&self) -> &PageDocument {
        &self.doc
    }

    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Submit a mutation. Validation runs first; only a valid mutation
    /// pushes a snapshot, so no-ops never pollute the undo stack.
    #[instrument(skip_all, fields(mutation = mutation.name()))]
    pub fn apply(&mut self, mutation: Mutation) -> EditOutcome {
        match mutation.validate(&self.doc, self.policy.as_ref()) {
            Ok(()) => {}
            Err(MutationError::AttachRejected { reason }) => {
                debug!(mutation = mutation.name(), ?reason, "attach rejected");
                return EditOutcome::Rejected { reason };
            }
            Err(err) => {
                debug!(mutation = mutation.name(), %err, "mutation skipped");
                return EditOutcome::Skipped;
            }
        }

        self.history.checkpoint(&self.doc);
        let created = mutation.apply(&mut self.doc, &self.catalog);
        self.doc.is_dirty = true;
        self.version += 1;
        debug!(
            mutation = mutation.name(),
            version = self.version,
            "mutation applied"
        );
        EditOutcome::Applied { created }
    }

    // -- Mutation API -------------------------------------------------------

    pub fn add_node(
        &mut self,
        kind: &str,
        parent_id: Option<&str>,
        props: Option<PropMap>,
    ) -> EditOutcome {
        self.apply(Mutation::AddNode {
            kind: kind.to_string(),
            parent_id: parent_id.map(str::to_string),
            props,
        })
    }

    pub fn remove_node(&mut self, node_id: &str) -> EditOutcome {
        self.apply(Mutation::RemoveNode {
            node_id: node_id.to_string(),
        })
    }

    pub fn move_node(&mut self, node_id: &str, new_parent_id: &str, index: usize) -> EditOutcome {
        self.apply(Mutation::MoveNode {
            node_id: node_id.to_string(),
            new_parent_id: new_parent_id.to_string(),
            index,
        })
    }

    pub fn update_node_props(&mut self, node_id: &str, props: PropMap) -> EditOutcome {
        self.apply(Mutation::UpdateProps {
            node_id: node_id.to_string(),
            props,
        })
    }

    pub fn update_node_styles(
        &mut self,
        node_id: &str,
        breakpoint: Breakpoint,
        styles: StyleMap,
        mark_fixed: MarkFixed,
    ) -> EditOutcome {
        self.apply(Mutation::UpdateStyles {
            node_id: node_id.to_string(),
            breakpoint,
            styles,
            mark_fixed,
        })
    }

    pub fn duplicate_node(&mut self, node_id: &str) -> EditOutcome {
        self.apply(Mutation::DuplicateNode {
            node_id: node_id.to_string(),
        })
    }

    // -- Selection (not undoable) -------------------------------------------

    pub fn select_node(&mut self, node_id: Option<&str>) {
        self.doc.set_selected(node_id.map(str::to_string));
    }

    pub fn hover_node(&mut self, node_id: Option<&str>) {
        self.doc.set_hovered(node_id.map(str::to_string));
    }

    // -- History --------------------------------------------------------------

    /// Restore the most recent snapshot (including its selection).
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.doc)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.doc)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_levels(&self) -> usize {
        self.history.undo_levels()
    }

    pub fn redo_levels(&self) -> usize {
        self.history.redo_levels()
    }

    // -- Persistence ----------------------------------------------------------

    /// Replace the whole tree from a persisted record. Clears selection,
    /// hover and the dirty flag, and resets history: loading is explicitly
    /// not an undoable action and does not merge with prior history.
    pub fn load_tree(&mut self, saved: SavedPage) {
        self.doc.load(saved.nodes, saved.root_node_id);
        self.history.clear();
        debug!(nodes = self.doc.len(), "tree loaded");
    }

    pub fn save_tree(&self) -> SavedPage {
        SavedPage::from_document(&self.doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_dom::{Attachment, SizeMode, StyleProperty, StyleValue};

    struct NoTextInNavbar;

    impl AttachPolicy for NoTextInNavbar {
        fn can_attach(&self, component: &str, parent: Option<&str>) -> Attachment {
            if component == "Text" && parent == Some("Navbar") {
                Attachment::deny("Text cannot sit directly in a Navbar")
            } else {
                Attachment::allow()
            }
        }
    }

    #[test]
    fn test_add_node_selects_and_defaults() {
        let mut editor = Editor::with_defaults();
        let outcome = editor.add_node("Section", None, None);
        let id = outcome.created().unwrap().clone();

        assert_eq!(editor.document().root_id, Some(id.clone()));
        assert_eq!(editor.document().selected_id, Some(id.clone()));
        assert!(editor.document().is_dirty);
        assert_eq!(editor.version(), 1);

        let node = editor.document().get(&id).unwrap();
        assert_eq!(
            node.styles.desktop.get(StyleProperty::Display),
            Some(&StyleValue::keyword("flex"))
        );
    }

    #[test]
    fn test_add_to_missing_parent_is_silent_noop() {
        let mut editor = Editor::with_defaults();
        let outcome = editor.add_node("Heading", Some("missing"), None);
        assert_eq!(outcome, EditOutcome::Skipped);
        assert!(editor.document().is_empty());
        assert_eq!(editor.undo_levels(), 0);
        assert_eq!(editor.version(), 0);
    }

    #[test]
    fn test_attach_policy_rejection_prevents_creation() {
        let mut editor = Editor::new(ComponentCatalog::builtin(), Box::new(NoTextInNavbar));
        let navbar = editor.add_node("Navbar", None, None).created().unwrap().clone();

        let outcome = editor.add_node("Text", Some(&navbar), None);
        match outcome {
            EditOutcome::Rejected { reason } => {
                assert_eq!(reason.as_deref(), Some("Text cannot sit directly in a Navbar"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(editor.document().len(), 1);
        // Rejection leaves no undo step behind
        assert_eq!(editor.undo_levels(), 1);
    }

    #[test]
    fn test_update_styles_marks_fixed() {
        let mut editor = Editor::with_defaults();
        let id = editor.add_node("Container", None, None).created().unwrap().clone();

        let styles: StyleMap = [(StyleProperty::Width, StyleValue::px(320.0))]
            .into_iter()
            .collect();
        editor.update_node_styles(&id, Breakpoint::Tablet, styles, MarkFixed::width());

        let node = editor.document().get(&id).unwrap();
        assert_eq!(
            node.styles.modes(Breakpoint::Tablet).width_mode,
            SizeMode::Fixed
        );
        // Height untouched, other breakpoints untouched
        assert_eq!(
            node.styles.modes(Breakpoint::Tablet).height_mode,
            SizeMode::Auto
        );
        assert_eq!(
            node.styles.modes(Breakpoint::Desktop).width_mode,
            SizeMode::Auto
        );
    }

    #[test]
    fn test_mark_fixed_requires_dimension_present() {
        let mut editor = Editor::with_defaults();
        let id = editor.add_node("Container", None, None).created().unwrap().clone();

        // mark_fixed.width set but no width in the patch: mode stays auto
        let styles: StyleMap = [(StyleProperty::Color, StyleValue::keyword("red"))]
            .into_iter()
            .collect();
        editor.update_node_styles(&id, Breakpoint::Desktop, styles, MarkFixed::width());

        let node = editor.document().get(&id).unwrap();
        assert_eq!(
            node.styles.modes(Breakpoint::Desktop).width_mode,
            SizeMode::Auto
        );
    }

    #[test]
    fn test_selection_is_not_undoable() {
        let mut editor = Editor::with_defaults();
        let id = editor.add_node("Section", None, None).created().unwrap().clone();
        let levels = editor.undo_levels();

        editor.select_node(None);
        editor.hover_node(Some(&id));
        assert_eq!(editor.undo_levels(), levels);
        assert_eq!(editor.document().hovered_id, Some(id));
    }

    #[test]
    fn test_load_tree_resets_history_and_dirty() {
        let mut editor = Editor::with_defaults();
        editor.add_node("Section", None, None);
        let saved = editor.save_tree();

        editor.add_node("Section", None, None);
        assert!(editor.can_undo());

        editor.load_tree(saved);
        assert!(!editor.can_undo());
        assert!(!editor.can_redo());
        assert!(!editor.document().is_dirty);
        assert_eq!(editor.document().selected_id, None);
        assert_eq!(editor.document().len(), 1);
    }
}
