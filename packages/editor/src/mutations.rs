//! # Document Mutations
//!
//! High-level semantic operations on a page document.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation represents one semantic operation
//! 2. **Validated**: structural constraints are checked before anything moves
//! 3. **Total**: applying against a validated document cannot leave the tree
//!    with dangling references
//!
//! ## Mutation Semantics
//!
//! ### AddNode
//! - Consults the attach policy exactly once per attempt; a negative answer
//!   prevents any node creation
//! - Null parent makes the new node the root pointer (the previous root is
//!   not deleted)
//! - Selects the new node
//!
//! ### RemoveNode
//! - Removes the node and all descendants
//! - Root/selection/hover pointers at deleted nodes are nulled
//!
//! ### DuplicateNode
//! - Deep clone under fresh ids, inserted right after the original
//! - Clone and original are fully independent afterwards

use pagewright_dom::{
    AttachPolicy, Breakpoint, ComponentCatalog, Node, NodeId, PageDocument, PropMap, SizeMode,
    StyleMap, StyleProperty,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which dimensions an `UpdateStyles` mutation promotes to fixed sizing.
/// This is the only path by which an axis transitions from auto to fixed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MarkFixed {
    pub width: bool,
    pub height: bool,
}

impl MarkFixed {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn width() -> Self {
        Self {
            width: true,
            height: false,
        }
    }

    pub fn height() -> Self {
        Self {
            width: false,
            height: true,
        }
    }

    pub fn both() -> Self {
        Self {
            width: true,
            height: true,
        }
    }
}

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Create a node of a component kind under a parent (or as root)
    AddNode {
        kind: String,
        parent_id: Option<NodeId>,
        props: Option<PropMap>,
    },

    /// Remove a node and its whole subtree
    RemoveNode { node_id: NodeId },

    /// Relocate a node under a new parent at index
    MoveNode {
        node_id: NodeId,
        new_parent_id: NodeId,
        index: usize,
    },

    /// Shallow-merge props into a node
    UpdateProps { node_id: NodeId, props: PropMap },

    /// Shallow-merge styles into one breakpoint bucket, optionally
    /// promoting dimensions to fixed sizing
    UpdateStyles {
        node_id: NodeId,
        breakpoint: Breakpoint,
        styles: StyleMap,
        #[serde(default)]
        mark_fixed: MarkFixed,
    },

    /// Deep-clone a node and its subtree as a following sibling
    DuplicateNode { node_id: NodeId },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Would create cycle")]
    CycleDetected,

    #[error("Attach rejected: {}", reason.as_deref().unwrap_or("no reason given"))]
    AttachRejected { reason: Option<String> },
}

impl Mutation {
    /// Validate without applying. The attach policy is queried here, once
    /// per add/move attempt.
    pub fn validate(
        &self,
        doc: &PageDocument,
        policy: &dyn AttachPolicy,
    ) -> Result<(), MutationError> {
        match self {
            Mutation::AddNode {
                kind, parent_id, ..
            } => {
                let parent_kind = match parent_id {
                    Some(parent_id) => {
                        let parent = doc
                            .get(parent_id)
                            .ok_or_else(|| MutationError::ParentNotFound(parent_id.clone()))?;
                        Some(parent.kind.clone())
                    }
                    // Canvas-root attachment is its own rule-space
                    None => None,
                };
                let answer = policy.can_attach(kind, parent_kind.as_deref());
                if !answer.allowed {
                    return Err(MutationError::AttachRejected {
                        reason: answer.reason,
                    });
                }
                Ok(())
            }

            Mutation::RemoveNode { node_id } => {
                doc.get(node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;
                Ok(())
            }

            Mutation::MoveNode {
                node_id,
                new_parent_id,
                ..
            } => {
                let node = doc
                    .get(node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;
                let parent = doc
                    .get(new_parent_id)
                    .ok_or_else(|| MutationError::ParentNotFound(new_parent_id.clone()))?;

                if doc.is_in_subtree(node_id, new_parent_id) {
                    return Err(MutationError::CycleDetected);
                }

                let answer = policy.can_attach(&node.kind, Some(&parent.kind));
                if !answer.allowed {
                    return Err(MutationError::AttachRejected {
                        reason: answer.reason,
                    });
                }
                Ok(())
            }

            Mutation::UpdateProps { node_id, .. }
            | Mutation::UpdateStyles { node_id, .. }
            | Mutation::DuplicateNode { node_id } => {
                doc.get(node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;
                Ok(())
            }
        }
    }

    /// Apply to a validated document. Returns the id of any node the
    /// mutation created. Infallible by construction: the underlying
    /// primitives are no-op-safe, so a validated mutation cannot corrupt
    /// the tree.
    pub fn apply(&self, doc: &mut PageDocument, catalog: &ComponentCatalog) -> Option<NodeId> {
        match self {
            Mutation::AddNode {
                kind,
                parent_id,
                props,
            } => {
                let id = doc.fresh_id();
                let mut node = Node::new(id.clone(), kind.clone());
                node.styles = catalog.default_styles(kind);
                if let Some(props) = props {
                    node.props = props.clone();
                }

                match parent_id {
                    Some(parent_id) => {
                        node.order_index = doc.children_of(parent_id).len();
                        doc.adopt(node);
                        doc.attach(parent_id, &id, None);
                    }
                    None => {
                        doc.adopt(node);
                        // Replaces the pointer only; any previous root stays
                        doc.root_id = Some(id.clone());
                    }
                }
                doc.set_selected(Some(id.clone()));
                Some(id)
            }

            Mutation::RemoveNode { node_id } => {
                doc.remove_subtree(node_id);
                None
            }

            Mutation::MoveNode {
                node_id,
                new_parent_id,
                index,
            } => {
                doc.detach(node_id);
                doc.attach(new_parent_id, node_id, Some(*index));
                None
            }

            Mutation::UpdateProps { node_id, props } => {
                if let Some(node) = doc.get_mut(node_id) {
                    for (key, value) in props {
                        node.props.insert(key.clone(), value.clone());
                    }
                }
                None
            }

            Mutation::UpdateStyles {
                node_id,
                breakpoint,
                styles,
                mark_fixed,
            } => {
                if let Some(node) = doc.get_mut(node_id) {
                    node.styles.bucket_mut(*breakpoint).merge(styles);

                    let modes = node.styles.modes_mut(*breakpoint);
                    if mark_fixed.width && styles.contains(StyleProperty::Width) {
                        modes.width_mode = SizeMode::Fixed;
                    }
                    if mark_fixed.height && styles.contains(StyleProperty::Height) {
                        modes.height_mode = SizeMode::Fixed;
                    }
                }
                None
            }

            Mutation::DuplicateNode { node_id } => {
                let clone_id = doc.clone_subtree(node_id);
                doc.set_selected(clone_id.clone());
                clone_id
            }
        }
    }

    /// Debug name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddNode { .. } => "add_node",
            Mutation::RemoveNode { .. } => "remove_node",
            Mutation::MoveNode { .. } => "move_node",
            Mutation::UpdateProps { .. } => "update_props",
            Mutation::UpdateStyles { .. } => "update_styles",
            Mutation::DuplicateNode { .. } => "duplicate_node",
        }
    }
}
