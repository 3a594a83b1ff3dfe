//! Persisted tree shape.
//!
//! `SavedPage` is the record an external load/save collaborator exchanges
//! with the editor: the node list plus the root pointer, enough to fully
//! reconstruct the document. Loading clears selection, hover, the dirty
//! flag and history.

use crate::errors::EditorError;
use pagewright_dom::{Node, NodeId, PageDocument};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedPage {
    pub nodes: Vec<Node>,
    pub root_node_id: Option<NodeId>,
}

impl SavedPage {
    /// Capture a document's tree. Nodes are emitted in preorder from the
    /// root so the output is deterministic; unrooted nodes follow sorted
    /// by id.
    pub fn from_document(doc: &PageDocument) -> Self {
        let mut nodes = Vec::with_capacity(doc.len());
        let mut emitted = std::collections::HashSet::new();

        if let Some(root_id) = &doc.root_id {
            for id in doc.subtree_ids(root_id) {
                if let Some(node) = doc.get(&id) {
                    emitted.insert(id);
                    nodes.push(node.clone());
                }
            }
        }

        let mut rest: Vec<&Node> = doc
            .nodes
            .values()
            .filter(|node| !emitted.contains(&node.id))
            .collect();
        rest.sort_by(|a, b| a.id.cmp(&b.id));
        nodes.extend(rest.into_iter().cloned());

        Self {
            nodes,
            root_node_id: doc.root_id.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(raw)?)
    }
}
