//! # Page Document
//!
//! The authoritative store for one page: a map of nodes plus the root,
//! selection and hover pointers. The pointers are weak references into the
//! map and are nulled out whenever the referenced node is deleted.
//!
//! This type holds structural primitives only. Semantic operations
//! (defaults, attach validation, history) live in `pagewright-editor`.
//! A `PageDocument` is an owned value: there is no global document.

use crate::id_generator::IdGenerator;
use crate::node::{Node, NodeId};
use std::collections::{HashMap, HashSet};

/// Document state for one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageDocument {
    /// Exclusive owner of all nodes
    pub nodes: HashMap<NodeId, Node>,

    pub root_id: Option<NodeId>,
    pub selected_id: Option<NodeId>,
    pub hovered_id: Option<NodeId>,

    /// Set on any mutation, cleared on load
    pub is_dirty: bool,

    id_gen: IdGenerator,
}

impl PageDocument {
    pub fn new() -> Self {
        Self::with_name("untitled")
    }

    /// Create an empty document whose node ids are seeded from `name`
    pub fn with_name(name: &str) -> Self {
        Self {
            nodes: HashMap::new(),
            root_id: None,
            selected_id: None,
            hovered_id: None,
            is_dirty: false,
            id_gen: IdGenerator::new(name),
        }
    }

    /// Generate an id guaranteed not to collide with any node in the map,
    /// including nodes that arrived via load with a foreign seed.
    pub fn fresh_id(&mut self) -> NodeId {
        loop {
            let id = self.id_gen.new_id();
            if !self.nodes.contains_key(&id) {
                return id;
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn children_of(&self, id: &str) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn root(&self) -> Option<&Node> {
        self.root_id.as_deref().and_then(|id| self.nodes.get(id))
    }

    /// Insert a node into the map. Does not wire up any parent/child links.
    pub fn adopt(&mut self, node: Node) {
        self.nodes.insert(node.id.clone(), node);
    }

    /// Append a child to a parent's children and point the child back at it.
    /// No-op if either node is missing.
    pub fn attach(&mut self, parent_id: &str, child_id: &str, index: Option<usize>) {
        if !self.nodes.contains_key(child_id) {
            return;
        }
        let Some(parent) = self.nodes.get_mut(parent_id) else {
            return;
        };
        let at = index
            .unwrap_or(parent.children.len())
            .min(parent.children.len());
        parent.children.insert(at, child_id.to_string());

        if let Some(child) = self.nodes.get_mut(child_id) {
            child.parent_id = Some(parent_id.to_string());
        }
        self.reindex_children(parent_id);
    }

    /// Remove a node from its parent's children list (the node itself stays
    /// in the map). Sibling order indexes are recomputed.
    pub fn detach(&mut self, id: &str) {
        let Some(parent_id) = self.nodes.get(id).and_then(|n| n.parent_id.clone()) else {
            return;
        };
        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children.retain(|child| child != id);
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.parent_id = None;
        }
        self.reindex_children(&parent_id);
    }

    /// Recursively delete a node and all descendants, detaching it from its
    /// parent and nulling any pointer that referenced a deleted node.
    /// Returns false (no-op) if the node does not exist.
    pub fn remove_subtree(&mut self, id: &str) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }
        self.detach(id);

        let doomed = self.subtree_ids(id);
        for node_id in &doomed {
            self.nodes.remove(node_id);
        }

        let dead: HashSet<&NodeId> = doomed.iter().collect();
        for pointer in [
            &mut self.root_id,
            &mut self.selected_id,
            &mut self.hovered_id,
        ] {
            if pointer.as_ref().is_some_and(|p| dead.contains(p)) {
                *pointer = None;
            }
        }
        true
    }

    /// Deep-clone a node and its subtree under fresh ids, inserting the
    /// clone as the sibling immediately after the original (or as the new
    /// root if the original was the root). The original subtree is not
    /// touched. Returns the clone's id.
    pub fn clone_subtree(&mut self, id: &str) -> Option<NodeId> {
        let parent_id = self.nodes.get(id)?.parent_id.clone();
        let new_id = self.clone_node_rec(id, parent_id.clone())?;

        match parent_id {
            Some(parent_id) => {
                let position = self
                    .nodes
                    .get(&parent_id)
                    .and_then(|parent| parent.children.iter().position(|child| child == id))
                    .map(|at| at + 1);
                if let Some(parent) = self.nodes.get_mut(&parent_id) {
                    let at = position.unwrap_or(parent.children.len());
                    parent.children.insert(at, new_id.clone());
                }
                self.reindex_children(&parent_id);
            }
            None => {
                self.root_id = Some(new_id.clone());
            }
        }
        Some(new_id)
    }

    fn clone_node_rec(&mut self, source_id: &str, new_parent: Option<NodeId>) -> Option<NodeId> {
        let source = self.nodes.get(source_id)?.clone();
        let new_id = self.fresh_id();

        // Insert the shell first so fresh ids for descendants see it
        self.nodes.insert(
            new_id.clone(),
            Node {
                id: new_id.clone(),
                kind: source.kind.clone(),
                parent_id: new_parent,
                props: source.props.clone(),
                styles: source.styles.clone(),
                children: Vec::new(),
                order_index: source.order_index,
                locked: source.locked,
            },
        );

        let mut new_children = Vec::with_capacity(source.children.len());
        for child_id in &source.children {
            if let Some(new_child) = self.clone_node_rec(child_id, Some(new_id.clone())) {
                new_children.push(new_child);
            }
        }
        if let Some(clone) = self.nodes.get_mut(&new_id) {
            clone.children = new_children;
        }
        Some(new_id)
    }

    /// Preorder ids of a subtree, root of the subtree first
    pub fn subtree_ids(&self, id: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id.to_string()];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get(&current) {
                for child in node.children.iter().rev() {
                    stack.push(child.clone());
                }
            }
            out.push(current);
        }
        out
    }

    /// Ancestor chain, nearest parent first
    pub fn ancestors(&self, id: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.nodes.get(id).and_then(|n| n.parent_id.clone());
        while let Some(ancestor) = current {
            if out.contains(&ancestor) {
                break; // corrupt tree guard
            }
            current = self.nodes.get(&ancestor).and_then(|n| n.parent_id.clone());
            out.push(ancestor);
        }
        out
    }

    /// True if `ancestor` is `id` itself or one of its ancestors
    pub fn is_in_subtree(&self, ancestor: &str, id: &str) -> bool {
        ancestor == id || self.ancestors(id).iter().any(|a| a == ancestor)
    }

    pub fn reindex_children(&mut self, parent_id: &str) {
        let children = self.children_of(parent_id).to_vec();
        for (index, child_id) in children.iter().enumerate() {
            if let Some(child) = self.nodes.get_mut(child_id) {
                child.order_index = index;
            }
        }
    }

    /// Set the selection pointer. Unknown ids are ignored. Not a mutation:
    /// does not dirty the document.
    pub fn set_selected(&mut self, id: Option<NodeId>) {
        match id {
            Some(id) if self.nodes.contains_key(&id) => self.selected_id = Some(id),
            Some(_) => {}
            None => self.selected_id = None,
        }
    }

    pub fn set_hovered(&mut self, id: Option<NodeId>) {
        match id {
            Some(id) if self.nodes.contains_key(&id) => self.hovered_id = Some(id),
            Some(_) => {}
            None => self.hovered_id = None,
        }
    }

    /// Replace the whole tree (load path). Clears selection and hover,
    /// clears the dirty flag. History is the editor's concern.
    pub fn load(&mut self, nodes: Vec<Node>, root_id: Option<NodeId>) {
        self.nodes = nodes
            .into_iter()
            .map(|node| (node.id.clone(), node))
            .collect();
        self.root_id = root_id.filter(|id| self.nodes.contains_key(id));
        self.selected_id = None;
        self.hovered_id = None;
        self.is_dirty = false;
    }

    /// Structural invariant check, used by tests: parent/child links agree,
    /// no orphans, no cycles, at most one parentless node.
    pub fn validate_integrity(&self) -> Result<(), String> {
        let mut parentless = 0;
        for (id, node) in &self.nodes {
            if id != &node.id {
                return Err(format!("node keyed as {} has id {}", id, node.id));
            }
            match &node.parent_id {
                Some(parent_id) => {
                    let parent = self
                        .nodes
                        .get(parent_id)
                        .ok_or_else(|| format!("node {} has missing parent {}", id, parent_id))?;
                    let count = parent.children.iter().filter(|c| *c == id).count();
                    if count != 1 {
                        return Err(format!(
                            "parent {} lists child {} {} times",
                            parent_id, id, count
                        ));
                    }
                }
                None => parentless += 1,
            }
            for child_id in &node.children {
                let child = self
                    .nodes
                    .get(child_id)
                    .ok_or_else(|| format!("node {} has dangling child {}", id, child_id))?;
                if child.parent_id.as_deref() != Some(id) {
                    return Err(format!("child {} does not point back at {}", child_id, id));
                }
            }
        }
        if parentless > 1 {
            return Err(format!("{} parentless nodes", parentless));
        }
        if let Some(root_id) = &self.root_id {
            if !self.nodes.contains_key(root_id) {
                return Err(format!("root pointer {} is dangling", root_id));
            }
        }
        // Acyclic: every node must terminate its ancestor walk
        for id in self.nodes.keys() {
            let mut seen = HashSet::new();
            let mut current = Some(id.clone());
            while let Some(node_id) = current {
                if !seen.insert(node_id.clone()) {
                    return Err(format!("cycle through {}", node_id));
                }
                current = self.nodes.get(&node_id).and_then(|n| n.parent_id.clone());
            }
        }
        Ok(())
    }
}

impl Default for PageDocument {
    fn default() -> Self {
        Self::new()
    }
}
