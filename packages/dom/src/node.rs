use crate::styles::ResponsiveStyles;
use serde::{Deserialize, Serialize};

/// Opaque node identifier, stable for the node's lifetime
pub type NodeId = String;

/// Component-specific content attributes (text, links, media references).
/// Opaque to the core; merged shallowly on update.
pub type PropMap = serde_json::Map<String, serde_json::Value>;

/// One component instance in the page tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,

    /// Component kind tag ("Section", "Container", "Heading", ...). Drives
    /// default styles and attach validity.
    #[serde(rename = "type")]
    pub kind: String,

    /// Owning node, or none for the root
    #[serde(default)]
    pub parent_id: Option<NodeId>,

    #[serde(default)]
    pub props: PropMap,

    #[serde(default)]
    pub styles: ResponsiveStyles,

    /// Ordered child ids. Order is visual order.
    #[serde(default)]
    pub children: Vec<NodeId>,

    /// Position hint among siblings
    #[serde(default)]
    pub order_index: usize,

    /// Suppresses interactive mutation (resize handles refuse engagement)
    #[serde(default)]
    pub locked: bool,
}

impl Node {
    pub fn new(id: NodeId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
            parent_id: None,
            props: PropMap::new(),
            styles: ResponsiveStyles::default(),
            children: Vec::new(),
            order_index: 0,
            locked: false,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
