//! Component catalog and attach policy.
//!
//! The catalog is the consumed default-style table: component kind →
//! container/leaf classification plus initial `ResponsiveStyles`. The attach
//! policy is the consumed drop-validator contract: the editor queries it
//! once per add attempt and never interprets the rules itself.

use crate::styles::{ResponsiveStyles, StyleProperty, StyleValue};
use std::collections::HashMap;

/// Answer from an attach policy query
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub allowed: bool,
    /// Surfaced to the caller verbatim, never interpreted
    pub reason: Option<String>,
}

impl Attachment {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }
}

/// Externally supplied predicate deciding which component kinds may nest
/// where. `parent` is `None` for the canvas-root rule-space, which is
/// distinct from nested attachment.
pub trait AttachPolicy {
    fn can_attach(&self, component: &str, parent: Option<&str>) -> Attachment;
}

/// Policy that accepts everything. Default for embedders and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AttachPolicy for AllowAll {
    fn can_attach(&self, _component: &str, _parent: Option<&str>) -> Attachment {
        Attachment::allow()
    }
}

/// Per-kind component description
#[derive(Debug, Clone, Default)]
pub struct ComponentSpec {
    /// Container kinds lay out children and store resize widths as
    /// percentages of the canvas; leaf kinds store pixels.
    pub container: bool,
    pub default_styles: ResponsiveStyles,
}

impl ComponentSpec {
    pub fn leaf() -> Self {
        Self::default()
    }

    /// Containers start as a flex column; sizing modes stay auto on all
    /// three breakpoints.
    pub fn container() -> Self {
        let mut styles = ResponsiveStyles::default();
        styles
            .desktop
            .set(StyleProperty::Display, StyleValue::keyword("flex"));
        Self {
            container: true,
            default_styles: styles,
        }
    }
}

/// Mapping from component kind to its spec
#[derive(Debug, Clone, Default)]
pub struct ComponentCatalog {
    specs: HashMap<String, ComponentSpec>,
}

impl ComponentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in component set of the page builder
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for kind in ["Section", "Container", "Navbar"] {
            catalog.register(kind, ComponentSpec::container());
        }
        for kind in ["Heading", "Text", "Image", "Button", "Link"] {
            catalog.register(kind, ComponentSpec::leaf());
        }
        catalog
    }

    pub fn register(&mut self, kind: impl Into<String>, spec: ComponentSpec) {
        self.specs.insert(kind.into(), spec);
    }

    pub fn spec(&self, kind: &str) -> Option<&ComponentSpec> {
        self.specs.get(kind)
    }

    pub fn is_container(&self, kind: &str) -> bool {
        self.specs.get(kind).is_some_and(|spec| spec.container)
    }

    /// Initial styles for a kind. Unregistered kinds get empty leaf styles
    /// (auto/auto modes everywhere).
    pub fn default_styles(&self, kind: &str) -> ResponsiveStyles {
        self.specs
            .get(kind)
            .map(|spec| spec.default_styles.clone())
            .unwrap_or_default()
    }
}
