//! Responsive style resolution.
//!
//! Two disjoint property classes:
//!
//! - **Cascading** properties apply desktop-first, then overlay tablet's own
//!   keys (when active is tablet or mobile), then mobile's (when active is
//!   mobile). A breakpoint only overwrites keys it explicitly defines.
//! - **Responsive-only** properties (width, height, justify-content,
//!   align-items) come exclusively from the active breakpoint's bucket.
//!   No fallback to desktop: a desktop width must not leak into tablet.
//!
//! After property resolution the active breakpoint's sizing modes are
//! reconciled: an auto axis treats any stored pixel value as stale. A node
//! resized at one breakpoint (promoting it to fixed) while untouched at
//! another must not cross-contaminate.

use pagewright_dom::{
    Breakpoint, ResponsiveStyles, SizeMode, StyleMap, StyleProperty, StyleValue,
};
use std::collections::BTreeMap;
use tracing::trace;

/// The resolved style set for one node at one breakpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectiveStyle {
    map: StyleMap,
}

impl EffectiveStyle {
    pub fn get(&self, property: StyleProperty) -> Option<&StyleValue> {
        self.map.get(property)
    }

    pub fn contains(&self, property: StyleProperty) -> bool {
        self.map.contains(property)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &StyleValue)> {
        self.map.iter()
    }

    /// CSS-name/value string pairs for a rendering consumer
    pub fn to_css_declarations(&self) -> BTreeMap<&'static str, String> {
        self.map
            .iter()
            .map(|(property, value)| (property.css_name(), value.to_string()))
            .collect()
    }
}

/// Resolve per-breakpoint style data into one effective style set.
///
/// Pure and deterministic; no defaults are scattered at call sites — the
/// flex defaulting below is the single place it happens.
pub fn resolve(styles: &ResponsiveStyles, breakpoint: Breakpoint) -> EffectiveStyle {
    let mut out = StyleMap::new();

    // Cascading properties: desktop first, then overlays
    for bp in breakpoint.cascade_chain() {
        for (property, value) in styles.bucket(*bp).iter() {
            if !property.is_responsive_only() {
                out.set(property, value.clone());
            }
        }
    }

    // Responsive-only properties: the active bucket alone decides
    for (property, value) in styles.bucket(breakpoint).iter() {
        if property.is_responsive_only() {
            out.set(property, value.clone());
        }
    }

    // Flex defaulting, centralized here
    if !out.contains(StyleProperty::FlexDirection) {
        let direction = styles
            .desktop
            .get(StyleProperty::FlexDirection)
            .cloned()
            .unwrap_or_else(|| StyleValue::keyword("column"));
        out.set(StyleProperty::FlexDirection, direction);
    }
    if !out.contains(StyleProperty::FlexWrap) {
        let wrap = styles
            .desktop
            .get(StyleProperty::FlexWrap)
            .cloned()
            .unwrap_or_else(|| StyleValue::keyword("nowrap"));
        out.set(StyleProperty::FlexWrap, wrap);
    }
    if out.contains(StyleProperty::FlexDirection) && !out.contains(StyleProperty::Display) {
        out.set(StyleProperty::Display, StyleValue::keyword("flex"));
    }

    // Dimension-mode reconciliation for the active breakpoint
    let modes = styles.modes(breakpoint);
    if modes.width_mode == SizeMode::Auto {
        // A stale pixel width becomes flow-filling; nothing is synthesized
        // when no width is present at all
        let stale = out
            .get(StyleProperty::Width)
            .and_then(|value| value.as_length())
            .is_some_and(|length| length.unit.is_absolute());
        if stale {
            out.set(StyleProperty::Width, StyleValue::percent(100.0));
        }
    }
    if modes.height_mode == SizeMode::Auto {
        // Stale pixel heights are dropped outright; consumers fall back to
        // intrinsic content height
        let stale = out
            .get(StyleProperty::Height)
            .and_then(|value| value.as_length())
            .is_some_and(|length| length.unit.is_absolute());
        if stale {
            out.remove(StyleProperty::Height);
        }
    }

    trace!(?breakpoint, properties = out.len(), "resolved styles");
    EffectiveStyle { map: out }
}
