//! Typed per-breakpoint style model.
//!
//! Style data is a closed set of known properties with typed values rather
//! than a free-form string map: dimension values carry a numeric value plus
//! unit, and the auto/fixed sizing flags are enums. Unknown property names
//! and malformed units are unrepresentable.
//!
//! Serde keeps the persisted shape friendly to external tooling: properties
//! serialize as camelCase keys and values as their CSS string form
//! (`"200px"`, `"33.3%"`, `"flex"`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The three responsive breakpoints. Desktop is the cascade base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    /// Breakpoints whose cascading properties apply at this breakpoint,
    /// in application order (desktop first).
    pub fn cascade_chain(self) -> &'static [Breakpoint] {
        match self {
            Breakpoint::Desktop => &[Breakpoint::Desktop],
            Breakpoint::Tablet => &[Breakpoint::Desktop, Breakpoint::Tablet],
            Breakpoint::Mobile => &[Breakpoint::Desktop, Breakpoint::Tablet, Breakpoint::Mobile],
        }
    }
}

/// Sizing mode for one axis at one breakpoint.
///
/// `Auto` means the dimension is flow-derived: any stored pixel value is
/// stale and must be ignored by the resolver. `Fixed` means a user committed
/// an explicit size (via resize or the style panel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeMode {
    #[default]
    Auto,
    Fixed,
}

/// Per-breakpoint width/height sizing modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DimensionModes {
    pub width_mode: SizeMode,
    pub height_mode: SizeMode,
}

/// Length units supported by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Px,
    Percent,
    Em,
    Rem,
    Vw,
    Vh,
}

impl LengthUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Percent => "%",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
            LengthUnit::Vw => "vw",
            LengthUnit::Vh => "vh",
        }
    }

    /// Absolute pixel lengths are the ones an auto sizing mode invalidates
    pub fn is_absolute(self) -> bool {
        matches!(self, LengthUnit::Px)
    }
}

/// A numeric length with unit (`200px`, `33.3%`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn px(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Px,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Percent,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64 Display prints the shortest round-trip form, so 33.3 stays
        // "33.3" and 100.0 prints "100"
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl FromStr for Length {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Longest suffix first so "rem" is not read as "em"
        const UNITS: [(&str, LengthUnit); 6] = [
            ("rem", LengthUnit::Rem),
            ("px", LengthUnit::Px),
            ("em", LengthUnit::Em),
            ("vw", LengthUnit::Vw),
            ("vh", LengthUnit::Vh),
            ("%", LengthUnit::Percent),
        ];
        for (suffix, unit) in UNITS {
            if let Some(number) = s.strip_suffix(suffix) {
                let value: f64 = number.trim().parse().map_err(|_| ())?;
                return Ok(Length { value, unit });
            }
        }
        Err(())
    }
}

/// A style value: a typed length or a keyword/color/composite string
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Length(Length),
    Keyword(String),
}

impl StyleValue {
    pub fn px(value: f64) -> Self {
        StyleValue::Length(Length::px(value))
    }

    pub fn percent(value: f64) -> Self {
        StyleValue::Length(Length::percent(value))
    }

    pub fn keyword(value: impl Into<String>) -> Self {
        StyleValue::Keyword(value.into())
    }

    /// Parse from CSS string form. Total: anything that is not a length
    /// becomes a keyword.
    pub fn parse(s: &str) -> Self {
        match Length::from_str(s) {
            Ok(length) => StyleValue::Length(length),
            Err(()) => StyleValue::Keyword(s.trim().to_string()),
        }
    }

    pub fn as_length(&self) -> Option<Length> {
        match self {
            StyleValue::Length(length) => Some(*length),
            StyleValue::Keyword(_) => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Length(length) => length.fmt(f),
            StyleValue::Keyword(keyword) => f.write_str(keyword),
        }
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StyleValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(StyleValue::parse(&raw))
    }
}

/// The closed set of style properties the builder understands
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum StyleProperty {
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    Display,
    FlexDirection,
    FlexWrap,
    JustifyContent,
    AlignItems,
    AlignSelf,
    Gap,
    Padding,
    Margin,
    Color,
    Background,
    FontSize,
    FontWeight,
    FontFamily,
    LineHeight,
    LetterSpacing,
    TextAlign,
    BorderRadius,
    Border,
    Opacity,
    Overflow,
    Position,
    ObjectFit,
    BoxShadow,
}

impl StyleProperty {
    /// Properties that never cascade down from desktop: each breakpoint
    /// either defines its own value or has none.
    pub fn is_responsive_only(self) -> bool {
        matches!(
            self,
            StyleProperty::Width
                | StyleProperty::Height
                | StyleProperty::JustifyContent
                | StyleProperty::AlignItems
        )
    }

    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::Width => "width",
            StyleProperty::Height => "height",
            StyleProperty::MinWidth => "min-width",
            StyleProperty::MinHeight => "min-height",
            StyleProperty::MaxWidth => "max-width",
            StyleProperty::MaxHeight => "max-height",
            StyleProperty::Display => "display",
            StyleProperty::FlexDirection => "flex-direction",
            StyleProperty::FlexWrap => "flex-wrap",
            StyleProperty::JustifyContent => "justify-content",
            StyleProperty::AlignItems => "align-items",
            StyleProperty::AlignSelf => "align-self",
            StyleProperty::Gap => "gap",
            StyleProperty::Padding => "padding",
            StyleProperty::Margin => "margin",
            StyleProperty::Color => "color",
            StyleProperty::Background => "background",
            StyleProperty::FontSize => "font-size",
            StyleProperty::FontWeight => "font-weight",
            StyleProperty::FontFamily => "font-family",
            StyleProperty::LineHeight => "line-height",
            StyleProperty::LetterSpacing => "letter-spacing",
            StyleProperty::TextAlign => "text-align",
            StyleProperty::BorderRadius => "border-radius",
            StyleProperty::Border => "border",
            StyleProperty::Opacity => "opacity",
            StyleProperty::Overflow => "overflow",
            StyleProperty::Position => "position",
            StyleProperty::ObjectFit => "object-fit",
            StyleProperty::BoxShadow => "box-shadow",
        }
    }
}

/// An ordered map of style properties for one breakpoint bucket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<StyleProperty, StyleValue>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: StyleProperty) -> Option<&StyleValue> {
        self.0.get(&property)
    }

    pub fn set(&mut self, property: StyleProperty, value: StyleValue) {
        self.0.insert(property, value);
    }

    pub fn remove(&mut self, property: StyleProperty) -> Option<StyleValue> {
        self.0.remove(&property)
    }

    pub fn contains(&self, property: StyleProperty) -> bool {
        self.0.contains_key(&property)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &StyleValue)> {
        self.0.iter().map(|(property, value)| (*property, value))
    }

    /// Shallow merge: other's keys overwrite, keys absent from other are kept
    pub fn merge(&mut self, other: &StyleMap) {
        for (property, value) in other.iter() {
            self.0.insert(property, value.clone());
        }
    }
}

impl FromIterator<(StyleProperty, StyleValue)> for StyleMap {
    fn from_iter<T: IntoIterator<Item = (StyleProperty, StyleValue)>>(iter: T) -> Self {
        StyleMap(iter.into_iter().collect())
    }
}

/// Per-breakpoint sizing modes for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleMeta {
    pub desktop: DimensionModes,
    pub tablet: DimensionModes,
    pub mobile: DimensionModes,
}

/// Per-node responsive style data: three breakpoint buckets plus sizing
/// modes. Desktop is the base bucket; tablet and mobile hold overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveStyles {
    pub desktop: StyleMap,
    pub tablet: StyleMap,
    pub mobile: StyleMap,
    pub meta: StyleMeta,
}

impl ResponsiveStyles {
    pub fn bucket(&self, breakpoint: Breakpoint) -> &StyleMap {
        match breakpoint {
            Breakpoint::Desktop => &self.desktop,
            Breakpoint::Tablet => &self.tablet,
            Breakpoint::Mobile => &self.mobile,
        }
    }

    pub fn bucket_mut(&mut self, breakpoint: Breakpoint) -> &mut StyleMap {
        match breakpoint {
            Breakpoint::Desktop => &mut self.desktop,
            Breakpoint::Tablet => &mut self.tablet,
            Breakpoint::Mobile => &mut self.mobile,
        }
    }

    /// Sizing modes at a breakpoint. Absent meta defaults to auto/auto.
    pub fn modes(&self, breakpoint: Breakpoint) -> DimensionModes {
        match breakpoint {
            Breakpoint::Desktop => self.meta.desktop,
            Breakpoint::Tablet => self.meta.tablet,
            Breakpoint::Mobile => self.meta.mobile,
        }
    }

    pub fn modes_mut(&mut self, breakpoint: Breakpoint) -> &mut DimensionModes {
        match breakpoint {
            Breakpoint::Desktop => &mut self.meta.desktop,
            Breakpoint::Tablet => &mut self.meta.tablet,
            Breakpoint::Mobile => &mut self.meta.mobile,
        }
    }
}
