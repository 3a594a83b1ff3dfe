//! # Pagewright DOM
//!
//! The page-builder document model: a tree of component nodes with
//! per-breakpoint style overrides.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ dom: PageDocument + Node + ResponsiveStyles │
//! │  - Authoritative node map                   │
//! │  - Structural primitives (attach/detach)    │
//! │  - Typed style model                        │
//! │  - Component catalog + attach policy        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: mutations + snapshot history        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ evaluator: ResponsiveStyles → EffectiveStyle│
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The document is an owned value, not a global: embedders hold a
//! `PageDocument` (usually via `pagewright_editor::Editor`) and pass it
//! by reference. Multiple independent documents can coexist.

mod catalog;
mod document;
mod id_generator;
mod node;
mod styles;

pub use catalog::{AllowAll, AttachPolicy, Attachment, ComponentCatalog, ComponentSpec};
pub use document::PageDocument;
pub use id_generator::{get_document_seed, IdGenerator};
pub use node::{Node, NodeId, PropMap};
pub use styles::{
    Breakpoint, DimensionModes, Length, LengthUnit, ResponsiveStyles, SizeMode, StyleMap,
    StyleMeta, StyleProperty, StyleValue,
};
