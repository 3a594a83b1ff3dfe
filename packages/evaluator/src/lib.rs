//! # Pagewright Evaluator
//!
//! Resolves a node's per-breakpoint style data into the one effective style
//! set a rendering consumer applies at the active breakpoint.
//!
//! The resolver is a pure function: identical inputs always yield an
//! identical effective style map, independent of call order or prior calls.

mod resolver;

pub use resolver::{resolve, EffectiveStyle};
