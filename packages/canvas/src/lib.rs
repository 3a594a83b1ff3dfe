//! # Pagewright Canvas
//!
//! The interactive layer between pointer gestures and the document: the
//! resize protocol that turns drag deltas into committed style mutations.
//!
//! The canvas itself (a mounted viewport with scroll position) and the
//! editing wrapper (the visual box that tracks the node during a drag) are
//! external collaborators reached through the [`CanvasView`] and
//! [`ResizePreview`] traits. The document is always the source of truth;
//! the preview is a derived view that can be discarded and rebuilt.

mod resize;
mod view;

pub use resize::{
    HorizontalEdge, PointerInput, ResizeController, ResizeHandle, VerticalEdge,
    COMMIT_INTERVAL_MS, MIN_HEIGHT, MIN_WIDTH,
};
pub use view::{CanvasMetrics, CanvasView, ResizePreview};
