//! Canvas and preview collaborator contracts.

use pagewright_common::{Point, Rect};

/// Geometry of the mounted canvas: bounds in viewport coordinates.
/// Pointer math is done in canvas-local space so gestures are invariant
/// to canvas scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMetrics {
    pub bounds: Rect,
}

impl CanvasMetrics {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }

    pub fn width(&self) -> f64 {
        self.bounds.width
    }

    /// Translate a viewport-relative pointer position into canvas space
    pub fn to_local(&self, point: Point) -> Point {
        self.bounds.to_local(point)
    }
}

/// Access to the mounted canvas. `None` means the canvas is not mounted
/// yet; every gesture step treats that as a full no-op.
pub trait CanvasView {
    fn metrics(&self) -> Option<CanvasMetrics>;
}

/// The editing wrapper's visual box. Updated immediately and
/// unconditionally on every pointer move for responsiveness; cleared when
/// a gesture ends so the wrapper re-derives its box from the document.
pub trait ResizePreview {
    fn show(&mut self, node_id: &str, width: f64, height: f64);
    fn clear(&mut self, node_id: &str);
}
