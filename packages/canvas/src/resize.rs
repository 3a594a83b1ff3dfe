//! # Resize Controller
//!
//! State machine for one interactive resize gesture, scoped to one node
//! and one breakpoint:
//!
//! ```text
//! Idle → Dragging → {Committed | Cancelled} → Idle
//! ```
//!
//! ## Protocol
//!
//! 1. **Engage**: if an affected axis is in auto mode it is promoted to
//!    fixed via a style mutation (itself an undoable step) before any pixel
//!    math, establishing a deterministic baseline.
//! 2. **Drag**: deltas are computed in canvas-local space. The preview is
//!    updated on every move; the document at most once per
//!    [`COMMIT_INTERVAL_MS`]. Each commit carries the newest size, and the
//!    release commit makes any move the window swallowed irrelevant.
//! 3. **Release**: one final unbatched commit with the exact dimensions, so
//!    the persisted state matches the last visual state. Container widths
//!    are stored as canvas percentages (2 decimals), leaf widths as pixels,
//!    heights always as pixels.
//! 4. **Cancel**: the preview is dropped; the document keeps whatever was
//!    last committed.
//!
//! Move/release calls outside `Dragging` are no-ops, which is how stale
//! pointer handlers are kept from mutating the document after a gesture
//! ends.

use crate::view::{CanvasMetrics, CanvasView, ResizePreview};
use pagewright_common::{Point, Size};
use pagewright_dom::{
    Breakpoint, LengthUnit, NodeId, SizeMode, StyleMap, StyleProperty, StyleValue,
};
use pagewright_editor::{Editor, MarkFixed};
use tracing::debug;

/// Minimum committed width in canvas units
pub const MIN_WIDTH: f64 = 50.0;
/// Minimum committed height in canvas units
pub const MIN_HEIGHT: f64 = 30.0;
/// Batching window for mid-drag document commits
pub const COMMIT_INTERVAL_MS: f64 = 16.0;

/// Which edge or corner the gesture grabbed. Corners affect both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalEdge {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

impl ResizeHandle {
    pub fn horizontal(self) -> Option<HorizontalEdge> {
        match self {
            ResizeHandle::Left | ResizeHandle::TopLeft | ResizeHandle::BottomLeft => {
                Some(HorizontalEdge::Left)
            }
            ResizeHandle::Right | ResizeHandle::TopRight | ResizeHandle::BottomRight => {
                Some(HorizontalEdge::Right)
            }
            ResizeHandle::Top | ResizeHandle::Bottom => None,
        }
    }

    pub fn vertical(self) -> Option<VerticalEdge> {
        match self {
            ResizeHandle::Top | ResizeHandle::TopLeft | ResizeHandle::TopRight => {
                Some(VerticalEdge::Top)
            }
            ResizeHandle::Bottom | ResizeHandle::BottomLeft | ResizeHandle::BottomRight => {
                Some(VerticalEdge::Bottom)
            }
            ResizeHandle::Left | ResizeHandle::Right => None,
        }
    }
}

/// One pointer event: viewport position plus the event timestamp in
/// milliseconds (the debounce clock).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub position: Point,
    pub time_ms: f64,
}

impl PointerInput {
    pub fn new(x: f64, y: f64, time_ms: f64) -> Self {
        Self {
            position: Point::new(x, y),
            time_ms,
        }
    }
}

#[derive(Debug, Clone)]
struct DragSession {
    node_id: NodeId,
    breakpoint: Breakpoint,
    horizontal: Option<HorizontalEdge>,
    vertical: Option<VerticalEdge>,
    canvas: CanvasMetrics,
    container: bool,
    /// Canvas-local position at engagement
    start: Point,
    baseline: Size,
    current: Size,
    last_commit_ms: f64,
}

/// Per-gesture resize state machine. `None` session is the Idle state.
#[derive(Debug, Default)]
pub struct ResizeController {
    session: Option<DragSession>,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Pointer-down on a resize handle. Returns false (and changes nothing)
    /// when the canvas is unmounted, the node is missing or locked, or a
    /// gesture is already active.
    ///
    /// `measured` is the wrapper's current rendered size, used as the
    /// height baseline for an auto-height axis (an auto-width axis baselines
    /// against the canvas width instead, since an auto-width node has no
    /// independent measured width).
    pub fn engage(
        &mut self,
        editor: &mut Editor,
        canvas: &dyn CanvasView,
        node_id: &str,
        handle: ResizeHandle,
        breakpoint: Breakpoint,
        pointer: PointerInput,
        measured: Size,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }
        let Some(metrics) = canvas.metrics() else {
            return false;
        };

        let (kind, locked, modes, stored_width, stored_height) = {
            let Some(node) = editor.document().get(node_id) else {
                return false;
            };
            let bucket = node.styles.bucket(breakpoint);
            (
                node.kind.clone(),
                node.locked,
                node.styles.modes(breakpoint),
                bucket.get(StyleProperty::Width).and_then(|v| v.as_length()),
                bucket.get(StyleProperty::Height).and_then(|v| v.as_length()),
            )
        };
        if locked {
            return false;
        }

        let container = editor.catalog().is_container(&kind);
        let horizontal = handle.horizontal();
        let vertical = handle.vertical();

        let baseline_width = match modes.width_mode {
            // No independent measured width exists yet: the canvas is the
            // deterministic starting size
            SizeMode::Auto => metrics.width(),
            SizeMode::Fixed => match stored_width {
                Some(length) if length.unit == LengthUnit::Percent => {
                    metrics.width() * length.value / 100.0
                }
                Some(length) if length.unit == LengthUnit::Px => length.value,
                _ => measured.width,
            },
        };
        let baseline_height = match modes.height_mode {
            SizeMode::Auto => measured.height,
            SizeMode::Fixed => match stored_height {
                Some(length) if length.unit == LengthUnit::Px => length.value,
                _ => measured.height,
            },
        };

        // Promote affected auto axes to fixed before any pixel math
        let mut promotion = StyleMap::new();
        let mut mark = MarkFixed::none();
        if horizontal.is_some() && modes.width_mode == SizeMode::Auto {
            promotion.set(
                StyleProperty::Width,
                width_value(container, metrics.width(), baseline_width),
            );
            mark.width = true;
        }
        if vertical.is_some() && modes.height_mode == SizeMode::Auto {
            promotion.set(StyleProperty::Height, StyleValue::px(baseline_height.round()));
            mark.height = true;
        }
        if !promotion.is_empty() {
            editor.update_node_styles(node_id, breakpoint, promotion, mark);
        }

        let start = metrics.to_local(pointer.position);
        debug!(node_id, ?handle, ?breakpoint, "resize engaged");
        self.session = Some(DragSession {
            node_id: node_id.to_string(),
            breakpoint,
            horizontal,
            vertical,
            canvas: metrics,
            container,
            start,
            baseline: Size::new(baseline_width, baseline_height),
            current: Size::new(baseline_width, baseline_height),
            last_commit_ms: pointer.time_ms,
        });
        true
    }

    /// Pointer-move while engaged. No-op outside `Dragging`.
    pub fn drag(
        &mut self,
        editor: &mut Editor,
        preview: &mut dyn ResizePreview,
        pointer: PointerInput,
    ) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let size = gesture_size(session, pointer.position);
        session.current = size;

        // Visual first, unconditionally
        preview.show(&session.node_id, size.width, size.height);

        if pointer.time_ms - session.last_commit_ms >= COMMIT_INTERVAL_MS {
            commit(editor, session, size);
            session.last_commit_ms = pointer.time_ms;
        }
    }

    /// Pointer-up: one final, unbatched commit with the exact dimensions.
    /// Returns the committed size, or `None` when not dragging.
    pub fn release(
        &mut self,
        editor: &mut Editor,
        preview: &mut dyn ResizePreview,
        pointer: PointerInput,
    ) -> Option<Size> {
        let mut session = self.session.take()?;

        let size = gesture_size(&session, pointer.position);
        session.current = size;
        commit(editor, &session, size);
        preview.clear(&session.node_id);
        debug!(node_id = %session.node_id, width = size.width, height = size.height, "resize committed");
        Some(size)
    }

    /// Gesture abandoned without a pointer-up (e.g. focus loss). The
    /// preview is dropped and the wrapper re-derives its box from the last
    /// committed document value on the next render pass.
    pub fn cancel(&mut self, preview: &mut dyn ResizePreview) {
        if let Some(session) = self.session.take() {
            preview.clear(&session.node_id);
            debug!(node_id = %session.node_id, "resize cancelled");
        }
    }
}

/// Compute the gesture's size at a pointer position, clamped to the
/// minimums and the canvas width.
fn gesture_size(session: &DragSession, position: Point) -> Size {
    let local = session.canvas.to_local(position);
    let delta = local.delta(session.start);

    let mut width = session.current.width;
    if let Some(edge) = session.horizontal {
        let signed = match edge {
            HorizontalEdge::Right => delta.x,
            HorizontalEdge::Left => -delta.x,
        };
        width = (session.baseline.width + signed)
            .max(MIN_WIDTH)
            .min(session.canvas.width());
    }

    let mut height = session.current.height;
    if let Some(edge) = session.vertical {
        let signed = match edge {
            VerticalEdge::Bottom => delta.y,
            VerticalEdge::Top => -delta.y,
        };
        height = (session.baseline.height + signed).max(MIN_HEIGHT);
    }

    Size::new(width, height)
}

/// Persist the affected axes. Container widths are stored as a percentage
/// of the canvas width, leaf widths in pixels, heights always in pixels.
fn commit(editor: &mut Editor, session: &DragSession, size: Size) {
    let mut styles = StyleMap::new();
    let mut mark = MarkFixed::none();

    if session.horizontal.is_some() {
        styles.set(
            StyleProperty::Width,
            width_value(session.container, session.canvas.width(), size.width),
        );
        mark.width = true;
    }
    if session.vertical.is_some() {
        styles.set(StyleProperty::Height, StyleValue::px(size.height.round()));
        mark.height = true;
    }

    editor.update_node_styles(&session.node_id, session.breakpoint, styles, mark);
}

fn width_value(container: bool, canvas_width: f64, width: f64) -> StyleValue {
    if container {
        StyleValue::percent(round2(width / canvas_width * 100.0))
    } else {
        StyleValue::px(width.round())
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_common::Rect;
    use pagewright_dom::Length;

    struct MountedCanvas(CanvasMetrics);

    impl CanvasView for MountedCanvas {
        fn metrics(&self) -> Option<CanvasMetrics> {
            Some(self.0)
        }
    }

    struct UnmountedCanvas;

    impl CanvasView for UnmountedCanvas {
        fn metrics(&self) -> Option<CanvasMetrics> {
            None
        }
    }

    #[derive(Default)]
    struct RecordingPreview {
        shows: Vec<(String, f64, f64)>,
        cleared: Vec<String>,
    }

    impl ResizePreview for RecordingPreview {
        fn show(&mut self, node_id: &str, width: f64, height: f64) {
            self.shows.push((node_id.to_string(), width, height));
        }

        fn clear(&mut self, node_id: &str) {
            self.cleared.push(node_id.to_string());
        }
    }

    fn canvas_1000() -> MountedCanvas {
        MountedCanvas(CanvasMetrics::new(Rect::new(0.0, 0.0, 1000.0, 800.0)))
    }

    fn editor_with_container() -> (Editor, String) {
        let mut editor = Editor::with_defaults();
        let id = editor
            .add_node("Container", None, None)
            .created()
            .unwrap()
            .clone();
        (editor, id)
    }

    fn fix_width(editor: &mut Editor, id: &str, value: StyleValue) {
        let styles: StyleMap = [(StyleProperty::Width, value)].into_iter().collect();
        editor.update_node_styles(id, Breakpoint::Desktop, styles, MarkFixed::width());
    }

    fn stored_width(editor: &Editor, id: &str) -> Option<Length> {
        editor
            .document()
            .get(id)
            .unwrap()
            .styles
            .desktop
            .get(StyleProperty::Width)
            .and_then(|v| v.as_length())
    }

    fn stored_height(editor: &Editor, id: &str) -> Option<Length> {
        editor
            .document()
            .get(id)
            .unwrap()
            .styles
            .desktop
            .get(StyleProperty::Height)
            .and_then(|v| v.as_length())
    }

    #[test]
    fn test_unmounted_canvas_makes_gesture_a_noop() {
        let (mut editor, id) = editor_with_container();
        let levels = editor.undo_levels();
        let mut controller = ResizeController::new();

        let engaged = controller.engage(
            &mut editor,
            &UnmountedCanvas,
            &id,
            ResizeHandle::Right,
            Breakpoint::Desktop,
            PointerInput::new(0.0, 0.0, 0.0),
            Size::new(400.0, 200.0),
        );

        assert!(!engaged);
        assert!(!controller.is_dragging());
        // No mode promotion, no mutation
        assert_eq!(editor.undo_levels(), levels);
        assert_eq!(
            editor
                .document()
                .get(&id)
                .unwrap()
                .styles
                .modes(Breakpoint::Desktop)
                .width_mode,
            SizeMode::Auto
        );
    }

    #[test]
    fn test_locked_node_refuses_engagement() {
        let (mut editor, id) = editor_with_container();
        let mut controller = ResizeController::new();

        // Lock the node through the persisted shape
        let mut saved = editor.save_tree();
        saved.nodes[0].locked = true;
        editor.load_tree(saved);

        let engaged = controller.engage(
            &mut editor,
            &canvas_1000(),
            &id,
            ResizeHandle::Right,
            Breakpoint::Desktop,
            PointerInput::new(0.0, 0.0, 0.0),
            Size::new(400.0, 200.0),
        );
        assert!(!engaged);
    }

    #[test]
    fn test_engage_promotes_auto_axes_before_pixel_math() {
        let (mut editor, id) = editor_with_container();
        let levels = editor.undo_levels();
        let mut controller = ResizeController::new();

        let engaged = controller.engage(
            &mut editor,
            &canvas_1000(),
            &id,
            ResizeHandle::BottomRight,
            Breakpoint::Desktop,
            PointerInput::new(500.0, 300.0, 0.0),
            Size::new(400.0, 200.0),
        );
        assert!(engaged);

        // Promotion is one undoable step
        assert_eq!(editor.undo_levels(), levels + 1);
        let modes = editor
            .document()
            .get(&id)
            .unwrap()
            .styles
            .modes(Breakpoint::Desktop);
        assert_eq!(modes.width_mode, SizeMode::Fixed);
        assert_eq!(modes.height_mode, SizeMode::Fixed);

        // Auto width baselines at the canvas width: 100% for a container.
        // Auto height baselines at the measured wrapper height.
        assert_eq!(stored_width(&editor, &id), Some(Length::percent(100.0)));
        assert_eq!(stored_height(&editor, &id), Some(Length::px(200.0)));
    }

    #[test]
    fn test_container_commit_rounds_to_canvas_percentage() {
        let (mut editor, id) = editor_with_container();
        fix_width(&mut editor, &id, StyleValue::px(200.0));
        let mut controller = ResizeController::new();
        let mut preview = RecordingPreview::default();

        controller.engage(
            &mut editor,
            &canvas_1000(),
            &id,
            ResizeHandle::Right,
            Breakpoint::Desktop,
            PointerInput::new(200.0, 100.0, 0.0),
            Size::new(200.0, 120.0),
        );
        // 200px baseline + 133px drag = 333px on a 1000-unit canvas
        let committed = controller.release(
            &mut editor,
            &mut preview,
            PointerInput::new(333.0, 100.0, 100.0),
        );

        assert_eq!(committed, Some(Size::new(333.0, 120.0)));
        assert_eq!(stored_width(&editor, &id), Some(Length::percent(33.3)));
        assert!(!controller.is_dragging());
        assert_eq!(preview.cleared, vec![id]);
    }

    #[test]
    fn test_leaf_commit_stores_pixels() {
        let mut editor = Editor::with_defaults();
        let root = editor.add_node("Section", None, None).created().unwrap().clone();
        let image = editor
            .add_node("Image", Some(&root), None)
            .created()
            .unwrap()
            .clone();
        fix_width(&mut editor, &image, StyleValue::px(300.0));

        let mut controller = ResizeController::new();
        let mut preview = RecordingPreview::default();
        controller.engage(
            &mut editor,
            &canvas_1000(),
            &image,
            ResizeHandle::Right,
            Breakpoint::Desktop,
            PointerInput::new(300.0, 0.0, 0.0),
            Size::new(300.0, 150.0),
        );
        controller.release(
            &mut editor,
            &mut preview,
            PointerInput::new(340.0, 0.0, 50.0),
        );

        assert_eq!(stored_width(&editor, &image), Some(Length::px(340.0)));
    }

    #[test]
    fn test_left_edge_drag_inverts_the_delta() {
        let (mut editor, id) = editor_with_container();
        fix_width(&mut editor, &id, StyleValue::px(200.0));
        let mut controller = ResizeController::new();
        let mut preview = RecordingPreview::default();

        controller.engage(
            &mut editor,
            &canvas_1000(),
            &id,
            ResizeHandle::Left,
            Breakpoint::Desktop,
            PointerInput::new(400.0, 100.0, 0.0),
            Size::new(200.0, 120.0),
        );
        // Pointer moves 40 left: width grows by 40
        let committed = controller.release(
            &mut editor,
            &mut preview,
            PointerInput::new(360.0, 100.0, 40.0),
        );
        assert_eq!(committed.map(|s| s.width), Some(240.0));
    }

    #[test]
    fn test_minimum_clamps() {
        let (mut editor, id) = editor_with_container();
        fix_width(&mut editor, &id, StyleValue::px(200.0));
        let mut controller = ResizeController::new();
        let mut preview = RecordingPreview::default();

        controller.engage(
            &mut editor,
            &canvas_1000(),
            &id,
            ResizeHandle::BottomRight,
            Breakpoint::Desktop,
            PointerInput::new(200.0, 300.0, 0.0),
            Size::new(200.0, 120.0),
        );
        let committed = controller.release(
            &mut editor,
            &mut preview,
            PointerInput::new(-900.0, -900.0, 30.0),
        );

        assert_eq!(committed, Some(Size::new(MIN_WIDTH, MIN_HEIGHT)));
    }

    #[test]
    fn test_width_never_exceeds_canvas() {
        let (mut editor, id) = editor_with_container();
        fix_width(&mut editor, &id, StyleValue::px(800.0));
        let mut controller = ResizeController::new();
        let mut preview = RecordingPreview::default();

        controller.engage(
            &mut editor,
            &canvas_1000(),
            &id,
            ResizeHandle::Right,
            Breakpoint::Desktop,
            PointerInput::new(800.0, 0.0, 0.0),
            Size::new(800.0, 100.0),
        );
        let committed = controller.release(
            &mut editor,
            &mut preview,
            PointerInput::new(2400.0, 0.0, 40.0),
        );
        assert_eq!(committed.map(|s| s.width), Some(1000.0));
        assert_eq!(stored_width(&editor, &id), Some(Length::percent(100.0)));
    }

    #[test]
    fn test_drag_updates_preview_always_but_batches_commits() {
        let (mut editor, id) = editor_with_container();
        fix_width(&mut editor, &id, StyleValue::px(200.0));
        let mut controller = ResizeController::new();
        let mut preview = RecordingPreview::default();

        controller.engage(
            &mut editor,
            &canvas_1000(),
            &id,
            ResizeHandle::Right,
            Breakpoint::Desktop,
            PointerInput::new(200.0, 0.0, 0.0),
            Size::new(200.0, 120.0),
        );

        // Within the 16 ms window: preview yes, document no
        controller.drag(&mut editor, &mut preview, PointerInput::new(210.0, 0.0, 5.0));
        controller.drag(&mut editor, &mut preview, PointerInput::new(240.0, 0.0, 10.0));
        assert_eq!(preview.shows.len(), 2);
        assert_eq!(stored_width(&editor, &id), Some(Length::px(200.0)));

        // Past the window: one commit, carrying the newest size only —
        // the swallowed 210/240 sizes never reach the document
        let versions_before = editor.version();
        controller.drag(&mut editor, &mut preview, PointerInput::new(260.0, 0.0, 20.0));
        assert_eq!(preview.shows.len(), 3);
        assert_eq!(stored_width(&editor, &id), Some(Length::percent(26.0)));
        assert_eq!(editor.version(), versions_before + 1);
    }

    #[test]
    fn test_release_commits_exact_final_state() {
        let (mut editor, id) = editor_with_container();
        fix_width(&mut editor, &id, StyleValue::px(200.0));
        let mut controller = ResizeController::new();
        let mut preview = RecordingPreview::default();

        controller.engage(
            &mut editor,
            &canvas_1000(),
            &id,
            ResizeHandle::Right,
            Breakpoint::Desktop,
            PointerInput::new(200.0, 0.0, 0.0),
            Size::new(200.0, 120.0),
        );
        // A batched commit lands mid-drag...
        controller.drag(&mut editor, &mut preview, PointerInput::new(280.0, 0.0, 20.0));
        // ...and the final commit still reflects the exact release position
        controller.release(
            &mut editor,
            &mut preview,
            PointerInput::new(301.0, 0.0, 25.0),
        );
        assert_eq!(stored_width(&editor, &id), Some(Length::percent(30.1)));
    }

    #[test]
    fn test_stale_handlers_after_release_are_noops() {
        let (mut editor, id) = editor_with_container();
        fix_width(&mut editor, &id, StyleValue::px(200.0));
        let mut controller = ResizeController::new();
        let mut preview = RecordingPreview::default();

        controller.engage(
            &mut editor,
            &canvas_1000(),
            &id,
            ResizeHandle::Right,
            Breakpoint::Desktop,
            PointerInput::new(200.0, 0.0, 0.0),
            Size::new(200.0, 120.0),
        );
        controller.release(
            &mut editor,
            &mut preview,
            PointerInput::new(250.0, 0.0, 30.0),
        );
        let width_after = stored_width(&editor, &id);

        // The gesture ended: further moves and releases change nothing
        controller.drag(&mut editor, &mut preview, PointerInput::new(900.0, 0.0, 60.0));
        let second = controller.release(
            &mut editor,
            &mut preview,
            PointerInput::new(900.0, 0.0, 70.0),
        );
        assert_eq!(second, None);
        assert_eq!(stored_width(&editor, &id), width_after);
        assert_eq!(preview.shows.len(), 0);
    }

    #[test]
    fn test_cancel_keeps_last_committed_value() {
        let (mut editor, id) = editor_with_container();
        fix_width(&mut editor, &id, StyleValue::px(200.0));
        let mut controller = ResizeController::new();
        let mut preview = RecordingPreview::default();

        controller.engage(
            &mut editor,
            &canvas_1000(),
            &id,
            ResizeHandle::Right,
            Breakpoint::Desktop,
            PointerInput::new(200.0, 0.0, 0.0),
            Size::new(200.0, 120.0),
        );
        controller.drag(&mut editor, &mut preview, PointerInput::new(280.0, 0.0, 20.0));
        let committed = stored_width(&editor, &id);

        controller.cancel(&mut preview);
        assert!(!controller.is_dragging());
        assert_eq!(preview.cleared, vec![id.clone()]);
        // The document keeps the last committed value; the visual layer
        // re-derives from it
        assert_eq!(stored_width(&editor, &id), committed);
    }

    #[test]
    fn test_percentage_stored_width_baselines_against_canvas() {
        let (mut editor, id) = editor_with_container();
        fix_width(&mut editor, &id, StyleValue::percent(50.0));
        let mut controller = ResizeController::new();
        let mut preview = RecordingPreview::default();

        controller.engage(
            &mut editor,
            &canvas_1000(),
            &id,
            ResizeHandle::Right,
            Breakpoint::Desktop,
            PointerInput::new(500.0, 0.0, 0.0),
            Size::new(500.0, 120.0),
        );
        // Baseline is 50% of 1000 = 500px; +100px drag = 600px = 60%
        controller.release(
            &mut editor,
            &mut preview,
            PointerInput::new(600.0, 0.0, 40.0),
        );
        assert_eq!(stored_width(&editor, &id), Some(Length::percent(60.0)));
    }

    #[test]
    fn test_canvas_scroll_does_not_skew_deltas() {
        // Canvas origin offset by scroll: local-space math keeps the
        // gesture invariant
        let scrolled = MountedCanvas(CanvasMetrics::new(Rect::new(120.0, 80.0, 1000.0, 800.0)));
        let (mut editor, id) = editor_with_container();
        fix_width(&mut editor, &id, StyleValue::px(200.0));
        let mut controller = ResizeController::new();
        let mut preview = RecordingPreview::default();

        controller.engage(
            &mut editor,
            &scrolled,
            &id,
            ResizeHandle::Right,
            Breakpoint::Desktop,
            PointerInput::new(320.0, 180.0, 0.0),
            Size::new(200.0, 120.0),
        );
        let committed = controller.release(
            &mut editor,
            &mut preview,
            PointerInput::new(370.0, 180.0, 40.0),
        );
        assert_eq!(committed.map(|s| s.width), Some(250.0));
    }
}
