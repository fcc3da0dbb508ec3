//! Stroke operation handlers.

use crate::input::events::StrokeOp;

use super::{SketchSession, StrokeState};

impl SketchSession {
    /// Dispatches a routed stroke operation to the matching handler.
    pub fn apply(&mut self, op: StrokeOp) {
        match op {
            StrokeOp::Begin { x, y } => self.begin(x, y),
            StrokeOp::Extend { x, y } => self.extend(x, y),
            StrokeOp::End => self.end(),
        }
    }

    /// Opens a new stroke at (x, y).
    ///
    /// A `Begin` while a stroke is already active simply restarts the
    /// session at the new point; the interrupted stroke's pixels stay on the
    /// surface and are captured by the next completed stroke's snapshot.
    pub fn begin(&mut self, x: i32, y: i32) {
        self.state = StrokeState::Drawing {
            last_x: x,
            last_y: y,
        };
    }

    /// Extends the active stroke to (x, y).
    ///
    /// Draws a segment from the last point using the current tool state,
    /// then advances the last point. No-op while no stroke is active, so
    /// hover motion routed through here is harmless.
    pub fn extend(&mut self, x: i32, y: i32) {
        let StrokeState::Drawing { last_x, last_y } = self.state else {
            return;
        };
        self.surface
            .draw_segment(last_x, last_y, x, y, self.tools.color(), self.tools.width());
        self.state = StrokeState::Drawing {
            last_x: x,
            last_y: y,
        };
    }

    /// Closes the stroke session.
    ///
    /// If a stroke was active, captures a full-frame snapshot (which also
    /// invalidates any pending redo frames). Always leaves the session
    /// idle; calling `end` with no active stroke is a harmless no-op.
    pub fn end(&mut self) {
        if matches!(self.state, StrokeState::Drawing { .. }) {
            self.history.record(self.surface.snapshot());
        }
        self.state = StrokeState::Idle;
    }
}
