//! Snapshot history: the undo/redo stack pair.

use super::frame::Frame;
use super::surface::Surface;
use log::debug;
use std::collections::VecDeque;

/// Undo/redo controller over full-frame snapshots.
///
/// The undo stack holds past frames, most recent last; its top always equals
/// the currently displayed content immediately after a stroke completes or a
/// clear. The redo stack holds frames popped by [`undo`](Self::undo) and is
/// emptied whenever a new snapshot is recorded — redo is only valid
/// immediately after an undo, never after a new edit.
///
/// Frames move between the stacks; they are never shared or duplicated.
#[derive(Debug, Default)]
pub struct History {
    undo_stack: VecDeque<Frame>,
    redo_stack: Vec<Frame>,
    /// Maximum number of retained frames (0 = unlimited)
    max_depth: usize,
}

impl History {
    /// Creates an empty history retaining at most `max_depth` frames
    /// (0 = unlimited).
    ///
    /// Every snapshot is a full `width * height * 4` byte copy, so long
    /// sessions want a cap; the oldest frame is evicted once the cap is hit.
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Records a newly captured frame after a stroke or clear.
    ///
    /// Pushes the frame onto the undo stack (evicting the oldest entry when
    /// the depth cap is reached) and invalidates any pending redo frames.
    pub fn record(&mut self, frame: Frame) {
        if self.max_depth > 0 && self.undo_stack.len() >= self.max_depth {
            self.undo_stack.pop_front();
            debug!("History cap ({}) reached; evicted oldest frame", self.max_depth);
        }
        self.undo_stack.push_back(frame);
        if !self.redo_stack.is_empty() {
            debug!("Discarding {} redo frame(s)", self.redo_stack.len());
            self.redo_stack.clear();
        }
    }

    /// Undoes the most recent stroke or clear.
    ///
    /// Moves the top undo frame onto the redo stack, then restores the new
    /// top frame onto the surface (or clears the surface if none remains).
    /// Returns `false` without touching the surface when there is nothing
    /// to undo.
    pub fn undo(&mut self, surface: &mut Surface) -> bool {
        let Some(frame) = self.undo_stack.pop_back() else {
            return false;
        };
        self.redo_stack.push(frame);

        match self.undo_stack.back() {
            Some(previous) => surface.restore(previous),
            None => surface.clear(),
        }
        debug!(
            "Undo applied ({} undoable, {} redoable)",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    /// Reapplies the most recently undone frame.
    ///
    /// Moves the top redo frame back onto the undo stack and restores it
    /// onto the surface. Returns `false` without touching the surface when
    /// the redo stack is empty.
    pub fn redo(&mut self, surface: &mut Surface) -> bool {
        let Some(frame) = self.redo_stack.pop() else {
            return false;
        };
        surface.restore(&frame);
        self.undo_stack.push_back(frame);
        debug!(
            "Redo applied ({} undoable, {} redoable)",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    /// Whether an undo would have any effect. Drives the undo affordance.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether a redo would have any effect. Drives the redo affordance.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of frames currently undoable.
    pub fn depth(&self) -> usize {
        self.undo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    fn painted_surface(mark: i32) -> Surface {
        let mut surface = Surface::new(8, 8);
        surface.draw_segment(mark, mark, mark, mark, RED, 1);
        surface
    }

    #[test]
    fn undo_on_empty_history_is_a_noop() {
        let mut history = History::new(0);
        let mut surface = painted_surface(3);
        let before = surface.snapshot();

        assert!(!history.undo(&mut surface));
        assert_eq!(surface.snapshot(), before);
        assert!(!history.can_undo());
    }

    #[test]
    fn redo_on_empty_stack_is_a_noop() {
        let mut history = History::new(0);
        let mut surface = painted_surface(3);
        let before = surface.snapshot();

        assert!(!history.redo(&mut surface));
        assert_eq!(surface.snapshot(), before);
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_past_first_frame_clears_the_surface() {
        let mut surface = painted_surface(2);
        let mut history = History::new(0);
        history.record(surface.snapshot());

        assert!(history.undo(&mut surface));
        assert!(surface.snapshot().is_blank());
        assert!(history.can_redo());
    }

    #[test]
    fn record_invalidates_redo() {
        let mut surface = painted_surface(1);
        let mut history = History::new(0);
        history.record(surface.snapshot());
        history.undo(&mut surface);
        assert!(history.can_redo());

        surface.draw_segment(5, 5, 5, 5, RED, 1);
        history.record(surface.snapshot());
        assert!(!history.can_redo());
        let before = surface.snapshot();
        assert!(!history.redo(&mut surface));
        assert_eq!(surface.snapshot(), before);
    }

    #[test]
    fn depth_cap_evicts_oldest_frame() {
        let mut surface = Surface::new(8, 8);
        let mut history = History::new(2);
        let mut checkpoints = Vec::new();
        for i in 0..4 {
            surface.draw_segment(i, i, i, i, RED, 1);
            history.record(surface.snapshot());
            checkpoints.push(surface.snapshot());
        }
        assert_eq!(history.depth(), 2);

        // The two newest frames survive; undoing walks back through them
        assert!(history.undo(&mut surface));
        assert_eq!(surface.snapshot(), checkpoints[2]);
        assert!(history.undo(&mut surface));
        assert!(!history.can_undo());
    }
}
