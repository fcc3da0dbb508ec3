//! Session object owning the surface, tool state, and history.

use crate::config::Config;
use crate::draw::{History, Surface};
use crate::input::palette::ToolState;
use log::debug;

/// Transient pointer session state machine.
///
/// Created on stroke start, destroyed on stroke end or the pointer leaving
/// the surface. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeState {
    /// Not actively drawing - waiting for a stroke to begin
    Idle,
    /// Actively drawing (pointer engaged)
    Drawing {
        /// Last known X coordinate, start of the next segment
        last_x: i32,
        /// Last known Y coordinate, start of the next segment
        last_y: i32,
    },
}

/// One independent drawing canvas session.
///
/// Owns the surface, the tool state, the undo/redo history, and the
/// transient stroke state. All event handlers operate on this single
/// explicit object, so multiple canvases can coexist and everything is unit
/// testable without a live UI. Everything runs on the caller's thread; each
/// operation runs to completion before the next, so no locking is involved.
pub struct SketchSession {
    /// The paintable raster area
    pub surface: Surface,
    /// Current color, brush width, and palette
    pub tools: ToolState,
    pub(super) history: History,
    pub(super) state: StrokeState,
}

impl SketchSession {
    /// Creates a session over a fresh transparent surface.
    ///
    /// `max_history_depth` caps the number of retained snapshots
    /// (0 = unlimited).
    pub fn new(width: u32, height: u32, tools: ToolState, max_history_depth: usize) -> Self {
        debug!(
            "New sketch session {}x{} (history depth: {})",
            width,
            height,
            if max_history_depth == 0 {
                "unlimited".to_string()
            } else {
                max_history_depth.to_string()
            }
        );
        Self {
            surface: Surface::new(width, height),
            tools,
            history: History::new(max_history_depth),
            state: StrokeState::Idle,
        }
    }

    /// Creates a session from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let tools = ToolState::with_defaults(
            config.drawing.default_color.to_color(),
            config.drawing.default_width,
            config.canvas.background.to_color(),
        );
        Self::new(
            config.canvas.width,
            config.canvas.height,
            tools,
            config.history.max_depth,
        )
    }

    /// Clears the surface and records the blank frame as an undoable step.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.history.record(self.surface.snapshot());
        debug!("Canvas cleared");
    }

    /// Undoes the most recent stroke or clear. Returns whether anything
    /// changed; an empty history is a harmless no-op.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.surface)
    }

    /// Reapplies the most recently undone frame. Returns whether anything
    /// changed; an empty redo stack is a harmless no-op.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.surface)
    }

    /// Whether the undo affordance should be enabled.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether the redo affordance should be enabled.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Whether a stroke is currently in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, StrokeState::Drawing { .. })
    }

    /// Number of snapshots currently held by the undo stack.
    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }
}
