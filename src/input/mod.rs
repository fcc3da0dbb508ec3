//! Input handling and drawing session state.
//!
//! This module translates raw pointer and touch events into a small closed
//! set of stroke operations, and maintains the session state machine that
//! applies them: tool state (color, width, palette), the active stroke, and
//! undo/redo history.

pub mod events;
pub mod palette;
pub mod router;
pub mod state;

// Re-export commonly used types at module level
pub use events::{PointerEvent, StrokeOp, TouchEvent};
pub use palette::{Swatch, ToolState};
pub use router::InputRouter;
pub use state::{SketchSession, StrokeState};
