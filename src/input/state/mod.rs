//! Drawing session state machine.

mod core;
mod stroke;


pub use core::{SketchSession, StrokeState};
