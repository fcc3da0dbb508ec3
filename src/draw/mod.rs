//! Raster drawing primitives and snapshot history.
//!
//! This module defines the core types behind the canvas:
//! - [`Color`]: opaque RGB color with predefined palette constants
//! - [`Surface`]: the paintable RGBA pixel buffer
//! - [`Frame`]: an immutable full-frame snapshot of the surface
//! - [`History`]: the undo/redo stack pair moving frames on and off the surface

pub mod color;
pub mod frame;
pub mod history;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use frame::Frame;
pub use history::History;
pub use surface::Surface;

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
