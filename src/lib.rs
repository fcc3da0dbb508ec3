//! Library exports for the inkboard drawing canvas.
//!
//! Exposes the raster surface, input routing, session state machine, and
//! export subsystems so that embedders (UI shells, test harnesses, the
//! bundled replay CLI) can drive a canvas without a live display.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod replay;
pub mod util;

pub use config::Config;
pub use input::SketchSession;
