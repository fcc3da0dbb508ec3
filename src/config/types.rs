//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::export::file::{ExportTarget, expand_tilde};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas geometry and background settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background color the eraser paints with and exports composite over.
    /// A fixed value, never sampled from the canvas.
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Drawing tool defaults.
///
/// Controls the initial tool state of a new session; the palette, color
/// input, and width slider change these at runtime.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default stroke color - a named color (red, green, blue, yellow,
    /// orange, pink, white, black), a `#RRGGBB` hex string, or an RGB array
    /// like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush width in pixels (valid range: 1 - 64)
    #[serde(default = "default_width")]
    pub default_width: u32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
        }
    }
}

/// Undo history settings.
///
/// Every history entry is a full-frame snapshot (width * height * 4 bytes),
/// so unbounded history grows quickly in long sessions.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum number of undoable snapshots (0 = unlimited). The oldest
    /// snapshot is evicted once the cap is reached.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

/// Export destination settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported images are written to (supports `~`).
    /// Defaults to a `Inkboard` folder in the user's pictures directory.
    #[serde(default)]
    pub directory: Option<String>,

    /// Export filename; supports chrono format specifiers
    /// (e.g. `sketch_%Y-%m-%d.png`)
    #[serde(default = "default_filename")]
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filename: default_filename(),
        }
    }
}

impl ExportConfig {
    /// Resolves the configured destination into an [`ExportTarget`].
    pub fn to_target(&self) -> ExportTarget {
        let defaults = ExportTarget::default();
        ExportTarget {
            directory: self
                .directory
                .as_deref()
                .map(expand_tilde)
                .unwrap_or(defaults.directory),
            filename: self.filename.clone(),
        }
    }
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_width() -> u32 {
    4
}

fn default_max_depth() -> usize {
    64
}

fn default_filename() -> String {
    crate::export::DEFAULT_FILENAME.to_string()
}
