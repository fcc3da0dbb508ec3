//! JSON stroke-script parsing and replay.
//!
//! A stroke script is a JSON array of commands that drives a
//! [`SketchSession`] exactly the way live input would, which makes the full
//! pipeline (routing, drawing, history, tool state) exercisable headlessly
//! from the command line.
//!
//! ```json
//! [
//!   { "op": "width", "pixels": 4 },
//!   { "op": "color", "value": "#336699" },
//!   { "op": "begin", "x": 10, "y": 10 },
//!   { "op": "extend", "x": 60, "y": 40 },
//!   { "op": "end" },
//!   { "op": "undo" }
//! ]
//! ```

use crate::draw::Color;
use crate::input::SketchSession;
use crate::util;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One scripted canvas interaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptCommand {
    /// Start a stroke at (x, y)
    Begin { x: i32, y: i32 },
    /// Extend the active stroke to (x, y)
    Extend { x: i32, y: i32 },
    /// Finish the active stroke
    End,
    /// Clear the canvas (undoable)
    Clear,
    /// Undo the last stroke or clear
    Undo,
    /// Redo the last undone stroke or clear
    Redo,
    /// Select a palette swatch by index
    Swatch { index: usize },
    /// Set a custom stroke color (named or `#RRGGBB` hex)
    Color { value: String },
    /// Set the brush width in pixels
    Width { pixels: u32 },
    /// Switch to the eraser (paints the background color)
    Eraser,
}

/// Errors raised while parsing or replaying a stroke script.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Invalid script JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown color '{0}' in script")]
    UnknownColor(String),
}

/// Parses a stroke script from JSON.
pub fn parse_script(json: &str) -> Result<Vec<ScriptCommand>, ReplayError> {
    let commands: Vec<ScriptCommand> = serde_json::from_str(json)?;
    debug!("Parsed script with {} command(s)", commands.len());
    Ok(commands)
}

/// Replays a parsed script against a session.
///
/// Commands apply in order; the script fails fast on the first unknown
/// color, leaving the session in whatever state the commands before it
/// produced.
pub fn replay(session: &mut SketchSession, commands: &[ScriptCommand]) -> Result<(), ReplayError> {
    for command in commands {
        match command {
            ScriptCommand::Begin { x, y } => session.begin(*x, *y),
            ScriptCommand::Extend { x, y } => session.extend(*x, *y),
            ScriptCommand::End => session.end(),
            ScriptCommand::Clear => session.clear(),
            ScriptCommand::Undo => {
                session.undo();
            }
            ScriptCommand::Redo => {
                session.redo();
            }
            ScriptCommand::Swatch { index } => session.tools.select_swatch(*index),
            ScriptCommand::Color { value } => {
                let color = util::name_to_color(value)
                    .or_else(|| Color::from_hex(value))
                    .ok_or_else(|| ReplayError::UnknownColor(value.clone()))?;
                session.tools.set_custom_color(color);
            }
            ScriptCommand::Width { pixels } => session.tools.set_width(*pixels),
            ScriptCommand::Eraser => session.tools.erase_mode(),
        }
    }
    info!(
        "Replayed {} command(s); {} snapshot(s) in history",
        commands.len(),
        session.history_depth()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};
    use crate::input::ToolState;

    fn session() -> SketchSession {
        SketchSession::new(32, 32, ToolState::with_defaults(BLACK, 2, WHITE), 0)
    }

    #[test]
    fn script_draws_and_undoes() {
        let script = r#"[
            { "op": "width", "pixels": 1 },
            { "op": "color", "value": "red" },
            { "op": "begin", "x": 2, "y": 2 },
            { "op": "extend", "x": 10, "y": 2 },
            { "op": "end" },
            { "op": "undo" }
        ]"#;
        let commands = parse_script(script).unwrap();
        let mut session = session();
        replay(&mut session, &commands).unwrap();
        assert!(session.surface.snapshot().is_blank());
        assert!(session.can_redo());
    }

    #[test]
    fn hex_colors_are_accepted() {
        let commands = parse_script(r##"[{ "op": "color", "value": "#123456" }]"##).unwrap();
        let mut session = session();
        replay(&mut session, &commands).unwrap();
        assert_eq!(session.tools.color(), Color::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn unknown_colors_fail_the_replay() {
        let commands = parse_script(r#"[{ "op": "color", "value": "mauve-ish" }]"#).unwrap();
        let err = replay(&mut session(), &commands).unwrap_err();
        assert!(matches!(err, ReplayError::UnknownColor(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            parse_script("[{ \"op\": \"begin\" }]"),
            Err(ReplayError::Parse(_))
        ));
    }
}
