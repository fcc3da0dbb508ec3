use anyhow::Context;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use inkboard::config::Config;
use inkboard::export::{self, ExportTarget};
use inkboard::input::SketchSession;
use inkboard::{replay, util};

#[derive(Parser, Debug)]
#[command(name = "inkboard")]
#[command(version, about = "Headless freehand sketch canvas with snapshot-based undo/redo")]
struct Cli {
    /// Stroke script to replay (JSON array of canvas commands)
    script: PathBuf,

    /// Write the exported PNG to this exact path (overrides [export] config)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Load configuration from this file instead of ~/.config/inkboard/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Canvas width in pixels (overrides [canvas] config)
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides [canvas] config)
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,

    /// Replay the script without exporting an image
    #[arg(long, action = ArgAction::SetTrue)]
    no_export: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    // CLI overrides are subject to the same ranges as config-file values
    config.validate_and_clamp();

    let mut session = SketchSession::from_config(&config);
    log::info!(
        "Canvas {}x{}, pen {} at {}px",
        session.surface.width(),
        session.surface.height(),
        util::color_to_name(&session.tools.color()),
        session.tools.width()
    );

    let script_text = std::fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script from {}", cli.script.display()))?;
    let commands = replay::parse_script(&script_text)?;
    replay::replay(&mut session, &commands)?;

    println!(
        "Replayed {} command(s): {} undoable, redo {}",
        commands.len(),
        session.history_depth(),
        if session.can_redo() {
            "available"
        } else {
            "empty"
        }
    );

    if cli.no_export {
        return Ok(());
    }

    let target = match &cli.output {
        Some(path) => {
            let filename = path
                .file_name()
                .context("Output path has no filename")?
                .to_string_lossy()
                .into_owned();
            let directory = match path.parent() {
                Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
                Some(parent) => parent.to_path_buf(),
                None => PathBuf::from("."),
            };
            ExportTarget {
                directory,
                filename,
            }
        }
        None => config.export.to_target(),
    };

    let background = config.canvas.background.to_color();
    let path = export::export_to_file(&session.surface, background, &target)?;
    println!("Saved {}", path.display());

    Ok(())
}
