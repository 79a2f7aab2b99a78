mod course;
mod pad;
mod scenario;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use viewport::camera::{Rect, Size};
use viewport::session::ConfigError;

use crate::scenario::Scenario;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to read scenario {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid maze configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("scene frame must be positive and finite (got {width}x{height})")]
    Frame { width: f64, height: f64 },
}

#[derive(Parser, Debug)]
#[command(name = "maze-viewer", about = "Replay scripted gestures and pad input against the maze viewport")]
struct Cli {
    /// Scenario file (JSON) to replay.
    #[arg(long, env = "MAZE_SCENARIO")]
    scenario: PathBuf,

    /// Scene frame width in points.
    #[arg(long, env = "MAZE_FRAME_WIDTH", default_value_t = 1024.0)]
    width: f64,

    /// Scene frame height in points.
    #[arg(long, env = "MAZE_FRAME_HEIGHT", default_value_t = 768.0)]
    height: f64,

    /// Pretty-print the summary.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let frame = scene_frame(cli.width, cli.height)?;

    let text = std::fs::read_to_string(&cli.scenario)
        .map_err(|source| AppError::Io { path: cli.scenario.clone(), source })?;
    let scenario = Scenario::from_json(&text)?;

    let summary = scenario.run(frame)?;
    tracing::info!(state = ?summary.state, wins = summary.wins.len(), frames = summary.frames, "scenario finished");

    let rendered =
        if cli.pretty { serde_json::to_string_pretty(&summary)? } else { serde_json::to_string(&summary)? };
    println!("{rendered}");
    Ok(())
}

fn scene_frame(width: f64, height: f64) -> Result<Rect, AppError> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !(valid(width) && valid(height)) {
        return Err(AppError::Frame { width, height });
    }
    Ok(Rect::from_size(Size::new(width, height)))
}
