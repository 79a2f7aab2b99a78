//! Scenario files: scripted input replayed against the session, frame by frame.
//!
//! A scenario is a JSON object with an optional maze `configuration` and a
//! list of `steps`. Each step is tagged by `type`:
//!
//! ```json
//! {"steps": [
//!   {"type": "pinch", "phase": "began", "scale": 1.0},
//!   {"type": "pinch", "phase": "changed", "scale": 0.5},
//!   {"type": "drag", "from": {"x": 10, "y": 10}, "to": {"x": 40, "y": 10}},
//!   {"type": "pad", "dx": 1, "dy": 0, "intensity": 1.0},
//!   {"type": "frames", "count": 60},
//!   {"type": "reset"}
//! ]}
//! ```

#[cfg(test)]
#[path = "scenario_test.rs"]
mod scenario_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use viewport::camera::{Point, Rect};
use viewport::engine::Action;
use viewport::input::{PinchEvent, PinchPhase, Touch};
use viewport::layer::NodeKind;
use viewport::session::{MazeConfiguration, SessionController, SessionState, Tile, WinOverlay};

use crate::AppError;
use crate::course::OpenCourse;
use crate::pad::ScriptedPad;

/// Seconds between frame ticks.
const FRAME_INTERVAL: f64 = 1.0 / 60.0;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub configuration: Option<MazeConfiguration>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// One pinch recognizer sample.
    Pinch { phase: PinchPhase, scale: f64 },
    /// One pan sample of a single finger, in scene coordinates.
    Drag { from: Point, to: Point },
    /// Hold the directional pad.
    Pad { dx: f64, dy: f64, intensity: f64 },
    /// Lift the finger off the pad.
    Release,
    /// Run this many frame ticks.
    Frames { count: u32 },
    /// Press the replay button.
    Reset,
}

/// Final scene state after a scenario has run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub state: SessionState,
    pub scale: f64,
    pub overlay: WinOverlay,
    pub layer_hidden: bool,
    pub nodes: usize,
    pub player: Tile,
    /// Layer-local position of the player node, if the maze placed one.
    pub player_sprite: Option<Point>,
    pub tiles_walked: usize,
    pub mazes: u64,
    pub frames: u64,
    /// Tile counts of every win, in order.
    pub wins: Vec<usize>,
    pub render_requests: usize,
}

impl Scenario {
    /// Parse a scenario from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Json`] if the text is not a valid scenario.
    pub fn from_json(text: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Replay every step against a fresh session on a scene of `frame`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the maze configuration is not playable.
    pub fn run(&self, frame: Rect) -> Result<Summary, AppError> {
        let config = self.configuration.unwrap_or_default();
        let mut session = SessionController::new(OpenCourse::new(config), ScriptedPad::default(), frame)?;
        let mut recorder = Recorder::default();
        let mut clock = 0.0;

        info!(steps = self.steps.len(), rows = config.rows, columns = config.columns, "running scenario");
        for (index, step) in self.steps.iter().enumerate() {
            debug!(index, ?step, "step");
            match *step {
                Step::Pinch { phase, scale } => {
                    recorder.record(session.on_pinch(PinchEvent::new(phase, scale)));
                }
                Step::Drag { from, to } => {
                    recorder.record(session.on_touches_moved(&[Touch::new(from, to)]));
                }
                Step::Pad { dx, dy, intensity } => session.pad_mut().press(Point::new(dx, dy), intensity),
                Step::Release => session.pad_mut().release(),
                Step::Frames { count } => {
                    for _ in 0..count {
                        clock += FRAME_INTERVAL;
                        recorder.record(session.update(clock));
                    }
                }
                Step::Reset => recorder.record(session.reset()),
            }
        }

        let viewport = session.viewport();
        Ok(Summary {
            state: session.state(),
            scale: viewport.scale(),
            overlay: session.overlay().clone(),
            layer_hidden: viewport.layer.is_hidden(),
            nodes: viewport.layer.len(),
            player: session.game().player(),
            player_sprite: viewport.layer.find(NodeKind::Player).map(|(_, node)| node.position),
            tiles_walked: session.game().tiles_walked(),
            mazes: session.game().generation(),
            frames: session.frames(),
            wins: recorder.wins,
            render_requests: recorder.renders,
        })
    }
}

#[derive(Default)]
struct Recorder {
    wins: Vec<usize>,
    renders: usize,
}

impl Recorder {
    fn record(&mut self, action: Action) {
        match action {
            Action::GameWon { tile_count } => self.wins.push(tile_count),
            Action::RenderNeeded => self.renders += 1,
            Action::MazeReset | Action::None => {}
        }
    }
}
