//! Session loop: play, win, replay.
//!
//! DESIGN
//! ======
//! [`SessionController`] is driven by the host once per frame. While the
//! session is [`SessionState::Playing`] it reads the directional pad and
//! forwards direction and intensity to the game-logic collaborator. The
//! collaborator reports completion through the [`TickOutcome`] it returns,
//! never through a callback, so no reentrant path into the controller
//! exists.
//!
//! Completion flips the session to [`SessionState::Won`]: the win overlay
//! is shown with the tile count, the world layer is hidden and the pad is
//! disabled. [`SessionController::reset`] is the only way back to playing.
//!
//! The maze itself (generation, walls, player movement) belongs to the
//! collaborator behind [`GameLogic`]; the pad behind [`Pad`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::camera::{Point, Rect, Size, ViewportTransform};
use crate::consts::{PAD_OFFSET, PAD_TOUCH_ZONE};
use crate::engine::{Action, ViewportCore};
use crate::input::{GestureState, PinchEvent, Touch};
use crate::layer::WorldLayer;

/// Headline shown above the tile count on the win overlay.
pub const WIN_HEADLINE: &str = "You reached the exit";

// =============================================================================
// CONFIGURATION
// =============================================================================

/// A maze cell, 1-based in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub row: u32,
    pub column: u32,
}

impl Tile {
    #[must_use]
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

/// Error returned by [`MazeConfiguration::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("maze grid must have at least one row and column (got {rows}x{columns})")]
    EmptyGrid { rows: u32, columns: u32 },
    #[error("block size must be positive (got {0})")]
    BlockSize(f64),
    #[error("wall thickness must not be negative (got {0})")]
    WallThickness(f64),
    #[error("{which} tile ({}, {}) lies outside the {rows}x{columns} grid", .tile.row, .tile.column)]
    TileOutOfGrid { which: &'static str, tile: Tile, rows: u32, columns: u32 },
}

/// Immutable description of a maze handed to the game-logic collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MazeConfiguration {
    pub rows: u32,
    pub columns: u32,
    /// Edge length of one cell in world-layer units.
    pub block_size: f64,
    pub wall_thickness: f64,
    pub player_start_tile: Tile,
    pub exit_tile: Tile,
}

impl Default for MazeConfiguration {
    fn default() -> Self {
        Self::default_config()
    }
}

impl MazeConfiguration {
    /// 40 by 40 cells, entering top-left and exiting bottom-right.
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            rows: 40,
            columns: 40,
            block_size: 50.0,
            wall_thickness: 5.0,
            player_start_tile: Tile::new(1, 1),
            exit_tile: Tile::new(40, 40),
        }
    }

    /// Size of the whole maze in world-layer units, closing wall included.
    #[must_use]
    pub fn total_size(&self) -> Size {
        Size::new(
            f64::from(self.columns) * self.block_size + self.wall_thickness,
            f64::from(self.rows) * self.block_size + self.wall_thickness,
        )
    }

    /// Whether `tile` addresses a cell of this grid.
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        (1..=self.rows).contains(&tile.row) && (1..=self.columns).contains(&tile.column)
    }

    /// Check the configuration describes a playable grid.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: an empty grid, a non-positive block
    /// size, a negative wall thickness, or a start/exit tile off the grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::EmptyGrid { rows: self.rows, columns: self.columns });
        }
        if !(self.block_size.is_finite() && self.block_size > 0.0) {
            return Err(ConfigError::BlockSize(self.block_size));
        }
        if !(self.wall_thickness.is_finite() && self.wall_thickness >= 0.0) {
            return Err(ConfigError::WallThickness(self.wall_thickness));
        }
        for (which, tile) in [("start", self.player_start_tile), ("exit", self.exit_tile)] {
            if !self.contains(tile) {
                return Err(ConfigError::TileOutOfGrid { which, tile, rows: self.rows, columns: self.columns });
            }
        }
        Ok(())
    }
}

// =============================================================================
// COLLABORATORS
// =============================================================================

/// Result of advancing the game logic by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// The player reached the exit after walking `tile_count` tiles.
    Ended { tile_count: usize },
}

/// The maze simulation the session drives.
pub trait GameLogic {
    /// The configuration the maze was built from.
    fn configuration(&self) -> &MazeConfiguration;

    /// Discard the current maze and build a new one.
    fn generate_new_maze(&mut self);

    /// Replace the layer's children with sprites for the current maze.
    fn set_sprites(&self, layer: &mut WorldLayer);

    /// Advance one tick with the pad's direction and intensity, moving the
    /// sprites it placed in `layer` to match.
    ///
    /// Returns [`TickOutcome::Ended`] exactly once per maze, on the tick the
    /// exit is reached.
    fn update(&mut self, layer: &mut WorldLayer, direction: Point, intensity: f64) -> TickOutcome;
}

/// A virtual directional pad.
pub trait Pad {
    /// Unit vector of the current direction, or zero when untouched.
    fn direction(&self) -> Point;

    /// Magnitude of the current input, in `[0, 1]`.
    fn intensity(&self) -> f64;

    fn set_enabled(&mut self, enabled: bool);

    fn is_enabled(&self) -> bool;
}

// =============================================================================
// UI STATE
// =============================================================================

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    #[default]
    Playing,
    Won,
}

/// The win screen drawn over the scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinOverlay {
    pub visible: bool,
    pub headline: String,
    /// Tile count line, empty until the first win.
    pub label: String,
}

impl Default for WinOverlay {
    fn default() -> Self {
        Self { visible: false, headline: WIN_HEADLINE.to_owned(), label: String::new() }
    }
}

impl WinOverlay {
    fn show(&mut self, tile_count: usize) {
        self.visible = true;
        self.label = format!("in {tile_count} tiles!");
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

/// Fixed layer holding the pad and the win overlay.
///
/// It is centred on the scene frame at scale 1; the pad sits [`PAD_OFFSET`]
/// in from the frame's bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiLayer {
    pub transform: ViewportTransform,
    /// Pad centre in UI-layer space.
    pub pad_position: Point,
}

impl UiLayer {
    #[must_use]
    pub fn new(frame: &Rect) -> Self {
        let mut transform = ViewportTransform::new();
        transform.set_position(frame.center());
        let pad_in_scene = Point::new(frame.min_x() + PAD_OFFSET, frame.min_y() + PAD_OFFSET);
        Self { transform, pad_position: transform.from_parent(pad_in_scene) }
    }

    /// Area around the pad that accepts touches, in UI-layer space.
    #[must_use]
    pub fn pad_touch_zone(&self) -> Rect {
        Rect::new(
            self.pad_position.x - PAD_TOUCH_ZONE.width / 2.0,
            self.pad_position.y - PAD_TOUCH_ZONE.height / 2.0,
            PAD_TOUCH_ZONE.width,
            PAD_TOUCH_ZONE.height,
        )
    }
}

// =============================================================================
// SESSION CONTROLLER
// =============================================================================

/// Per-frame session loop over a game-logic collaborator and a pad.
pub struct SessionController<G, P> {
    game: G,
    pad: P,
    viewport: ViewportCore,
    ui: UiLayer,
    overlay: WinOverlay,
    state: SessionState,
    last_timestamp: Option<f64>,
    frames: u64,
}

impl<G: GameLogic, P: Pad> SessionController<G, P> {
    /// Build the scene for `frame` and start the first maze.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the collaborator's configuration is not playable.
    pub fn new(game: G, pad: P, frame: Rect) -> Result<Self, ConfigError> {
        game.configuration().validate()?;

        let mut viewport = ViewportCore::new(frame);
        game.set_sprites(&mut viewport.layer);

        let mut session = Self {
            game,
            pad,
            viewport,
            ui: UiLayer::new(&frame),
            overlay: WinOverlay::default(),
            state: SessionState::Playing,
            last_timestamp: None,
            frames: 0,
        };
        session.reset();
        Ok(session)
    }

    /// Advance one rendered frame.
    pub fn update(&mut self, timestamp: f64) -> Action {
        if let Some(last) = self.last_timestamp {
            if timestamp <= last {
                warn!(timestamp, last, "frame timestamp did not advance");
            }
        }
        self.last_timestamp = Some(timestamp);
        self.frames += 1;

        if self.state != SessionState::Playing {
            return Action::None;
        }

        let direction = self.pad.direction();
        let intensity = self.pad.intensity();
        match self.game.update(&mut self.viewport.layer, direction, intensity) {
            TickOutcome::Running => Action::None,
            TickOutcome::Ended { tile_count } => self.on_game_ended(tile_count),
        }
    }

    /// Switch to the win screen after the exit was reached in `tile_count` tiles.
    pub fn on_game_ended(&mut self, tile_count: usize) -> Action {
        if self.state == SessionState::Won {
            debug!(tile_count, "completion reported while already won; ignoring");
            return Action::None;
        }
        self.state = SessionState::Won;
        self.overlay.show(tile_count);
        self.viewport.layer.set_hidden(true);
        self.viewport.gesture = GestureState::Idle;
        self.pad.set_enabled(false);
        info!(tile_count, frames = self.frames, "maze completed");
        Action::GameWon { tile_count }
    }

    /// Start a fresh maze and return to playing, from either state.
    pub fn reset(&mut self) -> Action {
        self.game.generate_new_maze();
        self.overlay.hide();
        self.game.set_sprites(&mut self.viewport.layer);
        self.viewport.layer.set_hidden(false);
        self.viewport.gesture = GestureState::Idle;
        self.pad.set_enabled(true);
        self.scale_maze_to_fit();
        self.state = SessionState::Playing;
        info!(nodes = self.viewport.layer.len(), scale = self.viewport.scale(), "new maze ready");
        Action::MazeReset
    }

    /// Scale the world layer so the whole maze height fills the frame.
    pub fn scale_maze_to_fit(&mut self) {
        let total = self.game.configuration().total_size();
        self.viewport.fit_to_height(total.height);
    }

    // --- Gestures ---

    /// Forward a pinch sample to the viewport. Ignored while the win screen is up.
    pub fn on_pinch(&mut self, event: PinchEvent) -> Action {
        if self.state == SessionState::Won {
            return Action::None;
        }
        self.viewport.on_pinch(event)
    }

    /// Forward a pan sample to the viewport. Ignored while the win screen is up.
    pub fn on_touches_moved(&mut self, touches: &[Touch]) -> Action {
        if self.state == SessionState::Won {
            return Action::None;
        }
        self.viewport.on_touches_moved(touches)
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn overlay(&self) -> &WinOverlay {
        &self.overlay
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportCore {
        &self.viewport
    }

    #[must_use]
    pub fn ui(&self) -> &UiLayer {
        &self.ui
    }

    #[must_use]
    pub fn game(&self) -> &G {
        &self.game
    }

    #[must_use]
    pub fn pad(&self) -> &P {
        &self.pad
    }

    /// Mutable pad access, for hosts that feed touch input into it.
    pub fn pad_mut(&mut self) -> &mut P {
        &mut self.pad
    }

    /// Frames processed since construction.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
