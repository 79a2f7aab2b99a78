//! Wall-free stand-in for the maze game logic.
//!
//! `OpenCourse` lays out one floor node per cell inside a closing wall and
//! walks the player one tile at a time in the pad's dominant direction. It
//! has no interior walls and no generation algorithm; it exists so the
//! headless driver can exercise the session loop end to end.

#[cfg(test)]
#[path = "course_test.rs"]
mod course_test;

use tracing::debug;
use viewport::camera::{Point, Size};
use viewport::layer::{Node, NodeKind, WorldLayer};
use viewport::session::{GameLogic, MazeConfiguration, Tile, TickOutcome};

/// Pad intensity that must accumulate before the player advances one tile.
const STEP_THRESHOLD: f64 = 1.0;

pub struct OpenCourse {
    config: MazeConfiguration,
    player: Tile,
    tiles_walked: usize,
    progress: f64,
    finished: bool,
    generation: u64,
}

impl OpenCourse {
    #[must_use]
    pub fn new(config: MazeConfiguration) -> Self {
        Self {
            player: config.player_start_tile,
            config,
            tiles_walked: 0,
            progress: 0.0,
            finished: false,
            generation: 0,
        }
    }

    #[must_use]
    pub fn player(&self) -> Tile {
        self.player
    }

    #[must_use]
    pub fn tiles_walked(&self) -> usize {
        self.tiles_walked
    }

    /// How many mazes have been generated so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Local position of a cell's origin. The maze is centred on the layer origin;
    /// row 1 is the top row.
    fn cell_origin(&self, tile: Tile) -> Point {
        let total = self.config.total_size();
        let block = self.config.block_size;
        let inset = self.config.wall_thickness / 2.0;
        Point::new(
            -total.width / 2.0 + inset + f64::from(tile.column - 1) * block,
            total.height / 2.0 - inset - f64::from(tile.row) * block,
        )
    }

    /// Neighbour of the player in the pad's dominant direction, if it stays on the grid.
    fn step_target(&self, direction: Point) -> Option<Tile> {
        let Tile { row, column } = self.player;
        let target = if direction.x.abs() >= direction.y.abs() && direction.x != 0.0 {
            if direction.x > 0.0 { Tile::new(row, column.checked_add(1)?) } else { Tile::new(row, column.checked_sub(1)?) }
        } else if direction.y != 0.0 {
            // Scene y grows upwards, rows grow downwards.
            if direction.y > 0.0 { Tile::new(row.checked_sub(1)?, column) } else { Tile::new(row.checked_add(1)?, column) }
        } else {
            return None;
        };
        self.config.contains(target).then_some(target)
    }

    /// Shift the player node by one cell towards `target`, keeping any pan
    /// offset already applied to it.
    fn move_sprite(&self, layer: &mut WorldLayer, target: Tile) {
        let Some((id, node)) = layer.find(NodeKind::Player) else {
            return;
        };
        let step = self.cell_origin(target) - self.cell_origin(self.player);
        let position = node.position + step;
        layer.set_position(id, position);
    }

    fn walls(&self) -> [Node; 4] {
        let total = self.config.total_size();
        let wall = self.config.wall_thickness;
        let (half_w, half_h) = (total.width / 2.0, total.height / 2.0);
        [
            Node::new(NodeKind::Wall, Point::new(-half_w, half_h - wall), Size::new(total.width, wall)),
            Node::new(NodeKind::Wall, Point::new(-half_w, -half_h), Size::new(total.width, wall)),
            Node::new(NodeKind::Wall, Point::new(-half_w, -half_h), Size::new(wall, total.height)),
            Node::new(NodeKind::Wall, Point::new(half_w - wall, -half_h), Size::new(wall, total.height)),
        ]
    }
}

impl GameLogic for OpenCourse {
    fn configuration(&self) -> &MazeConfiguration {
        &self.config
    }

    fn generate_new_maze(&mut self) {
        self.player = self.config.player_start_tile;
        self.tiles_walked = 0;
        self.progress = 0.0;
        self.finished = false;
        self.generation += 1;
        debug!(generation = self.generation, "course regenerated");
    }

    fn set_sprites(&self, layer: &mut WorldLayer) {
        let block = Size::new(self.config.block_size, self.config.block_size);
        let mut nodes = Vec::new();
        for row in 1..=self.config.rows {
            for column in 1..=self.config.columns {
                nodes.push(Node::new(NodeKind::Floor, self.cell_origin(Tile::new(row, column)), block));
            }
        }
        nodes.extend(self.walls());
        nodes.push(Node::new(NodeKind::Exit, self.cell_origin(self.config.exit_tile), block));
        nodes.push(Node::new(NodeKind::Player, self.cell_origin(self.player), block));
        layer.replace(nodes);
    }

    fn update(&mut self, layer: &mut WorldLayer, direction: Point, intensity: f64) -> TickOutcome {
        if self.finished {
            return TickOutcome::Running;
        }
        if direction == Point::ORIGIN {
            self.progress = 0.0;
            return TickOutcome::Running;
        }

        self.progress += intensity.clamp(0.0, 1.0);
        if self.progress < STEP_THRESHOLD {
            return TickOutcome::Running;
        }
        self.progress -= STEP_THRESHOLD;

        let Some(target) = self.step_target(direction) else {
            return TickOutcome::Running;
        };
        self.move_sprite(layer, target);
        self.player = target;
        self.tiles_walked += 1;

        if self.player == self.config.exit_tile {
            self.finished = true;
            return TickOutcome::Ended { tile_count: self.tiles_walked };
        }
        TickOutcome::Running
    }
}
