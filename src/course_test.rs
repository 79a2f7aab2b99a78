#![allow(clippy::float_cmp)]

use super::*;

fn small_config() -> MazeConfiguration {
    MazeConfiguration {
        rows: 3,
        columns: 4,
        block_size: 10.0,
        wall_thickness: 2.0,
        player_start_tile: Tile::new(1, 1),
        exit_tile: Tile::new(3, 4),
    }
}

fn laid_out() -> (OpenCourse, WorldLayer) {
    let course = OpenCourse::new(small_config());
    let mut layer = WorldLayer::new();
    course.set_sprites(&mut layer);
    (course, layer)
}

fn player_sprite(layer: &WorldLayer) -> Point {
    layer.find(NodeKind::Player).map(|(_, node)| node.position).unwrap()
}

fn right() -> Point {
    Point::new(1.0, 0.0)
}

fn down() -> Point {
    Point::new(0.0, -1.0)
}

#[test]
fn new_course_starts_on_start_tile() {
    let course = OpenCourse::new(small_config());
    assert_eq!(course.player(), Tile::new(1, 1));
    assert_eq!(course.tiles_walked(), 0);
    assert_eq!(course.generation(), 0);
}

#[test]
fn sprites_cover_every_cell_plus_walls_exit_and_player() {
    let course = OpenCourse::new(small_config());
    let mut layer = WorldLayer::new();
    course.set_sprites(&mut layer);
    assert_eq!(layer.len(), 3 * 4 + 4 + 2);
    assert_eq!(layer.iter().filter(|n| n.kind == NodeKind::Floor).count(), 12);
    assert!(layer.find(NodeKind::Exit).is_some());
    assert!(layer.find(NodeKind::Player).is_some());
}

#[test]
fn sprites_are_centred_on_layer_origin() {
    let course = OpenCourse::new(small_config());
    let mut layer = WorldLayer::new();
    course.set_sprites(&mut layer);

    let floors: Vec<&Node> = layer.iter().filter(|n| n.kind == NodeKind::Floor).collect();
    let min_x = floors.iter().map(|n| n.position.x).fold(f64::INFINITY, f64::min);
    let max_x = floors.iter().map(|n| n.position.x + n.size.width).fold(f64::NEG_INFINITY, f64::max);
    let min_y = floors.iter().map(|n| n.position.y).fold(f64::INFINITY, f64::min);
    let max_y = floors.iter().map(|n| n.position.y + n.size.height).fold(f64::NEG_INFINITY, f64::max);
    assert!((min_x + max_x).abs() < 1e-9);
    assert!((min_y + max_y).abs() < 1e-9);
}

#[test]
fn first_row_is_on_top() {
    let course = OpenCourse::new(small_config());
    assert!(course.cell_origin(Tile::new(1, 1)).y > course.cell_origin(Tile::new(2, 1)).y);
    assert!(course.cell_origin(Tile::new(1, 2)).x > course.cell_origin(Tile::new(1, 1)).x);
}

#[test]
fn full_intensity_moves_one_tile_per_tick() {
    let (mut course, mut layer) = laid_out();
    assert_eq!(course.update(&mut layer, right(), 1.0), TickOutcome::Running);
    assert_eq!(course.player(), Tile::new(1, 2));
    assert_eq!(course.tiles_walked(), 1);
}

#[test]
fn partial_intensity_accumulates() {
    let (mut course, mut layer) = laid_out();
    course.update(&mut layer, right(), 0.5);
    assert_eq!(course.player(), Tile::new(1, 1));
    course.update(&mut layer, right(), 0.5);
    assert_eq!(course.player(), Tile::new(1, 2));
}

#[test]
fn releasing_pad_drops_progress() {
    let (mut course, mut layer) = laid_out();
    course.update(&mut layer, right(), 0.75);
    course.update(&mut layer, Point::ORIGIN, 0.0);
    course.update(&mut layer, right(), 0.5);
    assert_eq!(course.player(), Tile::new(1, 1));
}

#[test]
fn dominant_axis_wins() {
    let (mut course, mut layer) = laid_out();
    course.update(&mut layer, Point::new(0.3, -0.9), 1.0);
    assert_eq!(course.player(), Tile::new(2, 1));
}

#[test]
fn grid_edge_blocks_movement() {
    let (mut course, mut layer) = laid_out();
    course.update(&mut layer, Point::new(-1.0, 0.0), 1.0);
    course.update(&mut layer, Point::new(0.0, 1.0), 1.0);
    assert_eq!(course.player(), Tile::new(1, 1));
    assert_eq!(course.tiles_walked(), 0);
}

#[test]
fn reaching_exit_ends_once_with_tile_count() {
    let (mut course, mut layer) = laid_out();
    for _ in 0..3 {
        assert_eq!(course.update(&mut layer, right(), 1.0), TickOutcome::Running);
    }
    assert_eq!(course.update(&mut layer, down(), 1.0), TickOutcome::Running);
    assert_eq!(course.update(&mut layer, down(), 1.0), TickOutcome::Ended { tile_count: 5 });
    assert_eq!(course.update(&mut layer, down(), 1.0), TickOutcome::Running);
    assert_eq!(course.tiles_walked(), 5);
}

#[test]
fn regenerate_resets_walk() {
    let (mut course, mut layer) = laid_out();
    course.update(&mut layer, right(), 1.0);
    course.generate_new_maze();
    assert_eq!(course.player(), Tile::new(1, 1));
    assert_eq!(course.tiles_walked(), 0);
    assert_eq!(course.generation(), 1);
}

#[test]
fn step_moves_player_sprite_to_next_cell() {
    let (mut course, mut layer) = laid_out();
    course.update(&mut layer, right(), 1.0);
    course.update(&mut layer, down(), 1.0);
    assert_eq!(course.player(), Tile::new(2, 2));
    assert_eq!(player_sprite(&layer), course.cell_origin(Tile::new(2, 2)));
}

#[test]
fn step_keeps_pan_offset_on_player_sprite() {
    let (mut course, mut layer) = laid_out();
    layer.offset_all(Point::new(7.0, -3.0));
    course.update(&mut layer, right(), 1.0);
    assert_eq!(player_sprite(&layer), course.cell_origin(Tile::new(1, 2)) + Point::new(7.0, -3.0));
}

#[test]
fn blocked_step_leaves_sprite_in_place() {
    let (mut course, mut layer) = laid_out();
    let before = player_sprite(&layer);
    course.update(&mut layer, Point::new(-1.0, 0.0), 1.0);
    assert_eq!(player_sprite(&layer), before);
}
