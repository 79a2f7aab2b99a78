#![allow(clippy::float_cmp)]

use super::*;
use crate::camera::ViewportTransform;
use crate::consts::{MAX_ZOOM_IN, MAX_ZOOM_OUT};
use crate::layer::{Node, NodeKind};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn frame() -> Rect {
    Rect::new(0.0, 0.0, 1024.0, 768.0)
}

fn centered_layer(scale: f64) -> WorldLayer {
    let mut layer = WorldLayer::new();
    let t = layer.transform_mut();
    t.set_position(frame().center());
    t.set_scale(scale);
    layer
}

fn tile(x: f64, y: f64) -> Node {
    Node::new(NodeKind::Floor, Point::new(x, y), Size::new(50.0, 50.0))
}

fn scene_position(layer: &WorldLayer, id: NodeId) -> Point {
    layer.transform().to_parent(layer.get(id).unwrap().position)
}

fn assert_contained(layer: &WorldLayer, frame: &Rect) {
    let scale = layer.transform().scale();
    for (index, node) in layer.iter().enumerate() {
        let p = layer.transform().to_parent(node.position);
        let b = bounds_for(node.size, scale, frame);
        let slack = |lo: f64, hi: f64, v: f64| v >= lo.min(hi) - EPSILON && v <= lo.max(hi) + EPSILON;
        assert!(
            slack(b.min_x, b.max_x, p.x) && slack(b.min_y, b.max_y, p.y),
            "node {index} at {p:?} outside {b:?} (scale {scale})"
        );
    }
}

// =============================================================
// margins / bounds_for
// =============================================================

#[test]
fn margins_scale_with_zoom() {
    assert_eq!(margins(1.0, &frame()), (100.0, 100.0));
    assert_eq!(margins(0.5, &frame()), (50.0, 50.0));
}

#[test]
fn margins_capped_at_half_frame() {
    let (mx, my) = margins(MAX_ZOOM_IN, &frame());
    assert_eq!(mx, 400.0);
    assert_eq!(my, 384.0);
}

#[test]
fn bounds_widen_left_and_top_by_scaled_size() {
    let b = bounds_for(Size::new(50.0, 40.0), 2.0, &frame());
    assert_eq!(b.min_x, 200.0 - 100.0);
    assert_eq!(b.max_x, 1024.0 - 200.0);
    assert_eq!(b.min_y, 200.0);
    assert_eq!(b.max_y, 768.0 - 200.0 + 80.0);
}

#[test]
fn bounds_respect_frame_origin() {
    let offset = Rect::new(-100.0, 50.0, 1024.0, 768.0);
    let b = bounds_for(Size::new(0.0, 0.0), 1.0, &offset);
    assert_eq!(b.min_x, 0.0);
    assert_eq!(b.max_x, 824.0);
    assert_eq!(b.min_y, 150.0);
    assert_eq!(b.max_y, 718.0);
}

#[test]
fn bounds_contains_is_order_insensitive() {
    let b = Bounds { min_x: 10.0, max_x: 0.0, min_y: 0.0, max_y: 10.0 };
    assert!(b.contains(Point::new(5.0, 5.0)));
    assert!(!b.contains(Point::new(11.0, 5.0)));
}

// =============================================================
// clamp_node / clamp_all
// =============================================================

#[test]
fn child_inside_window_is_untouched() {
    let mut layer = centered_layer(1.0);
    let id = layer.push(tile(0.0, 0.0));
    clamp_all(&mut layer, &frame());
    assert_eq!(layer.get(id).unwrap().position, Point::new(0.0, 0.0));
}

#[test]
fn child_past_right_edge_is_pulled_back() {
    let mut layer = centered_layer(1.0);
    let id = layer.push(tile(1000.0, 0.0));
    clamp_all(&mut layer, &frame());
    assert!(approx_eq(scene_position(&layer, id).x, 924.0));
    assert!(approx_eq(layer.get(id).unwrap().position.x, 412.0));
    assert_eq!(layer.get(id).unwrap().position.y, 0.0);
}

#[test]
fn child_below_bottom_edge_is_pulled_up() {
    let mut layer = centered_layer(1.0);
    let id = layer.push(tile(0.0, -1000.0));
    clamp_all(&mut layer, &frame());
    assert!(approx_eq(scene_position(&layer, id).y, 100.0));
    assert!(approx_eq(layer.get(id).unwrap().position.y, -284.0));
}

#[test]
fn child_may_overhang_left_edge_by_its_width() {
    let mut layer = centered_layer(1.0);
    let id = layer.push(tile(-460.0, 0.0));
    clamp_all(&mut layer, &frame());
    assert!(approx_eq(scene_position(&layer, id).x, 52.0));

    layer.set_position(id, Point::new(-1000.0, 0.0));
    clamp_all(&mut layer, &frame());
    assert!(approx_eq(scene_position(&layer, id).x, 50.0));
}

#[test]
fn child_may_overhang_top_edge_by_its_height() {
    let mut layer = centered_layer(1.0);
    let id = layer.push(tile(0.0, 1000.0));
    clamp_all(&mut layer, &frame());
    assert!(approx_eq(scene_position(&layer, id).y, 718.0));
}

#[test]
fn clamp_at_max_zoom_out_uses_small_margin() {
    let mut layer = centered_layer(MAX_ZOOM_OUT);
    let id = layer.push(tile(10_000.0, 0.0));
    clamp_all(&mut layer, &frame());
    assert!(approx_eq(scene_position(&layer, id).x, 1014.0));
    assert!(approx_eq(layer.get(id).unwrap().position.x, 5020.0));
}

#[test]
fn clamp_node_stale_id_returns_false() {
    let mut layer = centered_layer(1.0);
    assert!(!clamp_node(&mut layer, NodeId(7), &frame()));
}

#[test]
fn clamp_node_only_touches_target() {
    let mut layer = centered_layer(1.0);
    let a = layer.push(tile(5000.0, 0.0));
    let b = layer.push(tile(5000.0, 0.0));
    assert!(clamp_node(&mut layer, a, &frame()));
    assert!(approx_eq(scene_position(&layer, a).x, 924.0));
    assert_eq!(layer.get(b).unwrap().position.x, 5000.0);
}

#[test]
fn clamp_all_is_idempotent() {
    let mut layer = centered_layer(0.73);
    for (x, y) in [(9000.0, 9000.0), (-9000.0, -9000.0), (123.4, -56.7), (-700.0, 300.0)] {
        layer.push(tile(x, y));
    }
    clamp_all(&mut layer, &frame());
    let first: Vec<Point> = layer.iter().map(|n| n.position).collect();
    clamp_all(&mut layer, &frame());
    let second: Vec<Point> = layer.iter().map(|n| n.position).collect();
    for (a, b) in first.iter().zip(&second) {
        assert!(approx_eq(a.x, b.x) && approx_eq(a.y, b.y), "{a:?} moved to {b:?}");
    }
}

#[test]
fn containment_holds_across_scales_and_offsets() {
    let frame = frame();
    for scale in [MAX_ZOOM_OUT, 0.25, 0.5, 1.0, 1.75, 3.0, MAX_ZOOM_IN] {
        let mut layer = centered_layer(scale);
        for i in -5..=5 {
            let v = f64::from(i) * 997.0;
            layer.push(tile(v, -v));
            layer.push(Node::new(NodeKind::Wall, Point::new(-v, v * 0.5), Size::new(5.0, 2000.0)));
        }
        clamp_all(&mut layer, &frame);
        assert_contained(&layer, &frame);
    }
}

#[test]
fn oversized_child_at_max_zoom_out_is_well_defined() {
    let mut layer = centered_layer(1.0);
    layer.transform_mut().set_scale(0.05);
    assert_eq!(layer.transform().scale(), MAX_ZOOM_OUT);
    let id = layer.push(Node::new(NodeKind::Wall, Point::new(-50_000.0, 0.0), Size::new(100_000.0, 100_000.0)));
    clamp_all(&mut layer, &frame());
    let p = layer.get(id).unwrap().position;
    assert!(p.x.is_finite() && p.y.is_finite());
    assert_contained(&layer, &frame());
}

#[test]
fn inverted_window_still_produces_finite_position() {
    let mut layer = centered_layer(1.0);
    let id = layer.push(Node::new(NodeKind::Wall, Point::new(0.0, 0.0), Size::new(-2000.0, -2000.0)));
    clamp_all(&mut layer, &frame());
    let p = scene_position(&layer, id);
    let b = bounds_for(Size::new(-2000.0, -2000.0), 1.0, &frame());
    assert!(b.min_x > b.max_x);
    assert!(b.contains(p));
}

#[test]
fn clamp_uses_layer_transform_not_identity() {
    let mut layer = WorldLayer::new();
    *layer.transform_mut() = ViewportTransform::new();
    let id = layer.push(tile(2000.0, 2000.0));
    clamp_all(&mut layer, &frame());
    assert!(approx_eq(layer.get(id).unwrap().position.x, 924.0));
    assert!(approx_eq(layer.get(id).unwrap().position.y, 718.0));
}
