//! Bounds clamping of world-layer children against the scene frame.
//!
//! After every scale or position change each child is converted into scene
//! space, limited to a margin-adjusted window, and written back in layer
//! space. The margin grows with the layer scale (capped at half the frame),
//! and the window is widened by the child's scaled size on the left and top
//! edges only:
//!
//! ```text
//! x ∈ [min_x + mx − width × scale, max_x − mx]
//! y ∈ [min_y + my,                 max_y − my + height × scale]
//! ```
//!
//! Children larger than the frame produce inverted ranges; [`clamp`] orders
//! the bounds so the result stays well-defined.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use tracing::trace;

use crate::camera::{Point, Rect, Size};
use crate::clamp::clamp;
use crate::consts::BOUNDS_OFFSET;
use crate::layer::{NodeId, WorldLayer};

/// Scene-space window a child's position must stay inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Clamp a scene-space point into the window.
    #[must_use]
    pub fn clamp_point(&self, point: Point) -> Point {
        Point::new(clamp(point.x, self.min_x, self.max_x), clamp(point.y, self.min_y, self.max_y))
    }

    /// Whether `point` lies inside the window, whichever way the bounds are ordered.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let within = |v: f64, a: f64, b: f64| v >= a.min(b) && v <= a.max(b);
        within(point.x, self.min_x, self.max_x) && within(point.y, self.min_y, self.max_y)
    }
}

/// Scale-dependent margins `(mx, my)`, each capped at half the frame extent.
#[must_use]
pub fn margins(scale: f64, frame: &Rect) -> (f64, f64) {
    let offset = BOUNDS_OFFSET * scale;
    (clamp(offset, 0.0, frame.width() / 2.0), clamp(offset, 0.0, frame.height() / 2.0))
}

/// Window for a child of unscaled `size` at the given layer `scale`.
#[must_use]
pub fn bounds_for(size: Size, scale: f64, frame: &Rect) -> Bounds {
    let (mx, my) = margins(scale, frame);
    Bounds {
        min_x: frame.min_x() + mx - size.width * scale,
        max_x: frame.max_x() - mx,
        min_y: frame.min_y() + my,
        max_y: frame.max_y() - my + size.height * scale,
    }
}

/// Clamp one child into its window. Returns false if `id` is stale.
pub fn clamp_node(layer: &mut WorldLayer, id: NodeId, frame: &Rect) -> bool {
    let transform = *layer.transform();
    let Some(node) = layer.get_mut(id) else {
        return false;
    };

    let in_scene = transform.to_parent(node.position);
    let bounds = bounds_for(node.size, transform.scale(), frame);
    let clamped = bounds.clamp_point(in_scene);
    if clamped != in_scene {
        trace!(node = id.0, ?in_scene, ?clamped, "clamped node to bounds");
        node.position = transform.from_parent(clamped);
    }
    true
}

/// Clamp every child of the layer into its window.
pub fn clamp_all(layer: &mut WorldLayer, frame: &Rect) {
    for id in layer.ids() {
        clamp_node(layer, id, frame);
    }
}
