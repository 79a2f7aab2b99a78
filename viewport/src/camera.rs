//! Geometry primitives and the world-layer viewport transform.
//!
//! Two coordinate spaces meet here. The *parent* space is the fixed scene
//! frame the host presents; the *local* space is the world layer the maze
//! is laid out in. [`ViewportTransform`] is the uniform scale plus
//! translation that maps one onto the other.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::clamp::clamp;
use crate::consts::{MAX_ZOOM_IN, MAX_ZOOM_OUT};

/// A point in either scene (parent) or world-layer (local) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// Width and height, unscaled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle with y growing upwards from `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { origin: Point::new(x, y), size: Size::new(width, height) }
    }

    /// A rectangle anchored at the origin, as a scene frame of `size` is.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self { origin: Point::ORIGIN, size }
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.origin.x + self.size.width * 0.5, self.origin.y + self.size.height * 0.5)
    }
}

/// Direction of a coordinate conversion through a [`ViewportTransform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Local (world-layer) space into parent (scene) space.
    ToParent,
    /// Parent (scene) space into local (world-layer) space.
    FromParent,
}

/// Uniform scale and translation applied to the world layer as a whole.
///
/// `position` is where the layer's local origin sits in parent space.
/// `scale` always lies in `[MAX_ZOOM_OUT, MAX_ZOOM_IN]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    scale: f64,
    position: Point,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self { scale: 1.0, position: Point::ORIGIN }
    }
}

impl ViewportTransform {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current uniform scale (same on both axes).
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Set the uniform scale, limited to the zoom range. Non-finite input is ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            return;
        }
        self.scale = clamp(scale, MAX_ZOOM_OUT, MAX_ZOOM_IN);
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Convert a local-space point to parent space.
    #[must_use]
    pub fn to_parent(&self, local: Point) -> Point {
        self.position + local * self.scale
    }

    /// Convert a parent-space point to local space.
    #[must_use]
    pub fn from_parent(&self, parent: Point) -> Point {
        (parent - self.position) / self.scale
    }

    #[must_use]
    pub fn convert(&self, point: Point, direction: Conversion) -> Point {
        match direction {
            Conversion::ToParent => self.to_parent(point),
            Conversion::FromParent => self.from_parent(point),
        }
    }

    /// Convert a parent-space displacement to a local-space displacement.
    ///
    /// Translation does not apply to deltas, only scale does.
    #[must_use]
    pub fn parent_delta_to_local(&self, delta: Point) -> Point {
        delta / self.scale
    }
}
