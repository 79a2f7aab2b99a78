//! Directional pad driven by scenario steps instead of touches.

#[cfg(test)]
#[path = "pad_test.rs"]
mod pad_test;

use viewport::camera::Point;
use viewport::session::Pad;

#[derive(Debug, Clone, Default)]
pub struct ScriptedPad {
    direction: Point,
    intensity: f64,
    enabled: bool,
}

impl ScriptedPad {
    /// Hold the pad in `direction` at `intensity`.
    ///
    /// The direction is normalised to a unit vector (zero stays zero) and the
    /// intensity is limited to `[0, 1]`.
    pub fn press(&mut self, direction: Point, intensity: f64) {
        let length = direction.x.hypot(direction.y);
        self.direction = if length > 0.0 && length.is_finite() { direction / length } else { Point::ORIGIN };
        self.intensity = if intensity.is_nan() { 0.0 } else { intensity.clamp(0.0, 1.0) };
    }

    /// Lift the finger off the pad.
    pub fn release(&mut self) {
        self.direction = Point::ORIGIN;
        self.intensity = 0.0;
    }
}

impl Pad for ScriptedPad {
    fn direction(&self) -> Point {
        if self.enabled { self.direction } else { Point::ORIGIN }
    }

    fn intensity(&self) -> f64 {
        if self.enabled { self.intensity } else { 0.0 }
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.release();
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
