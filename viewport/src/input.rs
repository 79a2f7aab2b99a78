//! Input model: pinch and touch events, and the pinch gesture state machine.
//!
//! The host's gesture recognizer reports a pinch as a sequence of phases with
//! a scale factor relative to the gesture's start. [`GestureState`] tracks
//! whether a pinch is in progress; the active variant carries the
//! [`GestureSession`] captured when it began. Panning has no discrete state
//! and is driven directly by [`Touch`] samples.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// Phase of a continuous pinch gesture, as reported by the host recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinchPhase {
    /// Recognizer has not yet decided; carries no change.
    Possible,
    /// Two fingers landed and the pinch started.
    Began,
    /// Fingers moved; the relative scale changed.
    Changed,
    /// Fingers lifted normally.
    Ended,
    /// The host interrupted the gesture.
    Cancelled,
    /// Recognition failed.
    Failed,
}

impl PinchPhase {
    /// Whether this phase closes the gesture.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled | Self::Failed)
    }
}

/// One pinch sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinchEvent {
    /// Gesture phase.
    pub phase: PinchPhase,
    /// Scale relative to the finger spread when the gesture began (1.0 = unchanged).
    pub scale: f64,
}

impl PinchEvent {
    #[must_use]
    pub fn new(phase: PinchPhase, scale: f64) -> Self {
        Self { phase, scale }
    }
}

/// A touch point moving across the scene, in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Touch {
    /// Location at the current sample.
    pub location: Point,
    /// Location at the previous sample.
    pub previous_location: Point,
}

impl Touch {
    #[must_use]
    pub fn new(previous_location: Point, location: Point) -> Self {
        Self { location, previous_location }
    }

    /// Scene-space movement since the previous sample.
    #[must_use]
    pub fn delta(&self) -> Point {
        self.location - self.previous_location
    }
}

/// Per-gesture state captured when a pinch begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// Layer scale at the moment the pinch began.
    pub base_scale: f64,
}

impl GestureSession {
    /// Absolute scale proposed by a relative pinch factor, before clamping.
    #[must_use]
    pub fn proposed_scale(&self, relative: f64) -> f64 {
        relative * self.base_scale
    }
}

/// Pinch state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No pinch in progress.
    #[default]
    Idle,
    /// A pinch is in progress.
    Active(GestureSession),
}

impl GestureState {
    /// The running session, if a pinch is in progress.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        match self {
            Self::Idle => None,
            Self::Active(session) => Some(session),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}
