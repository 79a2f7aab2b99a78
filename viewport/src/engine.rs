use tracing::{debug, trace};

use crate::bounds;
use crate::camera::Rect;
use crate::input::{GestureSession, GestureState, PinchEvent, PinchPhase, Touch};
use crate::layer::WorldLayer;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers and the session loop for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    RenderNeeded,
    /// The player reached the exit; the win overlay is showing.
    GameWon { tile_count: usize },
    /// A fresh maze was generated and the session is playing again.
    MazeReset,
}

/// Viewport state and gesture handling, independent of any session or host.
///
/// Owns the world layer (children plus transform), the scene frame used as
/// the clamping reference, and the pinch state machine. Every handler that
/// changes the transform or a child position reasserts the bounds.
#[derive(Debug, Clone)]
pub struct ViewportCore {
    pub layer: WorldLayer,
    pub frame: Rect,
    pub gesture: GestureState,
}

impl ViewportCore {
    /// Create a core for a scene `frame`, with the world layer centred on it.
    #[must_use]
    pub fn new(frame: Rect) -> Self {
        let mut layer = WorldLayer::new();
        layer.transform_mut().set_position(frame.center());
        Self { layer, frame, gesture: GestureState::Idle }
    }

    // --- Gestures ---

    /// Apply one pinch sample.
    ///
    /// `Began` captures the current scale; `Changed` sets the scale to the
    /// relative factor times that base, clamped to the zoom range; terminal
    /// phases drop the session. Anything else is ignored.
    pub fn on_pinch(&mut self, event: PinchEvent) -> Action {
        match event.phase {
            PinchPhase::Began => {
                let session = GestureSession { base_scale: self.scale() };
                debug!(base_scale = session.base_scale, "pinch began");
                self.gesture = GestureState::Active(session);
                Action::None
            }
            PinchPhase::Changed => {
                let Some(session) = self.gesture.session().copied() else {
                    return Action::None;
                };
                let proposed = session.proposed_scale(event.scale);
                self.layer.transform_mut().set_scale(proposed);
                trace!(proposed, applied = self.scale(), "pinch changed");
                self.clamp_to_bounds();
                Action::RenderNeeded
            }
            phase if phase.is_terminal() => {
                if self.gesture.is_active() {
                    debug!(?phase, scale = self.scale(), "pinch finished");
                }
                self.gesture = GestureState::Idle;
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Pan the world content by the first touch's movement.
    ///
    /// The scene-space delta is divided by the layer scale and added to every
    /// child, so content tracks the finger at any zoom. Extra touches are
    /// ignored; an empty set is a no-op.
    pub fn on_touches_moved(&mut self, touches: &[Touch]) -> Action {
        let Some(first) = touches.first() else {
            return Action::None;
        };
        let local = self.layer.transform().parent_delta_to_local(first.delta());
        self.layer.offset_all(local);
        self.clamp_to_bounds();
        Action::RenderNeeded
    }

    // --- Transform ---

    /// Reassert the bounds invariant on every child.
    pub fn clamp_to_bounds(&mut self) {
        bounds::clamp_all(&mut self.layer, &self.frame);
    }

    /// Scale the layer so content of `content_height` fills the frame height.
    ///
    /// Non-positive or non-finite heights leave the scale unchanged.
    pub fn fit_to_height(&mut self, content_height: f64) {
        if !(content_height.is_finite() && content_height > 0.0) {
            return;
        }
        let scale = self.frame.height() / content_height;
        self.layer.transform_mut().set_scale(scale);
        debug!(content_height, scale = self.scale(), "fit layer to frame height");
    }

    // --- Queries ---

    /// Current layer scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.layer.transform().scale()
    }
}
