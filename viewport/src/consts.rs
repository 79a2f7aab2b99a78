//! Shared numeric constants for the viewport crate.

use crate::camera::Size;

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest allowed world-layer scale (furthest zoomed out).
pub const MAX_ZOOM_OUT: f64 = 0.1;

/// Largest allowed world-layer scale (furthest zoomed in).
pub const MAX_ZOOM_IN: f64 = 4.0;

// ── Bounds ──────────────────────────────────────────────────────

/// Unscaled margin, in scene points, kept between children and the frame edges.
pub const BOUNDS_OFFSET: f64 = 100.0;

// ── UI layer ────────────────────────────────────────────────────

/// Distance of the directional pad from the frame's bottom-left corner.
pub const PAD_OFFSET: f64 = 90.0;

/// Touch zone of the directional pad.
pub const PAD_TOUCH_ZONE: Size = Size { width: 150.0, height: 150.0 };
