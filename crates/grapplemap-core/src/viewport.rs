//! Zoom/pan transform state, orthogonal to filters, view, and layout.

use crate::geom::{Transform, Vector, vector};

pub const MIN_SCALE: f64 = 0.25;
pub const MAX_SCALE: f64 = 4.0;
pub const ZOOM_STEP: f64 = 1.25;

/// Scale factor and pan offset applied over the layout rectangles. `reset`
/// always restores the one canonical transform; zooming past the scale
/// clamp is a defined no-op rather than a failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f64,
    offset: Vector,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: vector(0.0, 0.0),
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Returns whether the transform changed (false only at the clamp bound).
    pub fn zoom_in(&mut self) -> bool {
        self.set_scale(self.scale * ZOOM_STEP)
    }

    /// Returns whether the transform changed (false only at the clamp bound).
    pub fn zoom_out(&mut self) -> bool {
        self.set_scale(self.scale / ZOOM_STEP)
    }

    fn set_scale(&mut self, scale: f64) -> bool {
        let clamped = scale.clamp(MIN_SCALE, MAX_SCALE);
        if clamped == self.scale {
            return false;
        }
        self.scale = clamped;
        true
    }

    pub fn pan(&mut self, delta: Vector) {
        self.offset += delta;
    }

    /// Restores the canonical transform (scale 1, zero offset). Idempotent.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn transform(&self) -> Transform {
        Transform::scale(self.scale, self.scale).then_translate(self.offset)
    }
}
