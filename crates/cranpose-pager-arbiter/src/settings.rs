//! Arbiter configuration.

use crate::gesture_constants::{DRAG_THRESHOLD, PAGER_SLOP_MULTIPLIER};

/// Tunables for a [`PagerArbiter`](crate::PagerArbiter).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArbiterSettings {
    /// Platform touch slop in pixels of the event coordinate space.
    pub touch_slop: f32,
}

impl Default for ArbiterSettings {
    fn default() -> Self {
        Self {
            touch_slop: DRAG_THRESHOLD,
        }
    }
}

impl ArbiterSettings {
    /// Creates settings with the default touch slop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default touch slop scaled to device pixels.
    ///
    /// Non-finite or non-positive densities fall back to `1.0`.
    pub fn for_density(density: f32) -> Self {
        let density = if density.is_finite() && density > 0.0 {
            density
        } else {
            1.0
        };
        Self {
            touch_slop: DRAG_THRESHOLD * density,
        }
    }

    /// Overrides the touch slop.
    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop.max(0.0);
        self
    }

    /// Threshold used by the paging classifier: twice the touch slop.
    pub fn pager_slop(&self) -> f32 {
        PAGER_SLOP_MULTIPLIER * self.touch_slop
    }
}
