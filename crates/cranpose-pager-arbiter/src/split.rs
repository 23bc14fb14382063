//! Horizontal split between the inner view and the outer pager.
//!
//! Deltas here are in movement space: the signed distance the finger moved,
//! positive to the right. The pager's displacement uses the same sign, so a
//! delta opposing it undoes part of an in-progress page drag.

use crate::geometry::Rect;

/// Result of splitting one horizontal delta.
///
/// `|inner| + |outer|` equals the magnitude of the requested delta and both
/// parts carry its sign (or are zero).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AxisSplit {
    pub inner: f32,
    pub outer: f32,
}

impl AxisSplit {
    pub const ZERO: AxisSplit = AxisSplit {
        inner: 0.0,
        outer: 0.0,
    };

    /// Everything goes to the inner view.
    pub const fn inner_only(delta: f32) -> Self {
        Self {
            inner: delta,
            outer: 0.0,
        }
    }

    /// Everything goes to the pager.
    pub const fn outer_only(delta: f32) -> Self {
        Self {
            inner: 0.0,
            outer: delta,
        }
    }
}

/// Distance the inner view can still travel in direction `dir` (-1 or 1).
pub fn inner_travel(dir: f32, position_x: f32, bounds: &Rect) -> f32 {
    let available = if dir < 0.0 {
        position_x - bounds.left
    } else {
        bounds.right - position_x
    };
    available.max(0.0)
}

/// Part of the current page drag that moving in `dir` would undo.
pub fn reverse_available(dir: f32, outer_displacement: i32) -> f32 {
    let displacement = outer_displacement as f32;
    if dir * displacement < 0.0 {
        displacement.abs()
    } else {
        0.0
    }
}

/// Splits a finger movement `dx` between the inner view and the pager.
///
/// Allocation is greedy: undoing an in-progress page drag comes first, then
/// the inner view's remaining travel, and anything left extends the page
/// drag. The forward pager share may exceed what the pager accepts; the pager
/// clamps it.
pub fn split_horizontal(
    dx: f32,
    position_x: f32,
    bounds: &Rect,
    outer_displacement: i32,
) -> AxisSplit {
    if dx == 0.0 || !dx.is_finite() {
        return AxisSplit::ZERO;
    }

    let dir = dx.signum();
    let movement = dx.abs();

    let available_inner = inner_travel(dir, position_x, bounds);
    let available_outer = reverse_available(dir, outer_displacement);

    let (inner, outer) = if available_outer >= movement {
        (0.0, movement)
    } else if available_inner + available_outer >= movement {
        (movement - available_outer, available_outer)
    } else {
        (available_inner, movement - available_inner)
    };

    AxisSplit {
        inner: inner * dir,
        outer: outer * dir,
    }
}
