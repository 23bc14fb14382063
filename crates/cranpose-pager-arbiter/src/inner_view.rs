//! Inner view seam.

use crate::geometry::{Point, Rect};

/// Pan/zoom engine that owns the inner view's state.
///
/// The arbiter only reads it; panning, zooming and flinging stay in the
/// engine, which calls back into the arbiter from its gesture detector.
pub trait InnerView {
    /// Current content position.
    fn position(&self) -> Point;

    /// Rectangle of positions the content may occupy at the current zoom.
    fn moving_bounds(&self) -> Rect;

    /// Whether the engine pans at all. When it does not, horizontal motion
    /// is offered to the pager in full.
    fn is_pan_enabled(&self) -> bool {
        true
    }
}
