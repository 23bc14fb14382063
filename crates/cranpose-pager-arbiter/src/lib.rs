//! Touch arbitration between a pannable/zoomable view and an enclosing
//! horizontal pager.
//!
//! A zoomed image inside a pager page competes with the pager for horizontal
//! drags. [`PagerArbiter`] sits in front of the inner view's gesture detector
//! and decides, per step, how much motion pans the view and how much drives
//! the pager through a fake drag, so the two never react to the same motion
//! at once. Sibling arbiters share a [`MotionGate`] so only one of them
//! handles a touch sequence.

pub mod arbiter;
pub mod drag_bridge;
pub mod exclusivity;
pub mod geometry;
pub mod gesture_constants;
pub mod inner_view;
pub mod input;
pub mod multi_pointer;
pub mod session;
pub mod settings;
pub mod split;
pub mod threshold;

pub use arbiter::{PagerArbiter, ScrollStep, TouchDisposition};
pub use drag_bridge::{DragBridge, PagerHost};
pub use exclusivity::{ArbiterId, MotionGate};
pub use geometry::{Point, Rect};
pub use inner_view::InnerView;
pub use input::{PointerId, PointerSample, Pointers, ScrollDistance, TouchAction, TouchEvent};
pub use multi_pointer::PointerPolicy;
pub use session::{GestureSession, PagingDecision};
pub use settings::ArbiterSettings;
pub use split::{split_horizontal, AxisSplit};
pub use threshold::PagingClassifier;

pub mod prelude {
    pub use crate::arbiter::{PagerArbiter, ScrollStep, TouchDisposition};
    pub use crate::drag_bridge::PagerHost;
    pub use crate::exclusivity::MotionGate;
    pub use crate::geometry::{Point, Rect};
    pub use crate::inner_view::InnerView;
    pub use crate::input::prelude::*;
    pub use crate::settings::ArbiterSettings;
}
