//! Touch arbitration between a pannable inner view and its pager.
//!
//! The inner view's touch handler routes every event through
//! [`PagerArbiter::on_touch`] before its own gesture detector sees it, and
//! routes the detector's scroll and fling callbacks through
//! [`PagerArbiter::on_scroll`] and [`PagerArbiter::allows_fling`].
//!
//! ```ignore
//! match arbiter.on_touch(&event) {
//!     TouchDisposition::NotOurs => false,
//!     TouchDisposition::Swallowed => true,
//!     TouchDisposition::Forward(event) => detector.on_touch(&event),
//! }
//! ```

use std::rc::Rc;

use crate::drag_bridge::{DragBridge, PagerHost};
use crate::exclusivity::{ArbiterId, MotionGate};
use crate::inner_view::InnerView;
use crate::input::types::{ScrollDistance, TouchAction, TouchEvent};
use crate::session::GestureSession;
use crate::settings::ArbiterSettings;
use crate::split::{split_horizontal, AxisSplit};
use crate::threshold::PagingClassifier;

/// What the caller should do with a touch event after arbitration.
#[derive(Clone, Debug, PartialEq)]
pub enum TouchDisposition {
    /// The gesture belongs to another arbiter; report the event unhandled.
    NotOurs,
    /// Handled here; the inner view must not see it.
    Swallowed,
    /// Hand this snapshot to the inner view's gesture detector.
    Forward(TouchEvent),
}

/// Outcome of one horizontal scroll step, in movement space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollStep {
    /// Delta the inner view should apply.
    pub inner: f32,
    /// Pager share after classification. Only driven once paging is
    /// committed; always zero once paging is vetoed.
    pub outer: f32,
    /// Pixels the pager actually moved on this step. The pager moves in whole
    /// pixels, so sub-pixel shares are carried over to later steps of the
    /// same gesture.
    pub consumed: i32,
}

pub struct PagerArbiter {
    id: ArbiterId,
    gate: MotionGate,
    classifier: PagingClassifier,
    bridge: Option<DragBridge>,
    session: Option<GestureSession>,
    /// Pager displacement of the last finished gesture, for the fling query
    /// the detector makes while handling `Up`.
    released_displacement: i32,
}

impl PagerArbiter {
    /// Creates an arbiter sharing `gate` with its siblings.
    pub fn new(gate: &MotionGate, settings: ArbiterSettings) -> Self {
        Self {
            id: gate.register(),
            gate: gate.clone(),
            classifier: PagingClassifier::new(settings.pager_slop()),
            bridge: None,
            session: None,
            released_displacement: 0,
        }
    }

    /// Attaches the pager that overflowing horizontal motion should drive.
    pub fn attach_pager(&mut self, pager: Rc<dyn PagerHost>) {
        self.detach_pager();
        self.bridge = Some(DragBridge::new(pager));
    }

    /// Detaches the pager, ending any drag in progress.
    pub fn detach_pager(&mut self) {
        if let Some(mut bridge) = self.bridge.take() {
            bridge.end_drag();
        }
    }

    pub fn has_pager(&self) -> bool {
        self.bridge.is_some()
    }

    pub fn id(&self) -> ArbiterId {
        self.id
    }

    pub fn pager_slop(&self) -> f32 {
        self.classifier.slop()
    }

    /// State of the gesture in progress, if this arbiter owns one.
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// True while this arbiter holds the motion gate.
    pub fn is_local_motion_active(&self) -> bool {
        self.gate.is_held_by(self.id)
    }

    /// Filters one raw touch event.
    pub fn on_touch(&mut self, event: &TouchEvent) -> TouchDisposition {
        if self.gate.is_held_by_other(self.id) {
            return TouchDisposition::NotOurs;
        }

        let action = event.action();
        if action == TouchAction::Down {
            if !self.gate.try_claim(self.id) {
                return TouchDisposition::NotOurs;
            }
            self.begin_gesture();
            return TouchDisposition::Forward(event.clone());
        }
        if action.ends_gesture() {
            self.end_gesture();
            return TouchDisposition::Forward(event.clone());
        }

        let Some(session) = self.session.as_mut() else {
            return TouchDisposition::Forward(event.clone());
        };
        if self.bridge.is_none() {
            return TouchDisposition::Forward(event.clone());
        }

        let displacement = session.outer_displacement;
        match session.pointer_policy.filter(event, displacement) {
            Some(forwarded) => TouchDisposition::Forward(forwarded),
            None => TouchDisposition::Swallowed,
        }
    }

    /// Adjusts a detector scroll callback.
    ///
    /// `distance` uses detector convention (previous minus current). The
    /// horizontal part is split with the pager; the vertical part is dropped
    /// once the pager has moved during this gesture.
    pub fn on_scroll(&mut self, view: &dyn InnerView, distance: ScrollDistance) -> ScrollDistance {
        if self.bridge.is_none() || self.session.is_none() {
            return distance;
        }

        let step = self.scroll_by(view, -distance.x, -distance.y);
        let y = if self.has_driven_outer() {
            0.0
        } else {
            distance.y
        };
        ScrollDistance::new(-step.inner, y)
    }

    /// Splits a finger movement `(dx, dy)` and drives the pager with its
    /// share. Returns the step, whose `inner` part the view should apply.
    pub fn scroll_by(&mut self, view: &dyn InnerView, dx: f32, dy: f32) -> ScrollStep {
        let (Some(session), Some(bridge)) = (self.session.as_mut(), self.bridge.as_mut()) else {
            return ScrollStep {
                inner: dx,
                ..ScrollStep::default()
            };
        };

        if session.pointer_policy.vetoes_outer_drag() {
            return ScrollStep {
                inner: dx,
                ..ScrollStep::default()
            };
        }

        let bounds = view.moving_bounds();
        let split = if view.is_pan_enabled() {
            split_horizontal(dx, view.position().x, &bounds, session.outer_displacement)
        } else {
            AxisSplit::outer_only(dx)
        };
        log::trace!(
            "split {dx} -> inner {} outer {} (pager displacement {})",
            split.inner,
            split.outer,
            session.outer_displacement
        );

        let outer = self
            .classifier
            .classify(session, split.outer, dy, bounds.width());

        let consumed = if session.is_paging_committed() {
            let consumed = bridge.drive_by(session.take_whole_outer_pixels(outer));
            session.record_outer_consumed(consumed);
            consumed
        } else {
            0
        };

        ScrollStep {
            inner: split.inner,
            outer,
            consumed,
        }
    }

    /// Whether the inner view may start a fling at the end of this gesture.
    ///
    /// Once the pager has moved, the release belongs to the pager's own
    /// settle logic. Still answers for a gesture that has just ended.
    pub fn allows_fling(&self) -> bool {
        !self.has_driven_outer()
    }

    fn has_driven_outer(&self) -> bool {
        match &self.session {
            Some(session) => session.has_driven_outer(),
            None => self.released_displacement != 0,
        }
    }

    fn begin_gesture(&mut self) {
        self.session = Some(GestureSession::new());
        self.released_displacement = 0;
        if let Some(bridge) = self.bridge.as_mut() {
            bridge.begin_drag();
        }
    }

    fn end_gesture(&mut self) {
        self.gate.release(self.id);
        if let Some(bridge) = self.bridge.as_mut() {
            bridge.end_drag();
        }
        let finished = self.session.take();
        self.released_displacement = finished.map_or(0, |session| session.outer_displacement());
    }
}

impl Drop for PagerArbiter {
    fn drop(&mut self) {
        if self.is_local_motion_active() {
            log::debug!("{:?} dropped mid-gesture, releasing motion gate", self.id);
            self.end_gesture();
        }
    }
}

impl std::fmt::Debug for PagerArbiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagerArbiter")
            .field("id", &self.id)
            .field("bridge", &self.bridge)
            .field("session", &self.session)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/arbiter_tests.rs"]
mod tests;
