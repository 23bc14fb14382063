//! Robot that drives full gestures through a pager arbiter.
//!
//! The robot plays the part of the inner view's touch handler: it converts
//! screen coordinates into coordinates local to the page (which moves while
//! the pager is dragged), runs them through the arbiter, and feeds forwarded
//! events into a minimal scroll detector that applies the adjusted distances
//! to a [`FakeInnerView`].
//!
//! # Example
//!
//! ```
//! use cranpose_pager_arbiter::{ArbiterSettings, MotionGate, PagerArbiter};
//! use cranpose_testing::{FakeInnerView, FakePager, GestureRobot};
//! use std::rc::Rc;
//!
//! let gate = MotionGate::new();
//! let pager = FakePager::showing(1000, 3, 1);
//! let view = Rc::new(FakeInnerView::fitted());
//! let arbiter = PagerArbiter::new(&gate, ArbiterSettings::default());
//! let mut robot = GestureRobot::new(arbiter, view, pager.clone());
//!
//! robot.swipe((900.0, 500.0), (100.0, 500.0), 10);
//! assert_eq!(pager.current_page(), 2);
//! ```

use crate::pager::FakePager;
use crate::touch_script::TouchScript;
use crate::view::FakeInnerView;
use cranpose_pager_arbiter::{
    PagerArbiter, PagerHost, Point, ScrollDistance, TouchAction, TouchDisposition, TouchEvent,
};
use std::rc::Rc;

pub struct GestureRobot {
    arbiter: PagerArbiter,
    view: Rc<FakeInnerView>,
    pager: Rc<FakePager>,
    script: TouchScript,
    gesture_start_scroll: i32,
    last_focus: Option<Point>,
}

impl GestureRobot {
    /// Wires `arbiter` to `pager` and wraps it around `view`.
    pub fn new(mut arbiter: PagerArbiter, view: Rc<FakeInnerView>, pager: Rc<FakePager>) -> Self {
        arbiter.attach_pager(pager.clone());
        let gesture_start_scroll = pager.scroll_x();
        Self {
            arbiter,
            view,
            pager,
            script: TouchScript::new(),
            gesture_start_scroll,
            last_focus: None,
        }
    }

    pub fn arbiter(&self) -> &PagerArbiter {
        &self.arbiter
    }

    pub fn view(&self) -> &Rc<FakeInnerView> {
        &self.view
    }

    pub fn pager(&self) -> &Rc<FakePager> {
        &self.pager
    }

    pub fn press(&mut self, x: f32, y: f32) -> TouchDisposition {
        self.gesture_start_scroll = self.pager.scroll_x();
        let event = self.script.down(x, y);
        self.dispatch(event)
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> TouchDisposition {
        let event = self.script.move_to(x, y);
        self.dispatch(event)
    }

    pub fn move_pointers(&mut self, positions: &[(f32, f32)]) -> TouchDisposition {
        let event = self.script.move_pointers(positions);
        self.dispatch(event)
    }

    pub fn press_second(&mut self, x: f32, y: f32) -> TouchDisposition {
        let event = self.script.pointer_down(x, y);
        self.dispatch(event)
    }

    pub fn release_second(&mut self) -> TouchDisposition {
        let event = self.script.pointer_up();
        self.dispatch(event)
    }

    pub fn release(&mut self) -> TouchDisposition {
        let event = self.script.up();
        self.dispatch(event)
    }

    pub fn cancel(&mut self) -> TouchDisposition {
        let event = self.script.cancel();
        self.dispatch(event)
    }

    /// Moves the primary pointer by `(dx, dy)` in `steps` equal moves.
    pub fn drag_by(&mut self, dx: f32, dy: f32, steps: usize) {
        let Some(start) = self.script.primary() else {
            return;
        };
        let steps = steps.max(1);
        for i in 1..=steps {
            let done = i as f32;
            self.move_to(
                start.x + dx * done / steps as f32,
                start.y + dy * done / steps as f32,
            );
        }
    }

    /// Full press, drag and release.
    pub fn swipe(&mut self, from: (f32, f32), to: (f32, f32), steps: usize) {
        self.press(from.0, from.1);
        self.drag_by(to.0 - from.0, to.1 - from.1, steps);
        self.release();
    }

    /// How far the page hosting the view has moved on screen this gesture.
    fn page_shift(&self) -> f32 {
        (self.gesture_start_scroll - self.pager.scroll_x()) as f32
    }

    fn dispatch(&mut self, screen_event: TouchEvent) -> TouchDisposition {
        let local = screen_event.offset_location(-self.page_shift(), 0.0);
        let disposition = self.arbiter.on_touch(&local);
        if let TouchDisposition::Forward(event) = &disposition {
            self.detect(event);
        }
        disposition
    }

    fn detect(&mut self, event: &TouchEvent) {
        self.view.record_event(event.clone());
        match event.action() {
            TouchAction::Down | TouchAction::PointerDown | TouchAction::PointerUp => {
                self.last_focus = Some(event.position());
            }
            TouchAction::Move => {
                let position = event.position();
                if let Some(last) = self.last_focus.replace(position) {
                    let distance = ScrollDistance::new(last.x - position.x, last.y - position.y);
                    if distance != ScrollDistance::default() {
                        let adjusted = self.arbiter.on_scroll(&*self.view, distance);
                        self.view.apply_scroll(adjusted);
                    }
                }
            }
            TouchAction::Up => {
                if self.arbiter.allows_fling() {
                    self.view.record_fling();
                }
                self.last_focus = None;
            }
            TouchAction::Cancel => {
                self.last_focus = None;
            }
        }
    }
}
