//! Headless pan/zoom view.

use cranpose_pager_arbiter::{InnerView, Point, Rect, ScrollDistance, TouchEvent};
use std::cell::{Cell, RefCell};

/// Inner view that pans within fixed moving bounds and records what reached
/// its gesture detector.
pub struct FakeInnerView {
    position: Cell<Point>,
    bounds: Cell<Rect>,
    pan_enabled: Cell<bool>,
    events: RefCell<Vec<TouchEvent>>,
    flings: Cell<usize>,
}

impl FakeInnerView {
    pub fn new(position: Point, bounds: Rect) -> Self {
        Self {
            position: Cell::new(position),
            bounds: Cell::new(bounds),
            pan_enabled: Cell::new(true),
            events: RefCell::new(Vec::new()),
            flings: Cell::new(0),
        }
    }

    /// Content fitted to the viewport: it can not move at all.
    pub fn fitted() -> Self {
        Self::new(Point::ZERO, Rect::default())
    }

    pub fn set_pan_enabled(&self, enabled: bool) {
        self.pan_enabled.set(enabled);
    }

    /// Pans by a detector scroll distance, clamped to the moving bounds.
    pub fn apply_scroll(&self, distance: ScrollDistance) {
        let bounds = self.bounds.get();
        let position = self.position.get();
        self.position.set(Point::new(
            (position.x - distance.x).clamp(bounds.left, bounds.right),
            (position.y - distance.y).clamp(bounds.top, bounds.bottom),
        ));
    }

    pub fn record_event(&self, event: TouchEvent) {
        self.events.borrow_mut().push(event);
    }

    pub fn record_fling(&self) {
        self.flings.set(self.flings.get() + 1);
    }

    /// Events that reached the detector, in delivery order.
    pub fn events(&self) -> Vec<TouchEvent> {
        self.events.borrow().clone()
    }

    pub fn flings(&self) -> usize {
        self.flings.get()
    }
}

impl InnerView for FakeInnerView {
    fn position(&self) -> Point {
        self.position.get()
    }

    fn moving_bounds(&self) -> Rect {
        self.bounds.get()
    }

    fn is_pan_enabled(&self) -> bool {
        self.pan_enabled.get()
    }
}
