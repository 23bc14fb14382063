//! Synthetic drag session on the enclosing pager.

use std::rc::Rc;

/// Fake-drag surface of a horizontally paging container.
///
/// Mirrors the pager's native programmatic drag API. Methods take `&self`;
/// implementations keep their scroll state behind interior mutability, since
/// one pager is shared by the arbiters of all its pages.
pub trait PagerHost {
    /// Asks the pager's ancestors not to intercept the current touch stream.
    fn request_disallow_intercept(&self, disallow: bool);

    /// Enters fake-drag mode. Returns `false` if the pager refuses, for
    /// example while the user is already dragging it directly.
    fn begin_fake_drag(&self) -> bool;

    /// Moves the pager as if the finger moved by `dx` pixels.
    fn fake_drag_by(&self, dx: f32);

    /// Current horizontal scroll position in pixels.
    fn scroll_x(&self) -> i32;

    /// Leaves fake-drag mode and lets the pager settle on a page.
    fn end_fake_drag(&self);

    fn is_fake_dragging(&self) -> bool;
}

/// Drives one fake-drag session per gesture and reports what the pager
/// actually consumed.
pub struct DragBridge {
    host: Rc<dyn PagerHost>,
    active: bool,
    intercept_disallowed: bool,
}

impl DragBridge {
    pub fn new(host: Rc<dyn PagerHost>) -> Self {
        Self {
            host,
            active: false,
            intercept_disallowed: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Starts a drag session. A session left open by a previous gesture is
    /// ended first.
    pub fn begin_drag(&mut self) -> bool {
        self.end_drag();
        self.host.request_disallow_intercept(true);
        self.intercept_disallowed = true;
        self.active = self.host.begin_fake_drag();
        if !self.active {
            log::warn!(
                "pager refused to begin a fake drag; page dragging disabled for this gesture"
            );
        }
        self.active
    }

    /// Drives the pager by `amount` pixels of finger movement and returns the
    /// displacement the pager actually applied. Without an active session
    /// nothing moves.
    pub fn drive_by(&mut self, amount: i32) -> i32 {
        if !self.active || amount == 0 {
            return 0;
        }
        let scroll_begin = self.host.scroll_x();
        self.host.fake_drag_by(amount as f32);
        let consumed = scroll_begin - self.host.scroll_x();
        log::trace!("fake drag requested {amount}px, consumed {consumed}px");
        consumed
    }

    /// Ends the drag session and hands interception back to the pager's
    /// ancestors. Safe to call repeatedly.
    pub fn end_drag(&mut self) {
        if self.active {
            self.active = false;
            if self.host.is_fake_dragging() {
                self.host.end_fake_drag();
            }
        }
        if self.intercept_disallowed {
            self.intercept_disallowed = false;
            self.host.request_disallow_intercept(false);
        }
    }
}

impl std::fmt::Debug for DragBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragBridge")
            .field("active", &self.active)
            .field("intercept_disallowed", &self.intercept_disallowed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Pager clamped to `[0, max_scroll]`; finger movement scrolls the
    /// opposite way.
    #[derive(Default)]
    struct ClampedPager {
        scroll: Cell<i32>,
        max_scroll: i32,
        dragging: Cell<bool>,
        refuse: bool,
        calls: RefCell<Vec<&'static str>>,
    }

    impl PagerHost for ClampedPager {
        fn request_disallow_intercept(&self, disallow: bool) {
            let call = if disallow { "disallow" } else { "allow" };
            self.calls.borrow_mut().push(call);
        }

        fn begin_fake_drag(&self) -> bool {
            self.calls.borrow_mut().push("begin");
            if self.refuse {
                return false;
            }
            self.dragging.set(true);
            true
        }

        fn fake_drag_by(&self, dx: f32) {
            let next = (self.scroll.get() - dx as i32).clamp(0, self.max_scroll);
            self.scroll.set(next);
        }

        fn scroll_x(&self) -> i32 {
            self.scroll.get()
        }

        fn end_fake_drag(&self) {
            self.calls.borrow_mut().push("end");
            self.dragging.set(false);
        }

        fn is_fake_dragging(&self) -> bool {
            self.dragging.get()
        }
    }

    #[test]
    fn drive_reports_clamped_consumption() {
        let pager = Rc::new(ClampedPager {
            scroll: Cell::new(10),
            max_scroll: 100,
            ..Default::default()
        });
        let mut bridge = DragBridge::new(pager.clone());

        assert!(bridge.begin_drag());
        assert_eq!(bridge.drive_by(-30), -30);
        assert_eq!(pager.scroll_x(), 40);
        // Only 40px left before the first page edge.
        assert_eq!(bridge.drive_by(60), 40);
        assert_eq!(pager.scroll_x(), 0);
    }

    #[test]
    fn refused_begin_leaves_bridge_inert() {
        let pager = Rc::new(ClampedPager {
            max_scroll: 100,
            refuse: true,
            ..Default::default()
        });
        let mut bridge = DragBridge::new(pager.clone());

        assert!(!bridge.begin_drag());
        assert_eq!(bridge.drive_by(-20), 0);
        assert_eq!(*pager.calls.borrow(), vec!["disallow", "begin"]);

        bridge.end_drag();
        assert_eq!(*pager.calls.borrow(), vec!["disallow", "begin", "allow"]);
    }

    #[test]
    fn end_drag_is_idempotent() {
        let pager = Rc::new(ClampedPager {
            max_scroll: 100,
            ..Default::default()
        });
        let mut bridge = DragBridge::new(pager.clone());

        bridge.begin_drag();
        bridge.end_drag();
        bridge.end_drag();

        assert!(!bridge.is_active());
        assert_eq!(
            *pager.calls.borrow(),
            vec!["disallow", "begin", "end", "allow"]
        );
    }

    #[test]
    fn begin_closes_a_stale_session() {
        let pager = Rc::new(ClampedPager {
            max_scroll: 100,
            ..Default::default()
        });
        let mut bridge = DragBridge::new(pager.clone());

        bridge.begin_drag();
        bridge.begin_drag();

        assert_eq!(
            *pager.calls.borrow(),
            vec!["disallow", "begin", "end", "allow", "disallow", "begin"]
        );
    }
}
