//! Headless horizontal pager with fake-drag support.

use cranpose_pager_arbiter::PagerHost;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Calls received by a [`FakePager`], in order.
#[derive(Clone, Debug, PartialEq)]
pub enum PagerCall {
    DisallowIntercept(bool),
    BeginFakeDrag,
    FakeDragBy(f32),
    EndFakeDrag,
}

/// Pager of `page_count` pages, each `page_width` pixels wide.
///
/// Scroll is clamped to the first and last page. Dragging the finger right
/// (positive `dx`) scrolls toward earlier pages. Ending a fake drag settles on
/// the nearest page.
pub struct FakePager {
    page_width: i32,
    page_count: usize,
    scroll: Cell<i32>,
    fake_dragging: Cell<bool>,
    user_dragging: Cell<bool>,
    intercept_disallowed: Cell<bool>,
    calls: RefCell<Vec<PagerCall>>,
}

impl FakePager {
    pub fn new(page_width: i32, page_count: usize) -> Rc<Self> {
        Rc::new(Self {
            page_width: page_width.max(1),
            page_count: page_count.max(1),
            scroll: Cell::new(0),
            fake_dragging: Cell::new(false),
            user_dragging: Cell::new(false),
            intercept_disallowed: Cell::new(false),
            calls: RefCell::new(Vec::new()),
        })
    }

    /// Same pager, already showing page `index`.
    pub fn showing(page_width: i32, page_count: usize, index: usize) -> Rc<Self> {
        let pager = Self::new(page_width, page_count);
        pager.set_current_page(index);
        pager
    }

    pub fn max_scroll(&self) -> i32 {
        self.page_width * (self.page_count as i32 - 1)
    }

    pub fn set_current_page(&self, index: usize) {
        let index = index.min(self.page_count - 1);
        self.scroll.set(self.page_width * index as i32);
    }

    /// Page nearest to the current scroll position.
    pub fn current_page(&self) -> usize {
        let page = (self.scroll.get() as f32 / self.page_width as f32).round();
        (page.max(0.0) as usize).min(self.page_count - 1)
    }

    /// Simulates the user dragging the pager directly, which makes it refuse
    /// fake drags.
    pub fn set_user_dragging(&self, dragging: bool) {
        self.user_dragging.set(dragging);
    }

    pub fn is_intercept_disallowed(&self) -> bool {
        self.intercept_disallowed.get()
    }

    pub fn calls(&self) -> Vec<PagerCall> {
        self.calls.borrow().clone()
    }

    /// Amounts passed to `fake_drag_by`, in order.
    pub fn drags(&self) -> Vec<f32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                PagerCall::FakeDragBy(dx) => Some(*dx),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: PagerCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl PagerHost for FakePager {
    fn request_disallow_intercept(&self, disallow: bool) {
        self.record(PagerCall::DisallowIntercept(disallow));
        self.intercept_disallowed.set(disallow);
    }

    fn begin_fake_drag(&self) -> bool {
        self.record(PagerCall::BeginFakeDrag);
        if self.user_dragging.get() {
            return false;
        }
        self.fake_dragging.set(true);
        true
    }

    fn fake_drag_by(&self, dx: f32) {
        self.record(PagerCall::FakeDragBy(dx));
        if !self.fake_dragging.get() {
            log::warn!("fake_drag_by({dx}) outside of a fake drag");
            return;
        }
        let target = (self.scroll.get() as f32 - dx).round() as i32;
        self.scroll.set(target.clamp(0, self.max_scroll()));
    }

    fn scroll_x(&self) -> i32 {
        self.scroll.get()
    }

    fn end_fake_drag(&self) {
        self.record(PagerCall::EndFakeDrag);
        self.fake_dragging.set(false);
        self.set_current_page(self.current_page());
    }

    fn is_fake_dragging(&self) -> bool {
        self.fake_dragging.get()
    }
}
