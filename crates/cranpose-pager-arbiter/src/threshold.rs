//! Paging commitment with hysteresis.
//!
//! Inner views whose horizontal moving range is narrower than the pager slop
//! (a fitted image, a slightly zoomed page) can not tell a page swipe from a
//! sloppy vertical pan on the first event, so their outer shares are
//! accumulated until one axis crosses the slop. Wider views commit to paging
//! on the first step: whatever overflows their bounds is meant for the pager.

use crate::session::{GestureSession, PagingDecision};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagingClassifier {
    slop: f32,
}

impl PagingClassifier {
    pub fn new(slop: f32) -> Self {
        Self { slop }
    }

    pub fn slop(&self) -> f32 {
        self.slop
    }

    /// Runs one classification step and returns the outer delta to drive.
    ///
    /// Once the session has decided, committed sessions pass `outer` through
    /// and vetoed ones return zero. On the committing step of an accumulated
    /// gesture the returned delta is the accumulated excess beyond the slop,
    /// so the page does not jump by the distance absorbed while undecided.
    /// Horizontal commitment is checked before the vertical veto.
    pub fn classify(
        &self,
        session: &mut GestureSession,
        outer: f32,
        dy: f32,
        bounds_width: f32,
    ) -> f32 {
        match session.decision {
            PagingDecision::Committed => return outer,
            PagingDecision::Vetoed => return 0.0,
            PagingDecision::Undecided => {}
        }

        if bounds_width >= self.slop {
            log::debug!(
                "paging committed immediately, moving range {bounds_width} >= slop {}",
                self.slop
            );
            session.decision = PagingDecision::Committed;
            return outer;
        }

        session.accumulated_horizontal += outer;
        session.accumulated_vertical += dy;

        let horizontal = session.accumulated_horizontal;
        if horizontal.abs() > self.slop {
            session.decision = PagingDecision::Committed;
            let adjusted = horizontal.signum() * (horizontal.abs() - self.slop);
            log::debug!("paging committed after {horizontal}px, drives {adjusted}px");
            adjusted
        } else if session.accumulated_vertical.abs() > self.slop {
            session.decision = PagingDecision::Vetoed;
            log::debug!(
                "paging vetoed after {}px of vertical motion",
                session.accumulated_vertical
            );
            0.0
        } else {
            outer
        }
    }
}
