//! Second-finger handling.
//!
//! The decision is taken when the second pointer lands:
//! - the pager has not moved yet: page dragging is abandoned for the rest of
//!   the gesture so pinch and rotate reach the inner view untouched;
//! - the pager is already being dragged: extra pointers are hidden from the
//!   inner view so no zoom can start in the middle of a page drag.

use crate::input::types::{TouchAction, TouchEvent};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerPolicy {
    suppress_secondary: bool,
    veto_outer_drag: bool,
}

impl PointerPolicy {
    /// Non-primary pointers are currently hidden from the inner view.
    pub fn suppresses_secondary_pointers(&self) -> bool {
        self.suppress_secondary
    }

    /// The pager is not driven for the remainder of the gesture.
    pub fn vetoes_outer_drag(&self) -> bool {
        self.veto_outer_drag
    }

    /// Updates the policy for pointer down/up events; other actions are ignored.
    ///
    /// Lifting back to one pointer ends suppression. The veto stays until the
    /// gesture ends.
    pub fn on_pointer_change(&mut self, event: &TouchEvent, outer_displacement: i32) {
        match event.action() {
            TouchAction::PointerDown if event.pointer_count() == 2 => {
                self.suppress_secondary = outer_displacement != 0;
                self.veto_outer_drag |= outer_displacement == 0;
                log::debug!(
                    "second pointer down at pager displacement {outer_displacement}: \
                     suppress_secondary={} veto_outer_drag={}",
                    self.suppress_secondary,
                    self.veto_outer_drag
                );
            }
            TouchAction::PointerUp if event.pointer_count() == 2 => {
                self.suppress_secondary = false;
            }
            _ => {}
        }
    }

    /// Updates the policy for `event` and rewrites it for the inner view.
    ///
    /// Returns `None` when the event must not reach the inner view at all,
    /// including the pointer-up that ends suppression, so the inner view never
    /// sees an unmatched pointer change. Unless page dragging is vetoed, the
    /// forwarded snapshot is shifted by the pager displacement so the inner
    /// view tracks the finger relative to the moving page.
    pub fn filter(&mut self, event: &TouchEvent, outer_displacement: i32) -> Option<TouchEvent> {
        let was_suppressing = self.suppress_secondary;
        self.on_pointer_change(event, outer_displacement);

        if self.veto_outer_drag {
            return Some(event.clone());
        }

        if event.action().is_pointer_change() && (was_suppressing || self.suppress_secondary) {
            return None;
        }

        let forwarded = if self.suppress_secondary {
            event.primary_only()
        } else {
            event.clone()
        };
        Some(forwarded.offset_location(outer_displacement as f32, 0.0))
    }
}
