//! Assertion helpers for gesture robot tests.

use cranpose_pager_arbiter::{
    AxisSplit, PagerArbiter, Point, TouchAction, TouchDisposition, TouchEvent,
};

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Assert that a split hands out exactly the requested movement, with both
/// parts moving the same way as the request.
pub fn assert_split_conserves(split: AxisSplit, requested: f32, msg: &str) {
    let magnitude = split.inner.abs() + split.outer.abs();
    assert_approx_eq(
        magnitude,
        requested.abs(),
        1e-3,
        &format!("{} - {:?} for {}", msg, split, requested),
    );
    for (name, part) in [("inner", split.inner), ("outer", split.outer)] {
        assert!(
            part == 0.0 || part.signum() == requested.signum(),
            "{}: {} part {} opposes the requested {}",
            msg,
            name,
            part,
            requested
        );
    }
}

/// Unwraps a forwarded event, panicking on any other disposition.
pub fn expect_forwarded(disposition: TouchDisposition) -> TouchEvent {
    match disposition {
        TouchDisposition::Forward(event) => event,
        other => panic!("expected a forwarded event, got {:?}", other),
    }
}

/// Assert that the arbiter holds no gesture and no longer blocks its siblings.
pub fn assert_idle(arbiter: &PagerArbiter, msg: &str) {
    assert!(
        arbiter.session().is_none(),
        "{}: gesture session still open: {:?}",
        msg,
        arbiter.session()
    );
    assert!(
        !arbiter.is_local_motion_active(),
        "{}: arbiter still holds the motion gate",
        msg
    );
}

/// Assert that no forwarded event carried more than one pointer.
pub fn assert_single_pointer(events: &[TouchEvent], msg: &str) {
    if let Some(event) = events.iter().find(|event| event.pointer_count() > 1) {
        panic!(
            "{}: {:?} reached the inner view with {} pointers",
            msg,
            event.action(),
            event.pointer_count()
        );
    }
}

/// Actions of `events`, in order.
pub fn actions(events: &[TouchEvent]) -> Vec<TouchAction> {
    events.iter().map(TouchEvent::action).collect()
}
