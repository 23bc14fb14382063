//! End-to-end gestures through a pager arbiter, a fake pager and a fake
//! pan/zoom view.

use cranpose_pager_arbiter::{
    split_horizontal, ArbiterSettings, InnerView, MotionGate, PagerArbiter, PagerHost,
    PagingDecision, Point, Rect,
};
use cranpose_testing::prelude::*;
use std::rc::Rc;

const PAGE_WIDTH: i32 = 1000;

fn robot_for(view: FakeInnerView, pager: &Rc<FakePager>) -> GestureRobot {
    let gate = MotionGate::new();
    let arbiter = PagerArbiter::new(&gate, ArbiterSettings::default());
    GestureRobot::new(arbiter, Rc::new(view), pager.clone())
}

#[test]
fn fitted_view_swipe_turns_the_page() {
    let pager = FakePager::showing(PAGE_WIDTH, 3, 1);
    let mut robot = robot_for(FakeInnerView::fitted(), &pager);

    robot.press(900.0, 500.0);
    robot.drag_by(-800.0, 0.0, 10);

    // The first 16px are absorbed by the slop, everything after drives.
    let drags = pager.drags();
    assert_eq!(drags.len(), 10);
    assert_eq!(drags[0], -64.0);
    assert!(drags[1..].iter().all(|&dx| dx == -80.0));
    assert_eq!(pager.scroll_x(), 1784);
    assert!(pager.is_intercept_disallowed());

    robot.release();
    assert_eq!(pager.current_page(), 2);
    assert_eq!(pager.scroll_x(), 2000);
    assert!(!pager.is_intercept_disallowed());
    assert_eq!(robot.view().flings(), 0);
    assert_idle(robot.arbiter(), "after swipe");
}

#[test]
fn zoomed_view_pans_to_its_edge_before_paging() {
    let pager = FakePager::showing(PAGE_WIDTH, 3, 1);
    let view = FakeInnerView::new(Point::new(-100.0, 0.0), Rect::horizontal(-500.0, 0.0));
    let mut robot = robot_for(view, &pager);

    robot.press(100.0, 400.0);
    robot.move_to(200.0, 400.0);
    assert_eq!(robot.view().position().x, 0.0);
    assert!(pager.drags().is_empty());

    robot.move_to(300.0, 400.0);
    robot.move_to(400.0, 400.0);
    robot.move_to(500.0, 400.0);
    assert_eq!(pager.scroll_x(), 700);

    // Coming back undoes the page drag before the view pans again.
    robot.move_to(350.0, 400.0);
    assert_eq!(pager.drags(), vec![100.0, 100.0, 100.0, -150.0]);
    assert_eq!(pager.scroll_x(), 850);
    assert_eq!(robot.view().position().x, 0.0);

    robot.release();
    assert_eq!(pager.current_page(), 1);
    assert_eq!(robot.view().flings(), 0);
}

#[test]
fn forwarded_positions_stay_in_screen_space_while_the_page_moves() {
    let pager = FakePager::showing(PAGE_WIDTH, 3, 1);
    let mut robot = robot_for(FakeInnerView::fitted(), &pager);

    robot.press(600.0, 300.0);
    robot.move_to(500.0, 300.0);
    robot.move_to(400.0, 300.0);

    let events = robot.view().events();
    let last = events.last().expect("moves forwarded");
    assert_point_approx_eq(last.position(), Point::new(400.0, 300.0), 1e-3, "last move");
}

#[test]
fn vertical_pan_of_a_narrow_view_never_moves_the_pager() {
    let pager = FakePager::showing(PAGE_WIDTH, 3, 1);
    let view = FakeInnerView::new(Point::ZERO, Rect::new(0.0, 0.0, 0.0, 300.0));
    let mut robot = robot_for(view, &pager);

    robot.press(500.0, 100.0);
    robot.drag_by(10.0, 300.0, 5);

    assert!(pager.drags().is_empty());
    assert_eq!(pager.scroll_x(), 1000);
    assert_eq!(
        robot.arbiter().session().map(|session| session.decision()),
        Some(PagingDecision::Vetoed)
    );
    assert_approx_eq(robot.view().position().y, 300.0, 1e-3, "vertical pan");

    robot.release();
    assert_eq!(robot.view().flings(), 1);
}

#[test]
fn small_steps_are_absorbed_until_the_slop_is_crossed() {
    let pager = FakePager::showing(PAGE_WIDTH, 3, 1);
    let mut robot = robot_for(FakeInnerView::fitted(), &pager);

    robot.press(500.0, 500.0);
    robot.move_to(494.0, 500.0);
    robot.move_to(488.0, 500.0);
    assert!(pager.drags().is_empty());
    assert!(robot.arbiter().session().is_some_and(|s| s.is_undecided()));

    robot.move_to(482.0, 500.0);
    robot.move_to(476.0, 500.0);
    assert_eq!(pager.drags(), vec![-2.0, -6.0]);
    assert_eq!(pager.scroll_x(), 1008);
}

#[test]
fn pager_refusing_fake_drag_stays_put() {
    let pager = FakePager::showing(PAGE_WIDTH, 3, 1);
    pager.set_user_dragging(true);
    let mut robot = robot_for(FakeInnerView::fitted(), &pager);

    robot.swipe((900.0, 500.0), (100.0, 500.0), 10);

    assert!(pager.drags().is_empty());
    assert_eq!(pager.scroll_x(), 1000);
    assert_eq!(robot.view().flings(), 1);
    assert!(!pager.calls().contains(&PagerCall::EndFakeDrag));
    assert!(!pager.is_intercept_disallowed());
}

#[test]
fn pan_disabled_view_pages_with_every_step() {
    let pager = FakePager::showing(PAGE_WIDTH, 3, 1);
    let view = FakeInnerView::new(Point::new(-250.0, 0.0), Rect::horizontal(-500.0, 0.0));
    view.set_pan_enabled(false);
    let mut robot = robot_for(view, &pager);

    robot.press(500.0, 500.0);
    robot.move_to(450.0, 500.0);
    robot.move_to(400.0, 500.0);

    assert_eq!(pager.drags(), vec![-50.0, -50.0]);
    assert_eq!(robot.view().position().x, -250.0);
}

#[test]
fn dense_screens_scale_the_slop() {
    let pager = FakePager::showing(PAGE_WIDTH, 3, 1);
    let gate = MotionGate::new();
    let arbiter = PagerArbiter::new(&gate, ArbiterSettings::for_density(2.0));
    assert_eq!(arbiter.pager_slop(), 32.0);
    let mut robot = GestureRobot::new(arbiter, Rc::new(FakeInnerView::fitted()), pager.clone());

    robot.press(500.0, 500.0);
    robot.move_to(470.0, 500.0);
    assert!(pager.drags().is_empty());
    robot.move_to(440.0, 500.0);
    assert_eq!(pager.drags(), vec![-28.0]);
}

#[test]
fn next_gesture_starts_undecided() {
    let pager = FakePager::showing(PAGE_WIDTH, 3, 1);
    let view = FakeInnerView::new(Point::ZERO, Rect::new(0.0, 0.0, 0.0, 300.0));
    let mut robot = robot_for(view, &pager);

    robot.swipe((900.0, 100.0), (500.0, 100.0), 4);
    assert_eq!(pager.current_page(), 1);
    assert_eq!(robot.view().flings(), 0);

    // A vertical gesture afterwards keeps its fling.
    robot.press(500.0, 100.0);
    let session = robot.arbiter().session().cloned().expect("gesture open");
    assert!(session.is_undecided());
    assert_eq!(session.outer_displacement(), 0);
    robot.drag_by(0.0, 200.0, 4);
    robot.release();

    assert_eq!(robot.view().flings(), 1);
    expect_forwarded(robot.press(0.0, 0.0));
}

#[test]
fn zoomed_view_splits_conserve_motion() {
    let bounds = Rect::horizontal(-500.0, 0.0);
    let cases = [
        (-80.0, -40.0, 0),
        (80.0, -40.0, 0),
        (-30.0, 0.0, 120),
        (45.0, -500.0, -20),
        (600.0, -250.0, 0),
    ];
    for (dx, position, displacement) in cases {
        let split = split_horizontal(dx, position, &bounds, displacement);
        assert_split_conserves(split, dx, "zoomed view");
    }
}
