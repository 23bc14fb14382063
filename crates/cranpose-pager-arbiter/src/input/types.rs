use crate::geometry::Point;
use smallvec::SmallVec;
use web_time::Instant;

pub type PointerId = u64;

/// Masked touch action, mirroring the platform touch stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchAction {
    /// First pointer touched down; starts a gesture.
    Down,
    Move,
    /// Last pointer lifted; ends a gesture.
    Up,
    /// Gesture aborted by the platform; ends a gesture like `Up`.
    Cancel,
    /// A non-primary pointer touched down.
    PointerDown,
    /// A non-primary pointer lifted.
    PointerUp,
}

impl TouchAction {
    /// True for `PointerDown` and `PointerUp`.
    pub fn is_pointer_change(self) -> bool {
        matches!(self, TouchAction::PointerDown | TouchAction::PointerUp)
    }

    pub fn ends_gesture(self) -> bool {
        matches!(self, TouchAction::Up | TouchAction::Cancel)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub position: Point,
}

impl PointerSample {
    pub const fn new(id: PointerId, position: Point) -> Self {
        Self { id, position }
    }
}

pub type Pointers = SmallVec<[PointerSample; 4]>;

/// Immutable snapshot of one touch event.
///
/// `pointers` lists every pointer that is down while the event is delivered,
/// primary first. For `PointerDown` that includes the pointer being added and
/// for `PointerUp` the pointer being removed, so a `PointerDown` with a count
/// of 2 is the arrival of the second finger and a `PointerUp` with a count of
/// 2 leaves one finger on screen. `action_index` selects the pointer that
/// changed.
///
/// Rewrites (`offset_location`, `primary_only`) return new snapshots; the
/// original event is never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    action: TouchAction,
    action_index: usize,
    pointers: Pointers,
    down_time: Instant,
    event_time: Instant,
}

impl TouchEvent {
    pub fn new(
        action: TouchAction,
        pointers: Pointers,
        down_time: Instant,
        event_time: Instant,
    ) -> Self {
        debug_assert!(!pointers.is_empty(), "touch events need a pointer");
        Self {
            action,
            action_index: 0,
            pointers,
            down_time,
            event_time,
        }
    }

    /// Sets the index of the pointer that changed, for pointer down/up events.
    pub fn with_action_index(mut self, action_index: usize) -> Self {
        debug_assert!(action_index < self.pointers.len());
        self.action_index = action_index;
        self
    }

    pub fn action(&self) -> TouchAction {
        self.action
    }

    pub fn action_index(&self) -> usize {
        self.action_index
    }

    pub fn pointers(&self) -> &[PointerSample] {
        &self.pointers
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Position of the primary pointer.
    pub fn position(&self) -> Point {
        self.pointers
            .first()
            .map(|pointer| pointer.position)
            .unwrap_or(Point::ZERO)
    }

    pub fn down_time(&self) -> Instant {
        self.down_time
    }

    pub fn event_time(&self) -> Instant {
        self.event_time
    }

    /// Copy of this event with every pointer translated by `(dx, dy)`.
    pub fn offset_location(&self, dx: f32, dy: f32) -> Self {
        let pointers = self
            .pointers
            .iter()
            .map(|pointer| PointerSample::new(pointer.id, pointer.position.translate(dx, dy)))
            .collect();
        Self {
            action: self.action,
            action_index: self.action_index,
            pointers,
            down_time: self.down_time,
            event_time: self.event_time,
        }
    }

    /// Copy of this event carrying only the primary pointer.
    pub fn primary_only(&self) -> Self {
        let pointers = self.pointers.iter().take(1).copied().collect();
        Self {
            action: self.action,
            action_index: 0,
            pointers,
            down_time: self.down_time,
            event_time: self.event_time,
        }
    }
}

/// Scroll distance in gesture detector convention: previous position minus
/// current position, so dragging the finger left yields a positive `x`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollDistance {
    pub x: f32,
    pub y: f32,
}

impl ScrollDistance {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
