//! Builds realistic touch event streams.

use cranpose_pager_arbiter::{Point, PointerId, PointerSample, Pointers, TouchAction, TouchEvent};
use std::time::Duration;
use web_time::Instant;

/// Spacing between scripted events, one 60Hz frame.
pub const FRAME: Duration = Duration::from_millis(16);

/// Tracks the pointers of one scripted touch sequence and emits the events a
/// platform would deliver for it, in screen coordinates.
#[derive(Debug)]
pub struct TouchScript {
    pointers: Vec<PointerSample>,
    next_id: PointerId,
    down_time: Instant,
    event_time: Instant,
}

impl Default for TouchScript {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchScript {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            pointers: Vec::new(),
            next_id: 0,
            down_time: now,
            event_time: now,
        }
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Current position of the primary pointer.
    pub fn primary(&self) -> Option<Point> {
        self.pointers.first().map(|pointer| pointer.position)
    }

    /// First finger touches down, starting a new sequence.
    pub fn down(&mut self, x: f32, y: f32) -> TouchEvent {
        self.pointers.clear();
        self.next_id = 0;
        self.event_time += FRAME;
        self.down_time = self.event_time;
        self.add_pointer(Point::new(x, y));
        self.emit(TouchAction::Down, 0)
    }

    /// Moves the primary pointer.
    pub fn move_to(&mut self, x: f32, y: f32) -> TouchEvent {
        if let Some(primary) = self.pointers.first_mut() {
            primary.position = Point::new(x, y);
        }
        self.tick();
        self.emit(TouchAction::Move, 0)
    }

    /// Moves every pointer; `positions` is in pointer order, extra entries
    /// are ignored.
    pub fn move_pointers(&mut self, positions: &[(f32, f32)]) -> TouchEvent {
        for (pointer, &(x, y)) in self.pointers.iter_mut().zip(positions) {
            pointer.position = Point::new(x, y);
        }
        self.tick();
        self.emit(TouchAction::Move, 0)
    }

    /// Another finger touches down.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> TouchEvent {
        self.add_pointer(Point::new(x, y));
        self.tick();
        self.emit(TouchAction::PointerDown, self.pointers.len() - 1)
    }

    /// The most recently added non-primary finger lifts.
    pub fn pointer_up(&mut self) -> TouchEvent {
        debug_assert!(self.pointers.len() > 1, "no secondary pointer to lift");
        self.tick();
        let index = self.pointers.len() - 1;
        let event = self.emit(TouchAction::PointerUp, index);
        self.pointers.pop();
        event
    }

    /// The last finger lifts, ending the sequence.
    pub fn up(&mut self) -> TouchEvent {
        self.tick();
        let event = self.emit(TouchAction::Up, 0);
        self.pointers.clear();
        event
    }

    /// The platform aborts the sequence.
    pub fn cancel(&mut self) -> TouchEvent {
        self.tick();
        let event = self.emit(TouchAction::Cancel, 0);
        self.pointers.clear();
        event
    }

    fn add_pointer(&mut self, position: Point) {
        self.pointers.push(PointerSample::new(self.next_id, position));
        self.next_id += 1;
    }

    fn tick(&mut self) {
        self.event_time += FRAME;
    }

    fn emit(&self, action: TouchAction, action_index: usize) -> TouchEvent {
        let pointers: Pointers = self.pointers.iter().copied().collect();
        TouchEvent::new(action, pointers, self.down_time, self.event_time)
            .with_action_index(action_index)
    }
}
