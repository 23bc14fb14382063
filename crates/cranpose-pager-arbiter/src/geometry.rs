//! Geometric primitives used by the arbiter: Point and Rect.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Edge-based rectangle, used for the inner view's moving bounds.
///
/// A degenerate rect (`left == right`) is valid and means the content can not
/// move along that axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal range only; the vertical extent is zero.
    pub const fn horizontal(left: f32, right: f32) -> Self {
        Self::new(left, 0.0, right, 0.0)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }
}
