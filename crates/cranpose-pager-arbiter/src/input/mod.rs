pub mod types;

pub use types::{PointerId, PointerSample, Pointers, ScrollDistance, TouchAction, TouchEvent};

pub mod prelude {
    pub use super::types::{
        PointerId, PointerSample, Pointers, ScrollDistance, TouchAction, TouchEvent,
    };
}
