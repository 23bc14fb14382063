//! Headless pager, inner view and gesture robot for testing pager arbitration.

pub mod pager;
pub mod robot;
pub mod robot_assertions;
pub mod touch_script;
pub mod view;

pub use pager::{FakePager, PagerCall};
pub use robot::GestureRobot;
pub use touch_script::{TouchScript, FRAME};
pub use view::FakeInnerView;

pub mod prelude {
    pub use crate::pager::{FakePager, PagerCall};
    pub use crate::robot::GestureRobot;
    pub use crate::robot_assertions;
    pub use crate::robot_assertions::*;
    pub use crate::touch_script::TouchScript;
    pub use crate::view::FakeInnerView;
}
