//! Gesture constants shared by the pager arbiter.
//!
//! Values are in logical pixels. Hosts running on high-density touch screens
//! should build their settings with [`ArbiterSettings::for_density`] so the
//! thresholds match what the finger actually covers.
//!
//! [`ArbiterSettings::for_density`]: crate::ArbiterSettings::for_density

/// Platform touch slop in logical pixels.
///
/// Smallest pointer movement that is treated as intentional (Android uses
/// ~8dp for `ViewConfiguration.TOUCH_SLOP`).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Multiplier applied to the touch slop to get the pager slop.
pub const PAGER_SLOP_MULTIPLIER: f32 = 2.0;
