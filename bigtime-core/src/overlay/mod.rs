//! Tap-activated status overlay
//!
//! A tap on the watch pushes a second window on top of the clock face
//! showing the time, weekday, date and battery charge. It hides itself
//! after a fixed delay or on the next tap, releasing everything it loaded.

pub mod battery;
pub mod controller;
pub mod machine;
pub mod text;

pub use battery::{BatteryTier, BATTERY_HIGH_PERCENT, BATTERY_LOW_PERCENT};
pub use controller::{OverlayController, OverlayError};
pub use machine::{OverlayEvent, OverlayState};
