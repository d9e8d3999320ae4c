//! Events delivered by the platform event loop

use crate::traits::WallClock;

/// Events the watch face reacts to
///
/// `H` is the timer service's handle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<H> {
    /// A new minute started
    MinuteTick(WallClock),
    /// Tap gesture from the accelerometer
    Tap,
    /// A scheduled timer expired
    TimerFired(H),
    /// The battery level changed
    BatteryChanged,
}

impl<H> Event<H> {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Event::MinuteTick(_) => "minute-tick",
            Event::Tap => "tap",
            Event::TimerFired(_) => "timer-fired",
            Event::BatteryChanged => "battery-changed",
        }
    }

    /// Check if this event only matters while the overlay is showing
    pub fn is_overlay_only(&self) -> bool {
        matches!(self, Event::TimerFired(_) | Event::BatteryChanged)
    }
}
