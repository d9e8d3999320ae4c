//! One-shot timer trait
//!
//! The timer service does not call back into the watch face directly. When
//! a timer expires the event loop delivers its handle as an event, and the
//! owner decides whether the expiry is still relevant.

/// Errors that can occur when scheduling a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// No free timer slots
    Exhausted,
}

/// Trait for the platform timer service
pub trait TimerService {
    /// Identifies one scheduled expiry
    type Handle: Copy + Eq + core::fmt::Debug;

    /// Schedule a one-shot expiry `delay_ms` from now
    fn schedule(&mut self, delay_ms: u32) -> Result<Self::Handle, TimerError>;

    /// Cancel a pending expiry
    ///
    /// Cancelling an expired or unknown handle does nothing.
    fn cancel(&mut self, handle: Self::Handle);
}
