//! Overlay visibility state machine
//!
//! ```text
//! Hidden --Tap--> Showing --Tap | Timeout--> Hidden
//! ```

/// Overlay visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OverlayState {
    /// Nothing allocated, no timer pending
    #[default]
    Hidden,
    /// Window, layers and auto-hide timer allocated
    Showing,
}

/// Events that drive the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OverlayEvent {
    /// Tap gesture from the accelerometer
    Tap,
    /// The auto-hide timer expired
    Timeout,
}

impl OverlayState {
    pub fn is_showing(&self) -> bool {
        matches!(self, OverlayState::Showing)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: OverlayEvent) -> Self {
        use OverlayEvent::*;
        use OverlayState::*;

        match (self, event) {
            (Hidden, Tap) => Showing,
            (Showing, Tap) => Hidden,
            (Showing, Timeout) => Hidden,
            // No timer exists while hidden
            (Hidden, Timeout) => Hidden,
        }
    }
}
