//! Platform collaborator traits
//!
//! These traits define the interface between the watch-face logic and the
//! platform: the image store, the layer tree that composes windows and
//! layers into a frame, the wall clock, the battery gauge and the one-shot
//! timer service.

pub mod battery;
pub mod clock;
pub mod display;
pub mod image;
pub mod timer;

pub use battery::BatterySensor;
pub use clock::{ClockSource, WallClock, Weekday};
pub use display::{DisplayError, Font, LayerTree, Rect, TextStyle};
pub use image::{Bitmap, ImageError, ImageId, ImageStore, Size};
pub use timer::{TimerError, TimerService};

/// Mutable access to the graphics collaborators for one handler call
///
/// Bundles the image store and layer tree so slot operations can borrow
/// both without holding on to the rest of the platform.
pub struct Gfx<'a, S, L> {
    pub images: &'a mut S,
    pub layers: &'a mut L,
}

impl<'a, S: ImageStore, L: LayerTree> Gfx<'a, S, L> {
    pub fn new(images: &'a mut S, layers: &'a mut L) -> Self {
        Self { images, layers }
    }
}
