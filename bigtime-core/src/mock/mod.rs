//! In-memory collaborators for tests and the host simulator
//!
//! Each mock records enough bookkeeping to check the resource rules from
//! the outside: every resolved image released exactly once, no window
//! destroyed with layers still attached, no timer left pending.

mod display;
mod image;
mod sensors;
mod timer;

pub use display::{LayerContent, LayerRecord, MockLayer, MockLayerTree, MockWindow, MAX_LAYERS};
pub use image::{MockImage, MockImageStore, MAX_LIVE_IMAGES};
pub use sensors::{MockBattery, MockClock, REFERENCE_DATE};
pub use timer::{MockTimer, MockTimerHandle, MAX_TIMERS};
