//! Board-agnostic core logic for the Big Time watch face
//!
//! The watch shows the time as four large pre-rendered digit images, one per
//! screen quarter. The device cannot keep all ten digit images in memory at
//! once, so every screen position ("slot") loads the image it needs and
//! releases it again when the displayed value changes.
//!
//! This crate contains everything that does not depend on a specific
//! platform:
//!
//! - Collaborator traits (image store, layer tree, clock, battery, timer)
//! - Slot-based image lifecycle management
//! - Two-digit value rendering with leading-zero suppression
//! - The clock face and the tap-activated status overlay
//! - The application controller that dispatches events to both
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod app;
pub mod config;
pub mod face;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod overlay;
pub mod render;
pub mod slots;
pub mod traits;

pub use app::{Event, Platform, WatchApp};
pub use face::ClockFace;
pub use overlay::{BatteryTier, OverlayController, OverlayState};
pub use render::{render_row, DisplayValue};
pub use slots::{Digit, Glyph, SlotError, SlotGrid, SlotManager};
