//! Configuration types
//!
//! Board-agnostic watch-face configuration. Defaults describe the reference
//! device: a 144x168 display split into four 72x84 digit cells.

pub mod layout;
pub mod types;

pub use layout::*;
pub use types::*;
