//! Slot-based image lifecycle management
//!
//! A slot is a fixed screen position that holds at most one loaded image.
//! Loading resolves the image and attaches it to the display; unloading
//! detaches it and hands the memory back. Because the device cannot hold
//! every glyph at once, each slot owns its own image, even when another
//! slot currently shows the same digit.

pub mod manager;

pub use manager::SlotManager;

use crate::overlay::BatteryTier;
use crate::traits::{DisplayError, ImageError, ImageId, Rect, Size};

/// A value a slot can display
pub trait Glyph: Copy + PartialEq + core::fmt::Debug {
    /// Image resource that renders this value
    fn image_id(self) -> ImageId;
}

/// A single decimal digit, 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, or `None` if `value` is not 0-9
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Glyph for Digit {
    fn image_id(self) -> ImageId {
        ImageId::Digit(self.0)
    }
}

/// The clock face background image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop;

impl Glyph for Backdrop {
    fn image_id(self) -> ImageId {
        ImageId::Background
    }
}

impl Glyph for BatteryTier {
    fn image_id(self) -> ImageId {
        ImageId::Battery(self)
    }
}

/// Errors reported by slot operations
///
/// Every error leaves the slot exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotError {
    /// Slot index beyond the manager's capacity
    IndexOutOfRange { index: usize, capacity: usize },
    /// Digit value outside 0-9
    InvalidDigit(u8),
    /// Slot already holds an image; it must be unloaded first
    Occupied { index: usize },
    /// Image could not be resolved
    Image(ImageError),
    /// Image could not be attached to the display
    Display(DisplayError),
}

impl From<ImageError> for SlotError {
    fn from(e: ImageError) -> Self {
        SlotError::Image(e)
    }
}

impl From<DisplayError> for SlotError {
    fn from(e: DisplayError) -> Self {
        SlotError::Display(e)
    }
}

/// Placement of slots on a regular grid
///
/// A slot's position is derived from its index on every use:
/// row = index / columns, column = index % columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotGrid {
    /// Top-left corner of slot 0
    pub x: i16,
    pub y: i16,
    /// Size of one grid cell
    pub cell: Size,
    /// Cells per row
    pub columns: u8,
}

impl SlotGrid {
    pub const fn new(x: i16, y: i16, cell: Size, columns: u8) -> Self {
        Self { x, y, cell, columns }
    }

    /// Top-left corner of the slot at `index`
    pub fn origin_of(&self, index: usize) -> (i16, i16) {
        let columns = usize::from(self.columns.max(1));
        let column = (index % columns) as i32;
        let row = (index / columns) as i32;
        let x = i32::from(self.x) + column * i32::from(self.cell.width);
        let y = i32::from(self.y) + row * i32::from(self.cell.height);
        (x as i16, y as i16)
    }

    /// Frame of an image of `size` placed in the slot at `index`
    pub fn frame_of(&self, index: usize, size: Size) -> Rect {
        let (x, y) = self.origin_of(index);
        Rect::at(x, y, size)
    }
}

/// One screen position
///
/// A slot is either empty or resident. Value, image and layer are stored
/// together, so a slot can never hold one without the others.
pub struct Slot<V, I, L> {
    resident: Option<Resident<V, I, L>>,
}

struct Resident<V, I, L> {
    value: V,
    image: I,
    layer: L,
}

impl<V: Copy, I, L> Slot<V, I, L> {
    const fn empty() -> Self {
        Self { resident: None }
    }

    /// Check if the slot holds an image
    pub fn is_occupied(&self) -> bool {
        self.resident.is_some()
    }

    /// Value currently displayed, if any
    pub fn value(&self) -> Option<V> {
        self.resident.as_ref().map(|r| r.value)
    }

    /// Image currently held, if any
    pub fn image(&self) -> Option<&I> {
        self.resident.as_ref().map(|r| &r.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_range() {
        assert_eq!(Digit::new(0).map(Digit::value), Some(0));
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert!(Digit::new(10).is_none());
        assert!(Digit::new(255).is_none());
    }

    #[test]
    fn test_glyph_image_ids() {
        assert_eq!(Digit::new(7).unwrap().image_id(), ImageId::Digit(7));
        assert_eq!(Backdrop.image_id(), ImageId::Background);
        assert_eq!(
            BatteryTier::Low.image_id(),
            ImageId::Battery(BatteryTier::Low)
        );
    }

    #[test]
    fn test_grid_row_major() {
        let grid = SlotGrid::new(10, 20, Size::new(30, 40), 3);
        assert_eq!(grid.origin_of(0), (10, 20));
        assert_eq!(grid.origin_of(2), (70, 20));
        assert_eq!(grid.origin_of(3), (10, 60));
        assert_eq!(
            grid.frame_of(4, Size::new(5, 6)),
            Rect::new(40, 60, 5, 6)
        );
    }

    #[test]
    fn test_grid_zero_columns_is_single_column() {
        let grid = SlotGrid::new(0, 0, Size::new(8, 8), 0);
        assert_eq!(grid.origin_of(2), (0, 16));
    }
}
