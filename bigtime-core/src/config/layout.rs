//! Screen layout definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::slots::SlotGrid;
use crate::traits::{Rect, Size};

/// Display width in pixels
pub const SCREEN_WIDTH: u16 = 144;

/// Display height in pixels
pub const SCREEN_HEIGHT: u16 = 168;

/// Digit image size: a quarter of the display
pub const DIGIT_WIDTH: u16 = SCREEN_WIDTH / 2;
pub const DIGIT_HEIGHT: u16 = SCREEN_HEIGHT / 2;

/// Digit slot on-screen layout:
///
/// ```text
///     0 1
///     2 3
/// ```
pub const DIGIT_COLUMNS: u8 = 2;

/// Number of digit slots on the clock face (two rows of two)
pub const TOTAL_DIGIT_SLOTS: usize = 4;

/// Clock face layout
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FaceLayout {
    /// Display size
    pub screen: Size,
    /// Size of one digit cell
    pub digit_cell: Size,
    /// Digit cells per row
    pub digit_columns: u8,
    /// Overlay element frames
    pub overlay: OverlayLayout,
}

impl Default for FaceLayout {
    fn default() -> Self {
        Self {
            screen: Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            digit_cell: Size::new(DIGIT_WIDTH, DIGIT_HEIGHT),
            digit_columns: DIGIT_COLUMNS,
            overlay: OverlayLayout::default(),
        }
    }
}

impl FaceLayout {
    /// Grid the digit slots are placed on
    pub fn digit_grid(&self) -> SlotGrid {
        SlotGrid::new(0, 0, self.digit_cell, self.digit_columns)
    }

    /// Grid holding the single full-screen background slot
    pub fn background_grid(&self) -> SlotGrid {
        SlotGrid::new(0, 0, self.screen, 1)
    }
}

/// Overlay element frames
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlayLayout {
    pub time: Rect,
    pub weekday: Rect,
    pub date: Rect,
    pub battery_icon: Rect,
    pub battery_text: Rect,
}

impl Default for OverlayLayout {
    fn default() -> Self {
        Self {
            time: Rect::new(0, 30, SCREEN_WIDTH, 32),
            weekday: Rect::new(0, 57, SCREEN_WIDTH, 32),
            date: Rect::new(0, 76, SCREEN_WIDTH, 32),
            battery_icon: Rect::new(30, 100, 32, 16),
            battery_text: Rect::new(67, 99, 60, 32),
        }
    }
}

impl OverlayLayout {
    /// Grid holding the single battery icon slot
    pub fn battery_grid(&self) -> SlotGrid {
        SlotGrid::new(
            self.battery_icon.x,
            self.battery_icon.y,
            self.battery_icon.size(),
            1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_cells_quarter_the_screen() {
        let layout = FaceLayout::default();
        assert_eq!(
            layout.digit_cell.width * u16::from(layout.digit_columns),
            layout.screen.width
        );
        assert_eq!(layout.digit_cell.height * 2, layout.screen.height);
    }

    #[test]
    fn test_digit_grid_positions() {
        let grid = FaceLayout::default().digit_grid();
        assert_eq!(grid.origin_of(0), (0, 0));
        assert_eq!(grid.origin_of(1), (72, 0));
        assert_eq!(grid.origin_of(2), (0, 84));
        assert_eq!(grid.origin_of(3), (72, 84));
    }

    #[test]
    fn test_battery_grid_anchors_at_icon_frame() {
        let overlay = OverlayLayout::default();
        assert_eq!(overlay.battery_grid().origin_of(0), (30, 100));
    }
}
