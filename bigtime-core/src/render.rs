//! Two-digit value rendering
//!
//! Each row of the clock face shows a value between 0 and 99 in two digit
//! slots. Rows are ordered on screen as:
//!
//! ```text
//!     Row 0   (slots 0 1)
//!     Row 1   (slots 2 3)
//! ```

use crate::slots::{Digit, SlotError, SlotManager};
use crate::traits::{Gfx, ImageStore, LayerTree};

/// Digit columns per row
pub const ROW_COLUMNS: usize = 2;

/// A row value plus its leading-zero policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayValue {
    value: u8,
    suppress_leading_zero: bool,
}

impl DisplayValue {
    /// Create a display value, wrapping anything above 99
    pub const fn new(value: u16, suppress_leading_zero: bool) -> Self {
        Self {
            value: (value % 100) as u8,
            suppress_leading_zero,
        }
    }

    pub const fn value(&self) -> u8 {
        self.value
    }

    pub const fn suppress_leading_zero(&self) -> bool {
        self.suppress_leading_zero
    }

    /// Digit to show in a column, `None` for a blanked leading zero
    ///
    /// Column 0 holds the tens, column 1 the ones.
    pub const fn digit_at(&self, column: usize) -> Option<u8> {
        match column {
            0 if self.value < 10 && self.suppress_leading_zero => None,
            0 => Some(self.value / 10),
            _ => Some(self.value % 10),
        }
    }
}

/// Show `value` on a row of two digit slots
///
/// The value wraps into 0-99. Columns are processed ones-first. Each target
/// slot is unloaded unconditionally and then loaded with its new digit,
/// unless it is the leading column, the digit is zero and
/// `suppress_leading_zero` is set, in which case it stays blank.
///
/// Both columns are always processed; the first error is returned.
pub fn render_row<S, L, const N: usize>(
    slots: &mut SlotManager<Digit, S, L, N>,
    gfx: &mut Gfx<'_, S, L>,
    parent: &L::Window,
    value: u16,
    row: usize,
    suppress_leading_zero: bool,
) -> Result<(), SlotError>
where
    S: ImageStore,
    L: LayerTree,
{
    let shown = DisplayValue::new(value, suppress_leading_zero);
    let mut result = Ok(());

    for column in (0..ROW_COLUMNS).rev() {
        let index = row * ROW_COLUMNS + column;

        let mut outcome = slots.unload(gfx, index);
        if let (Ok(()), Some(digit)) = (outcome, shown.digit_at(column)) {
            outcome = slots.load_digit(gfx, parent, index, digit);
        }
        if result.is_ok() {
            result = outcome;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FaceLayout;
    use crate::mock::{MockImageStore, MockLayerTree};
    use crate::traits::{ImageError, ImageId, LayerTree};
    use proptest::prelude::*;

    type Digits = SlotManager<Digit, MockImageStore, MockLayerTree, 4>;

    fn setup() -> (MockImageStore, MockLayerTree, Digits) {
        let slots = Digits::new(FaceLayout::default().digit_grid());
        (MockImageStore::new(), MockLayerTree::new(), slots)
    }

    fn shown(slots: &Digits, row: usize) -> (Option<u8>, Option<u8>) {
        (
            slots.value(row * 2).map(Digit::value),
            slots.value(row * 2 + 1).map(Digit::value),
        )
    }

    #[test]
    fn test_display_value_wraps() {
        assert_eq!(DisplayValue::new(123, false).value(), 23);
        assert_eq!(DisplayValue::new(100, false).value(), 0);
    }

    #[test]
    fn test_display_value_digits() {
        let padded = DisplayValue::new(5, false);
        assert_eq!(padded.digit_at(0), Some(0));
        assert_eq!(padded.digit_at(1), Some(5));

        let blanked = DisplayValue::new(5, true);
        assert_eq!(blanked.digit_at(0), None);
        assert_eq!(blanked.digit_at(1), Some(5));

        let two_digits = DisplayValue::new(42, true);
        assert_eq!(two_digits.digit_at(0), Some(4));
        assert!(two_digits.suppress_leading_zero());
        assert!(!padded.suppress_leading_zero());
    }

    #[test]
    fn test_render_replaces_previous_value() {
        let (mut images, mut layers, mut slots) = setup();
        let window = layers.create_window(false).unwrap();
        let mut gfx = Gfx::new(&mut images, &mut layers);

        render_row(&mut slots, &mut gfx, &window, 47, 1, false).unwrap();
        render_row(&mut slots, &mut gfx, &window, 8, 1, true).unwrap();

        assert_eq!(shown(&slots, 1), (None, Some(8)));
        assert_eq!(shown(&slots, 0), (None, None));
        assert_eq!(images.live_count(), 1);
        assert_eq!(images.released_count(), 2);
    }

    #[test]
    fn test_render_zero_with_suppression_keeps_ones() {
        let (mut images, mut layers, mut slots) = setup();
        let window = layers.create_window(false).unwrap();
        let mut gfx = Gfx::new(&mut images, &mut layers);

        render_row(&mut slots, &mut gfx, &window, 0, 0, true).unwrap();
        assert_eq!(shown(&slots, 0), (None, Some(0)));
    }

    #[test]
    fn test_render_wraps_large_values() {
        let (mut images, mut layers, mut slots) = setup();
        let window = layers.create_window(false).unwrap();
        let mut gfx = Gfx::new(&mut images, &mut layers);

        render_row(&mut slots, &mut gfx, &window, 1234, 0, false).unwrap();
        assert_eq!(shown(&slots, 0), (Some(3), Some(4)));
    }

    #[test]
    fn test_render_continues_past_missing_glyph() {
        let (mut images, mut layers, mut slots) = setup();
        images.mark_missing(ImageId::Digit(5));
        let window = layers.create_window(false).unwrap();
        let mut gfx = Gfx::new(&mut images, &mut layers);

        let result = render_row(&mut slots, &mut gfx, &window, 35, 1, false);
        assert_eq!(result, Err(SlotError::Image(ImageError::NotFound)));
        assert_eq!(shown(&slots, 1), (Some(3), None));
    }

    proptest! {
        #[test]
        fn prop_render_shows_tens_and_ones(value in 0u16..100, row in 0usize..2) {
            let (mut images, mut layers, mut slots) = setup();
            let window = layers.create_window(false).unwrap();
            let mut gfx = Gfx::new(&mut images, &mut layers);

            render_row(&mut slots, &mut gfx, &window, value, row, false).unwrap();

            let tens = (value / 10) as u8;
            let ones = (value % 10) as u8;
            prop_assert_eq!(shown(&slots, row), (Some(tens), Some(ones)));
            prop_assert_eq!(shown(&slots, 1 - row), (None, None));
        }

        #[test]
        fn prop_single_digit_suppressed(value in 0u16..10) {
            let (mut images, mut layers, mut slots) = setup();
            let window = layers.create_window(false).unwrap();
            let mut gfx = Gfx::new(&mut images, &mut layers);

            render_row(&mut slots, &mut gfx, &window, value, 0, true).unwrap();

            prop_assert_eq!(shown(&slots, 0), (None, Some(value as u8)));
            prop_assert_eq!(images.live_count(), 1);
        }

        #[test]
        fn prop_rerender_never_leaks(first in 0u16..100, second in 0u16..100, suppress in any::<bool>()) {
            let (mut images, mut layers, mut slots) = setup();
            let window = layers.create_window(false).unwrap();
            let mut gfx = Gfx::new(&mut images, &mut layers);

            render_row(&mut slots, &mut gfx, &window, first, 0, suppress).unwrap();
            render_row(&mut slots, &mut gfx, &window, second, 0, suppress).unwrap();

            prop_assert_eq!(images.live_count(), slots.occupied_count());
            prop_assert_eq!(layers.layers().len(), slots.occupied_count());
        }
    }
}
