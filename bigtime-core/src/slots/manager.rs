//! Fixed-capacity slot arena

use super::{Digit, Glyph, Resident, Slot, SlotError, SlotGrid};
use crate::traits::{Bitmap, Gfx, ImageStore, LayerTree};

/// Owns `N` slots and the images loaded into them
///
/// `load` and `unload` are the only places an image is created or
/// destroyed, and they are strictly paired: loading onto an occupied slot
/// does nothing (callers unload first), and unloading an empty slot does
/// nothing. That lets callers always "unload, then maybe load" without
/// checking the previous state.
pub struct SlotManager<V, S: ImageStore, L: LayerTree, const N: usize> {
    slots: [Slot<V, S::Image, L::Layer>; N],
    grid: SlotGrid,
}

impl<V: Glyph, S: ImageStore, L: LayerTree, const N: usize> SlotManager<V, S, L, N> {
    /// Create a manager with every slot empty
    pub fn new(grid: SlotGrid) -> Self {
        Self {
            slots: core::array::from_fn(|_| Slot::empty()),
            grid,
        }
    }

    /// Number of slots
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Get a slot by index
    pub fn slot(&self, index: usize) -> Option<&Slot<V, S::Image, L::Layer>> {
        self.slots.get(index)
    }

    /// Value displayed in a slot, `None` if empty or out of range
    pub fn value(&self, index: usize) -> Option<V> {
        self.slots.get(index).and_then(Slot::value)
    }

    /// Check if a slot holds an image
    pub fn is_occupied(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(Slot::is_occupied)
    }

    /// Number of slots currently holding an image
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_occupied()).count()
    }

    /// Load the image for `value` into a slot and attach it to `parent`
    ///
    /// The image is placed at the slot's grid position with the image's own
    /// size. If the slot is already occupied nothing changes and
    /// `SlotError::Occupied` is returned. If the image cannot be resolved
    /// or attached the slot stays empty and no memory is kept.
    pub fn load(
        &mut self,
        gfx: &mut Gfx<'_, S, L>,
        parent: &L::Window,
        index: usize,
        value: V,
    ) -> Result<(), SlotError> {
        let Some(slot) = self.slots.get_mut(index) else {
            warn!("slot {} out of range (capacity {})", index, N);
            return Err(SlotError::IndexOutOfRange { index, capacity: N });
        };

        if slot.is_occupied() {
            warn!(
                "slot {} already occupied, not loading {:?}",
                index,
                value.image_id()
            );
            return Err(SlotError::Occupied { index });
        }

        let image = gfx.images.resolve(value.image_id()).map_err(|e| {
            warn!("slot {}: cannot resolve {:?}: {:?}", index, value.image_id(), e);
            SlotError::Image(e)
        })?;

        let frame = self.grid.frame_of(index, image.size());
        let layer = match gfx.layers.attach_bitmap(parent, frame, &image) {
            Ok(layer) => layer,
            Err(e) => {
                warn!("slot {}: cannot attach {:?}: {:?}", index, value.image_id(), e);
                gfx.images.release(image);
                return Err(SlotError::Display(e));
            }
        };

        trace!("slot {} <- {:?}", index, value.image_id());
        slot.resident = Some(Resident {
            value,
            image,
            layer,
        });
        Ok(())
    }

    /// Detach and release a slot's image
    ///
    /// Unloading an empty slot is a no-op, so this is safe to call for every
    /// slot during teardown.
    pub fn unload(&mut self, gfx: &mut Gfx<'_, S, L>, index: usize) -> Result<(), SlotError> {
        let Some(slot) = self.slots.get_mut(index) else {
            warn!("slot {} out of range (capacity {})", index, N);
            return Err(SlotError::IndexOutOfRange { index, capacity: N });
        };

        if let Some(resident) = slot.resident.take() {
            trace!("slot {} -> released {:?}", index, resident.value.image_id());
            // Detach before release: the layer still references the pixels
            gfx.layers.detach(resident.layer);
            gfx.images.release(resident.image);
        }
        Ok(())
    }

    /// Unload every slot
    ///
    /// Afterwards every slot is empty.
    pub fn unload_all(&mut self, gfx: &mut Gfx<'_, S, L>) {
        for index in 0..N {
            let _ = self.unload(gfx, index);
        }
    }
}

impl<S: ImageStore, L: LayerTree, const N: usize> SlotManager<Digit, S, L, N> {
    /// Load a raw digit value, rejecting anything outside 0-9
    pub fn load_digit(
        &mut self,
        gfx: &mut Gfx<'_, S, L>,
        parent: &L::Window,
        index: usize,
        digit: u8,
    ) -> Result<(), SlotError> {
        let Some(digit) = Digit::new(digit) else {
            warn!("slot {}: digit {} out of range", index, digit);
            return Err(SlotError::InvalidDigit(digit));
        };
        self.load(gfx, parent, index, digit)
    }
}
