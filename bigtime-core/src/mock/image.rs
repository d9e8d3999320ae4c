//! Mock image store

use heapless::Vec;

use crate::config::{DIGIT_HEIGHT, DIGIT_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::traits::{Bitmap, ImageError, ImageId, ImageStore, Size};

/// Most images the mock store can hold at once
pub const MAX_LIVE_IMAGES: usize = 32;

/// Most identifiers that can be marked missing
const MAX_MISSING: usize = 16;

/// Decoded image handed out by [`MockImageStore`]
///
/// Every resolve gets a fresh serial number, so two images of the same
/// digit are distinguishable.
#[derive(Debug, PartialEq, Eq)]
pub struct MockImage {
    id: ImageId,
    serial: u32,
    size: Size,
}

impl MockImage {
    pub fn serial(&self) -> u32 {
        self.serial
    }
}

impl Bitmap for MockImage {
    fn id(&self) -> ImageId {
        self.id
    }

    fn size(&self) -> Size {
        self.size
    }
}

/// Pixel size of each resource on the reference device
pub fn image_size(id: ImageId) -> Size {
    match id {
        ImageId::Digit(_) => Size::new(DIGIT_WIDTH, DIGIT_HEIGHT),
        ImageId::Battery(_) => Size::new(32, 16),
        ImageId::Background => Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
    }
}

/// Image store that tracks every live image
pub struct MockImageStore {
    live: Vec<(u32, ImageId), MAX_LIVE_IMAGES>,
    missing: Vec<ImageId, MAX_MISSING>,
    capacity: usize,
    next_serial: u32,
    resolved: usize,
    released: usize,
    unknown_releases: usize,
}

impl MockImageStore {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LIVE_IMAGES)
    }

    /// Store that runs out of memory after `capacity` live images
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            live: Vec::new(),
            missing: Vec::new(),
            capacity: capacity.min(MAX_LIVE_IMAGES),
            next_serial: 1,
            resolved: 0,
            released: 0,
            unknown_releases: 0,
        }
    }

    /// Make `resolve` fail with `NotFound` for an identifier
    pub fn mark_missing(&mut self, id: ImageId) {
        if !self.missing.contains(&id) {
            let _ = self.missing.push(id);
        }
    }

    /// Images resolved and not yet released
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Successful resolves so far
    pub fn resolved_count(&self) -> usize {
        self.resolved
    }

    /// Releases of live images so far
    pub fn released_count(&self) -> usize {
        self.released
    }

    /// Releases of images this store did not hand out or already took back
    pub fn unknown_releases(&self) -> usize {
        self.unknown_releases
    }

    /// Check if at least one image of `id` is live
    pub fn is_live(&self, id: ImageId) -> bool {
        self.live.iter().any(|(_, live)| *live == id)
    }

    /// Identifiers of all live images, in resolve order
    pub fn live_ids(&self) -> impl Iterator<Item = ImageId> + '_ {
        self.live.iter().map(|(_, id)| *id)
    }
}

impl Default for MockImageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageStore for MockImageStore {
    type Image = MockImage;

    fn resolve(&mut self, id: ImageId) -> Result<MockImage, ImageError> {
        if self.missing.contains(&id) {
            return Err(ImageError::NotFound);
        }
        if self.live.len() >= self.capacity {
            return Err(ImageError::OutOfMemory);
        }

        let serial = self.next_serial;
        self.live
            .push((serial, id))
            .map_err(|_| ImageError::OutOfMemory)?;
        self.next_serial = self.next_serial.wrapping_add(1);
        self.resolved += 1;

        Ok(MockImage {
            id,
            serial,
            size: image_size(id),
        })
    }

    fn release(&mut self, image: MockImage) {
        match self.live.iter().position(|(serial, _)| *serial == image.serial) {
            Some(pos) => {
                self.live.remove(pos);
                self.released += 1;
            }
            None => self.unknown_releases += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::BatteryTier;

    #[test]
    fn test_resolve_hands_out_fresh_images() {
        let mut store = MockImageStore::new();
        let a = store.resolve(ImageId::Digit(1)).unwrap();
        let b = store.resolve(ImageId::Digit(1)).unwrap();

        assert_ne!(a.serial(), b.serial());
        assert_eq!(a.size(), Size::new(72, 84));
        assert_eq!(store.live_count(), 2);

        let _background = store.resolve(ImageId::Background).unwrap();
        let ids: Vec<ImageId, 4> = store.live_ids().collect();
        assert_eq!(ids.as_slice(), &[ImageId::Digit(1), ImageId::Digit(1), ImageId::Background]);

        store.release(a);
        store.release(b);
        assert_eq!(store.live_count(), 1);
        assert_eq!(store.released_count(), 2);
        assert_eq!(store.live_ids().next(), Some(ImageId::Background));
    }

    #[test]
    fn test_foreign_release_counted() {
        let mut store = MockImageStore::new();
        let mut other = MockImageStore::new();
        let _ = store.resolve(ImageId::Background).unwrap();
        let foreign = other.resolve(ImageId::Battery(BatteryTier::Low)).unwrap();
        // A serial this store never handed out
        store.release(MockImage {
            serial: foreign.serial() + 100,
            ..foreign
        });
        assert_eq!(store.unknown_releases(), 1);
        assert_eq!(store.live_count(), 1);
    }

    #[test]
    fn test_capacity_and_missing() {
        let mut store = MockImageStore::with_capacity(1);
        store.mark_missing(ImageId::Digit(3));
        assert_eq!(store.resolve(ImageId::Digit(3)), Err(ImageError::NotFound));

        let _kept = store.resolve(ImageId::Digit(4)).unwrap();
        assert_eq!(store.resolve(ImageId::Digit(5)), Err(ImageError::OutOfMemory));
        assert_eq!(store.resolved_count(), 1);
        assert!(store.is_live(ImageId::Digit(4)));
    }
}
