//! Image store trait

use crate::overlay::BatteryTier;

/// Width and height in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Logical identifier of a pre-rendered image resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImageId {
    /// Large digit glyph, 0-9
    Digit(u8),
    /// Battery icon for one charge tier
    Battery(BatteryTier),
    /// Full-screen clock face background
    Background,
}

/// Errors that can occur while resolving an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImageError {
    /// No resource exists for the identifier
    NotFound,
    /// Not enough memory to decode the image
    OutOfMemory,
}

/// Decoded pixel data owned by whoever resolved it
///
/// Implementations must not be `Clone`: an image is released by moving it
/// back into the store, so the compiler rejects a second release.
pub trait Bitmap {
    /// Identifier this image was resolved from
    fn id(&self) -> ImageId;

    /// Pixel dimensions of the image
    fn size(&self) -> Size;
}

/// Trait for the resource image store
///
/// Every successful `resolve` allocates a fresh, independent image; two
/// slots showing the same digit hold two images. There is no sharing and
/// no reference counting.
pub trait ImageStore {
    /// Owned decoded image
    type Image: Bitmap;

    /// Decode the image for a logical identifier
    fn resolve(&mut self, id: ImageId) -> Result<Self::Image, ImageError>;

    /// Give an image's memory back to the store
    fn release(&mut self, image: Self::Image);
}
