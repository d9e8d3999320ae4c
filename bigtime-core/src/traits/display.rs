//! Layer tree trait
//!
//! The platform composes a frame from a stack of windows. Each window owns
//! a tree of child layers (bitmaps and text). Children must be detached
//! before their window is destroyed.

use super::image::{Bitmap, Size};

/// Screen rectangle in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i16,
    pub y: i16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: i16, y: i16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at `(x, y)` with the given size
    pub const fn at(x: i16, y: i16, size: Size) -> Self {
        Self::new(x, y, size.width, size.height)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if a point lies inside the rectangle
    pub fn contains(&self, x: i16, y: i16) -> bool {
        let x = i32::from(x);
        let y = i32::from(y);
        let left = i32::from(self.x);
        let top = i32::from(self.y);
        x >= left
            && y >= top
            && x < left + i32::from(self.width)
            && y < top + i32::from(self.height)
    }
}

/// Fonts available to text layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// 20px pixel font, used for the overlay clock
    Pixel20,
    /// 16px pixel font, used for date, weekday and battery text
    Pixel16,
}

/// Text layer appearance
///
/// Overlay text is always white on a transparent background, centred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    pub font: Font,
}

impl TextStyle {
    pub const fn new(font: Font) -> Self {
        Self { font }
    }
}

/// Errors that can occur in the layer tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Not enough memory to allocate the window or layer
    OutOfMemory,
    /// Parent window no longer exists
    NoSuchWindow,
    /// Layer no longer exists
    NoSuchLayer,
}

/// Trait for the platform's window and layer tree
///
/// `Window` and `Layer` are owning handles: destroying a window or detaching
/// a layer consumes the handle.
pub trait LayerTree {
    /// Owned window handle
    type Window;
    /// Owned child layer handle
    type Layer;

    /// Create a window
    ///
    /// - `dark`: black background when true, white otherwise
    fn create_window(&mut self, dark: bool) -> Result<Self::Window, DisplayError>;

    /// Push a window on top of the window stack, making it visible
    fn push_window(&mut self, window: &Self::Window, animated: bool);

    /// Remove a window from the window stack
    fn pop_window(&mut self, window: &Self::Window, animated: bool);

    /// Destroy a window
    ///
    /// All child layers must have been detached first.
    fn destroy_window(&mut self, window: Self::Window);

    /// Attach a bitmap layer to a window
    fn attach_bitmap<B: Bitmap>(
        &mut self,
        parent: &Self::Window,
        frame: Rect,
        bitmap: &B,
    ) -> Result<Self::Layer, DisplayError>;

    /// Attach a text layer to a window
    fn attach_text(
        &mut self,
        parent: &Self::Window,
        frame: Rect,
        style: TextStyle,
        text: &str,
    ) -> Result<Self::Layer, DisplayError>;

    /// Replace the text of an attached text layer
    fn set_text(&mut self, layer: &Self::Layer, text: &str) -> Result<(), DisplayError>;

    /// Detach a layer from its window and free it
    fn detach(&mut self, layer: Self::Layer);
}
