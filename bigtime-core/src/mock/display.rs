//! Mock layer tree

use heapless::{String, Vec};

use crate::traits::{Bitmap, DisplayError, Font, ImageId, LayerTree, Rect, TextStyle};

/// Most live windows
const MAX_WINDOWS: usize = 8;

/// Most attached layers across all windows
pub const MAX_LAYERS: usize = 32;

/// Longest text a mock text layer keeps; longer text is truncated
const MAX_LAYER_TEXT: usize = 32;

/// Owned window handle
#[derive(Debug)]
pub struct MockWindow {
    id: u32,
}

/// Owned layer handle
#[derive(Debug)]
pub struct MockLayer {
    id: u32,
}

/// What a layer draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerContent {
    Bitmap(ImageId),
    Text(String<MAX_LAYER_TEXT>),
}

/// An attached layer as seen by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerRecord {
    pub id: u32,
    pub window: u32,
    pub frame: Rect,
    pub content: LayerContent,
    pub font: Option<Font>,
}

impl LayerRecord {
    pub fn image(&self) -> Option<ImageId> {
        match self.content {
            LayerContent::Bitmap(id) => Some(id),
            LayerContent::Text(_) => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            LayerContent::Text(text) => Some(text.as_str()),
            LayerContent::Bitmap(_) => None,
        }
    }
}

/// Layer tree that records windows, the window stack and attached layers
pub struct MockLayerTree {
    windows: Vec<u32, MAX_WINDOWS>,
    stack: Vec<u32, MAX_WINDOWS>,
    layers: Vec<LayerRecord, MAX_LAYERS>,
    next_window: u32,
    next_layer: u32,
    layer_limit: usize,
    fail_windows: bool,
    orphaned: usize,
}

impl MockLayerTree {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            stack: Vec::new(),
            layers: Vec::new(),
            next_window: 1,
            next_layer: 1,
            layer_limit: MAX_LAYERS,
            fail_windows: false,
            orphaned: 0,
        }
    }

    /// Attached layers in attach order, bottom first
    pub fn layers(&self) -> &[LayerRecord] {
        &self.layers
    }

    /// Identifier of a window handle, as stored in [`LayerRecord::window`]
    pub fn window_id(&self, window: &MockWindow) -> u32 {
        window.id
    }

    /// Windows created and not yet destroyed
    pub fn live_windows(&self) -> usize {
        self.windows.len()
    }

    /// Windows currently pushed
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Topmost pushed window
    pub fn top_window(&self) -> Option<u32> {
        self.stack.last().copied()
    }

    /// Layers that were still attached when their window was destroyed
    pub fn orphaned_layers(&self) -> usize {
        self.orphaned
    }

    /// Make attach fail with `OutOfMemory` once `limit` layers exist
    pub fn set_layer_limit(&mut self, limit: usize) {
        self.layer_limit = limit.min(MAX_LAYERS);
    }

    /// Make `create_window` fail with `OutOfMemory`
    pub fn fail_window_creation(&mut self, fail: bool) {
        self.fail_windows = fail;
    }

    /// Text of the topmost text layer with exactly this frame
    pub fn text_at(&self, frame: Rect) -> Option<&str> {
        self.layers
            .iter()
            .rev()
            .filter(|l| l.frame == frame)
            .find_map(LayerRecord::text)
    }

    /// Image of the topmost bitmap layer covering a point
    pub fn image_at(&self, x: i16, y: i16) -> Option<ImageId> {
        self.layers
            .iter()
            .rev()
            .filter(|l| l.frame.contains(x, y))
            .find_map(LayerRecord::image)
    }

    /// Layers attached to one window, bottom first
    pub fn layers_of(&self, window: u32) -> impl Iterator<Item = &LayerRecord> + '_ {
        self.layers.iter().filter(move |l| l.window == window)
    }

    fn attach(
        &mut self,
        parent: &MockWindow,
        frame: Rect,
        content: LayerContent,
        font: Option<Font>,
    ) -> Result<MockLayer, DisplayError> {
        if !self.windows.contains(&parent.id) {
            return Err(DisplayError::NoSuchWindow);
        }
        if self.layers.len() >= self.layer_limit {
            return Err(DisplayError::OutOfMemory);
        }

        let id = self.allocate_layer_id();
        self.layers
            .push(LayerRecord {
                id,
                window: parent.id,
                frame,
                content,
                font,
            })
            .map_err(|_| DisplayError::OutOfMemory)?;
        Ok(MockLayer { id })
    }

    /// Next window id not held by a live window; zero is never issued
    fn allocate_window_id(&mut self) -> u32 {
        loop {
            let id = self.next_window;
            self.next_window = next_id(id);
            if id != 0 && !self.windows.contains(&id) {
                return id;
            }
        }
    }

    /// Next layer id not held by an attached layer; zero is never issued
    fn allocate_layer_id(&mut self) -> u32 {
        loop {
            let id = self.next_layer;
            self.next_layer = next_id(id);
            if id != 0 && !self.layers.iter().any(|l| l.id == id) {
                return id;
            }
        }
    }
}

fn next_id(id: u32) -> u32 {
    id.wrapping_add(1).max(1)
}

impl Default for MockLayerTree {
    fn default() -> Self {
        Self::new()
    }
}

fn truncated(text: &str) -> String<MAX_LAYER_TEXT> {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

impl LayerTree for MockLayerTree {
    type Window = MockWindow;
    type Layer = MockLayer;

    fn create_window(&mut self, _dark: bool) -> Result<MockWindow, DisplayError> {
        if self.fail_windows {
            return Err(DisplayError::OutOfMemory);
        }
        if self.windows.is_full() {
            return Err(DisplayError::OutOfMemory);
        }
        let id = self.allocate_window_id();
        self.windows
            .push(id)
            .map_err(|_| DisplayError::OutOfMemory)?;
        Ok(MockWindow { id })
    }

    fn push_window(&mut self, window: &MockWindow, _animated: bool) {
        if self.windows.contains(&window.id) && !self.stack.contains(&window.id) {
            let _ = self.stack.push(window.id);
        }
    }

    fn pop_window(&mut self, window: &MockWindow, _animated: bool) {
        self.stack.retain(|id| *id != window.id);
    }

    fn destroy_window(&mut self, window: MockWindow) {
        let before = self.layers.len();
        self.layers.retain(|l| l.window != window.id);
        self.orphaned += before - self.layers.len();
        self.stack.retain(|id| *id != window.id);
        self.windows.retain(|id| *id != window.id);
    }

    fn attach_bitmap<B: Bitmap>(
        &mut self,
        parent: &MockWindow,
        frame: Rect,
        bitmap: &B,
    ) -> Result<MockLayer, DisplayError> {
        self.attach(parent, frame, LayerContent::Bitmap(bitmap.id()), None)
    }

    fn attach_text(
        &mut self,
        parent: &MockWindow,
        frame: Rect,
        style: TextStyle,
        text: &str,
    ) -> Result<MockLayer, DisplayError> {
        self.attach(
            parent,
            frame,
            LayerContent::Text(truncated(text)),
            Some(style.font),
        )
    }

    fn set_text(&mut self, layer: &MockLayer, text: &str) -> Result<(), DisplayError> {
        let record = self
            .layers
            .iter_mut()
            .find(|l| l.id == layer.id)
            .ok_or(DisplayError::NoSuchLayer)?;
        record.content = LayerContent::Text(truncated(text));
        Ok(())
    }

    fn detach(&mut self, layer: MockLayer) {
        self.layers.retain(|l| l.id != layer.id);
    }
}
