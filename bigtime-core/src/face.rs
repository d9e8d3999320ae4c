//! Clock face
//!
//! The main window: a full-screen background plus two rows of digit slots,
//! hours on top and minutes below. The window lives from `start` to
//! `shutdown`; only the digit slots change in between.

use crate::config::{FaceLayout, TOTAL_DIGIT_SLOTS};
use crate::overlay::text::display_hour;
use crate::render::render_row;
use crate::slots::{Backdrop, Digit, SlotManager};
use crate::traits::{DisplayError, Gfx, ImageStore, LayerTree, WallClock};

/// Row showing the hour
pub const HOUR_ROW: usize = 0;

/// Row showing the minute
pub const MINUTE_ROW: usize = 1;

/// Big-digit clock face
pub struct ClockFace<S: ImageStore, L: LayerTree> {
    window: Option<L::Window>,
    background: SlotManager<Backdrop, S, L, 1>,
    digits: SlotManager<Digit, S, L, TOTAL_DIGIT_SLOTS>,
}

impl<S: ImageStore, L: LayerTree> ClockFace<S, L> {
    pub fn new(layout: &FaceLayout) -> Self {
        Self {
            window: None,
            background: SlotManager::new(layout.background_grid()),
            digits: SlotManager::new(layout.digit_grid()),
        }
    }

    /// Check if the face window exists
    pub fn is_started(&self) -> bool {
        self.window.is_some()
    }

    /// Digit shown in a slot, `None` when blank
    pub fn digit(&self, index: usize) -> Option<u8> {
        self.digits.value(index).map(Digit::value)
    }

    /// Digits of the hour row, tens first
    pub fn hour_row(&self) -> (Option<u8>, Option<u8>) {
        self.row(HOUR_ROW)
    }

    /// Digits of the minute row, tens first
    pub fn minute_row(&self) -> (Option<u8>, Option<u8>) {
        self.row(MINUTE_ROW)
    }

    /// Check if the background image is loaded
    pub fn has_background(&self) -> bool {
        self.background.is_occupied(0)
    }

    fn row(&self, row: usize) -> (Option<u8>, Option<u8>) {
        (self.digit(row * 2), self.digit(row * 2 + 1))
    }

    /// Create and push the face window, load the background and render `now`
    ///
    /// Renders immediately so the face is never blank before the first tick.
    /// Calling `start` twice does nothing the second time.
    pub fn start(&mut self, gfx: &mut Gfx<'_, S, L>, now: &WallClock) -> Result<(), DisplayError> {
        if self.window.is_some() {
            return Ok(());
        }

        let window = gfx.layers.create_window(false).map_err(|e| {
            error!("face: cannot create window: {:?}", e);
            e
        })?;
        gfx.layers.push_window(&window, false);

        // Background first so the digits stack above it
        let _ = self.background.load(gfx, &window, 0, Backdrop);
        self.window = Some(window);

        info!("face: started");
        self.on_minute_tick(gfx, now);
        Ok(())
    }

    /// Redraw both rows for `now`
    ///
    /// Render errors are logged and the face keeps whatever could be drawn.
    pub fn on_minute_tick(&mut self, gfx: &mut Gfx<'_, S, L>, now: &WallClock) {
        let Some(window) = self.window.as_ref() else {
            warn!("face: tick before start");
            return;
        };

        let hour = display_hour(now.hour, now.is_24h);
        if let Err(e) = render_row(&mut self.digits, gfx, window, u16::from(hour), HOUR_ROW, true) {
            warn!("face: hour row incomplete: {:?}", e);
        }
        if let Err(e) = render_row(
            &mut self.digits,
            gfx,
            window,
            u16::from(now.minute),
            MINUTE_ROW,
            false,
        ) {
            warn!("face: minute row incomplete: {:?}", e);
        }
        trace!("face: {}:{}", hour, now.minute);
    }

    /// Release every image, then pop and destroy the window
    pub fn shutdown(&mut self, gfx: &mut Gfx<'_, S, L>) {
        self.background.unload_all(gfx);
        self.digits.unload_all(gfx);

        if let Some(window) = self.window.take() {
            gfx.layers.pop_window(&window, false);
            gfx.layers.destroy_window(window);
            info!("face: shut down");
        }
    }
}
