//! Overlay controller
//!
//! Owns the overlay window, its text layers, the battery icon slot and the
//! auto-hide timer. None of these exist while the overlay is hidden.

use super::battery::BatteryTier;
use super::machine::{OverlayEvent, OverlayState};
use super::text::{format_battery, format_date, format_time, format_weekday};
use crate::config::{OverlayConfig, OverlayLayout};
use crate::slots::SlotManager;
use crate::traits::{
    BatterySensor, ClockSource, DisplayError, Font, Gfx, ImageStore, LayerTree, Rect, TextStyle,
    TimerError, TimerService, WallClock,
};

/// Index of the battery icon in its one-entry slot manager
const BATTERY_SLOT: usize = 0;

/// Errors that prevent the overlay from showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OverlayError {
    /// Overlay window could not be created
    Display(DisplayError),
    /// Auto-hide timer could not be scheduled
    Timer(TimerError),
}

/// Text layers of a shown overlay
///
/// A layer that failed to attach is `None`; the overlay still shows.
struct TextLayers<Y> {
    time: Option<Y>,
    weekday: Option<Y>,
    date: Option<Y>,
    battery: Option<Y>,
}

impl<Y> TextLayers<Y> {
    fn detach_all<L: LayerTree<Layer = Y>>(self, layers: &mut L) {
        for layer in [self.time, self.weekday, self.date, self.battery]
            .into_iter()
            .flatten()
        {
            layers.detach(layer);
        }
    }
}

/// Resources held while the overlay is showing
struct Shown<L: LayerTree, T: TimerService> {
    window: L::Window,
    texts: TextLayers<L::Layer>,
    timer: T::Handle,
}

/// Tap-activated status overlay
pub struct OverlayController<S: ImageStore, L: LayerTree, T: TimerService> {
    battery: SlotManager<BatteryTier, S, L, 1>,
    shown: Option<Shown<L, T>>,
    layout: OverlayLayout,
    timeout_ms: u32,
}

impl<S: ImageStore, L: LayerTree, T: TimerService> OverlayController<S, L, T> {
    /// Create a hidden overlay
    pub fn new(layout: OverlayLayout, config: &OverlayConfig) -> Self {
        Self {
            battery: SlotManager::new(layout.battery_grid()),
            shown: None,
            layout,
            timeout_ms: config.timeout_ms,
        }
    }

    /// Current visibility
    pub fn state(&self) -> OverlayState {
        if self.shown.is_some() {
            OverlayState::Showing
        } else {
            OverlayState::Hidden
        }
    }

    /// Battery tier currently displayed, if the icon is loaded
    pub fn battery_tier(&self) -> Option<BatteryTier> {
        self.battery.value(BATTERY_SLOT)
    }

    /// Pending auto-hide timer, if showing
    pub fn pending_timer(&self) -> Option<T::Handle> {
        self.shown.as_ref().map(|s| s.timer)
    }

    /// Handle a tap: show when hidden, hide when showing
    pub fn on_tap<C, B>(
        &mut self,
        gfx: &mut Gfx<'_, S, L>,
        timers: &mut T,
        clock: &C,
        sensor: &mut B,
    ) -> Result<OverlayState, OverlayError>
    where
        C: ClockSource,
        B: BatterySensor,
    {
        match self.state().transition(OverlayEvent::Tap) {
            OverlayState::Showing => self.show(gfx, timers, clock, sensor)?,
            OverlayState::Hidden => self.hide(gfx, timers),
        }
        Ok(self.state())
    }

    /// Handle an expired timer
    ///
    /// Only the currently pending auto-hide timer hides the overlay; an
    /// expiry from an earlier show, or one arriving while hidden, is
    /// ignored.
    pub fn on_timeout(
        &mut self,
        gfx: &mut Gfx<'_, S, L>,
        timers: &mut T,
        handle: T::Handle,
    ) -> OverlayState {
        if self.pending_timer() != Some(handle) {
            debug!("overlay: ignoring stale timer");
            return self.state();
        }
        if self.state().transition(OverlayEvent::Timeout) == OverlayState::Hidden {
            self.hide(gfx, timers);
        }
        self.state()
    }

    /// Redraw the time, weekday and date text while showing
    pub fn refresh_time(&mut self, gfx: &mut Gfx<'_, S, L>, now: &WallClock) {
        let Some(shown) = self.shown.as_ref() else {
            return;
        };
        set_text(gfx.layers, &shown.texts.time, &format_time(now));
        set_text(gfx.layers, &shown.texts.weekday, &format_weekday(now));
        set_text(gfx.layers, &shown.texts.date, &format_date(now));
    }

    /// Re-read the battery and redraw its icon and text while showing
    pub fn refresh_battery<B: BatterySensor>(&mut self, gfx: &mut Gfx<'_, S, L>, sensor: &mut B) {
        let Some(shown) = self.shown.as_ref() else {
            return;
        };
        let percent = sensor.battery_percent().min(100);
        set_text(gfx.layers, &shown.texts.battery, &format_battery(percent));
        load_battery_icon(&mut self.battery, gfx, &shown.window, percent);
    }

    /// Hide the overlay if showing, releasing everything it holds
    pub fn shutdown(&mut self, gfx: &mut Gfx<'_, S, L>, timers: &mut T) {
        self.hide(gfx, timers);
    }

    fn show<C, B>(
        &mut self,
        gfx: &mut Gfx<'_, S, L>,
        timers: &mut T,
        clock: &C,
        sensor: &mut B,
    ) -> Result<(), OverlayError>
    where
        C: ClockSource,
        B: BatterySensor,
    {
        let window = gfx.layers.create_window(true).map_err(|e| {
            error!("overlay: cannot create window: {:?}", e);
            OverlayError::Display(e)
        })?;

        let timer = match timers.schedule(self.timeout_ms) {
            Ok(handle) => handle,
            Err(e) => {
                error!("overlay: cannot schedule auto-hide: {:?}", e);
                gfx.layers.destroy_window(window);
                return Err(OverlayError::Timer(e));
            }
        };

        let now = clock.now();
        let percent = sensor.battery_percent().min(100);
        let layout = &self.layout;
        let texts = TextLayers {
            time: attach_text(gfx.layers, &window, layout.time, Font::Pixel20, &format_time(&now)),
            weekday: attach_text(gfx.layers, &window, layout.weekday, Font::Pixel16, &format_weekday(&now)),
            date: attach_text(gfx.layers, &window, layout.date, Font::Pixel16, &format_date(&now)),
            battery: attach_text(
                gfx.layers,
                &window,
                layout.battery_text,
                Font::Pixel16,
                &format_battery(percent),
            ),
        };
        load_battery_icon(&mut self.battery, gfx, &window, percent);

        gfx.layers.push_window(&window, true);
        debug!("overlay: showing, battery {}%", percent);
        self.shown = Some(Shown {
            window,
            texts,
            timer,
        });
        Ok(())
    }

    fn hide(&mut self, gfx: &mut Gfx<'_, S, L>, timers: &mut T) {
        let Some(shown) = self.shown.take() else {
            return;
        };
        timers.cancel(shown.timer);

        // Children first: the icon and text layers hang off the window
        self.battery.unload_all(gfx);
        shown.texts.detach_all(gfx.layers);
        gfx.layers.pop_window(&shown.window, true);
        gfx.layers.destroy_window(shown.window);
        debug!("overlay: hidden");
    }
}

fn attach_text<L: LayerTree>(
    layers: &mut L,
    window: &L::Window,
    frame: Rect,
    font: Font,
    text: &str,
) -> Option<L::Layer> {
    match layers.attach_text(window, frame, TextStyle::new(font), text) {
        Ok(layer) => Some(layer),
        Err(e) => {
            warn!("overlay: text layer unavailable: {:?}", e);
            None
        }
    }
}

fn set_text<L: LayerTree>(layers: &mut L, layer: &Option<L::Layer>, text: &str) {
    if let Some(layer) = layer {
        if let Err(e) = layers.set_text(layer, text) {
            warn!("overlay: cannot update text: {:?}", e);
        }
    }
}

/// Unload the battery icon, then load the icon for `percent`
fn load_battery_icon<S: ImageStore, L: LayerTree>(
    slots: &mut SlotManager<BatteryTier, S, L, 1>,
    gfx: &mut Gfx<'_, S, L>,
    window: &L::Window,
    percent: u8,
) {
    let _ = slots.unload(gfx, BATTERY_SLOT);
    // Failures are logged by the slot layer; the overlay shows without icon
    let _ = slots.load(gfx, window, BATTERY_SLOT, BatteryTier::from_percent(percent));
}
