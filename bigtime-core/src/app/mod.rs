//! Application controller
//!
//! Dispatches platform events to the clock face and the overlay. The two
//! components own separate slot arrays and windows; they only share the
//! platform collaborators, which are borrowed per call.

pub mod events;

pub use events::Event;

use crate::config::FaceConfig;
use crate::face::ClockFace;
use crate::overlay::{OverlayController, OverlayError, OverlayState};
use crate::traits::{
    BatterySensor, ClockSource, DisplayError, Gfx, ImageStore, LayerTree, TimerService,
};

/// Platform collaborators
///
/// Fields are public so handlers can borrow them disjointly.
pub struct Platform<S, L, C, B, T> {
    pub images: S,
    pub layers: L,
    pub clock: C,
    pub battery: B,
    pub timer: T,
}

impl<S, L, C, B, T> Platform<S, L, C, B, T> {
    pub fn new(images: S, layers: L, clock: C, battery: B, timer: T) -> Self {
        Self {
            images,
            layers,
            clock,
            battery,
            timer,
        }
    }
}

/// The watch face application
pub struct WatchApp<S: ImageStore, L: LayerTree, T: TimerService> {
    face: ClockFace<S, L>,
    overlay: OverlayController<S, L, T>,
}

impl<S: ImageStore, L: LayerTree, T: TimerService> WatchApp<S, L, T> {
    pub fn new(config: &FaceConfig) -> Self {
        Self {
            face: ClockFace::new(&config.layout),
            overlay: OverlayController::new(config.layout.overlay.clone(), &config.overlay),
        }
    }

    pub fn face(&self) -> &ClockFace<S, L> {
        &self.face
    }

    pub fn overlay(&self) -> &OverlayController<S, L, T> {
        &self.overlay
    }

    /// Show the clock face with the current time
    pub fn start<C, B>(&mut self, platform: &mut Platform<S, L, C, B, T>) -> Result<(), DisplayError>
    where
        C: ClockSource,
        B: BatterySensor,
    {
        let now = platform.clock.now();
        let mut gfx = Gfx::new(&mut platform.images, &mut platform.layers);
        self.face.start(&mut gfx, &now)
    }

    /// Handle one event to completion
    ///
    /// Only a tap can fail, when the overlay cannot be shown; the face is
    /// unaffected.
    pub fn handle<C, B>(
        &mut self,
        platform: &mut Platform<S, L, C, B, T>,
        event: Event<T::Handle>,
    ) -> Result<(), OverlayError>
    where
        C: ClockSource,
        B: BatterySensor,
    {
        trace!("event: {}", event.name());
        if event.is_overlay_only() && self.overlay.state() == OverlayState::Hidden {
            // Covers expiries that raced a tap-to-hide
            debug!("event {} ignored while overlay hidden", event.name());
            return Ok(());
        }

        let Platform {
            images,
            layers,
            clock,
            battery,
            timer,
        } = platform;
        let mut gfx = Gfx::new(images, layers);

        match event {
            Event::MinuteTick(now) => {
                self.face.on_minute_tick(&mut gfx, &now);
                self.overlay.refresh_time(&mut gfx, &now);
            }
            Event::Tap => {
                self.overlay.on_tap(&mut gfx, timer, &*clock, battery)?;
            }
            Event::TimerFired(handle) => {
                self.overlay.on_timeout(&mut gfx, timer, handle);
            }
            Event::BatteryChanged => {
                self.overlay.refresh_battery(&mut gfx, battery);
            }
        }
        Ok(())
    }

    /// Hide the overlay and release every face resource
    pub fn shutdown<C, B>(&mut self, platform: &mut Platform<S, L, C, B, T>) {
        let mut gfx = Gfx::new(&mut platform.images, &mut platform.layers);
        self.overlay.shutdown(&mut gfx, &mut platform.timer);
        self.face.shutdown(&mut gfx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{
        MockBattery, MockClock, MockImageStore, MockLayerTree, MockTimer, MockTimerHandle,
    };
    use crate::overlay::BatteryTier;
    use crate::traits::ImageId;

    type MockPlatform = Platform<MockImageStore, MockLayerTree, MockClock, MockBattery, MockTimer>;
    type App = WatchApp<MockImageStore, MockLayerTree, MockTimer>;

    fn platform(hour: u8, minute: u8) -> MockPlatform {
        Platform::new(
            MockImageStore::new(),
            MockLayerTree::new(),
            MockClock::at(hour, minute),
            MockBattery::new(85),
            MockTimer::new(),
        )
    }

    fn started(hour: u8, minute: u8) -> (MockPlatform, App) {
        let mut p = platform(hour, minute);
        let mut app = App::new(&FaceConfig::default());
        app.start(&mut p).unwrap();
        (p, app)
    }

    fn tick(app: &mut App, p: &mut MockPlatform) {
        p.clock.advance_minute();
        let now = p.clock.now();
        app.handle(p, Event::MinuteTick(now)).unwrap();
    }

    fn wait(app: &mut App, p: &mut MockPlatform, ms: u32) {
        for handle in p.timer.advance(ms) {
            app.handle(p, Event::TimerFired(handle)).unwrap();
        }
    }

    fn assert_clean(p: &MockPlatform) {
        assert_eq!(p.images.live_count(), 0);
        assert_eq!(p.images.released_count(), p.images.resolved_count());
        assert_eq!(p.images.unknown_releases(), 0);
        assert_eq!(p.layers.live_windows(), 0);
        assert!(p.layers.layers().is_empty());
        assert_eq!(p.layers.orphaned_layers(), 0);
        assert_eq!(p.timer.pending_count(), 0);
    }

    #[test]
    fn test_0905_12h_end_to_end() {
        let (_, app) = started(9, 5);
        assert_eq!(app.face().hour_row(), (None, Some(9)));
        assert_eq!(app.face().minute_row(), (Some(0), Some(5)));
    }

    #[test]
    fn test_ticks_advance_face() {
        let (mut p, mut app) = started(12, 58);
        tick(&mut app, &mut p);
        tick(&mut app, &mut p);
        assert_eq!(app.face().hour_row(), (None, Some(1)));
        assert_eq!(app.face().minute_row(), (Some(0), Some(0)));
    }

    #[test]
    fn test_switch_to_24h_takes_effect_next_tick() {
        let (mut p, mut app) = started(14, 30);
        assert_eq!(app.face().hour_row(), (None, Some(2)));

        p.clock.set_24h(true);
        tick(&mut app, &mut p);
        assert_eq!(app.face().hour_row(), (Some(1), Some(4)));
        assert_eq!(app.face().minute_row(), (Some(3), Some(1)));
    }

    #[test]
    fn test_tap_then_timeout() {
        let (mut p, mut app) = started(9, 5);
        app.handle(&mut p, Event::Tap).unwrap();
        assert_eq!(app.overlay().state(), OverlayState::Showing);
        assert_eq!(p.layers.stack_depth(), 2);

        wait(&mut app, &mut p, 3000);
        assert_eq!(app.overlay().state(), OverlayState::Hidden);
        assert_eq!(p.layers.stack_depth(), 1);
        assert_eq!(p.timer.pending_count(), 0);
    }

    #[test]
    fn test_tick_while_showing_refreshes_both() {
        let (mut p, mut app) = started(9, 5);
        app.handle(&mut p, Event::Tap).unwrap();
        tick(&mut app, &mut p);

        assert_eq!(app.face().minute_row(), (Some(0), Some(6)));
        let time = FaceConfig::default().layout.overlay.time;
        assert_eq!(p.layers.text_at(time), Some("9:06 AM"));
        // Refresh does not restart the timer
        wait(&mut app, &mut p, 3000);
        assert_eq!(app.overlay().state(), OverlayState::Hidden);
    }

    #[test]
    fn test_battery_change_while_showing() {
        let (mut p, mut app) = started(9, 5);
        app.handle(&mut p, Event::Tap).unwrap();
        p.battery.set_percent(50);
        app.handle(&mut p, Event::BatteryChanged).unwrap();
        assert_eq!(app.overlay().battery_tier(), Some(BatteryTier::Mid));
    }

    #[test]
    fn test_battery_change_while_hidden_ignored() {
        let (mut p, mut app) = started(9, 5);
        let resolved = p.images.resolved_count();
        app.handle(&mut p, Event::BatteryChanged).unwrap();
        assert_eq!(p.images.resolved_count(), resolved);
        assert_eq!(app.overlay().battery_tier(), None);
    }

    #[test]
    fn test_stale_timer_after_retap() {
        let (mut p, mut app) = started(9, 5);
        app.handle(&mut p, Event::Tap).unwrap();
        let first = app.overlay().pending_timer().unwrap();
        app.handle(&mut p, Event::Tap).unwrap();
        app.handle(&mut p, Event::Tap).unwrap();

        app.handle(&mut p, Event::TimerFired(first)).unwrap();
        assert_eq!(app.overlay().state(), OverlayState::Showing);

        app.handle(&mut p, Event::TimerFired(MockTimerHandle(999))).unwrap();
        assert_eq!(app.overlay().state(), OverlayState::Showing);
    }

    #[test]
    fn test_shutdown_while_showing_releases_everything() {
        let (mut p, mut app) = started(23, 59);
        app.handle(&mut p, Event::Tap).unwrap();
        tick(&mut app, &mut p);
        app.shutdown(&mut p);

        assert_clean(&p);
        assert!(!app.face().is_started());
    }

    #[test]
    fn test_long_session_balances() {
        let (mut p, mut app) = started(11, 50);
        for minute in 0..30 {
            if minute % 7 == 0 {
                app.handle(&mut p, Event::Tap).unwrap();
            }
            if minute % 5 == 0 {
                p.battery.set_percent(100 - minute * 3);
                app.handle(&mut p, Event::BatteryChanged).unwrap();
            }
            tick(&mut app, &mut p);
            wait(&mut app, &mut p, 1000);
        }
        app.shutdown(&mut p);
        assert_clean(&p);
    }

    #[test]
    fn test_tap_failure_leaves_face_running() {
        let (mut p, mut app) = started(9, 5);
        p.timer.set_exhausted(true);
        assert!(app.handle(&mut p, Event::Tap).is_err());
        assert_eq!(app.overlay().state(), OverlayState::Hidden);
        assert_eq!(app.face().hour_row(), (None, Some(9)));
        assert_eq!(p.layers.stack_depth(), 1);
    }

    #[test]
    fn test_face_and_overlay_use_separate_images() {
        let (mut p, mut app) = started(1, 11);
        app.handle(&mut p, Event::Tap).unwrap();
        assert!(p.images.is_live(ImageId::Battery(BatteryTier::High)));
        // Background, three digit 1s and the battery icon
        assert_eq!(p.images.live_count(), 5);
    }

    #[test]
    fn test_many_overlay_shows_keep_face_intact() {
        let (mut p, mut app) = started(9, 5);
        for _ in 0..300 {
            app.handle(&mut p, Event::Tap).unwrap();
            app.handle(&mut p, Event::Tap).unwrap();
        }

        assert_eq!(p.layers.orphaned_layers(), 0);
        assert_eq!(p.layers.live_windows(), 1);
        assert_eq!(p.layers.stack_depth(), 1);
        // Background plus the three visible digits
        assert_eq!(p.layers.layers().len(), 4);
        assert_eq!(app.face().hour_row(), (None, Some(9)));
        assert_eq!(app.face().minute_row(), (Some(0), Some(5)));

        app.shutdown(&mut p);
        assert_clean(&p);
    }

    #[test]
    fn test_weeks_of_ticks_keep_background() {
        let (mut p, mut app) = started(10, 0);
        let background = p.layers.layers()[0].clone();
        for _ in 0..20_000 {
            tick(&mut app, &mut p);
        }

        assert_eq!(p.layers.layers()[0], background);
        assert_eq!(p.layers.orphaned_layers(), 0);
        app.shutdown(&mut p);
        assert_clean(&p);
    }
}
