//! Simulated event loop
//!
//! Plays the platform's role: owns the mock collaborators, turns scenario
//! steps into events and hands them to the watch face one at a time.

use std::fmt;

use bigtime_core::mock::{MockBattery, MockClock, MockImageStore, MockLayerTree, MockTimer};
use bigtime_core::overlay::OverlayState;
use bigtime_core::traits::ClockSource;
use bigtime_core::{Event, Platform, WatchApp};

use crate::config::SimConfig;
use crate::error::SimError;
use crate::frame::{Frame, OverlayLines};
use crate::scenario::{start_clock, Step};

type SimPlatform = Platform<MockImageStore, MockLayerTree, MockClock, MockBattery, MockTimer>;

/// Image bookkeeping at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceBalance {
    pub resolved: usize,
    pub released: usize,
    pub live: usize,
    pub unknown_releases: usize,
    pub orphaned_layers: usize,
}

impl ResourceBalance {
    pub fn is_clean(&self) -> bool {
        self.live == 0 && self.unknown_releases == 0 && self.orphaned_layers == 0
    }
}

impl fmt::Display for ResourceBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "images resolved {}, released {}, live {}; unknown releases {}; orphaned layers {}",
            self.resolved, self.released, self.live, self.unknown_releases, self.orphaned_layers
        )
    }
}

/// Watch face wired to mock collaborators
pub struct Simulator {
    platform: SimPlatform,
    app: WatchApp<MockImageStore, MockLayerTree, MockTimer>,
    config: SimConfig,
}

impl Simulator {
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let scenario = &config.scenario;
        if scenario.battery > 100 {
            return Err(SimError::scenario(
                "battery",
                &scenario.battery.to_string(),
                "battery above 100%",
            ));
        }

        let images = match scenario.image_capacity {
            Some(capacity) => MockImageStore::with_capacity(capacity),
            None => MockImageStore::new(),
        };
        let platform = Platform::new(
            images,
            MockLayerTree::new(),
            MockClock::new(start_clock(scenario)?),
            MockBattery::new(scenario.battery),
            MockTimer::new(),
        );

        Ok(Self {
            platform,
            app: WatchApp::new(&config.face),
            config,
        })
    }

    /// Show the clock face
    pub fn start(&mut self) -> Result<(), SimError> {
        self.app.start(&mut self.platform).map_err(SimError::Start)
    }

    /// Apply one scenario step
    pub fn step(&mut self, step: Step) {
        match step {
            Step::Tick => {
                self.platform.clock.advance_minute();
                let now = self.platform.clock.now();
                self.dispatch(Event::MinuteTick(now));
            }
            Step::Tap => self.dispatch(Event::Tap),
            Step::Wait(ms) => {
                for handle in self.platform.timer.advance(ms) {
                    self.dispatch(Event::TimerFired(handle));
                }
            }
            Step::Battery(percent) => {
                self.platform.battery.set_percent(percent);
                self.dispatch(Event::BatteryChanged);
            }
        }
    }

    fn dispatch(&mut self, event: Event<bigtime_core::mock::MockTimerHandle>) {
        if let Err(e) = self.app.handle(&mut self.platform, event) {
            log::warn!("{} failed: {:?}", event.name(), e);
        }
    }

    /// What the screen currently shows
    pub fn frame(&self) -> Frame {
        let face = self.app.face();
        let overlay = self.app.overlay();
        let layout = &self.config.face.layout.overlay;
        let layers = &self.platform.layers;
        let text = |frame| layers.text_at(frame).unwrap_or_default().to_string();

        Frame {
            hour: face.hour_row(),
            minute: face.minute_row(),
            overlay: (overlay.state() == OverlayState::Showing).then(|| OverlayLines {
                time: text(layout.time),
                weekday: text(layout.weekday),
                date: text(layout.date),
                battery: text(layout.battery_text),
                tier: overlay.battery_tier(),
            }),
        }
    }

    /// Shut the face down and report what is left
    pub fn finish(mut self) -> ResourceBalance {
        self.app.shutdown(&mut self.platform);
        let images = &self.platform.images;
        ResourceBalance {
            resolved: images.resolved_count(),
            released: images.released_count(),
            live: images.live_count(),
            unknown_releases: images.unknown_releases(),
            orphaned_layers: self.platform.layers.orphaned_layers(),
        }
    }
}
