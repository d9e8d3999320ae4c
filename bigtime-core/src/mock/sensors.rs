//! Mock clock and battery

use crate::traits::{BatterySensor, ClockSource, WallClock, Weekday};

/// Date mock clocks start on: Monday 19 October 2026, 12-hour mode
pub const REFERENCE_DATE: WallClock = WallClock {
    year: 2026,
    month: 10,
    day: 19,
    day_of_year: 291,
    weekday: Weekday::Monday,
    hour: 0,
    minute: 0,
    is_24h: false,
};

/// Clock that only moves when told to
pub struct MockClock {
    pub now: WallClock,
}

impl MockClock {
    pub fn new(now: WallClock) -> Self {
        Self { now }
    }

    /// Clock at `hour:minute` on the reference date
    ///
    /// Out-of-range values wrap.
    pub fn at(hour: u8, minute: u8) -> Self {
        Self::new(WallClock {
            hour: hour % 24,
            minute: minute % 60,
            ..REFERENCE_DATE
        })
    }

    pub fn set_24h(&mut self, is_24h: bool) {
        self.now.is_24h = is_24h;
    }

    pub fn advance_minute(&mut self) {
        self.now.add_minute();
    }
}

impl ClockSource for MockClock {
    fn now(&self) -> WallClock {
        self.now
    }
}

/// Battery gauge with a settable charge
pub struct MockBattery {
    percent: u8,
}

impl MockBattery {
    pub fn new(percent: u8) -> Self {
        Self { percent }
    }

    pub fn set_percent(&mut self, percent: u8) {
        self.percent = percent;
    }
}

impl BatterySensor for MockBattery {
    fn battery_percent(&mut self) -> u8 {
        self.percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_date_consistent() {
        assert_eq!(WallClock::from_date(2026, 10, 19, 0, 0, false), Some(REFERENCE_DATE));
    }

    #[test]
    fn test_clock_advances() {
        let mut clock = MockClock::at(23, 59);
        clock.advance_minute();
        let now = clock.now();
        assert_eq!((now.hour, now.minute, now.day), (0, 0, 20));
        assert_eq!(now.weekday, Weekday::Tuesday);
    }
}
