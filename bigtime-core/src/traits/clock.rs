//! Wall clock trait

/// Day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Full English name
    pub const fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Weekday from days since Sunday (0-6), wrapping
    pub const fn from_days_since_sunday(days: u8) -> Self {
        match days % 7 {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }
}

/// Snapshot of the wall clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallClock {
    /// Full year, e.g. 2026
    pub year: u16,
    /// Month, 1-12
    pub month: u8,
    /// Day of month, 1-31
    pub day: u8,
    /// Day of year, 0-365
    pub day_of_year: u16,
    pub weekday: Weekday,
    /// Hour, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
    /// User prefers 24-hour time
    pub is_24h: bool,
}

impl WallClock {
    /// Full English month name, or "" for an invalid month
    pub const fn month_name(&self) -> &'static str {
        match self.month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "",
        }
    }
}

/// Trait for the system clock and calendar
pub trait ClockSource {
    /// Current local time
    fn now(&self) -> WallClock;
}

/// Days in each month of a common year
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in a month; a month outside 1-12 counts as 31 days
const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 31,
    }
}

impl WallClock {
    /// Build a snapshot from a calendar date and time of day
    ///
    /// Day of year and weekday are derived from the date. Returns `None` for
    /// an invalid date or time.
    pub fn from_date(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        is_24h: bool,
    ) -> Option<Self> {
        if !(1..=12).contains(&month) || hour > 23 || minute > 59 {
            return None;
        }
        if day == 0 || day > days_in_month(year, month) {
            return None;
        }

        let day_of_year = (1..month)
            .map(|m| u16::from(days_in_month(year, m)))
            .sum::<u16>()
            + u16::from(day)
            - 1;

        // Sakamoto's day-of-week method
        const OFFSETS: [u16; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let y = if month < 3 { year.wrapping_sub(1) } else { year };
        let dow = (y + y / 4 - y / 100 + y / 400 + OFFSETS[(month - 1) as usize] + u16::from(day)) % 7;

        Some(Self {
            year,
            month,
            day,
            day_of_year,
            weekday: Weekday::from_days_since_sunday(dow as u8),
            hour,
            minute,
            is_24h,
        })
    }

    /// Advance by one minute, rolling over hour, day, month and year
    ///
    /// Out-of-range fields roll over at the next boundary instead of
    /// overflowing.
    pub fn add_minute(&mut self) {
        if self.minute < 59 {
            self.minute += 1;
            return;
        }
        self.minute = 0;
        if self.hour < 23 {
            self.hour += 1;
            return;
        }
        self.hour = 0;
        self.weekday = Weekday::from_days_since_sunday(self.weekday as u8 + 1);
        self.day_of_year = self.day_of_year.saturating_add(1);
        if self.day < days_in_month(self.year, self.month) {
            self.day += 1;
            return;
        }
        self.day = 1;
        if self.month < 12 {
            self.month += 1;
            return;
        }
        self.month = 1;
        self.day_of_year = 0;
        self.year = self.year.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date_derives_weekday_and_day_of_year() {
        let now = WallClock::from_date(2026, 10, 19, 9, 5, false).unwrap();
        assert_eq!(now.weekday, Weekday::Monday);
        assert_eq!(now.day_of_year, 291);
        assert_eq!(now.month_name(), "October");

        let new_year = WallClock::from_date(2024, 1, 1, 0, 0, true).unwrap();
        assert_eq!(new_year.weekday, Weekday::Monday);
        assert_eq!(new_year.day_of_year, 0);
    }

    #[test]
    fn test_from_date_rejects_invalid() {
        assert!(WallClock::from_date(2026, 13, 1, 0, 0, false).is_none());
        assert!(WallClock::from_date(2026, 2, 29, 0, 0, false).is_none());
        assert!(WallClock::from_date(2024, 2, 29, 0, 0, false).is_some());
        assert!(WallClock::from_date(2026, 1, 1, 24, 0, false).is_none());
        assert!(WallClock::from_date(2026, 1, 1, 0, 60, false).is_none());
    }

    #[test]
    fn test_add_minute_rolls_over_year() {
        let mut now = WallClock::from_date(2026, 12, 31, 23, 59, true).unwrap();
        now.add_minute();
        assert_eq!(now, WallClock::from_date(2027, 1, 1, 0, 0, true).unwrap());
    }

    #[test]
    fn test_add_minute_rolls_over_leap_day() {
        let mut now = WallClock::from_date(2024, 2, 28, 23, 59, false).unwrap();
        now.add_minute();
        assert_eq!(now, WallClock::from_date(2024, 2, 29, 0, 0, false).unwrap());
        for _ in 0..24 * 60 {
            now.add_minute();
        }
        assert_eq!(now, WallClock::from_date(2024, 3, 1, 0, 0, false).unwrap());
    }

    #[test]
    fn test_add_minute_tolerates_out_of_range_fields() {
        let base = WallClock::from_date(2026, 10, 19, 23, 59, false).unwrap();

        let mut zero_month = WallClock { month: 0, day: 31, ..base };
        zero_month.add_minute();
        assert_eq!((zero_month.month, zero_month.day, zero_month.hour), (1, 1, 0));

        let mut late_month = WallClock { month: 13, day: 31, ..base };
        late_month.add_minute();
        assert_eq!((late_month.year, late_month.month, late_month.day), (2027, 1, 1));

        let mut wild_minute = WallClock { hour: 200, minute: 255, ..base };
        wild_minute.add_minute();
        assert_eq!((wild_minute.hour, wild_minute.minute, wild_minute.day), (0, 0, 20));
        assert_eq!(wild_minute.weekday, Weekday::Tuesday);
    }
}
