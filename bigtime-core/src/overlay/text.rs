//! Overlay text formatting

use core::fmt::Write;

use heapless::String;

use crate::traits::WallClock;

/// Longest overlay string: "September 30"
pub const MAX_TEXT_LEN: usize = 16;

pub type OverlayText = String<MAX_TEXT_LEN>;

/// Hour as shown on the clock face
///
/// 24-hour mode passes the hour through; 12-hour mode maps 0 to 12 and
/// 13-23 to 1-11.
pub const fn display_hour(hour: u8, is_24h: bool) -> u8 {
    if is_24h {
        return hour;
    }
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// Time as "9:05 PM" (12-hour) or "21:05" (24-hour)
pub fn format_time(now: &WallClock) -> OverlayText {
    let mut text = OverlayText::new();
    let hour = display_hour(now.hour, now.is_24h);
    let _ = if now.is_24h {
        write!(text, "{:02}:{:02}", hour, now.minute)
    } else {
        let meridiem = if now.hour < 12 { "AM" } else { "PM" };
        write!(text, "{}:{:02} {}", hour, now.minute, meridiem)
    };
    text
}

/// Date as "October 19"; single-digit days are space-padded ("May  5")
pub fn format_date(now: &WallClock) -> OverlayText {
    let mut text = OverlayText::new();
    let _ = write!(text, "{} {:>2}", now.month_name(), now.day);
    text
}

/// Full weekday name
pub fn format_weekday(now: &WallClock) -> OverlayText {
    let mut text = OverlayText::new();
    let _ = text.push_str(now.weekday.name());
    text
}

/// Battery charge as "85%"
pub fn format_battery(percent: u8) -> OverlayText {
    let mut text = OverlayText::new();
    let _ = write!(text, "{}%", percent);
    text
}
