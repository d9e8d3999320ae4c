//! ASCII rendering of the simulated screen

use std::fmt;

use bigtime_core::overlay::BatteryTier;

/// Seven-segment glyphs, three text rows per digit
const GLYPHS: [[&str; 3]; 10] = [
    [" _ ", "| |", "|_|"],
    ["   ", "  |", "  |"],
    [" _ ", " _|", "|_ "],
    [" _ ", " _|", " _|"],
    ["   ", "|_|", "  |"],
    [" _ ", "|_ ", " _|"],
    [" _ ", "|_ ", "|_|"],
    [" _ ", "  |", "  |"],
    [" _ ", "|_|", "|_|"],
    [" _ ", "|_|", " _|"],
];

const BLANK: [&str; 3] = ["   ", "   ", "   "];

/// Digits of one row, tens first; `None` is an empty slot
pub type Row = (Option<u8>, Option<u8>);

/// Overlay content as drawn on screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlayLines {
    pub time: String,
    pub weekday: String,
    pub date: String,
    pub battery: String,
    pub tier: Option<BatteryTier>,
}

/// Snapshot of everything visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub hour: Row,
    pub minute: Row,
    pub overlay: Option<OverlayLines>,
}

fn glyph(digit: Option<u8>) -> [&'static str; 3] {
    digit
        .and_then(|d| GLYPHS.get(usize::from(d)))
        .copied()
        .unwrap_or(BLANK)
}

fn tier_icon(tier: Option<BatteryTier>) -> &'static str {
    match tier {
        Some(BatteryTier::High) => "[###]",
        Some(BatteryTier::Mid) => "[## ]",
        Some(BatteryTier::Low) => "[#  ]",
        None => "[ ? ]",
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+---------+")?;
        for (tens, ones) in [self.hour, self.minute] {
            let (tens, ones) = (glyph(tens), glyph(ones));
            for line in 0..3 {
                writeln!(f, "| {} {} |", tens[line], ones[line])?;
            }
        }
        writeln!(f, "+---------+")?;

        if let Some(overlay) = &self.overlay {
            writeln!(f, "  {}", overlay.time)?;
            writeln!(f, "  {}", overlay.weekday)?;
            writeln!(f, "  {}", overlay.date)?;
            writeln!(f, "  {} {}", tier_icon(overlay.tier), overlay.battery)?;
        }
        Ok(())
    }
}
