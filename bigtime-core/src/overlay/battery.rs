//! Battery icon tiers

/// Charge at or above which the high icon is shown (%)
pub const BATTERY_HIGH_PERCENT: u8 = 70;

/// Charge at or below which the low icon is shown (%)
pub const BATTERY_LOW_PERCENT: u8 = 30;

/// Battery icon bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryTier {
    Low,
    Mid,
    High,
}

impl BatteryTier {
    /// Map a charge reading to its icon tier
    ///
    /// No hysteresis: every reading is classified on its own.
    pub const fn from_percent(percent: u8) -> Self {
        if percent >= BATTERY_HIGH_PERCENT {
            BatteryTier::High
        } else if percent <= BATTERY_LOW_PERCENT {
            BatteryTier::Low
        } else {
            BatteryTier::Mid
        }
    }
}
