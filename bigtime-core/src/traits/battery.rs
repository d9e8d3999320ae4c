//! Battery gauge trait

/// Trait for the battery charge sensor
pub trait BatterySensor {
    /// Current charge in percent, 0-100
    fn battery_percent(&mut self) -> u8;
}
