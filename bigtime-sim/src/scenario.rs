//! Scenario parsing

use bigtime_core::traits::WallClock;

use crate::config::ScenarioConfig;
use crate::error::SimError;

/// One scripted event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Advance the clock one minute and deliver a minute tick
    Tick,
    /// Deliver a tap
    Tap,
    /// Advance timer time and deliver any expiries
    Wait(u32),
    /// Set the battery charge and deliver a battery update
    Battery(u8),
}

impl Step {
    /// Parse "tick", "tap", "wait <ms>" or "battery <percent>"
    pub fn parse(text: &str) -> Result<Self, SimError> {
        let mut words = text.split_whitespace();
        let step = match (words.next(), words.next()) {
            (Some("tick"), None) => Step::Tick,
            (Some("tap"), None) => Step::Tap,
            (Some("wait"), Some(ms)) => Step::Wait(
                ms.parse()
                    .map_err(|_| SimError::scenario("step", text, "wait needs milliseconds"))?,
            ),
            (Some("battery"), Some(percent)) => {
                let percent: u8 = percent
                    .parse()
                    .map_err(|_| SimError::scenario("step", text, "battery needs a percentage"))?;
                if percent > 100 {
                    return Err(SimError::scenario("step", text, "battery above 100%"));
                }
                Step::Battery(percent)
            }
            _ => return Err(SimError::scenario("step", text, "unknown step")),
        };

        if words.next().is_some() {
            return Err(SimError::scenario("step", text, "trailing input"));
        }
        Ok(step)
    }
}

/// Parse every step of a scenario
pub fn parse_steps(steps: &[String]) -> Result<Vec<Step>, SimError> {
    steps.iter().map(|s| Step::parse(s)).collect()
}

fn split_numbers<const N: usize>(text: &str, separator: char) -> Option<[u16; N]> {
    let mut out = [0u16; N];
    let mut parts = text.split(separator);
    for slot in out.iter_mut() {
        *slot = parts.next()?.trim().parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}

/// Wall clock at the scenario's start date and time
pub fn start_clock(scenario: &ScenarioConfig) -> Result<WallClock, SimError> {
    let [hour, minute] = split_numbers::<2>(&scenario.start, ':')
        .ok_or_else(|| SimError::scenario("start", &scenario.start, "expected HH:MM"))?;
    let [year, month, day] = split_numbers::<3>(&scenario.date, '-')
        .ok_or_else(|| SimError::scenario("date", &scenario.date, "expected YYYY-MM-DD"))?;

    let narrow = |v: u16| u8::try_from(v).ok();
    let clock = match (narrow(month), narrow(day), narrow(hour), narrow(minute)) {
        (Some(month), Some(day), Some(hour), Some(minute)) => {
            WallClock::from_date(year, month, day, hour, minute, scenario.clock_24h)
        }
        _ => None,
    };
    clock.ok_or_else(|| {
        SimError::scenario("start", &format!("{} {}", scenario.date, scenario.start), "no such date or time")
    })
}
