//! Configuration types for the salary calculation engine.
//!
//! These are the raw structures deserialized from a YAML configuration file.
//! They carry no invariants of their own; validation happens when they are
//! turned into [`crate::calculation::ScheduleSettings`].

use serde::Deserialize;

/// A regular hourly rate entry.
///
/// The rate applies from the given wall-clock offset until the offset of the
/// next entry in the list, wrapping around midnight after the last entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RegularRateEntry {
    /// The hour of the day at which this rate starts to apply.
    pub from_hour: u32,
    /// The minute within [`Self::from_hour`].
    #[serde(default)]
    pub from_minute: u32,
    /// The additional hourly rate for this window, in hundredths of the
    /// currency unit, added on top of the base rate.
    pub rate_by_100: i64,
}

impl RegularRateEntry {
    /// Returns the entry's start offset in minutes from midnight.
    pub fn day_minute_offset(&self) -> u32 {
        self.from_hour * 60 + self.from_minute
    }
}

/// An overtime tier entry.
///
/// Once the minutes worked within one calendar day exceed the threshold, the
/// bonus percentage of the base rate is added to the otherwise-applicable
/// hourly rate.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeLevelEntry {
    /// Cumulative daily minutes after which this tier applies.
    pub threshold_minutes: u32,
    /// Percentage of the base rate added as overtime compensation.
    pub percent: u32,
}

/// The complete calculator configuration as read from a YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorConfig {
    /// IANA name of the time zone in which shift dates are interpreted.
    pub time_zone: String,
    /// The base hourly rate in hundredths of the currency unit.
    pub base_rate_by_100: i64,
    /// Regular rate entries in ascending start-offset order.
    pub regular_rates: Vec<RegularRateEntry>,
    /// Overtime tiers in ascending threshold order; may be empty.
    #[serde(default)]
    pub overtime_levels: Vec<OvertimeLevelEntry>,
}
