//! Validated rate schedule consumed by the pipeline stages.
//!
//! [`ScheduleSettings`] is built once at startup, either directly from
//! period/tier lists or from a raw [`CalculatorConfig`], and then passed by
//! reference into the stages and the driver. All configuration validation
//! happens here, eagerly, before any shift is processed.

use chrono::NaiveTime;
use chrono_tz::Tz;

use crate::config::{CalculatorConfig, RegularRateEntry};
use crate::error::{EngineError, EngineResult};

use super::interval::LocalInterval;

/// An interval of the day during which some regular hourly rate applies.
///
/// This is an immutable value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegularRatePeriod {
    /// The additional hourly rate for this window, in hundredths of the
    /// currency unit, added on top of the base rate.
    pub rate_by_100: i64,
    /// The daily wall-clock window during which the rate applies.
    pub interval: LocalInterval,
}

impl RegularRatePeriod {
    /// Creates a new period from its rate and wall-clock boundaries.
    pub fn new(rate_by_100: i64, begin: NaiveTime, end: NaiveTime) -> Self {
        Self {
            rate_by_100,
            interval: LocalInterval::new(begin, end),
        }
    }
}

/// A cumulative daily-minutes threshold beyond which a bonus percentage of
/// the base rate is added to the otherwise-applicable hourly rate.
///
/// This is an immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvertimeTier {
    /// Cumulative daily minutes after which this tier applies.
    pub threshold_minutes: u32,
    /// Percentage of the base rate added as overtime compensation.
    pub percent: u32,
}

/// The validated, normalized configuration of one calculator instance.
#[derive(Debug, Clone)]
pub struct ScheduleSettings {
    time_zone: Tz,
    base_rate_by_100: i64,
    periods: Vec<RegularRatePeriod>,
    tiers: Vec<OvertimeTier>,
}

impl ScheduleSettings {
    /// Creates settings from already-assembled periods and tiers.
    ///
    /// The periods may be given in any rotation of their cyclic day order;
    /// they are normalized into a midnight-anchored partition, splitting the
    /// period that crosses midnight in two.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error unless the periods, taken as a
    /// cycle, fully and exclusively partition the 24-hour day, and the tiers
    /// have non-decreasing thresholds and percents.
    pub fn new(
        time_zone: Tz,
        base_rate_by_100: i64,
        periods: Vec<RegularRatePeriod>,
        tiers: Vec<OvertimeTier>,
    ) -> EngineResult<Self> {
        let periods = normalize_cycle(periods)?;
        validate_partition(&periods)?;
        validate_tiers(&tiers)?;

        Ok(Self {
            time_zone,
            base_rate_by_100,
            periods,
            tiers,
        })
    }

    /// Builds settings from a raw configuration.
    ///
    /// Each rate entry applies from its offset until the offset of the next
    /// entry, the last one wrapping around to the first; the resulting cycle
    /// is midnight-anchored by [`Self::new`].
    pub fn from_config(config: &CalculatorConfig) -> EngineResult<Self> {
        let time_zone: Tz = config
            .time_zone
            .parse()
            .map_err(|_| EngineError::UnknownTimeZone {
                name: config.time_zone.clone(),
            })?;

        let periods = periods_from_entries(&config.regular_rates)?;

        let tiers = config
            .overtime_levels
            .iter()
            .map(|level| OvertimeTier {
                threshold_minutes: level.threshold_minutes,
                percent: level.percent,
            })
            .collect();

        Self::new(time_zone, config.base_rate_by_100, periods, tiers)
    }

    /// The time zone in which shift dates are interpreted.
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// The base hourly rate in hundredths of the currency unit.
    pub fn base_rate_by_100(&self) -> i64 {
        self.base_rate_by_100
    }

    /// The regular rate periods in midnight-anchored order.
    pub fn regular_rates(&self) -> &[RegularRatePeriod] {
        &self.periods
    }

    /// The overtime tiers in ascending threshold order; possibly empty.
    pub fn overtime_tiers(&self) -> &[OvertimeTier] {
        &self.tiers
    }
}

const MIDNIGHT: NaiveTime = NaiveTime::MIN;

/// Turns raw rate entries into a cyclic period list: each entry's rate
/// applies from its own offset to the next entry's offset, the last entry
/// wrapping around to the first.
fn periods_from_entries(entries: &[RegularRateEntry]) -> EngineResult<Vec<RegularRatePeriod>> {
    if entries.is_empty() {
        return Err(EngineError::EmptyRateSchedule);
    }

    let mut periods = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let next = &entries[(index + 1) % entries.len()];
        periods.push(RegularRatePeriod::new(
            entry.rate_by_100,
            offset_time(entry)?,
            offset_time(next)?,
        ));
    }

    Ok(periods)
}

/// Rotates a cyclically contiguous period list into midnight-anchored order,
/// splitting the period that crosses midnight in two.
fn normalize_cycle(periods: Vec<RegularRatePeriod>) -> EngineResult<Vec<RegularRatePeriod>> {
    if periods.is_empty() {
        return Err(EngineError::EmptyRateSchedule);
    }

    if periods.len() == 1 {
        let only = &periods[0];
        if only.interval.begin != only.interval.end {
            return Err(EngineError::ScheduleNotContiguous {
                expected: only.interval.end,
                found: only.interval.begin,
            });
        }

        return Ok(vec![RegularRatePeriod::new(only.rate_by_100, MIDNIGHT, MIDNIGHT)]);
    }

    // each period must end where its cyclic successor begins
    for (period, next) in periods.iter().zip(periods.iter().cycle().skip(1)) {
        if period.interval.end != next.interval.begin {
            return Err(EngineError::ScheduleNotContiguous {
                expected: period.interval.end,
                found: next.interval.begin,
            });
        }
    }

    if let Some(pos) = periods.iter().position(|p| p.interval.begin == MIDNIGHT) {
        let mut anchored = periods;
        anchored.rotate_left(pos);
        return Ok(anchored);
    }

    // no period begins at midnight, so exactly one crosses it
    let Some(pos) = periods.iter().position(|p| p.interval.end <= p.interval.begin) else {
        return Err(EngineError::ScheduleNotContiguous {
            expected: MIDNIGHT,
            found: periods[0].interval.begin,
        });
    };

    let crossing = &periods[pos];
    let mut anchored = Vec::with_capacity(periods.len() + 1);
    anchored.push(RegularRatePeriod::new(
        crossing.rate_by_100,
        MIDNIGHT,
        crossing.interval.end,
    ));
    anchored.extend_from_slice(&periods[pos + 1..]);
    anchored.extend_from_slice(&periods[..pos]);
    anchored.push(RegularRatePeriod::new(
        crossing.rate_by_100,
        crossing.interval.begin,
        MIDNIGHT,
    ));

    Ok(anchored)
}

fn offset_time(entry: &RegularRateEntry) -> EngineResult<NaiveTime> {
    NaiveTime::from_hms_opt(entry.from_hour, entry.from_minute, 0).ok_or(
        EngineError::InvalidRateOffset {
            hour: entry.from_hour,
            minute: entry.from_minute,
        },
    )
}

/// Checks that the periods tile the day: first begins at midnight, each
/// period ends where the next begins, and the last wraps back to midnight.
fn validate_partition(periods: &[RegularRatePeriod]) -> EngineResult<()> {
    if periods.is_empty() {
        return Err(EngineError::EmptyRateSchedule);
    }

    let mut expected = MIDNIGHT;

    for period in periods {
        if period.interval.begin != expected {
            return Err(EngineError::ScheduleNotContiguous {
                expected,
                found: period.interval.begin,
            });
        }

        // a begin at or after the end only wraps legally on the last period
        expected = period.interval.end;
    }

    let last = &periods[periods.len() - 1];
    if last.interval.end != MIDNIGHT {
        return Err(EngineError::ScheduleNotContiguous {
            expected: MIDNIGHT,
            found: last.interval.end,
        });
    }

    // interior periods must move forward, or the cycle would overlap
    for period in &periods[..periods.len() - 1] {
        if periods.len() > 1 && period.interval.end <= period.interval.begin {
            return Err(EngineError::ScheduleNotContiguous {
                expected: period.interval.begin,
                found: period.interval.end,
            });
        }
    }

    Ok(())
}

fn validate_tiers(tiers: &[OvertimeTier]) -> EngineResult<()> {
    for (index, pair) in tiers.windows(2).enumerate() {
        if pair[1].threshold_minutes < pair[0].threshold_minutes
            || pair[1].percent < pair[0].percent
        {
            return Err(EngineError::OvertimeTierOrder { index: index + 1 });
        }
    }

    Ok(())
}
