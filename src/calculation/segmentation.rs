//! Regular-rate segmentation stage.
//!
//! For each configured rate period the stage accumulates the minutes of the
//! current day's shifts that fall inside that period. A day flush emits one
//! [`RateSlice`] per period with nonzero minutes, in midnight-anchored period
//! order, and re-zeroes the accumulators.

use super::schedule::{RegularRatePeriod, ScheduleSettings};
use super::work_shift::WorkShift;

/// The minutes one day's shifts spent in one rate period, with that period's
/// extra hourly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RateSlice {
    /// Accumulated overlap minutes.
    pub minutes: i64,
    /// The period's additional hourly rate in hundredths of the currency
    /// unit.
    pub rate_by_100: i64,
}

/// Per-day accumulator of shift minutes per regular rate period.
///
/// The accumulators form a fixed arena indexed by period, re-zeroed on every
/// flush, so no state can leak across day or person boundaries.
#[derive(Debug)]
pub(crate) struct RegularRatesStage {
    periods: Vec<RegularRatePeriod>,
    minutes: Vec<i64>,
    dirty: bool,
}

impl RegularRatesStage {
    pub fn new(settings: &ScheduleSettings) -> Self {
        let periods = settings.regular_rates().to_vec();
        let minutes = vec![0; periods.len()];

        Self {
            periods,
            minutes,
            dirty: false,
        }
    }

    /// Adds the given shift's overlap minutes to every period it touches.
    ///
    /// A shift spanning a period boundary contributes to each overlapped
    /// period proportionally.
    pub fn accept(&mut self, shift: &WorkShift) {
        for (period, minutes) in self.periods.iter().zip(self.minutes.iter_mut()) {
            *minutes += shift.overlap_minutes(&period.interval);
        }

        self.dirty = true;
    }

    /// Ends the current day: returns the nonzero slices in period order and
    /// re-zeroes the accumulators.
    ///
    /// Idempotent: a flush with no accepted shift since the previous flush
    /// emits nothing.
    pub fn flush(&mut self) -> Vec<RateSlice> {
        if !self.dirty {
            return Vec::new();
        }

        let slices = self
            .periods
            .iter()
            .zip(self.minutes.iter())
            .filter(|&(_, &minutes)| minutes > 0)
            .map(|(period, &minutes)| RateSlice {
                minutes,
                rate_by_100: period.rate_by_100,
            })
            .collect();

        self.minutes.fill(0);
        self.dirty = false;

        slices
    }
}
