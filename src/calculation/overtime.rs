//! Overtime tiering stage.
//!
//! Converts one day's rate slices into a cent amount, applying the cascading
//! overtime tiers as the cumulative minutes of the day cross their
//! thresholds. The caller must feed slices in the schedule's period order so
//! that "minutes worked so far today" grows monotonically across the day.
//!
//! All intermediate arithmetic is integer fixed-point: the running total is
//! scaled by 60 × 100 (minute precision × currency precision) and divided by
//! 60 exactly once per day, rounding half up. This bounds cumulative drift
//! to at most one cent per day per person.

use super::schedule::{OvertimeTier, ScheduleSettings};
use super::segmentation::RateSlice;

/// Per-day overtime state and fixed-point salary accumulator.
#[derive(Debug)]
pub(crate) struct OvertimeRatesStage {
    base_rate_by_100: i64,
    tiers: Vec<OvertimeTier>,
    state: DayState,
}

/// The state of one day's tier cascade, discarded on flush.
#[derive(Debug)]
struct DayState {
    /// Index of the next tier threshold to cross; the tier list length when
    /// all tiers are exhausted.
    next_tier: usize,
    /// The bonus percent currently in effect; zero before the first
    /// threshold is crossed.
    current_percent: i64,
    /// Total minutes worked so far today.
    total_minutes: i64,
    /// Running salary scaled by 60 × 100.
    salary_by_6000: i64,
}

impl DayState {
    fn new() -> Self {
        Self {
            next_tier: 0,
            current_percent: 0,
            total_minutes: 0,
            salary_by_6000: 0,
        }
    }
}

impl OvertimeRatesStage {
    pub fn new(settings: &ScheduleSettings) -> Self {
        Self {
            base_rate_by_100: settings.base_rate_by_100(),
            tiers: settings.overtime_tiers().to_vec(),
            state: DayState::new(),
        }
    }

    /// Prices one rate slice, advancing through the overtime tiers as the
    /// day's cumulative minutes cross their thresholds.
    pub fn accept(&mut self, slice: RateSlice) {
        let state = &mut self.state;
        state.total_minutes += slice.minutes;

        let mut payable_minutes = slice.minutes;

        // advance through the tiers until the whole slice has been paid for
        while payable_minutes > 0 {
            // minutes over the next overtime threshold, if any
            let excess_minutes = match self.tiers.get(state.next_tier) {
                Some(tier) => (state.total_minutes - i64::from(tier.threshold_minutes)).max(0),
                None => 0,
            };

            let paid_minutes = (payable_minutes - excess_minutes).max(0);

            let hourly_by_100 = self.base_rate_by_100
                + slice.rate_by_100
                + div_round_half_up(self.base_rate_by_100 * state.current_percent, 100);
            state.salary_by_6000 += paid_minutes * hourly_by_100;

            payable_minutes -= paid_minutes;

            if excess_minutes > 0 {
                // the threshold was crossed: bill the rest at this tier's
                // percent and arm the next threshold
                if let Some(tier) = self.tiers.get(state.next_tier) {
                    state.current_percent = i64::from(tier.percent);
                }
                state.next_tier += 1;
            }
        }
    }

    /// Ends the current day: converts the fixed-point total to whole cents
    /// and resets the tier cascade for the next day.
    ///
    /// Returns `None` when no slice was accepted since the last flush.
    pub fn flush(&mut self) -> Option<i64> {
        let state = std::mem::replace(&mut self.state, DayState::new());

        if state.total_minutes == 0 {
            return None;
        }

        Some(div_round_half_up(state.salary_by_6000, 60))
    }
}

/// Division rounding half up; callers only pass nonnegative numerators.
fn div_round_half_up(numerator: i64, divisor: i64) -> i64 {
    (numerator + divisor / 2) / divisor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::schedule::RegularRatePeriod;
    use chrono::NaiveTime;
    use chrono_tz::Tz;

    const HELSINKI: Tz = chrono_tz::Europe::Helsinki;

    fn stage(base_rate_by_100: i64, tiers: Vec<OvertimeTier>) -> OvertimeRatesStage {
        let settings = ScheduleSettings::new(
            HELSINKI,
            base_rate_by_100,
            vec![RegularRatePeriod::new(0, NaiveTime::MIN, NaiveTime::MIN)],
            tiers,
        )
        .unwrap();

        OvertimeRatesStage::new(&settings)
    }

    fn tier(threshold_hours: u32, percent: u32) -> OvertimeTier {
        OvertimeTier {
            threshold_minutes: threshold_hours * 60,
            percent,
        }
    }

    #[test]
    fn test_flush_without_slices_reports_nothing() {
        let mut stage = stage(100, vec![]);
        assert_eq!(stage.flush(), None);
        assert_eq!(stage.flush(), None);
    }

    #[test]
    fn test_regular_minutes_priced_at_base_plus_period_rate() {
        let mut stage = stage(100, vec![]);

        stage.accept(RateSlice { minutes: 60, rate_by_100: 50 });

        assert_eq!(stage.flush(), Some(150));
    }

    #[test]
    fn test_minutes_under_threshold_earn_no_bonus() {
        let mut stage = stage(100, vec![tier(4, 100)]);

        stage.accept(RateSlice { minutes: 2 * 60, rate_by_100: 0 });

        assert_eq!(stage.flush(), Some(200));
    }

    #[test]
    fn test_minutes_at_threshold_earn_no_bonus() {
        let mut stage = stage(100, vec![tier(4, 100)]);

        stage.accept(RateSlice { minutes: 4 * 60, rate_by_100: 0 });

        assert_eq!(stage.flush(), Some(400));
    }

    #[test]
    fn test_minutes_over_threshold_earn_bonus() {
        let mut stage = stage(100, vec![tier(4, 100)]);

        stage.accept(RateSlice { minutes: 8 * 60, rate_by_100: 0 });

        // 4 hours at 100, 4 hours at 100 + 100% bonus
        assert_eq!(stage.flush(), Some(4 * 100 + 4 * 200));
    }

    #[test]
    fn test_cascade_through_two_tiers_in_one_slice() {
        let mut stage = stage(100, vec![tier(4, 20), tier(6, 30)]);

        stage.accept(RateSlice { minutes: 7 * 60, rate_by_100: 0 });

        // 4 h plain, 2 h at +20%, 1 h at +30%
        assert_eq!(stage.flush(), Some(4 * 100 + 2 * 120 + 130));
    }

    #[test]
    fn test_tier_percent_applies_to_base_not_period_rate() {
        let mut stage = stage(100, vec![tier(1, 50)]);

        stage.accept(RateSlice { minutes: 2 * 60, rate_by_100: 60 });

        // 1 h at 100+60, 1 h at 100+60+round(100*50/100)
        assert_eq!(stage.flush(), Some(160 + 210));
    }

    #[test]
    fn test_threshold_crossed_between_slices() {
        let mut stage = stage(100, vec![tier(4, 100)]);

        stage.accept(RateSlice { minutes: 3 * 60, rate_by_100: 0 });
        stage.accept(RateSlice { minutes: 3 * 60, rate_by_100: 50 });

        // second slice: 1 h at 150, 2 h at 150 + 100 bonus
        assert_eq!(stage.flush(), Some(3 * 100 + 150 + 2 * 250));
    }

    #[test]
    fn test_slice_skipping_a_whole_tier() {
        let mut stage = stage(100, vec![tier(4, 20), tier(6, 30)]);

        stage.accept(RateSlice { minutes: 6 * 60, rate_by_100: 0 });
        stage.accept(RateSlice { minutes: 60, rate_by_100: 0 });

        // first slice: 4 h plain + 2 h at +20%; second: 1 h at +30%
        assert_eq!(stage.flush(), Some(4 * 100 + 2 * 120 + 130));
    }

    #[test]
    fn test_flush_resets_tier_cascade() {
        let mut stage = stage(100, vec![tier(1, 100)]);

        stage.accept(RateSlice { minutes: 2 * 60, rate_by_100: 0 });
        assert_eq!(stage.flush(), Some(100 + 200));

        // the next day starts from the regular rate again
        stage.accept(RateSlice { minutes: 60, rate_by_100: 0 });
        assert_eq!(stage.flush(), Some(100));
    }

    #[test]
    fn test_partial_minutes_round_half_up_once_per_day() {
        let mut stage = stage(100, vec![]);

        // 50 minutes at 100/h = 5000/60 = 83.33 cents, rounded once
        stage.accept(RateSlice { minutes: 50, rate_by_100: 0 });

        assert_eq!(stage.flush(), Some(83));
    }

    #[test]
    fn test_bonus_rounding_is_half_up() {
        let mut stage = stage(105, vec![tier(0, 50)]);

        // bonus = round(105 * 50 / 100) = round(52.5) = 53 once the
        // zero-minute threshold is crossed
        stage.accept(RateSlice { minutes: 60, rate_by_100: 0 });

        assert_eq!(stage.flush(), Some(105 + 53));
    }
}
