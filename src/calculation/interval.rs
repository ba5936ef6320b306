//! Time intervals and the DST-aware overlap computation.
//!
//! A [`LocalInterval`] is a date-independent wall-clock span; locating it on a
//! date in a time zone yields a [`ZonedInterval`] whose boundaries are
//! absolute instants. Overlap between zoned intervals is computed on the
//! instants, truncated to whole minutes.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// A time interval without reference to a date or time zone.
///
/// If the end is not after the beginning, the end is understood to be on the
/// following day; in particular, a `00:00 → 00:00` interval spans a whole
/// day.
///
/// This is an immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalInterval {
    /// The wall-clock time at which the interval begins.
    pub begin: NaiveTime,
    /// The wall-clock time at which the interval ends.
    pub end: NaiveTime,
}

impl LocalInterval {
    /// Creates a new interval from its wall-clock boundaries.
    pub fn new(begin: NaiveTime, end: NaiveTime) -> Self {
        Self { begin, end }
    }

    /// Locates this interval on the given date in the given time zone.
    ///
    /// The end boundary lands on the next calendar day when the end time is
    /// not strictly after the begin time.
    pub fn locate(&self, date: NaiveDate, time_zone: Tz) -> ZonedInterval {
        let begin = zone_anchor(date.and_time(self.begin), time_zone);

        let mut local_end = date.and_time(self.end);
        if self.end <= self.begin {
            local_end += Duration::days(1);
        }

        ZonedInterval {
            begin,
            end: zone_anchor(local_end, time_zone),
        }
    }

    /// Computes the overlap of two local intervals located on the same date.
    pub fn overlap_on(&self, that: &LocalInterval, date: NaiveDate, time_zone: Tz) -> Duration {
        self.locate(date, time_zone)
            .overlap(&that.locate(date, time_zone))
    }
}

/// A time interval anchored to absolute instants in a specific time zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonedInterval {
    /// The instant at which the interval begins.
    pub begin: DateTime<Tz>,
    /// The instant at which the interval ends.
    pub end: DateTime<Tz>,
}

impl ZonedInterval {
    /// Creates a zero-length interval at the given wall-clock anchor.
    pub fn at(date: NaiveDate, time: NaiveTime, time_zone: Tz) -> Self {
        let anchor = zone_anchor(date.and_time(time), time_zone);
        Self {
            begin: anchor,
            end: anchor,
        }
    }

    /// Computes the DST-aware length of the overlap between two intervals,
    /// `max(0, min(end) - max(begin))` on the underlying instants.
    ///
    /// Boundaries falling on a DST transition were already resolved to a
    /// single canonical instant by [`LocalInterval::locate`], so the result
    /// does not depend on the order of the two intervals.
    pub fn overlap(&self, that: &ZonedInterval) -> Duration {
        let begin = self.begin.max(that.begin);
        let end = self.end.min(that.end);

        if begin < end {
            end.signed_duration_since(begin)
        } else {
            Duration::zero()
        }
    }

    /// The overlap truncated to whole minutes; sub-minute precision is not
    /// meaningful in this domain.
    pub fn overlap_minutes(&self, that: &ZonedInterval) -> i64 {
        self.overlap(that).num_minutes()
    }
}

/// Resolves a wall-clock time in a zone to a single canonical instant.
///
/// Ambiguous times during a fall-back transition resolve to the later of the
/// two instants (the later UTC offset). Nonexistent times in a spring-forward
/// gap step forward until the wall clock exists again, like `java.time` gap
/// resolution.
fn zone_anchor(local: NaiveDateTime, time_zone: Tz) -> DateTime<Tz> {
    let mut probe = local;

    loop {
        match time_zone.from_local_datetime(&probe) {
            LocalResult::Single(instant) => return instant,
            LocalResult::Ambiguous(_, later) => return later,
            LocalResult::None => probe += Duration::minutes(15),
        }
    }
}
