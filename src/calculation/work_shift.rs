//! Localized work shifts and their processing order.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;

use crate::models::ShiftRecord;

use super::interval::{LocalInterval, ZonedInterval};

/// A work shift anchored to absolute instants in the configured time zone.
///
/// The zoned interval is computed once when the shift enters the pipeline and
/// cached for all subsequent overlap queries against the rate periods.
///
/// Shifts order by (month, person name, person id, date, begin instant),
/// which lets the driver group a sorted stream with O(1) active state. The
/// month component is the proper (year, month) pair; months in different
/// years never share a sort bucket.
#[derive(Debug, Clone)]
pub(crate) struct WorkShift {
    pub person_id: String,
    pub person_name: String,
    pub date: NaiveDate,
    interval: ZonedInterval,
}

impl WorkShift {
    /// Localizes a shift record in the given time zone.
    ///
    /// An end time strictly earlier than the begin time wraps to the next
    /// calendar day; an end time equal to the begin time yields a zero-length
    /// shift.
    pub fn new(record: &ShiftRecord, time_zone: Tz) -> Self {
        let interval = if record.begin == record.end {
            ZonedInterval::at(record.date, record.begin, time_zone)
        } else {
            LocalInterval::new(record.begin, record.end).locate(record.date, time_zone)
        };

        Self {
            person_id: record.person_id.clone(),
            person_name: record.person_name.clone(),
            date: record.date,
            interval,
        }
    }

    /// The number of whole minutes this shift overlaps the given rate period
    /// located on the shift's own date.
    pub fn overlap_minutes(&self, period: &LocalInterval) -> i64 {
        let time_zone = self.interval.begin.timezone();
        self.interval
            .overlap_minutes(&period.locate(self.date, time_zone))
    }

    /// The DST-aware duration of the shift itself.
    #[cfg(test)]
    pub fn duration(&self) -> chrono::Duration {
        self.interval.overlap(&self.interval)
    }

    /// The first day of the month in which this shift took place.
    pub fn month(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.date.year(), self.date.month(), 1)
            .unwrap_or(self.date)
    }

    fn sort_key(&self) -> (NaiveDate, &str, &str, NaiveDate, chrono::DateTime<Tz>) {
        (
            self.month(),
            &self.person_name,
            &self.person_id,
            self.date,
            self.interval.begin,
        )
    }
}

impl PartialEq for WorkShift {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for WorkShift {}

impl PartialOrd for WorkShift {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WorkShift {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}
