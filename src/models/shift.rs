//! Shift record model.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Represents a single work shift as supplied by the caller.
///
/// The begin and end times are wall-clock times on the shift's date in the
/// configured time zone. An end time strictly earlier than the begin time
/// means the shift runs past midnight into the next calendar day; an end time
/// equal to the begin time is a legal zero-length shift that contributes no
/// minutes anywhere.
///
/// # Example
///
/// ```
/// use salary_engine::models::ShiftRecord;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let shift = ShiftRecord {
///     person_id: "1".to_string(),
///     person_name: "John Doe".to_string(),
///     date: NaiveDate::from_ymd_opt(2016, 3, 2).unwrap(),
///     begin: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
/// };
/// assert_eq!(shift.person_id, "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Identifier of the person who worked the shift.
    pub person_id: String,
    /// Display name of the person who worked the shift.
    pub person_name: String,
    /// The calendar date on which the shift began.
    pub date: NaiveDate,
    /// The local wall-clock time at which the shift began.
    pub begin: NaiveTime,
    /// The local wall-clock time at which the shift ended.
    pub end: NaiveTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_shift(date: &str, begin: &str, end: &str) -> ShiftRecord {
        ShiftRecord {
            person_id: "1".to_string(),
            person_name: "John Doe".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            begin: NaiveTime::parse_from_str(begin, "%H:%M").unwrap(),
            end: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
        }
    }

    #[test]
    fn test_shift_serialization_round_trip() {
        let shift = make_shift("2016-03-02", "09:00", "17:00");

        let json = serde_json::to_string(&shift).unwrap();
        let deserialized: ShiftRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(shift, deserialized);
    }

    #[test]
    fn test_shift_deserialization() {
        let json = r#"{
            "person_id": "42",
            "person_name": "Jane Doe",
            "date": "2016-11-01",
            "begin": "22:00:00",
            "end": "06:00:00"
        }"#;

        let shift: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(shift.person_id, "42");
        assert_eq!(shift.person_name, "Jane Doe");
        assert!(shift.end < shift.begin); // overnight shift
    }
}
