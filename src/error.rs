//! Error types for the salary calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while configuring or driving the
//! calculation pipeline.

use chrono::NaiveTime;
use thiserror::Error;

/// The main error type for the salary calculation engine.
///
/// Configuration errors are raised eagerly when the schedule settings are
/// constructed, before any shift is processed. The only runtime error is
/// [`EngineError::PipelineClosed`], raised when a closed pipeline receives
/// further input.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/salary.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/salary.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The configured time zone name is not a known IANA zone.
    #[error("Unknown time zone: {name}")]
    UnknownTimeZone {
        /// The zone name that failed to resolve.
        name: String,
    },

    /// No regular rate periods were configured.
    #[error("No regular rate periods configured")]
    EmptyRateSchedule,

    /// The regular rate periods do not partition the 24-hour day.
    #[error("Regular rate periods do not partition the day: expected a period starting at {expected}, found {found}")]
    ScheduleNotContiguous {
        /// The wall-clock time at which the next period was expected to begin.
        expected: NaiveTime,
        /// The wall-clock time at which the offending period begins.
        found: NaiveTime,
    },

    /// A regular rate entry names a wall-clock offset outside the day.
    #[error("Regular rate entry starts at invalid time of day {hour:02}:{minute:02}")]
    InvalidRateOffset {
        /// The configured hour.
        hour: u32,
        /// The configured minute.
        minute: u32,
    },

    /// An overtime tier regresses against its predecessor.
    #[error("Overtime tier {index} regresses: thresholds and percents must be non-decreasing")]
    OvertimeTierOrder {
        /// The zero-based index of the offending tier.
        index: usize,
    },

    /// `accept` or `flush` was invoked on a closed pipeline.
    #[error("Pipeline is closed and accepts no further input")]
    PipelineClosed,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/salary.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/salary.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_unknown_time_zone_displays_name() {
        let error = EngineError::UnknownTimeZone {
            name: "Mars/Olympus_Mons".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown time zone: Mars/Olympus_Mons");
    }

    #[test]
    fn test_schedule_not_contiguous_displays_times() {
        let error = EngineError::ScheduleNotContiguous {
            expected: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
            found: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Regular rate periods do not partition the day: expected a period starting at 00:00:00, found 09:30:00"
        );
    }

    #[test]
    fn test_overtime_tier_order_displays_index() {
        let error = EngineError::OvertimeTierOrder { index: 2 };
        assert_eq!(
            error.to_string(),
            "Overtime tier 2 regresses: thresholds and percents must be non-decreasing"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_closed() -> EngineResult<()> {
            Err(EngineError::PipelineClosed)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_closed()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
