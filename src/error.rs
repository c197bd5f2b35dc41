//! Error types for the shift pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine, the record store and the configuration
//! loader can report.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the shift pay engine.
///
/// All operations in the crate return this error type. Each variant carries
/// enough context for a caller to tell the failure apart from a valid zero
/// result.
///
/// # Example
///
/// ```
/// use shift_pay_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     value: "25:61".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time of day: '25:61'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
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

    /// A time-of-day string could not be parsed as `HH:MM:SS` or `HH:MM`.
    #[error("Invalid time of day: '{value}'")]
    InvalidTimeFormat {
        /// The offending input.
        value: String,
    },

    /// A shift resolved to a zero or negative duration.
    #[error("Shift {shift_id} has a non-positive duration of {minutes} minutes")]
    NegativeDuration {
        /// The ID of the shift.
        shift_id: i64,
        /// The computed duration in minutes.
        minutes: i64,
    },

    /// A shift references an employer missing from the supplied mapping.
    #[error("Shift {shift_id} references unknown employer {employer_id}")]
    UnknownEmployer {
        /// The ID of the shift.
        shift_id: i64,
        /// The employer ID that could not be resolved.
        employer_id: i64,
    },

    /// Pay or hour totals exceeded the representable range.
    #[error("Amount out of range while {context}")]
    AmountOverflow {
        /// What was being computed when the overflow happened.
        context: String,
    },

    /// A date range was empty or inverted.
    #[error("Invalid date range: start {start} must be before end {end}")]
    InvalidDateRange {
        /// The inclusive start of the range.
        start: NaiveDate,
        /// The exclusive end of the range.
        end: NaiveDate,
    },

    /// An employer record failed validation.
    #[error("Invalid employer field '{field}': {message}")]
    InvalidEmployer {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A shift record failed validation.
    #[error("Invalid shift {shift_id}: {message}")]
    InvalidShift {
        /// The ID of the invalid shift (0 for a record not yet stored).
        shift_id: i64,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A record does not exist for the requesting user.
    #[error("{resource} {id} not found")]
    RecordNotFound {
        /// The kind of record ("Company" or "Hours log").
        resource: String,
        /// The requested ID.
        id: i64,
    },

    /// A write would violate a uniqueness constraint.
    #[error("Conflict: {message}")]
    Conflict {
        /// A description of the conflict.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/app.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/app.yaml"
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
    fn test_negative_duration_displays_shift_and_minutes() {
        let error = EngineError::NegativeDuration {
            shift_id: 7,
            minutes: -840,
        };
        assert_eq!(
            error.to_string(),
            "Shift 7 has a non-positive duration of -840 minutes"
        );
    }

    #[test]
    fn test_unknown_employer_displays_ids() {
        let error = EngineError::UnknownEmployer {
            shift_id: 3,
            employer_id: 42,
        };
        assert_eq!(
            error.to_string(),
            "Shift 3 references unknown employer 42"
        );
    }

    #[test]
    fn test_amount_overflow_displays_context() {
        let error = EngineError::AmountOverflow {
            context: "pricing shift 5".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Amount out of range while pricing shift 5"
        );
    }

    #[test]
    fn test_invalid_date_range_displays_dates() {
        let error = EngineError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: start 2024-01-08 must be before end 2024-01-01"
        );
    }

    #[test]
    fn test_record_not_found_displays_resource() {
        let error = EngineError::RecordNotFound {
            resource: "Company".to_string(),
            id: 9,
        };
        assert_eq!(error.to_string(), "Company 9 not found");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_conflict() -> EngineResult<()> {
            Err(EngineError::Conflict {
                message: "duplicate".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_conflict()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
