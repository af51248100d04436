//! Schedule generation error types.

use medstock_core::types::DateError;
use thiserror::Error;

/// Errors that can occur during pay-period generation.
///
/// Every variant is an invalid-input condition reported synchronously to
/// the caller; none is retryable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Pay frequency must be at least one day.
    #[error("Pay frequency must be a positive number of days, got {days}")]
    InvalidPayFrequency {
        /// The rejected frequency.
        days: u32,
    },

    /// Forecast horizon must be between one month and the supported maximum.
    #[error(
        "Forecast horizon must be between 1 and {} months, got {months}",
        super::schedule::MAX_FORECAST_MONTHS
    )]
    InvalidHorizon {
        /// The rejected horizon.
        months: u32,
    },

    /// Start date is not a valid calendar date.
    #[error("Invalid start date '{input}': {source}")]
    InvalidStartDate {
        /// The rejected input.
        input: String,
        /// The underlying parse failure.
        source: DateError,
    },

    /// Missing required field in builder.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Date arithmetic overflow.
    #[error("Date arithmetic overflow: {reason}")]
    DateOverflow {
        /// Reason for the overflow.
        reason: String,
    },
}

impl From<DateError> for ScheduleError {
    fn from(err: DateError) -> Self {
        ScheduleError::DateOverflow {
            reason: err.to_string(),
        }
    }
}
