//! Forecast error types.

use crate::schedules::ScheduleError;
use medstock_core::types::RecordError;
use thiserror::Error;

/// Errors that can occur while generating a forecast.
///
/// Empty medication lists, records without run-out dates and periods with
/// no matches are normal results, not errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForecastError {
    /// Pay frequency, horizon or start date was rejected.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ScheduleError),

    /// A medication record carries an unusable price.
    #[error("Invalid medication record: {0}")]
    InvalidRecord(#[from] RecordError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_schedule_error() {
        let err: ForecastError = ScheduleError::InvalidHorizon { months: 0 }.into();
        assert!(matches!(err, ForecastError::InvalidInput(_)));
        assert!(err.to_string().starts_with("Invalid input"));
    }
}
