//! Session error types.

use medstock_models::forecast::ForecastError;
use thiserror::Error;

/// Errors raised by application state and chart editing.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An action needs a signed-in user.
    #[error("Not signed in")]
    NotSignedIn,

    /// A change was recorded outside edit mode.
    #[error("Edit mode is not active")]
    NotEditing,

    /// A field name that the chart API does not accept.
    #[error("Unknown chart field: {0}")]
    UnknownField(String),

    /// A value that does not fit its field.
    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidEdit {
        /// API field name
        field: &'static str,
        /// Raw input
        value: String,
        /// What was expected
        reason: &'static str,
    },

    /// Forecast generation over the cached medications failed.
    #[error("Forecast error: {0}")]
    Forecast(#[from] ForecastError),
}
