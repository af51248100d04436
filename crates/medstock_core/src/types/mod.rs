//! Core time, record, and payload types.
//!
//! This module provides:
//! - `time`: The [`Date`] wrapper used for run-out dates and pay periods
//! - `medication`: [`Medication`] records consumed by the forecast generator
//! - `api`: Payloads produced by the remote medication API
//! - `error`: Structured error types for date and record handling
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod api;
pub mod error;
pub mod medication;
pub mod time;

// Re-export commonly used types at module level
pub use api::{
    ChartMedication, EventType, ForecastLine, MedicationChartEntry, Scenario, ServerForecast,
    Timeline, TimelineEvent,
};
pub use error::{DateError, RecordError};
pub use medication::Medication;
pub use time::Date;
