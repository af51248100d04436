//! Pay-period schedule generation.
//!
//! This module provides:
//! - [`PaySchedule`]: The ordered pay periods covering a forecast horizon
//! - [`PayPeriod`]: A single inclusive date range
//! - [`PayFrequency`]: Named pay cadences (Weekly, Fortnightly, etc.)
//! - [`BoundaryMode`]: How consecutive periods meet
//! - [`PayScheduleBuilder`]: Builder pattern for constructing schedules
//!
//! The number of periods uses a fixed 30-day month
//! ([`APPROX_DAYS_PER_MONTH`]), not calendar months.
//!
//! # Examples
//!
//! ```
//! use medstock_models::schedules::{build_periods, BoundaryMode, PayScheduleBuilder};
//! use medstock_core::types::Date;
//!
//! let schedule = build_periods(Date::from_ymd(2024, 1, 15).unwrap(), 14, 1).unwrap();
//! assert_eq!(schedule.len(), 3);
//! assert_eq!(schedule.periods()[1].start().to_string(), "2024-01-30");
//!
//! let shared = PayScheduleBuilder::new()
//!     .start(Date::from_ymd(2024, 1, 15).unwrap())
//!     .pay_frequency_days(14)
//!     .forecast_months(1)
//!     .boundary_mode(BoundaryMode::InclusiveShared)
//!     .build()
//!     .unwrap();
//! assert_eq!(shared.periods()[1].start().to_string(), "2024-01-29");
//! ```

mod boundary;
mod error;
mod frequency;
mod period;
mod schedule;

pub use boundary::BoundaryMode;
pub use error::ScheduleError;
pub use frequency::PayFrequency;
pub use period::PayPeriod;
pub use schedule::{
    build_periods, build_periods_from_iso, period_count, PaySchedule, PayScheduleBuilder,
    APPROX_DAYS_PER_MONTH, MAX_FORECAST_MONTHS,
};
