//! Pay-period purchase forecast.
//!
//! Buckets medications into pay periods by run-out date and totals what
//! each period will cost.
//!
//! This module provides:
//! - [`ForecastConfig`]: Pay cadence, horizon and the two conventions
//! - [`QuantityMode`]: Units bought per matched run-out
//! - [`assign_medications`]: Matching against an existing [`PaySchedule`]
//! - [`generate_forecast`]: Schedule construction plus matching in one call
//! - [`ForecastResult`]: Per-period members and subtotals plus grand totals
//!
//! # Examples
//!
//! ```
//! use medstock_models::forecast::{generate_forecast, ForecastConfig};
//! use medstock_core::types::{Date, Medication};
//!
//! let config = ForecastConfig::new(14, 1);
//! let meds = vec![
//!     Medication::new("Metformin")
//!         .with_run_out_date(Date::from_ymd(2024, 1, 20).unwrap())
//!         .with_unit_price(25.0),
//!     Medication::new("Ventolin"),
//! ];
//!
//! let result = generate_forecast(&config, Date::from_ymd(2024, 1, 15).unwrap(), &meds).unwrap();
//! assert_eq!(result.periods().len(), 3);
//! assert_eq!(result.total_matched_count(), 1);
//! assert_eq!(result.grand_total(), 25.0);
//! ```
//!
//! [`PaySchedule`]: crate::schedules::PaySchedule

mod config;
mod error;
mod matcher;
mod result;

pub use config::{ForecastConfig, QuantityMode};
pub use error::ForecastError;
pub use matcher::{assign_medications, generate_forecast, generate_forecast_from_iso};
pub use result::{ForecastResult, PeriodForecast, PurchaseLine};
