//! # medstock_core: Foundation Types for Medication Stock Forecasting
//!
//! ## Foundation Layer Role
//!
//! medstock_core is the bottom layer of the workspace, providing:
//! - Time types: `Date` (`types::time`)
//! - Medication records consumed by the forecast generator (`types::medication`)
//! - Payloads returned by the remote medication API (`types::api`)
//! - Error types: `DateError`, `RecordError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other medstock_* crates, with minimal
//! external dependencies:
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use medstock_core::types::{Date, Medication};
//!
//! let start = Date::from_ymd(2024, 1, 15).unwrap();
//! let end = start.add_days(14).unwrap();
//! assert_eq!(end.to_string(), "2024-01-29");
//!
//! let med = Medication::new("Metformin")
//!     .with_run_out_date(Date::from_ymd(2024, 1, 20).unwrap())
//!     .with_unit_price(25.0);
//! assert!(med.run_out_date().is_some());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for dates, records and API payloads

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
