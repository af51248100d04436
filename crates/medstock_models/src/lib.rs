//! # Medstock Models (Business Logic)
//!
//! Client-side computations over medication data fetched from the
//! remote API.
//!
//! This crate provides:
//! - Pay-period schedules laid out from a pay date and cadence
//! - The pay-period purchase forecast (medication-to-period matching and cost totals)
//! - Stock alerts for the medication list
//! - Month grouping of the server's purchase/prescription timeline
//!
//! ## Design Principles
//!
//! - **Pure batch computations**: no I/O, no shared state, identical inputs give identical output
//! - **Explicit conventions**: boundary and quantity conventions are configuration, not guesses
//! - **Builder pattern** for ergonomic API with sensible defaults

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod alerts;
pub mod forecast;
pub mod schedules;
pub mod timeline;
