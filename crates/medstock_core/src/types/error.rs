//! Error types for foundation operations.
//!
//! This module provides:
//! - `DateError`: Errors from date construction, parsing and arithmetic
//! - `RecordError`: Errors from medication record validation

use thiserror::Error;

/// Date-related errors.
///
/// # Examples
/// ```
/// use medstock_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),

    /// Date arithmetic left the representable calendar range.
    #[error("Date overflow: {0}")]
    Overflow(String),
}

/// Medication record errors.
///
/// # Examples
/// ```
/// use medstock_core::types::RecordError;
///
/// let err = RecordError::NegativePrice { name: "Aspirin".to_string(), price: -1.0 };
/// assert!(err.to_string().contains("Aspirin"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    /// Unit price is negative.
    #[error("Medication '{name}' has negative unit price {price}")]
    NegativePrice {
        /// Medication name
        name: String,
        /// Offending price
        price: f64,
    },

    /// Unit price is NaN or infinite.
    #[error("Medication '{name}' has non-finite unit price")]
    NonFinitePrice {
        /// Medication name
        name: String,
    },
}
