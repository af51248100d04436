//! Pay period definition.

use medstock_core::types::Date;
use std::fmt;

/// A single pay period: an inclusive date range with its position in the
/// schedule.
///
/// # Examples
///
/// ```
/// use medstock_models::schedules::PayPeriod;
/// use medstock_core::types::Date;
///
/// let period = PayPeriod::new(
///     0,
///     Date::from_ymd(2024, 1, 15).unwrap(),
///     Date::from_ymd(2024, 1, 29).unwrap(),
/// );
///
/// assert!(period.contains(Date::from_ymd(2024, 1, 29).unwrap()));
/// assert_eq!(period.days_inclusive(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayPeriod {
    /// Zero-based position in the schedule.
    index: usize,
    /// First day of the period (inclusive).
    start: Date,
    /// Last day of the period (inclusive).
    end: Date,
}

impl PayPeriod {
    /// Creates a new period.
    #[inline]
    pub fn new(index: usize, start: Date, end: Date) -> Self {
        Self { index, start, end }
    }

    /// Returns the zero-based position in the schedule.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the first day of the period.
    #[inline]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day of the period.
    #[inline]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns whether `date` falls within the period, both ends inclusive.
    #[inline]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns the number of calendar days covered, counting both ends.
    #[inline]
    pub fn days_inclusive(&self) -> i64 {
        self.end - self.start + 1
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
