//! Calendar date type for run-out dates and pay periods.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - Checked day arithmetic used when laying out pay periods
//!
//! # Examples
//!
//! ```
//! use medstock_core::types::time::Date;
//!
//! let start = Date::from_ymd(2024, 1, 15).unwrap();
//! let end = start.add_days(14).unwrap();
//!
//! assert_eq!(end - start, 14);
//! assert_eq!(end.succ().unwrap().to_string(), "2024-01-30");
//! ```

use chrono::{Datelike, Days, Local, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Serialises as ISO 8601 (`YYYY-MM-DD`). When parsing, a trailing time
/// component (`2024-01-20T00:00:00`) is ignored, because the medication API
/// returns some dates as timestamps.
///
/// # Examples
///
/// ```
/// use medstock_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let stamped: Date = "2024-06-15T08:30:00".parse().unwrap();
/// assert_eq!(date, stamped);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use medstock_core::types::time::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.day(), 29);
    ///
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from an ISO 8601 string.
    ///
    /// Accepts `YYYY-MM-DD`, optionally followed by `T` and a time of day
    /// which is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use medstock_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-01-15").unwrap();
    /// assert_eq!(date.month(), 1);
    ///
    /// assert!(Date::parse("2024-02-30").is_err());
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let trimmed = s.trim();
        let date_part = trimmed.split('T').next().unwrap_or(trimmed);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the date `days` calendar days later.
    ///
    /// # Errors
    /// Returns `DateError::Overflow` when the result leaves chrono's range.
    ///
    /// # Examples
    ///
    /// ```
    /// use medstock_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 14).unwrap();
    /// assert_eq!(date.add_days(14).unwrap(), Date::from_ymd(2024, 2, 28).unwrap());
    /// assert_eq!(date.add_days(15).unwrap(), Date::from_ymd(2024, 2, 29).unwrap());
    /// ```
    pub fn add_days(self, days: u64) -> Result<Self, DateError> {
        self.0
            .checked_add_days(Days::new(days))
            .map(Date)
            .ok_or_else(|| DateError::Overflow(format!("adding {} days to {}", days, self)))
    }

    /// Returns the following calendar day.
    pub fn succ(self) -> Result<Self, DateError> {
        self.add_days(1)
    }

    /// Returns the `YYYY-MM` key used to group dates by month.
    ///
    /// # Examples
    ///
    /// ```
    /// use medstock_core::types::time::Date;
    ///
    /// assert_eq!(Date::from_ymd(2024, 3, 9).unwrap().month_key(), "2024-03");
    /// ```
    pub fn month_key(&self) -> String {
        self.0.format("%Y-%m").to_string()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Date;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Date {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Date {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Date::parse(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd_valid_and_invalid() {
        assert!(Date::from_ymd(2024, 1, 31).is_ok());
        assert_eq!(
            Date::from_ymd(2024, 4, 31),
            Err(DateError::InvalidDate {
                year: 2024,
                month: 4,
                day: 31
            })
        );
    }

    #[test]
    fn test_parse_strips_time_component() {
        let date = Date::parse("2024-01-20T13:45:00").unwrap();
        assert_eq!(date, Date::from_ymd(2024, 1, 20).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(Date::parse(""), Err(DateError::ParseError(_))));
        assert!(matches!(Date::parse("20/01/2024"), Err(DateError::ParseError(_))));
        assert!(matches!(Date::parse("2024-13-01"), Err(DateError::ParseError(_))));
    }

    #[test]
    fn test_add_days_crosses_month_and_year() {
        let date = Date::from_ymd(2024, 12, 25).unwrap();
        assert_eq!(date.add_days(7).unwrap(), Date::from_ymd(2025, 1, 1).unwrap());
        assert_eq!(date.add_days(0).unwrap(), date);
    }

    #[test]
    fn test_add_days_overflow() {
        let max = Date::from(NaiveDate::MAX);
        assert!(matches!(max.succ(), Err(DateError::Overflow(_))));
    }

    #[test]
    fn test_sub_returns_signed_days() {
        let a = Date::from_ymd(2024, 1, 15).unwrap();
        let b = Date::from_ymd(2024, 1, 29).unwrap();
        assert_eq!(b - a, 14);
        assert_eq!(a - b, -14);
    }

    #[test]
    fn test_display_and_ordering() {
        let a = Date::from_ymd(2024, 1, 5).unwrap();
        let b = Date::from_ymd(2024, 2, 1).unwrap();
        assert_eq!(a.to_string(), "2024-01-05");
        assert!(a < b);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_is_iso() {
        let date = Date::from_ymd(2024, 2, 28).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-02-28\"");

        let from_stamp: Date = serde_json::from_str("\"2024-02-28T00:00:00\"").unwrap();
        assert_eq!(from_stamp, date);
    }
}
