//! PaySchedule and PayScheduleBuilder implementation.

use super::boundary::BoundaryMode;
use super::error::ScheduleError;
use super::period::PayPeriod;
use medstock_core::types::Date;
use tracing::debug;

/// Days per month used to turn a forecast horizon into a period count.
///
/// A fixed approximation, not calendar months. Swapping in calendar-accurate
/// months only requires changing [`period_count`].
pub const APPROX_DAYS_PER_MONTH: u32 = 30;

/// Longest accepted forecast horizon in months.
pub const MAX_FORECAST_MONTHS: u32 = 1200;

/// Returns the number of pay periods covering `forecast_months`.
///
/// Equals `ceil(forecast_months * APPROX_DAYS_PER_MONTH / pay_frequency_days)`.
///
/// # Errors
///
/// Returns an error if either argument is zero or the horizon exceeds
/// [`MAX_FORECAST_MONTHS`].
///
/// # Examples
///
/// ```
/// use medstock_models::schedules::period_count;
///
/// assert_eq!(period_count(14, 1).unwrap(), 3);
/// assert_eq!(period_count(30, 6).unwrap(), 6);
/// assert_eq!(period_count(7, 3).unwrap(), 13);
/// ```
pub fn period_count(pay_frequency_days: u32, forecast_months: u32) -> Result<u64, ScheduleError> {
    if pay_frequency_days == 0 {
        return Err(ScheduleError::InvalidPayFrequency {
            days: pay_frequency_days,
        });
    }
    if forecast_months == 0 || forecast_months > MAX_FORECAST_MONTHS {
        return Err(ScheduleError::InvalidHorizon {
            months: forecast_months,
        });
    }

    let horizon_days = u64::from(forecast_months) * u64::from(APPROX_DAYS_PER_MONTH);
    Ok(horizon_days.div_ceil(u64::from(pay_frequency_days)))
}

/// Builds the gap-separated pay periods for a forecast.
///
/// # Examples
///
/// ```
/// use medstock_models::schedules::build_periods;
/// use medstock_core::types::Date;
///
/// let schedule = build_periods(Date::from_ymd(2024, 1, 15).unwrap(), 14, 1).unwrap();
/// let bounds: Vec<String> = schedule.iter().map(|p| p.to_string()).collect();
/// assert_eq!(
///     bounds,
///     ["2024-01-15 to 2024-01-29", "2024-01-30 to 2024-02-13", "2024-02-14 to 2024-02-28"]
/// );
/// ```
pub fn build_periods(
    start: Date,
    pay_frequency_days: u32,
    forecast_months: u32,
) -> Result<PaySchedule, ScheduleError> {
    PayScheduleBuilder::new()
        .start(start)
        .pay_frequency_days(pay_frequency_days)
        .forecast_months(forecast_months)
        .build()
}

/// Builds the gap-separated pay periods from an ISO-8601 start date.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidStartDate`] if `start` is not a valid
/// calendar date, in addition to the errors of [`build_periods`].
///
/// # Examples
///
/// ```
/// use medstock_models::schedules::{build_periods_from_iso, ScheduleError};
///
/// assert_eq!(build_periods_from_iso("2024-01-15", 14, 1).unwrap().len(), 3);
/// assert!(matches!(
///     build_periods_from_iso("2024-02-30", 14, 1),
///     Err(ScheduleError::InvalidStartDate { .. })
/// ));
/// ```
pub fn build_periods_from_iso(
    start: &str,
    pay_frequency_days: u32,
    forecast_months: u32,
) -> Result<PaySchedule, ScheduleError> {
    let start_date = Date::parse(start).map_err(|source| ScheduleError::InvalidStartDate {
        input: start.to_string(),
        source,
    })?;
    build_periods(start_date, pay_frequency_days, forecast_months)
}

/// The ordered pay periods covering a forecast horizon.
///
/// Always holds at least one period. Built fresh for every forecast and
/// never persisted.
///
/// # Examples
///
/// ```
/// use medstock_models::schedules::build_periods;
/// use medstock_core::types::Date;
///
/// let schedule = build_periods(Date::from_ymd(2024, 1, 15).unwrap(), 14, 1).unwrap();
///
/// let idx = schedule.period_index_containing(Date::from_ymd(2024, 2, 1).unwrap());
/// assert_eq!(idx, Some(1));
/// assert_eq!(schedule.end_date(), Date::from_ymd(2024, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PaySchedule {
    /// All periods in the schedule.
    periods: Vec<PayPeriod>,
    /// Days from a period's start to its end.
    pay_frequency_days: u32,
    /// How consecutive periods meet.
    boundary_mode: BoundaryMode,
}

impl PaySchedule {
    /// Returns the periods in the schedule.
    #[inline]
    pub fn periods(&self) -> &[PayPeriod] {
        &self.periods
    }

    /// Returns the number of periods.
    #[inline]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns whether the schedule is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Returns the pay frequency in days.
    #[inline]
    pub fn pay_frequency_days(&self) -> u32 {
        self.pay_frequency_days
    }

    /// Returns the boundary convention used to lay out the periods.
    #[inline]
    pub fn boundary_mode(&self) -> BoundaryMode {
        self.boundary_mode
    }

    /// Returns the first day of the first period.
    #[inline]
    pub fn start_date(&self) -> Date {
        self.periods[0].start()
    }

    /// Returns the last day of the last period.
    #[inline]
    pub fn end_date(&self) -> Date {
        self.periods[self.periods.len() - 1].end()
    }

    /// Returns an iterator over the periods.
    pub fn iter(&self) -> impl Iterator<Item = &PayPeriod> {
        self.periods.iter()
    }

    /// Returns the index of the period containing the given date, if any.
    ///
    /// Under [`BoundaryMode::InclusiveShared`] a shared boundary day
    /// belongs to the earlier period.
    pub fn period_index_containing(&self, date: Date) -> Option<usize> {
        // Periods are sorted, so stop at the first one starting after the date.
        self.periods
            .iter()
            .take_while(|p| p.start() <= date)
            .position(|p| p.contains(date))
    }
}

impl<'a> IntoIterator for &'a PaySchedule {
    type Item = &'a PayPeriod;
    type IntoIter = std::slice::Iter<'a, PayPeriod>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}

/// Builder for constructing pay schedules.
///
/// # Examples
///
/// ```
/// use medstock_models::schedules::{BoundaryMode, PayFrequency, PayScheduleBuilder};
/// use medstock_core::types::Date;
///
/// let schedule = PayScheduleBuilder::new()
///     .start(Date::from_ymd(2024, 3, 1).unwrap())
///     .frequency(PayFrequency::Weekly)
///     .forecast_months(2)
///     .boundary_mode(BoundaryMode::GapSeparated)
///     .build()
///     .unwrap();
///
/// assert_eq!(schedule.len(), 9); // ceil(60 / 7)
/// ```
#[derive(Debug, Clone)]
pub struct PayScheduleBuilder {
    start_date: Option<Date>,
    pay_frequency_days: Option<u32>,
    forecast_months: Option<u32>,
    boundary_mode: BoundaryMode,
}

impl Default for PayScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PayScheduleBuilder {
    /// Creates a new builder. The default boundary mode is gap-separated.
    pub fn new() -> Self {
        Self {
            start_date: None,
            pay_frequency_days: None,
            forecast_months: None,
            boundary_mode: BoundaryMode::default(),
        }
    }

    /// Sets the first pay date.
    pub fn start(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the pay frequency in days.
    pub fn pay_frequency_days(mut self, days: u32) -> Self {
        self.pay_frequency_days = Some(days);
        self
    }

    /// Sets the pay frequency from a named cadence.
    pub fn frequency(self, frequency: super::PayFrequency) -> Self {
        self.pay_frequency_days(frequency.days())
    }

    /// Sets the forecast horizon in months.
    pub fn forecast_months(mut self, months: u32) -> Self {
        self.forecast_months = Some(months);
        self
    }

    /// Sets the boundary convention.
    pub fn boundary_mode(mut self, mode: BoundaryMode) -> Self {
        self.boundary_mode = mode;
        self
    }

    /// Builds the schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Start date, frequency or horizon is missing
    /// - Frequency or horizon is zero
    /// - The last period would end beyond the supported calendar range
    pub fn build(self) -> Result<PaySchedule, ScheduleError> {
        let start = self
            .start_date
            .ok_or(ScheduleError::MissingField { field: "start" })?;
        let pay_frequency_days = self.pay_frequency_days.ok_or(ScheduleError::MissingField {
            field: "pay_frequency_days",
        })?;
        let forecast_months = self.forecast_months.ok_or(ScheduleError::MissingField {
            field: "forecast_months",
        })?;

        let count = period_count(pay_frequency_days, forecast_months)?;

        // Reject schedules whose last day is past the calendar range before
        // allocating anything. The last period starts (count - 1) strides in.
        let stride = u64::from(pay_frequency_days) + self.boundary_mode.next_start_offset();
        let last_end = (count - 1)
            .checked_mul(stride)
            .and_then(|offset| offset.checked_add(u64::from(pay_frequency_days)))
            .ok_or_else(|| ScheduleError::DateOverflow {
                reason: format!("{} periods of {} days", count, stride),
            })?;
        start.add_days(last_end)?;

        let periods = self.generate_periods(start, pay_frequency_days, count)?;

        debug!(
            start = %start,
            pay_frequency_days,
            forecast_months,
            boundary_mode = %self.boundary_mode,
            periods = periods.len(),
            "built pay schedule"
        );

        Ok(PaySchedule {
            periods,
            pay_frequency_days,
            boundary_mode: self.boundary_mode,
        })
    }

    /// Lays out `count` consecutive periods from `start`.
    fn generate_periods(
        &self,
        start: Date,
        pay_frequency_days: u32,
        count: u64,
    ) -> Result<Vec<PayPeriod>, ScheduleError> {
        let mut periods = Vec::new();
        let mut current_start = start;

        for index in 0..count {
            let current_end = current_start.add_days(u64::from(pay_frequency_days))?;
            periods.push(PayPeriod::new(index as usize, current_start, current_end));

            if index + 1 < count {
                current_start = current_end.add_days(self.boundary_mode.next_start_offset())?;
            }
        }

        Ok(periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_reference_scenario_gap_separated() {
        let schedule = build_periods(d(2024, 1, 15), 14, 1).unwrap();

        assert_eq!(schedule.len(), 3);
        let p = schedule.periods();
        assert_eq!((p[0].start(), p[0].end()), (d(2024, 1, 15), d(2024, 1, 29)));
        assert_eq!((p[1].start(), p[1].end()), (d(2024, 1, 30), d(2024, 2, 13)));
        assert_eq!((p[2].start(), p[2].end()), (d(2024, 2, 14), d(2024, 2, 28)));
        assert_eq!(schedule.boundary_mode(), BoundaryMode::GapSeparated);
    }

    #[test]
    fn test_inclusive_shared_reuses_boundary_day() {
        let schedule = PayScheduleBuilder::new()
            .start(d(2024, 1, 15))
            .pay_frequency_days(14)
            .forecast_months(1)
            .boundary_mode(BoundaryMode::InclusiveShared)
            .build()
            .unwrap();

        let p = schedule.periods();
        assert_eq!(p.len(), 3);
        assert_eq!(p[0].end(), p[1].start());
        assert_eq!(p[1].end(), p[2].start());
        assert_eq!(p[2].end(), d(2024, 2, 26));
    }

    #[test]
    fn test_shared_boundary_day_resolves_to_earlier_period() {
        let schedule = PayScheduleBuilder::new()
            .start(d(2024, 1, 15))
            .pay_frequency_days(14)
            .forecast_months(1)
            .boundary_mode(BoundaryMode::InclusiveShared)
            .build()
            .unwrap();

        assert_eq!(schedule.period_index_containing(d(2024, 1, 29)), Some(0));
        assert_eq!(schedule.period_index_containing(d(2024, 1, 30)), Some(1));
    }

    #[test]
    fn test_each_period_spans_frequency_plus_one_days() {
        let schedule = build_periods(d(2024, 1, 1), 10, 3).unwrap();
        assert_eq!(schedule.len(), 9);
        for period in &schedule {
            assert_eq!(period.days_inclusive(), 11);
        }
    }

    #[test]
    fn test_period_count_rounds_up() {
        assert_eq!(period_count(14, 1).unwrap(), 3);
        assert_eq!(period_count(15, 1).unwrap(), 2);
        assert_eq!(period_count(31, 1).unwrap(), 1);
        assert_eq!(period_count(1, 1).unwrap(), 30);
        assert_eq!(period_count(45, 12).unwrap(), 8);
    }

    #[test]
    fn test_zero_frequency_rejected() {
        assert_eq!(
            build_periods(d(2024, 1, 1), 0, 3),
            Err(ScheduleError::InvalidPayFrequency { days: 0 })
        );
    }

    #[test]
    fn test_zero_horizon_rejected() {
        assert_eq!(
            build_periods(d(2024, 1, 1), 14, 0),
            Err(ScheduleError::InvalidHorizon { months: 0 })
        );
    }

    #[test]
    fn test_invalid_iso_start_rejected() {
        assert!(matches!(
            build_periods_from_iso("2023-02-29", 14, 1),
            Err(ScheduleError::InvalidStartDate { .. })
        ));
        assert!(matches!(
            build_periods_from_iso("yesterday", 14, 1),
            Err(ScheduleError::InvalidStartDate { .. })
        ));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            PayScheduleBuilder::new().build(),
            Err(ScheduleError::MissingField { field: "start" })
        );
        assert_eq!(
            PayScheduleBuilder::new().start(d(2024, 1, 1)).build(),
            Err(ScheduleError::MissingField {
                field: "pay_frequency_days"
            })
        );
        assert_eq!(
            PayScheduleBuilder::new()
                .start(d(2024, 1, 1))
                .pay_frequency_days(7)
                .build(),
            Err(ScheduleError::MissingField {
                field: "forecast_months"
            })
        );
    }

    #[test]
    fn test_horizon_above_maximum_rejected() {
        assert_eq!(
            build_periods(d(2024, 1, 1), 1, MAX_FORECAST_MONTHS + 1),
            Err(ScheduleError::InvalidHorizon {
                months: MAX_FORECAST_MONTHS + 1
            })
        );
        assert!(build_periods(d(2024, 1, 1), 30, MAX_FORECAST_MONTHS).is_ok());
    }

    #[test]
    fn test_schedule_ending_on_last_representable_day() {
        // Two gap-separated periods of 15 days end 31 days after the start.
        let last = NaiveDate::MAX;
        let start = Date::from(last - chrono::Duration::days(31));

        let schedule = build_periods(start, 15, 1).unwrap();
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.end_date(), Date::from(last));

        let start = Date::from(last - chrono::Duration::days(30));
        assert!(matches!(
            build_periods(start, 15, 1),
            Err(ScheduleError::DateOverflow { .. })
        ));
    }

    #[test]
    fn test_period_lookup_outside_and_in_gap() {
        let schedule = build_periods(d(2024, 1, 15), 14, 1).unwrap();
        assert_eq!(schedule.period_index_containing(d(2024, 1, 14)), None);
        assert_eq!(schedule.period_index_containing(d(2024, 2, 29)), None);
        assert_eq!(schedule.period_index_containing(d(2024, 2, 28)), Some(2));
        assert_eq!(schedule.start_date(), d(2024, 1, 15));
    }
}
