//! Forecast result types.

use crate::schedules::PayPeriod;
use medstock_core::types::{Date, Medication};

/// One medication bought in a pay period.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PurchaseLine {
    /// Medication name.
    pub name: String,
    /// Run-out date that placed the medication in this period.
    pub run_out_date: Date,
    /// Unit price, if known.
    pub unit_price: Option<f64>,
    /// Units bought.
    pub quantity: u32,
    /// `unit_price * quantity`, with a missing price counted as zero.
    pub cost: f64,
}

impl PurchaseLine {
    pub(crate) fn new(medication: &Medication, run_out_date: Date, quantity: u32) -> Self {
        let cost = medication.unit_price().unwrap_or(0.0) * f64::from(quantity);
        Self {
            name: medication.name().to_string(),
            run_out_date,
            unit_price: medication.unit_price(),
            quantity,
            cost,
        }
    }
}

/// A pay period with the medications to buy in it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PeriodForecast {
    period: PayPeriod,
    members: Vec<PurchaseLine>,
    subtotal: f64,
}

impl PeriodForecast {
    pub(crate) fn new(period: PayPeriod) -> Self {
        Self {
            period,
            members: Vec::new(),
            subtotal: 0.0,
        }
    }

    pub(crate) fn push(&mut self, line: PurchaseLine) {
        self.subtotal += line.cost;
        self.members.push(line);
    }

    /// Returns the pay period.
    #[inline]
    pub fn period(&self) -> &PayPeriod {
        &self.period
    }

    /// Returns the medications to buy, in input order.
    #[inline]
    pub fn members(&self) -> &[PurchaseLine] {
        &self.members
    }

    /// Returns the period's purchase cost.
    #[inline]
    pub fn subtotal(&self) -> f64 {
        self.subtotal
    }

    /// Returns whether nothing needs buying in this period.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The outcome of one forecast run.
///
/// # Examples
///
/// ```
/// use medstock_models::forecast::{generate_forecast, ForecastConfig};
/// use medstock_core::types::Date;
///
/// let result = generate_forecast(
///     &ForecastConfig::new(14, 1),
///     Date::from_ymd(2024, 1, 15).unwrap(),
///     &[],
/// )
/// .unwrap();
///
/// assert_eq!(result.periods().len(), 3);
/// assert!(result.periods().iter().all(|p| p.is_empty()));
/// assert_eq!(result.grand_total(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ForecastResult {
    periods: Vec<PeriodForecast>,
    grand_total: f64,
    total_matched_count: usize,
    without_run_out_date: usize,
    outside_horizon: usize,
}

impl ForecastResult {
    pub(crate) fn new(
        periods: Vec<PeriodForecast>,
        without_run_out_date: usize,
        outside_horizon: usize,
    ) -> Self {
        let grand_total = periods.iter().map(PeriodForecast::subtotal).sum();
        let total_matched_count = periods.iter().map(|p| p.members.len()).sum();
        Self {
            periods,
            grand_total,
            total_matched_count,
            without_run_out_date,
            outside_horizon,
        }
    }

    /// Returns the periods in order.
    #[inline]
    pub fn periods(&self) -> &[PeriodForecast] {
        &self.periods
    }

    /// Returns the sum of all period subtotals.
    #[inline]
    pub fn grand_total(&self) -> f64 {
        self.grand_total
    }

    /// Returns the number of medications placed in some period.
    #[inline]
    pub fn total_matched_count(&self) -> usize {
        self.total_matched_count
    }

    /// Returns the number of medications skipped for lack of a run-out date.
    #[inline]
    pub fn without_run_out_date(&self) -> usize {
        self.without_run_out_date
    }

    /// Returns the number of dated medications that fell in no period.
    #[inline]
    pub fn outside_horizon(&self) -> usize {
        self.outside_horizon
    }
}
