//! Medication records consumed by the pay-period forecast.

use super::error::RecordError;
use super::time::Date;

/// A medication as seen by the forecast generator.
///
/// Produced by the remote API (`/summary` or `/user-med-chart/user/{id}`)
/// and treated as immutable input. A record without a run-out date never
/// lands in a pay period.
///
/// # Examples
///
/// ```
/// use medstock_core::types::{Date, Medication};
///
/// let med = Medication::new("Atorvastatin 20mg")
///     .with_run_out_date(Date::from_ymd(2024, 2, 1).unwrap())
///     .with_unit_price(12.5)
///     .with_repeat_quantity(30);
///
/// assert_eq!(med.name(), "Atorvastatin 20mg");
/// assert_eq!(med.unit_price(), Some(12.5));
/// assert_eq!(med.repeat_quantity(), Some(30));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Medication {
    #[cfg_attr(feature = "serde", serde(alias = "Name", alias = "medication_name"))]
    name: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "run_out_date", skip_serializing_if = "Option::is_none")
    )]
    run_out_date: Option<Date>,
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "unit_price", skip_serializing_if = "Option::is_none")
    )]
    unit_price: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            alias = "repeat_quantity",
            alias = "quantity_to_purchase",
            skip_serializing_if = "Option::is_none"
        )
    )]
    repeat_quantity: Option<u32>,
}

impl Medication {
    /// Creates a record with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            run_out_date: None,
            unit_price: None,
            repeat_quantity: None,
        }
    }

    /// Sets the projected run-out date.
    pub fn with_run_out_date(mut self, date: Date) -> Self {
        self.run_out_date = Some(date);
        self
    }

    /// Sets the price of one unit.
    pub fn with_unit_price(mut self, price: f64) -> Self {
        self.unit_price = Some(price);
        self
    }

    /// Sets the quantity dispensed per repeat fill.
    pub fn with_repeat_quantity(mut self, quantity: u32) -> Self {
        self.repeat_quantity = Some(quantity);
        self
    }

    /// Returns the medication name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the projected run-out date, if known.
    #[inline]
    pub fn run_out_date(&self) -> Option<Date> {
        self.run_out_date
    }

    /// Returns the unit price, if known.
    #[inline]
    pub fn unit_price(&self) -> Option<f64> {
        self.unit_price
    }

    /// Returns the repeat-fill quantity, if known.
    #[inline]
    pub fn repeat_quantity(&self) -> Option<u32> {
        self.repeat_quantity
    }

    /// Checks that the price, when present, is finite and non-negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use medstock_core::types::Medication;
    ///
    /// assert!(Medication::new("A").validate().is_ok());
    /// assert!(Medication::new("B").with_unit_price(-2.0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), RecordError> {
        match self.unit_price {
            Some(price) if !price.is_finite() => Err(RecordError::NonFinitePrice {
                name: self.name.clone(),
            }),
            Some(price) if price < 0.0 => Err(RecordError::NegativePrice {
                name: self.name.clone(),
                price,
            }),
            _ => Ok(()),
        }
    }
}
