//! Forecast configuration.

use crate::schedules::{BoundaryMode, PayFrequency, ScheduleError};
use std::fmt;
use std::str::FromStr;

/// Units bought each time a medication runs out inside a period.
///
/// # Examples
///
/// ```
/// use medstock_models::forecast::QuantityMode;
///
/// assert_eq!(QuantityMode::default(), QuantityMode::FixedOne);
/// assert_eq!("repeat-fill-quantity".parse::<QuantityMode>().unwrap(), QuantityMode::RepeatFillQuantity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuantityMode {
    /// One unit ("one repeat") per matched run-out.
    #[default]
    FixedOne,
    /// The medication's repeat-fill quantity; a missing quantity counts as zero.
    RepeatFillQuantity,
}

impl QuantityMode {
    /// Returns the configuration name of this mode.
    pub fn name(&self) -> &'static str {
        match self {
            QuantityMode::FixedOne => "fixed-one",
            QuantityMode::RepeatFillQuantity => "repeat-fill-quantity",
        }
    }

    /// Returns the quantity bought for a medication with the given
    /// repeat-fill quantity.
    #[inline]
    pub fn quantity_for(&self, repeat_quantity: Option<u32>) -> u32 {
        match self {
            QuantityMode::FixedOne => 1,
            QuantityMode::RepeatFillQuantity => repeat_quantity.unwrap_or(0),
        }
    }
}

impl fmt::Display for QuantityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for QuantityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', ' '], "-").as_str() {
            "fixed-one" | "one" => Ok(QuantityMode::FixedOne),
            "repeat-fill-quantity" | "repeat-fill" | "repeat" => {
                Ok(QuantityMode::RepeatFillQuantity)
            }
            _ => Err(format!("Unknown quantity mode: {}", s)),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::QuantityMode;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for QuantityMode {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for QuantityMode {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            QuantityMode::from_str(&s).map_err(de::Error::custom)
        }
    }
}

/// Parameters of one forecast run.
///
/// The defaults (fortnightly pay, three months, gap-separated periods, one
/// unit per match) follow the latest dashboard revision.
///
/// # Examples
///
/// ```
/// use medstock_models::forecast::{ForecastConfig, QuantityMode};
/// use medstock_models::schedules::BoundaryMode;
///
/// let config = ForecastConfig::new(7, 2)
///     .with_boundary_mode(BoundaryMode::InclusiveShared)
///     .with_quantity_mode(QuantityMode::RepeatFillQuantity);
///
/// assert!(config.validate().is_ok());
/// assert!(ForecastConfig::new(0, 2).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ForecastConfig {
    /// Days from a period's start to its end.
    pub pay_frequency_days: u32,
    /// Forecast horizon in (30-day) months.
    pub forecast_months: u32,
    /// How consecutive periods meet.
    pub boundary_mode: BoundaryMode,
    /// Units bought per matched run-out.
    pub quantity_mode: QuantityMode,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            pay_frequency_days: PayFrequency::default().days(),
            forecast_months: 3,
            boundary_mode: BoundaryMode::default(),
            quantity_mode: QuantityMode::default(),
        }
    }
}

impl ForecastConfig {
    /// Creates a configuration with default conventions.
    pub fn new(pay_frequency_days: u32, forecast_months: u32) -> Self {
        Self {
            pay_frequency_days,
            forecast_months,
            ..Self::default()
        }
    }

    /// Sets the boundary convention.
    pub fn with_boundary_mode(mut self, mode: BoundaryMode) -> Self {
        self.boundary_mode = mode;
        self
    }

    /// Sets the quantity convention.
    pub fn with_quantity_mode(mut self, mode: QuantityMode) -> Self {
        self.quantity_mode = mode;
        self
    }

    /// Returns the pay frequency as a named cadence.
    pub fn pay_frequency(&self) -> PayFrequency {
        PayFrequency::from_days(self.pay_frequency_days)
    }

    /// Checks that frequency and horizon are positive.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        crate::schedules::period_count(self.pay_frequency_days, self.forecast_months).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_latest_revision() {
        let config = ForecastConfig::default();
        assert_eq!(config.pay_frequency_days, 14);
        assert_eq!(config.forecast_months, 3);
        assert_eq!(config.boundary_mode, BoundaryMode::GapSeparated);
        assert_eq!(config.quantity_mode, QuantityMode::FixedOne);
        assert_eq!(config.pay_frequency(), PayFrequency::Fortnightly);
    }

    #[test]
    fn test_quantity_for() {
        assert_eq!(QuantityMode::FixedOne.quantity_for(Some(30)), 1);
        assert_eq!(QuantityMode::FixedOne.quantity_for(None), 1);
        assert_eq!(QuantityMode::RepeatFillQuantity.quantity_for(Some(30)), 30);
        assert_eq!(QuantityMode::RepeatFillQuantity.quantity_for(None), 0);
    }

    #[test]
    fn test_validate_rejects_zero_horizon() {
        assert_eq!(
            ForecastConfig::new(14, 0).validate(),
            Err(ScheduleError::InvalidHorizon { months: 0 })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_config() {
        let config: ForecastConfig =
            serde_json::from_str(r#"{"forecast_months": 6, "quantity_mode": "repeat-fill-quantity"}"#)
                .unwrap();
        assert_eq!(config.pay_frequency_days, 14);
        assert_eq!(config.forecast_months, 6);
        assert_eq!(config.quantity_mode, QuantityMode::RepeatFillQuantity);
    }
}
