//! Medication-to-period matching and cost aggregation.

use super::config::{ForecastConfig, QuantityMode};
use super::error::ForecastError;
use super::result::{ForecastResult, PeriodForecast, PurchaseLine};
use crate::schedules::{PaySchedule, PayScheduleBuilder, ScheduleError};
use medstock_core::types::{Date, Medication};
use tracing::{debug, trace, warn};

/// Assigns each dated medication to the pay period containing its run-out
/// date and totals the cost.
///
/// Medications without a run-out date, or whose run-out date falls in no
/// period, are left out. Within a period medications keep their input order.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidRecord`] if a matched medication's price
/// is negative or not finite. Excluded records are not validated.
///
/// # Examples
///
/// ```
/// use medstock_models::forecast::{assign_medications, QuantityMode};
/// use medstock_models::schedules::build_periods;
/// use medstock_core::types::{Date, Medication};
///
/// let schedule = build_periods(Date::from_ymd(2024, 1, 15).unwrap(), 14, 1).unwrap();
/// let meds = [Medication::new("Metformin")
///     .with_run_out_date(Date::from_ymd(2024, 1, 29).unwrap())
///     .with_unit_price(9.5)];
///
/// let result = assign_medications(&schedule, &meds, QuantityMode::FixedOne).unwrap();
/// assert_eq!(result.periods()[0].members().len(), 1);
/// assert_eq!(result.periods()[0].subtotal(), 9.5);
/// ```
pub fn assign_medications(
    schedule: &PaySchedule,
    medications: &[Medication],
    quantity_mode: QuantityMode,
) -> Result<ForecastResult, ForecastError> {
    let mut periods: Vec<PeriodForecast> =
        schedule.iter().copied().map(PeriodForecast::new).collect();
    let mut without_run_out_date = 0;
    let mut outside_horizon = 0;

    for medication in medications {
        let Some(run_out) = medication.run_out_date() else {
            warn!(medication = medication.name(), "no run-out date, left out of forecast");
            without_run_out_date += 1;
            continue;
        };

        match schedule.period_index_containing(run_out) {
            Some(index) => {
                medication.validate()?;
                let quantity = quantity_mode.quantity_for(medication.repeat_quantity());
                trace!(medication = medication.name(), %run_out, period = index, "matched");
                periods[index].push(PurchaseLine::new(medication, run_out, quantity));
            }
            None => outside_horizon += 1,
        }
    }

    let result = ForecastResult::new(periods, without_run_out_date, outside_horizon);
    debug!(
        medications = medications.len(),
        matched = result.total_matched_count(),
        without_run_out_date,
        outside_horizon,
        grand_total = result.grand_total(),
        "assigned medications to pay periods"
    );

    Ok(result)
}

/// Builds the pay periods for `config` starting at `start` and assigns
/// `medications` to them.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidInput`] for a zero frequency or horizon,
/// and [`ForecastError::InvalidRecord`] for an unusable price.
pub fn generate_forecast(
    config: &ForecastConfig,
    start: Date,
    medications: &[Medication],
) -> Result<ForecastResult, ForecastError> {
    let schedule = PayScheduleBuilder::new()
        .start(start)
        .pay_frequency_days(config.pay_frequency_days)
        .forecast_months(config.forecast_months)
        .boundary_mode(config.boundary_mode)
        .build()?;

    assign_medications(&schedule, medications, config.quantity_mode)
}

/// Same as [`generate_forecast`] with an ISO-8601 start date.
///
/// # Examples
///
/// ```
/// use medstock_models::forecast::{generate_forecast_from_iso, ForecastConfig, ForecastError};
///
/// let err = generate_forecast_from_iso(&ForecastConfig::default(), "15/01/2024", &[]);
/// assert!(matches!(err, Err(ForecastError::InvalidInput(_))));
/// ```
pub fn generate_forecast_from_iso(
    config: &ForecastConfig,
    start: &str,
    medications: &[Medication],
) -> Result<ForecastResult, ForecastError> {
    let start_date = Date::parse(start).map_err(|source| ScheduleError::InvalidStartDate {
        input: start.to_string(),
        source,
    })?;
    generate_forecast(config, start_date, medications)
}
