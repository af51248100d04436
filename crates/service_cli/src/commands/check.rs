//! Check command implementation
//!
//! Validates the effective configuration and previews the pay schedule it
//! produces from today.

use medstock_core::types::Date;
use medstock_models::schedules::{PaySchedule, PayScheduleBuilder};
use medstock_session::config::MedstockConfig;
use tracing::info;

use crate::Result;

/// Run the check command
pub fn run(config: &MedstockConfig) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;

    let schedule = preview(config, Date::today())?;
    print!("{}", render(config, &schedule));

    info!("Configuration OK");
    Ok(())
}

/// Builds the schedule the configured forecast would use.
pub fn preview(config: &MedstockConfig, start: Date) -> Result<PaySchedule> {
    let forecast = &config.forecast;
    let schedule = PayScheduleBuilder::new()
        .start(start)
        .pay_frequency_days(forecast.pay_frequency_days)
        .forecast_months(forecast.forecast_months)
        .boundary_mode(forecast.boundary_mode)
        .build()?;
    Ok(schedule)
}

/// Renders the configuration summary.
pub fn render(config: &MedstockConfig, schedule: &PaySchedule) -> String {
    let forecast = &config.forecast;
    let mut lines = vec![
        "medstock configuration".to_string(),
        "----------------------------------------".to_string(),
        format!("  API URL:          {}", config.base_url()),
        format!("  User ID:          {}", config.user_id),
        format!("  Scenario:         {}", config.scenario),
        format!("  Timeline months:  {}", config.timeline_months),
        format!("  Pay frequency:    {}", forecast.pay_frequency()),
        format!("  Forecast months:  {}", forecast.forecast_months),
        format!("  Boundary mode:    {}", forecast.boundary_mode.name()),
        format!("  Quantity mode:    {}", forecast.quantity_mode.name()),
        format!(
            "  Alert thresholds: repeats <= {}, days left <= {}",
            config.alerts.low_repeats, config.alerts.refill_soon_days
        ),
        "----------------------------------------".to_string(),
        format!(
            "  Schedule:         {} periods, {} to {}",
            schedule.len(),
            schedule.start_date(),
            schedule.end_date()
        ),
    ];
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use medstock_models::schedules::BoundaryMode;

    #[test]
    fn test_default_preview() {
        let config = MedstockConfig::default();
        let start = Date::from_ymd(2024, 1, 15).unwrap();
        let schedule = preview(&config, start).unwrap();
        assert_eq!(schedule.len(), 7);

        let text = render(&config, &schedule);
        assert!(text.contains("7 periods, 2024-01-15 to"));
        assert!(text.contains("gap-separated"));
    }

    #[test]
    fn test_preview_uses_configured_boundary_mode() {
        let mut config = MedstockConfig::default();
        config.forecast.forecast_months = 1;
        config.forecast.boundary_mode = BoundaryMode::InclusiveShared;
        let start = Date::from_ymd(2024, 1, 15).unwrap();

        let schedule = preview(&config, start).unwrap();
        assert_eq!(schedule.boundary_mode(), BoundaryMode::InclusiveShared);
        assert_eq!(schedule.periods()[1].start(), schedule.periods()[0].end());
        assert_eq!(schedule.end_date(), Date::from_ymd(2024, 2, 26).unwrap());

        let text = render(&config, &schedule);
        assert!(text.contains("inclusive-shared"));
        assert!(text.contains("3 periods, 2024-01-15 to 2024-02-26"));
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let mut config = MedstockConfig::default();
        config.forecast.forecast_months = 0;
        assert!(run(&config).is_err());
    }
}
