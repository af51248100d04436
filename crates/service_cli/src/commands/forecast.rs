//! Forecast command implementation
//!
//! Groups medication purchases into pay periods and prints per-period
//! subtotals and the grand total.

use std::fmt::Write;

use medstock_core::types::{Date, Medication};
use medstock_models::forecast::{generate_forecast, ForecastConfig, ForecastResult};
use medstock_models::schedules::PayFrequency;
use tracing::info;

use super::{fit, print_json, read_json, OutputFormat};
use crate::{CliError, Result};

/// Flags of the forecast command. `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct ForecastArgs {
    /// Medication list (JSON array)
    pub input: String,
    /// First pay day, ISO date or "today"
    pub start: Option<String>,
    /// Pay frequency in days or a named cadence
    pub frequency: Option<String>,
    /// Horizon in months
    pub months: Option<u32>,
    /// Boundary convention
    pub boundary: Option<String>,
    /// Quantity convention
    pub quantity: Option<String>,
}

/// Applies flag overrides on top of the configured forecast settings.
pub fn resolve_config(base: ForecastConfig, args: &ForecastArgs) -> Result<ForecastConfig> {
    let mut config = base;
    if let Some(freq) = &args.frequency {
        config.pay_frequency_days = freq
            .parse::<PayFrequency>()
            .map_err(CliError::InvalidArgument)?
            .days();
    }
    if let Some(months) = args.months {
        config.forecast_months = months;
    }
    if let Some(boundary) = &args.boundary {
        config.boundary_mode = boundary.parse().map_err(CliError::InvalidArgument)?;
    }
    if let Some(quantity) = &args.quantity {
        config.quantity_mode = quantity.parse().map_err(CliError::InvalidArgument)?;
    }
    Ok(config)
}

/// Parses the start flag, defaulting to today.
pub fn resolve_start(start: Option<&str>) -> Result<Date> {
    match start.map(str::trim) {
        None | Some("today") | Some("") => Ok(Date::today()),
        Some(s) => Date::parse(s)
            .map_err(|e| CliError::InvalidArgument(format!("Invalid start date '{}': {}", s, e))),
    }
}

/// Run the forecast command
pub fn run(base: ForecastConfig, args: &ForecastArgs, format: &str) -> Result<()> {
    let format = OutputFormat::parse(format)?;
    let config = resolve_config(base, args)?;
    let start = resolve_start(args.start.as_deref())?;

    info!("Starting forecast...");
    info!("  Input: {}", args.input);
    info!("  Start: {}", start);
    info!("  Pay frequency: {}", config.pay_frequency());
    info!("  Months: {}", config.forecast_months);

    let medications: Vec<Medication> = read_json(&args.input)?;
    let result = generate_forecast(&config, start, &medications)?;

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Table => print!("{}", render_table(&config, &result)),
    }

    info!("Forecast complete");
    Ok(())
}

/// Renders the forecast as a box table.
pub fn render_table(config: &ForecastConfig, result: &ForecastResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\nPay-period forecast: {} periods, {} ({}, {})",
        result.periods().len(),
        config.pay_frequency(),
        config.boundary_mode.name(),
        config.quantity_mode.name()
    );
    let _ = writeln!(out, "┌─────┬────────────┬────────────┬──────────────────────────┬───────┬────────────┐");
    let _ = writeln!(out, "│ #   │ Start      │ End        │ Medication               │ Qty   │ Cost       │");
    let _ = writeln!(out, "├─────┼────────────┼────────────┼──────────────────────────┼───────┼────────────┤");

    for period in result.periods() {
        let p = period.period();
        let index = (p.index() + 1).to_string();
        let (start, end) = (p.start().to_string(), p.end().to_string());

        if period.is_empty() {
            let _ = writeln!(
                out,
                "│ {:<3} │ {:<10} │ {:<10} │ {:<24} │ {:<5} │ {:>10} │",
                index, start, end, "(none)", "", ""
            );
            continue;
        }

        for (i, line) in period.members().iter().enumerate() {
            let (index, start, end) = if i == 0 {
                (index.as_str(), start.as_str(), end.as_str())
            } else {
                ("", "", "")
            };
            let cost = if line.unit_price.is_some() {
                format!("{:.2}", line.cost)
            } else {
                "-".to_string()
            };
            let _ = writeln!(
                out,
                "│ {:<3} │ {:<10} │ {:<10} │ {:<24} │ {:<5} │ {:>10} │",
                index,
                start,
                end,
                fit(&line.name, 24),
                line.quantity,
                cost
            );
        }
        let _ = writeln!(
            out,
            "│ {:<3} │ {:<10} │ {:<10} │ {:>24} │ {:<5} │ {:>10.2} │",
            "", "", "", "Subtotal", "", period.subtotal()
        );
    }

    let _ = writeln!(out, "└─────┴────────────┴────────────┴──────────────────────────┴───────┴────────────┘");
    let _ = writeln!(out, "Grand total: {:.2}", result.grand_total());
    let _ = writeln!(
        out,
        "Matched: {}  Without run-out date: {}  Outside horizon: {}",
        result.total_matched_count(),
        result.without_run_out_date(),
        result.outside_horizon()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use medstock_models::forecast::QuantityMode;
    use medstock_models::schedules::BoundaryMode;

    fn reference_result() -> (ForecastConfig, ForecastResult) {
        let config = ForecastConfig::new(14, 1);
        let meds = vec![Medication::new("Metformin")
            .with_run_out_date(Date::from_ymd(2024, 1, 20).unwrap())
            .with_unit_price(25.0)];
        let start = Date::from_ymd(2024, 1, 15).unwrap();
        let result = generate_forecast(&config, start, &meds).unwrap();
        (config, result)
    }

    #[test]
    fn test_resolve_config_overrides() {
        let args = ForecastArgs {
            frequency: Some("weekly".to_string()),
            months: Some(2),
            boundary: Some("shared".to_string()),
            quantity: Some("repeat-fill".to_string()),
            ..Default::default()
        };
        let config = resolve_config(ForecastConfig::default(), &args).unwrap();
        assert_eq!(config.pay_frequency_days, 7);
        assert_eq!(config.forecast_months, 2);
        assert_eq!(config.boundary_mode, BoundaryMode::InclusiveShared);
        assert_eq!(config.quantity_mode, QuantityMode::RepeatFillQuantity);
    }

    #[test]
    fn test_resolve_config_keeps_base() {
        let base = ForecastConfig::new(28, 6);
        let config = resolve_config(base, &ForecastArgs::default()).unwrap();
        assert_eq!(config, base);
    }

    #[test]
    fn test_resolve_config_rejects_bad_values() {
        let args = ForecastArgs {
            boundary: Some("sideways".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_config(ForecastConfig::default(), &args),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_resolve_start() {
        assert_eq!(
            resolve_start(Some("2024-01-15")).unwrap(),
            Date::from_ymd(2024, 1, 15).unwrap()
        );
        assert!(resolve_start(Some("not-a-date")).is_err());
        assert!(resolve_start(None).is_ok());
    }

    #[test]
    fn test_render_table() {
        let (config, result) = reference_result();
        let table = render_table(&config, &result);

        assert!(table.contains("3 periods"));
        assert!(table.contains("2024-01-15"));
        assert!(table.contains("Metformin"));
        assert!(table.contains("(none)"));
        assert!(table.contains("Grand total: 25.00"));
        assert!(table.contains("Matched: 1"));
    }

    #[test]
    fn test_run_with_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"[{"name": "Metformin", "runOutDate": "2024-01-20", "unitPrice": 25.0}]"#,
        )
        .unwrap();
        let args = ForecastArgs {
            input: file.path().to_str().unwrap().to_string(),
            start: Some("2024-01-15".to_string()),
            ..Default::default()
        };
        assert!(run(ForecastConfig::default(), &args, "json").is_ok());
    }
}
