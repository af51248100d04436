//! Alerts command implementation
//!
//! Flags chart records with few repeats or little stock left and, given a
//! server forecast, the purchases that need a new prescription first.

use std::fmt::Write;

use medstock_core::types::{ForecastLine, MedicationChartEntry, ServerForecast};
use medstock_models::alerts::{evaluate_all, prescriptions_needed, AlertThresholds, StockStatus};
use serde::Serialize;
use tracing::info;

use super::{fit, print_json, read_json, OutputFormat};
use crate::Result;

#[derive(Serialize)]
struct AlertReport<'a> {
    stock: &'a [StockStatus],
    #[serde(skip_serializing_if = "Option::is_none")]
    prescriptions_needed: Option<Vec<&'a ForecastLine>>,
}

/// Run the alerts command
pub fn run(
    thresholds: &AlertThresholds,
    input: &str,
    forecast: Option<&str>,
    format: &str,
) -> Result<()> {
    let format = OutputFormat::parse(format)?;
    info!("Evaluating stock alerts from {}", input);

    let chart: Vec<MedicationChartEntry> = read_json(input)?;
    let statuses = evaluate_all(&chart, thresholds);

    let server_forecast: Option<ServerForecast> = forecast.map(read_json::<ServerForecast>).transpose()?;
    let needed = server_forecast.as_ref().map(prescriptions_needed);

    match format {
        OutputFormat::Json => print_json(&AlertReport {
            stock: &statuses,
            prescriptions_needed: needed,
        })?,
        OutputFormat::Table => print!("{}", render_table(&statuses, needed.as_deref())),
    }
    Ok(())
}

/// Renders stock statuses and, when present, prescriptions needed.
pub fn render_table(statuses: &[StockStatus], needed: Option<&[&ForecastLine]>) -> String {
    let mut out = String::new();
    let flagged = statuses.iter().filter(|s| s.needs_attention()).count();
    let _ = writeln!(out, "\nStock status: {} medications, {} need attention", statuses.len(), flagged);

    if statuses.is_empty() {
        let _ = writeln!(out, "No medications found");
    } else {
        let _ = writeln!(out, "┌──────────────────────────┬────────────┬─────────┬───────────┬─────────┬──────────────┐");
        let _ = writeln!(out, "│ Medication               │ Strength   │ Stock   │ Days left │ Repeats │ Alert        │");
        let _ = writeln!(out, "├──────────────────────────┼────────────┼─────────┼───────────┼─────────┼──────────────┤");
        for status in statuses {
            let alert = match (status.low_repeats, status.refill_soon) {
                (true, true) => "repeats+stock",
                (true, false) => "low repeats",
                (false, true) => "refill soon",
                (false, false) => "",
            };
            let _ = writeln!(
                out,
                "│ {:<24} │ {:<10} │ {:<7} │ {:<9} │ {:<7} │ {:<12} │",
                fit(&status.name, 24),
                fit(&status.strength, 10),
                status.stock,
                status.days_left,
                status.repeats,
                alert
            );
        }
        let _ = writeln!(out, "└──────────────────────────┴────────────┴─────────┴───────────┴─────────┴──────────────┘");
    }

    if let Some(needed) = needed {
        if needed.is_empty() {
            let _ = writeln!(out, "\nNo new prescriptions needed");
        } else {
            let _ = writeln!(out, "\nNew prescriptions needed before purchase:");
            for line in needed {
                let _ = writeln!(
                    out,
                    "  - {} (purchase in {} days, {} units)",
                    line.name, line.days_until_purchase, line.quantity_to_purchase
                );
            }
        }
    }
    out
}
