//! Timeline command implementation
//!
//! Prints a server timeline grouped by month.

use std::fmt::Write;

use medstock_core::types::{EventType, Timeline};
use medstock_models::timeline::TimelineSummary;
use tracing::info;

use super::{fit, print_json, read_json, OutputFormat};
use crate::Result;

/// Run the timeline command
pub fn run(input: &str, format: &str) -> Result<()> {
    let format = OutputFormat::parse(format)?;
    info!("Loading timeline from {}", input);

    let timeline: Timeline = read_json(input)?;
    let summary = TimelineSummary::from_timeline(&timeline);

    match format {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Table => print!("{}", render_table(&summary)),
    }
    Ok(())
}

fn event_label(kind: EventType) -> &'static str {
    match kind {
        EventType::Purchase => "Purchase",
        EventType::Prescription => "Script",
        EventType::Other => "Other",
    }
}

/// Renders the grouped timeline.
pub fn render_table(summary: &TimelineSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\nTimeline: {} purchases, {} prescriptions, estimated {:.2}",
        summary.total_purchases, summary.total_prescriptions, summary.estimated_cost
    );

    if summary.months.is_empty() {
        let _ = writeln!(out, "No events in this period");
        return out;
    }

    for month in &summary.months {
        let _ = writeln!(
            out,
            "\n{}  ({} purchases, {} prescriptions)",
            month.month, month.purchases, month.prescriptions
        );
        let _ = writeln!(out, "┌────────────┬──────────┬──────────────────────────┬───────┬─────────┬────────────┐");
        let _ = writeln!(out, "│ Date       │ Event    │ Medication               │ Qty   │ Repeats │ Est. cost  │");
        let _ = writeln!(out, "├────────────┼──────────┼──────────────────────────┼───────┼─────────┼────────────┤");
        for event in &month.events {
            let cost = event
                .estimated_cost
                .map(|c| format!("{:.2}", c))
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(
                out,
                "│ {:<10} │ {:<8} │ {:<24} │ {:<5} │ {:<7} │ {:>10} │",
                event.date.to_string(),
                event_label(event.event_type),
                fit(&event.medication_name, 24),
                event.quantity,
                event.repeats_after,
                cost
            );
        }
        let _ = writeln!(out, "└────────────┴──────────┴──────────────────────────┴───────┴─────────┴────────────┘");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(json: &str) -> TimelineSummary {
        let timeline: Timeline = serde_json::from_str(json).unwrap();
        TimelineSummary::from_timeline(&timeline)
    }

    #[test]
    fn test_empty_timeline() {
        let table = render_table(&summary(r#"{"events": []}"#));
        assert!(table.contains("No events in this period"));
    }

    #[test]
    fn test_grouped_table() {
        let table = render_table(&summary(
            r#"{
                "total_purchases": 1,
                "total_prescriptions": 1,
                "events": [
                    {"date": "2024-04-02", "month_year": "2024-04", "event_type": "purchase",
                     "medication_name": "Metformin", "quantity": 60, "repeats_after": 2,
                     "estimated_cost": 7.5},
                    {"date": "2024-03-10", "month_year": "2024-03", "event_type": "prescription",
                     "medication_name": "Metformin", "quantity": 0, "repeats_after": 5}
                ]
            }"#,
        ));

        let march = table.find("2024-03  (").unwrap();
        let april = table.find("2024-04  (").unwrap();
        assert!(march < april);
        assert!(table.contains("Script"));
        assert!(table.contains("7.50"));
    }
}
