//! Stock alerts for the medication list.
//!
//! A chart entry is flagged when its repeats run low or its stock is
//! about to run out, and a server forecast line is flagged when no
//! repeats remain for the next purchase.
//!
//! # Examples
//!
//! ```
//! use medstock_models::alerts::{AlertThresholds, StockStatus};
//! use medstock_core::types::MedicationChartEntry;
//!
//! let entry = MedicationChartEntry {
//!     repeats: 1,
//!     stock_days: 6.9,
//!     ..Default::default()
//! };
//!
//! let status = StockStatus::evaluate(&entry, &AlertThresholds::default());
//! assert_eq!(status.days_left, 6);
//! assert!(status.low_repeats);
//! assert!(status.refill_soon);
//! ```

use medstock_core::types::{ForecastLine, MedicationChartEntry, ServerForecast};
use tracing::debug;

/// Limits at or below which a medication is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlertThresholds {
    /// Repeats remaining at or below which "low repeats" is raised.
    pub low_repeats: i64,
    /// Whole days of stock at or below which "refill soon" is raised.
    pub refill_soon_days: i64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            low_repeats: 1,
            refill_soon_days: 7,
        }
    }
}

/// Evaluated stock position of one chart entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StockStatus {
    /// Chart row identifier.
    pub chart_id: u64,
    /// Display name.
    pub name: String,
    /// Strength label.
    pub strength: String,
    /// Units on hand.
    pub stock: f64,
    /// Whole days of stock remaining.
    pub days_left: i64,
    /// Repeats remaining.
    pub repeats: i64,
    /// Units taken per day.
    pub daily_dosage: f64,
    /// Repeats are at or below the threshold.
    pub low_repeats: bool,
    /// Days left are at or below the threshold.
    pub refill_soon: bool,
}

impl StockStatus {
    /// Evaluates a chart entry against the thresholds.
    pub fn evaluate(entry: &MedicationChartEntry, thresholds: &AlertThresholds) -> Self {
        let days_left = if entry.stock_days.is_finite() {
            entry.stock_days.floor() as i64
        } else {
            0
        };

        Self {
            chart_id: entry.chart_id,
            name: entry.display_name().to_string(),
            strength: entry
                .medication
                .as_ref()
                .map(|m| m.strength.clone())
                .unwrap_or_default(),
            stock: entry.stocktake,
            days_left,
            repeats: entry.repeats,
            daily_dosage: entry.daily_dosage,
            low_repeats: entry.repeats <= thresholds.low_repeats,
            refill_soon: days_left <= thresholds.refill_soon_days,
        }
    }

    /// Returns whether any alert is raised.
    #[inline]
    pub fn needs_attention(&self) -> bool {
        self.low_repeats || self.refill_soon
    }
}

/// Evaluates every chart entry, keeping input order.
pub fn evaluate_all(
    entries: &[MedicationChartEntry],
    thresholds: &AlertThresholds,
) -> Vec<StockStatus> {
    let statuses: Vec<StockStatus> = entries
        .iter()
        .map(|entry| StockStatus::evaluate(entry, thresholds))
        .collect();

    debug!(
        entries = entries.len(),
        flagged = statuses.iter().filter(|s| s.needs_attention()).count(),
        "evaluated stock alerts"
    );
    statuses
}

/// Returns the forecast lines whose purchase needs a new prescription.
pub fn prescriptions_needed(forecast: &ServerForecast) -> Vec<&ForecastLine> {
    forecast
        .medications
        .iter()
        .filter(|line| line.needs_new_prescription())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use medstock_core::types::ChartMedication;

    fn entry(repeats: i64, stock_days: f64) -> MedicationChartEntry {
        MedicationChartEntry {
            chart_id: 3,
            stocktake: 42.0,
            repeats,
            daily_dosage: 2.0,
            stock_days,
            date_started: None,
            medication: Some(ChartMedication {
                name: "Metformin".to_string(),
                strength: "500mg".to_string(),
            }),
        }
    }

    #[test]
    fn test_healthy_entry_has_no_alerts() {
        let status = StockStatus::evaluate(&entry(5, 21.0), &AlertThresholds::default());
        assert_eq!(status.name, "Metformin");
        assert_eq!(status.strength, "500mg");
        assert_eq!(status.days_left, 21);
        assert!(!status.needs_attention());
    }

    #[test]
    fn test_threshold_edges_are_inclusive() {
        let thresholds = AlertThresholds::default();
        let at_edge = StockStatus::evaluate(&entry(1, 7.99), &thresholds);
        assert!(at_edge.low_repeats);
        assert!(at_edge.refill_soon);

        let past_edge = StockStatus::evaluate(&entry(2, 8.0), &thresholds);
        assert!(!past_edge.low_repeats);
        assert!(!past_edge.refill_soon);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = AlertThresholds {
            low_repeats: 3,
            refill_soon_days: 14,
        };
        let status = StockStatus::evaluate(&entry(3, 10.0), &thresholds);
        assert!(status.low_repeats);
        assert!(status.refill_soon);
    }

    #[test]
    fn test_non_finite_stock_days_count_as_zero() {
        let status = StockStatus::evaluate(&entry(4, f64::NAN), &AlertThresholds::default());
        assert_eq!(status.days_left, 0);
        assert!(status.refill_soon);
    }

    #[test]
    fn test_evaluate_all_keeps_order() {
        let entries = vec![entry(0, 30.0), entry(9, 1.0)];
        let statuses = evaluate_all(&entries, &AlertThresholds::default());
        assert!(statuses[0].low_repeats && !statuses[0].refill_soon);
        assert!(!statuses[1].low_repeats && statuses[1].refill_soon);
    }

    #[test]
    fn test_prescriptions_needed() {
        let forecast = ServerForecast {
            next_purchase_in_days: 2,
            total_items: 2,
            medications: vec![
                ForecastLine {
                    name: "A".to_string(),
                    repeats_remaining: 0,
                    ..Default::default()
                },
                ForecastLine {
                    name: "B".to_string(),
                    repeats_remaining: 3,
                    ..Default::default()
                },
            ],
        };
        let needed = prescriptions_needed(&forecast);
        assert_eq!(needed.len(), 1);
        assert_eq!(needed[0].name, "A");
    }
}
