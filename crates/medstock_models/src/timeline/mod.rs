//! Month grouping of the purchase/prescription timeline.
//!
//! The server returns a flat, dated event list; the dashboard shows it
//! grouped by month with purchase and prescription counts per month.

use medstock_core::types::{EventType, Timeline, TimelineEvent};
use std::collections::BTreeMap;

/// Timeline horizons offered by the dashboard, in months.
pub const TIMELINE_MONTH_OPTIONS: [u32; 3] = [3, 6, 12];

/// Default timeline horizon in months.
pub const DEFAULT_TIMELINE_MONTHS: u32 = 6;

/// Events of one month.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonthGroup {
    /// Month key, e.g. "2024-03".
    pub month: String,
    /// Events in API order.
    pub events: Vec<TimelineEvent>,
    /// Number of purchase events.
    pub purchases: usize,
    /// Number of prescription events.
    pub prescriptions: usize,
    /// Sum of the estimated costs that are present.
    pub estimated_cost: f64,
}

impl MonthGroup {
    fn new(month: String) -> Self {
        Self {
            month,
            events: Vec::new(),
            purchases: 0,
            prescriptions: 0,
            estimated_cost: 0.0,
        }
    }

    fn push(&mut self, event: TimelineEvent) {
        match event.event_type {
            EventType::Purchase => self.purchases += 1,
            EventType::Prescription => self.prescriptions += 1,
            EventType::Other => {}
        }
        self.estimated_cost += event.estimated_cost.unwrap_or(0.0);
        self.events.push(event);
    }
}

/// Groups events by month key, months ascending.
///
/// # Examples
///
/// ```
/// use medstock_models::timeline::group_by_month;
/// use medstock_core::types::{EventType, TimelineEvent};
///
/// let event = |date: &str, kind| TimelineEvent {
///     date: date.parse().unwrap(),
///     month_year: String::new(),
///     event_type: kind,
///     medication_name: "Metformin".to_string(),
///     quantity: 60,
///     repeats_after: 2,
///     estimated_cost: Some(7.5),
/// };
///
/// let groups = group_by_month(&[
///     event("2024-04-02", EventType::Purchase),
///     event("2024-03-10", EventType::Prescription),
///     event("2024-03-11", EventType::Purchase),
/// ]);
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].month, "2024-03");
/// assert_eq!((groups[0].purchases, groups[0].prescriptions), (1, 1));
/// ```
pub fn group_by_month(events: &[TimelineEvent]) -> Vec<MonthGroup> {
    let mut by_month: BTreeMap<String, MonthGroup> = BTreeMap::new();

    for event in events {
        let key = event.month_key();
        by_month
            .entry(key.clone())
            .or_insert_with(|| MonthGroup::new(key))
            .push(event.clone());
    }

    by_month.into_values().collect()
}

/// Totals shown above the grouped timeline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimelineSummary {
    /// Purchase events reported by the server.
    pub total_purchases: u32,
    /// Prescription events reported by the server.
    pub total_prescriptions: u32,
    /// Sum of estimated costs across all events.
    pub estimated_cost: f64,
    /// Events grouped by month.
    pub months: Vec<MonthGroup>,
}

impl TimelineSummary {
    /// Groups a server timeline for display.
    pub fn from_timeline(timeline: &Timeline) -> Self {
        let months = group_by_month(&timeline.events);
        let estimated_cost = months.iter().map(|m| m.estimated_cost).sum();
        Self {
            total_purchases: timeline.total_purchases,
            total_prescriptions: timeline.total_prescriptions,
            estimated_cost,
            months,
        }
    }
}
