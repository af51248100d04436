//! Payloads returned by the remote medication API.
//!
//! These mirror the JSON the dashboard receives from
//! `/user-med-chart/user/{id}`, `/user-med-chart/user/{id}/forecast` and
//! `/user-med-chart/user/{id}/timeline`. Numeric fields the API may omit or
//! send as `null` default to zero.

use super::time::Date;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Catalogue details nested inside a chart entry.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartMedication {
    /// Display name
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Name", default, deserialize_with = "null_as_default")
    )]
    pub name: String,
    /// Strength label, e.g. "500mg"
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Strength", default, deserialize_with = "null_as_default")
    )]
    pub strength: String,
}

/// One row of a user's medication chart.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MedicationChartEntry {
    /// Chart row identifier, used as the target of edits
    #[cfg_attr(feature = "serde", serde(rename = "UserMedChartID"))]
    pub chart_id: u64,
    /// Units currently on hand
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Stocktake", default, deserialize_with = "null_as_default")
    )]
    pub stocktake: f64,
    /// Prescription repeats remaining
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Repeats", default, deserialize_with = "null_as_default")
    )]
    pub repeats: i64,
    /// Units taken per day
    #[cfg_attr(
        feature = "serde",
        serde(rename = "calcDosageDaily", default, deserialize_with = "null_as_default")
    )]
    pub daily_dosage: f64,
    /// Days of stock remaining, as computed by the API
    #[cfg_attr(
        feature = "serde",
        serde(rename = "calcStockDays", default, deserialize_with = "null_as_default")
    )]
    pub stock_days: f64,
    /// Date the medication was started
    #[cfg_attr(feature = "serde", serde(rename = "DateStarted", default))]
    pub date_started: Option<Date>,
    /// Catalogue details
    #[cfg_attr(feature = "serde", serde(default))]
    pub medication: Option<ChartMedication>,
}

impl MedicationChartEntry {
    /// Returns the display name, or "Unknown" when the catalogue entry is missing.
    pub fn display_name(&self) -> &str {
        match &self.medication {
            Some(med) if !med.name.is_empty() => &med.name,
            _ => "Unknown",
        }
    }
}

/// Kind of event on the purchase timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EventType {
    /// A pharmacy purchase against an existing repeat
    Purchase,
    /// A doctor visit for a new prescription
    Prescription,
    /// Any event type this client does not recognise
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

/// A single projected event on the timeline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelineEvent {
    /// Event date
    pub date: Date,
    /// Grouping key, e.g. "2024-03"
    #[cfg_attr(feature = "serde", serde(default))]
    pub month_year: String,
    /// Event kind
    pub event_type: EventType,
    /// Medication the event concerns
    pub medication_name: String,
    /// Units purchased
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub quantity: u32,
    /// Repeats left after this event
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub repeats_after: i64,
    /// Estimated cost, when priced
    #[cfg_attr(feature = "serde", serde(default))]
    pub estimated_cost: Option<f64>,
}

impl TimelineEvent {
    /// Returns the month grouping key, falling back to the event date.
    pub fn month_key(&self) -> String {
        if self.month_year.is_empty() {
            self.date.month_key()
        } else {
            self.month_year.clone()
        }
    }
}

/// The purchase/prescription timeline for a horizon of months.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeline {
    /// Total purchase events
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub total_purchases: u32,
    /// Total prescription events
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub total_prescriptions: u32,
    /// Events in API order
    #[cfg_attr(feature = "serde", serde(default))]
    pub events: Vec<TimelineEvent>,
}

/// One medication line of a server-side scenario forecast.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastLine {
    /// Medication name
    pub name: String,
    /// Days until the next purchase is due
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub days_until_purchase: i64,
    /// Units to buy
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub quantity_to_purchase: u32,
    /// Repeats remaining on the current prescription
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub repeats_remaining: i64,
    /// Estimated cost of the purchase
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub estimated_cost: f64,
}

impl ForecastLine {
    /// A purchase with exactly zero repeats left (a missing value counts as
    /// zero) needs a new prescription first.
    pub fn needs_new_prescription(&self) -> bool {
        self.repeats_remaining == 0
    }
}

/// Forecast scenario requested from the server.
///
/// # Examples
///
/// ```
/// use medstock_core::types::Scenario;
///
/// assert_eq!("b".parse::<Scenario>().unwrap(), Scenario::B);
/// assert_eq!(Scenario::default().code(), "A");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scenario {
    /// Scenario A (the dashboard default)
    #[default]
    A,
    /// Scenario B
    B,
}

impl Scenario {
    /// Returns the query-string code for this scenario.
    pub fn code(&self) -> &'static str {
        match self {
            Scenario::A => "A",
            Scenario::B => "B",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Scenario::A),
            "B" => Ok(Scenario::B),
            _ => Err(format!("Unknown scenario: {}", s)),
        }
    }
}

/// Server-side forecast summary for one scenario.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerForecast {
    /// Days until the earliest purchase
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub next_purchase_in_days: i64,
    /// Number of items to buy
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub total_items: u32,
    /// Per-medication lines
    #[cfg_attr(feature = "serde", serde(default))]
    pub medications: Vec<ForecastLine>,
}
