//! Chart edit mode and pending changes.
//!
//! While edit mode is on, field changes are validated and collected per
//! chart record. Saving builds one update payload per record and clears
//! the changes only once the save is committed; toggling edit mode
//! discards them.

use crate::error::SessionError;
use medstock_core::types::Date;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Editable chart fields, named as the chart API names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EditField {
    /// Units currently on hand
    Stocktake,
    /// Prescription repeats remaining
    Repeats,
    /// Daily dose in units
    DailyDosage,
    /// Date the medication was started
    DateStarted,
}

impl EditField {
    /// All editable fields in form order.
    pub const ALL: [EditField; 4] = [
        EditField::Stocktake,
        EditField::Repeats,
        EditField::DailyDosage,
        EditField::DateStarted,
    ];

    /// Key used in the update body.
    pub fn api_name(&self) -> &'static str {
        match self {
            EditField::Stocktake => "Stocktake",
            EditField::Repeats => "Repeats",
            EditField::DailyDosage => "calcDosageDaily",
            EditField::DateStarted => "DateStarted",
        }
    }

    /// Validates raw form input and converts it to its JSON value.
    pub fn parse_value(&self, raw: &str) -> Result<Value, SessionError> {
        let value = raw.trim();
        let invalid = |reason| SessionError::InvalidEdit {
            field: self.api_name(),
            value: raw.to_string(),
            reason,
        };

        match self {
            EditField::Stocktake | EditField::Repeats => value
                .parse::<u64>()
                .map(Value::from)
                .map_err(|_| invalid("expected a non-negative integer")),
            EditField::DailyDosage => {
                let dose = value
                    .parse::<f64>()
                    .map_err(|_| invalid("expected a number"))?;
                if !dose.is_finite() || dose < 0.0 {
                    return Err(invalid("expected a non-negative number"));
                }
                Number::from_f64(dose)
                    .map(Value::Number)
                    .ok_or_else(|| invalid("expected a number"))
            }
            EditField::DateStarted => Date::parse(value)
                .map(|d| Value::String(d.to_string()))
                .map_err(|_| invalid("expected a date in YYYY-MM-DD form")),
        }
    }
}

impl fmt::Display for EditField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}

impl FromStr for EditField {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Stocktake" | "stocktake" => Ok(EditField::Stocktake),
            "Repeats" | "repeats" => Ok(EditField::Repeats),
            "calcDosageDaily" | "daily_dosage" | "dosage" => Ok(EditField::DailyDosage),
            "DateStarted" | "date_started" => Ok(EditField::DateStarted),
            other => Err(SessionError::UnknownField(other.to_string())),
        }
    }
}

/// One `PUT /user-med-chart/{id}` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicationUpdate {
    /// Chart record being updated
    pub chart_id: u64,
    /// Request path
    pub path: String,
    /// JSON body holding only the changed fields
    pub body: Value,
}

impl MedicationUpdate {
    /// Path for updating one chart record.
    pub fn path_for(chart_id: u64) -> String {
        format!("/user-med-chart/{}", chart_id)
    }
}

/// Edit mode flag plus validated pending changes.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    editing: bool,
    pending: BTreeMap<u64, BTreeMap<EditField, Value>>,
}

impl EditSession {
    /// Creates a session outside edit mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether edit mode is on.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Flips edit mode and discards pending changes. Returns the new mode.
    pub fn toggle(&mut self) -> bool {
        self.editing = !self.editing;
        self.pending.clear();
        debug!(editing = self.editing, "Edit mode toggled");
        self.editing
    }

    /// Leaves edit mode and discards pending changes.
    pub fn cancel(&mut self) {
        self.editing = false;
        self.pending.clear();
    }

    /// Records a change for one field of one chart record.
    ///
    /// A later change to the same field replaces the earlier one.
    pub fn record(&mut self, chart_id: u64, field: EditField, raw: &str) -> Result<(), SessionError> {
        if !self.editing {
            return Err(SessionError::NotEditing);
        }
        let value = field.parse_value(raw)?;
        self.pending.entry(chart_id).or_default().insert(field, value);
        Ok(())
    }

    /// Number of chart records with pending changes.
    pub fn pending_records(&self) -> usize {
        self.pending.len()
    }

    /// Pending value for one field, if any.
    pub fn pending_value(&self, chart_id: u64, field: EditField) -> Option<&Value> {
        self.pending.get(&chart_id).and_then(|fields| fields.get(&field))
    }

    /// Builds one update payload per chart record with pending changes,
    /// ordered by chart id. Pending changes are kept until [`commit`] is
    /// called, so a failed save loses nothing.
    ///
    /// [`commit`]: EditSession::commit
    pub fn pending_updates(&self) -> Vec<MedicationUpdate> {
        self.pending
            .iter()
            .map(|(&chart_id, fields)| {
                let body: Map<String, Value> = fields
                    .iter()
                    .map(|(field, value)| (field.api_name().to_string(), value.clone()))
                    .collect();
                MedicationUpdate {
                    chart_id,
                    path: MedicationUpdate::path_for(chart_id),
                    body: Value::Object(body),
                }
            })
            .collect()
    }

    /// Marks updates as saved.
    ///
    /// Only fields still holding the saved value are cleared; a change
    /// recorded after the payloads were built stays pending. Edit mode
    /// ends once nothing is pending.
    pub fn commit(&mut self, saved: &[MedicationUpdate]) {
        for update in saved {
            let Some(fields) = self.pending.get_mut(&update.chart_id) else {
                continue;
            };
            if let Value::Object(body) = &update.body {
                fields.retain(|field, value| body.get(field.api_name()) != Some(value));
            }
            if fields.is_empty() {
                self.pending.remove(&update.chart_id);
            }
        }

        if self.pending.is_empty() {
            self.editing = false;
        }
        debug!(
            saved = saved.len(),
            still_pending = self.pending.len(),
            "Chart changes committed"
        );
    }
}
