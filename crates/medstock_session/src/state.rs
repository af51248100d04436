//! Application state for one dashboard session.

use crate::config::MedstockConfig;
use crate::edits::{EditSession, MedicationUpdate};
use crate::error::SessionError;
use medstock_core::types::{Date, Medication, MedicationChartEntry, Scenario};
use medstock_models::alerts::{evaluate_all, StockStatus};
use medstock_models::forecast::{generate_forecast, ForecastResult};
use medstock_models::timeline::TIMELINE_MONTH_OPTIONS;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Signed-in user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Account email, used as the identity
    pub email: String,
    /// Display name
    pub name: String,
    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl UserSession {
    /// Creates a profile without an avatar.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            picture: None,
        }
    }
}

/// State created on load and carried across interactions.
///
/// User-scoped data (cached chart, medications, pending edits) is cleared
/// whenever the signed-in identity changes.
#[derive(Debug, Clone)]
pub struct AppState {
    config: MedstockConfig,
    user: Option<UserSession>,
    chart: Vec<MedicationChartEntry>,
    medications: Vec<Medication>,
    edits: EditSession,
}

impl AppState {
    /// Creates signed-out state.
    pub fn new(config: MedstockConfig) -> Self {
        Self {
            config,
            user: None,
            chart: Vec::new(),
            medications: Vec::new(),
            edits: EditSession::new(),
        }
    }

    /// Configuration this state was created with.
    pub fn config(&self) -> &MedstockConfig {
        &self.config
    }

    /// Signs a user in. Returns `true` when this replaced a different user,
    /// in which case user-scoped data was cleared.
    pub fn sign_in(&mut self, user: UserSession) -> bool {
        let switched = self
            .user
            .as_ref()
            .is_some_and(|current| current.email != user.email);
        if switched {
            self.clear_user_data();
        }
        info!(email = %user.email, switched, "Signed in");
        self.user = Some(user);
        switched
    }

    /// Signs out and clears user-scoped data.
    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(email = %user.email, "Signed out");
        }
        self.clear_user_data();
    }

    fn clear_user_data(&mut self) {
        self.chart.clear();
        self.medications.clear();
        self.edits.cancel();
    }

    /// Whether a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Signed-in user.
    pub fn current_user(&self) -> Option<&UserSession> {
        self.user.as_ref()
    }

    /// Replaces the cached chart records.
    pub fn set_chart(&mut self, chart: Vec<MedicationChartEntry>) {
        debug!(records = chart.len(), "Chart cached");
        self.chart = chart;
    }

    /// Cached chart records.
    pub fn chart(&self) -> &[MedicationChartEntry] {
        &self.chart
    }

    /// Replaces the cached forecast medications.
    pub fn set_medications(&mut self, medications: Vec<Medication>) {
        debug!(medications = medications.len(), "Medications cached");
        self.medications = medications;
    }

    /// Cached forecast medications.
    pub fn medications(&self) -> &[Medication] {
        &self.medications
    }

    /// Chart edit session.
    pub fn edits(&self) -> &EditSession {
        &self.edits
    }

    /// Mutable chart edit session.
    pub fn edits_mut(&mut self) -> &mut EditSession {
        &mut self.edits
    }

    /// Base API URL without a trailing slash.
    pub fn api_url(&self) -> &str {
        self.config.base_url()
    }

    /// Full URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url(), path.trim_start_matches('/'))
    }

    fn require_user(&self) -> Result<(), SessionError> {
        if self.is_signed_in() {
            Ok(())
        } else {
            Err(SessionError::NotSignedIn)
        }
    }

    /// Path of the chart listing.
    pub fn chart_path(&self) -> Result<String, SessionError> {
        self.require_user()?;
        Ok(format!("/user-med-chart/user/{}", self.config.user_id))
    }

    /// Path of the server forecast for a scenario.
    pub fn forecast_path(&self, scenario: Scenario) -> Result<String, SessionError> {
        Ok(format!("{}/forecast?scenario={}", self.chart_path()?, scenario.code()))
    }

    /// Path of the event timeline. Horizons outside the offered options
    /// fall back to the configured horizon.
    pub fn timeline_path(&self, months: u32) -> Result<String, SessionError> {
        let months = if TIMELINE_MONTH_OPTIONS.contains(&months) {
            months
        } else {
            self.config.timeline_months
        };
        Ok(format!("{}/timeline?months={}", self.chart_path()?, months))
    }

    /// Update requests for the pending edits. The edits stay pending
    /// until [`commit_updates`](AppState::commit_updates).
    pub fn pending_updates(&self) -> Result<Vec<MedicationUpdate>, SessionError> {
        self.require_user()?;
        Ok(self.edits.pending_updates())
    }

    /// Records a successful save of `saved`.
    pub fn commit_updates(&mut self, saved: &[MedicationUpdate]) -> Result<(), SessionError> {
        self.require_user()?;
        self.edits.commit(saved);
        Ok(())
    }

    /// Pay-period forecast over the cached medications.
    pub fn forecast(&self, start: Date) -> Result<ForecastResult, SessionError> {
        self.require_user()?;
        Ok(generate_forecast(&self.config.forecast, start, &self.medications)?)
    }

    /// Stock status of every cached chart record.
    pub fn stock_alerts(&self) -> Vec<StockStatus> {
        evaluate_all(&self.chart, &self.config.alerts)
    }
}
