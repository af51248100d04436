//! # medstock session layer
//!
//! Everything the dashboard keeps between interactions, as explicit values
//! instead of page-lifetime globals:
//!
//! - [`AppState`](state::AppState): signed-in user, cached medications and
//!   the chart edit session, created on load and cleared on sign-out
//! - [`Prompt`](prompt::Prompt): alert/confirm dialogs as an async
//!   request/response pair
//! - [`EditSession`](edits::EditSession): edit mode and validated pending
//!   changes, drained into `PUT /user-med-chart/{id}` payloads
//! - [`MedstockConfig`](config::MedstockConfig): TOML configuration with
//!   `MEDSTOCK_*` environment overrides

pub mod config;
pub mod edits;
pub mod error;
pub mod prompt;
pub mod state;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, MedstockConfig};
    pub use crate::edits::{EditField, EditSession, MedicationUpdate};
    pub use crate::error::SessionError;
    pub use crate::prompt::{Prompt, PromptHandle, PromptKind, PromptResponder, PromptState};
    pub use crate::state::{AppState, UserSession};
}
