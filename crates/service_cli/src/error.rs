//! CLI error types.

use medstock_models::forecast::ForecastError;
use medstock_models::schedules::ScheduleError;
use medstock_session::config::ConfigError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Bad flag value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading input failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not the expected JSON
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        /// Offending file
        path: String,
        /// Parser error
        source: serde_json::Error,
    },

    /// Output serialisation failed
    #[error("Serialisation error: {0}")]
    Serialise(#[from] serde_json::Error),

    /// Pay schedule could not be built
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Forecast could not be generated
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// CLI result alias
pub type Result<T> = std::result::Result<T, CliError>;
