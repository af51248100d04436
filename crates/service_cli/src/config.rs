//! Configuration loading for the CLI.

use crate::{CliError, Result};
use medstock_session::config::{MedstockConfig, DEFAULT_CONFIG_PATH};
use std::path::Path;
use tracing::debug;

/// Loads the configuration file, applies `MEDSTOCK_*` overrides and validates.
///
/// A missing file is only an error when a non-default path was given.
pub fn load(path: &str) -> Result<MedstockConfig> {
    let config = if Path::new(path).exists() {
        debug!(path, "Loading configuration file");
        MedstockConfig::load(Path::new(path))?
    } else if path == DEFAULT_CONFIG_PATH {
        MedstockConfig::default()
    } else {
        return Err(CliError::FileNotFound(path.to_string()));
    };

    let config = config.with_env_override();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_missing_path_is_error() {
        let result = load("/nonexistent/medstock-config.toml");
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }

    #[test]
    fn test_loads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeline_months = 12").unwrap();
        let config = load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.timeline_months, 12);
    }

    #[test]
    fn test_invalid_file_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeline_months = 4").unwrap();
        let result = load(file.path().to_str().unwrap());
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
