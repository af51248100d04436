//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod alerts;
pub mod check;
pub mod forecast;
pub mod timeline;

use crate::{CliError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Output format shared by all reporting commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Box-drawn table on stdout
    Table,
    /// Pretty-printed JSON on stdout
    Json,
}

impl OutputFormat {
    /// Parses the `--format` flag.
    pub fn parse(format: &str) -> Result<Self> {
        match format.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            ))),
        }
    }
}

/// Reads a JSON input file.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| CliError::Json {
        path: path.to_string(),
        source,
    })
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Shortens a cell to `width` characters.
pub(crate) fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("table").unwrap(), OutputFormat::Table);
        assert!(matches!(
            OutputFormat::parse("csv"),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_read_json_missing_file() {
        let result: Result<Vec<u32>> = read_json("/nonexistent/input.json");
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }

    #[test]
    fn test_read_json_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2").unwrap();
        let result: Result<Vec<u32>> = read_json(file.path().to_str().unwrap());
        assert!(matches!(result, Err(CliError::Json { .. })));
    }

    #[test]
    fn test_fit_truncates() {
        assert_eq!(fit("Metformin", 20), "Metformin");
        assert_eq!(fit("Metformin XR 1000mg", 10), "Metformin…");
    }
}
