//! medstock CLI - pay-period medication forecasting
//!
//! Command line front end for the medstock dashboard logic.
//!
//! # Commands
//!
//! - `medstock forecast --input <file>` - Group purchases into pay periods
//! - `medstock timeline --input <file>` - Print a server timeline by month
//! - `medstock alerts --input <file>` - Flag low repeats and low stock
//! - `medstock check` - Validate configuration and preview the pay schedule
//!
//! Settings come from `medstock.toml` (or `--config`), then `MEDSTOCK_*`
//! environment variables, then command flags.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::forecast::ForecastArgs;
use medstock_session::config::DEFAULT_CONFIG_PATH;

/// Pay-period medication forecast CLI
#[derive(Parser)]
#[command(name = "medstock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Group medication purchases into pay periods
    Forecast {
        /// Medication list (JSON array)
        #[arg(short, long)]
        input: String,

        /// First pay day (YYYY-MM-DD or "today")
        #[arg(short, long)]
        start: Option<String>,

        /// Pay frequency (days, or weekly, fortnightly, four-weekly, monthly)
        #[arg(short = 'p', long)]
        frequency: Option<String>,

        /// Forecast horizon in months
        #[arg(short, long)]
        months: Option<u32>,

        /// Boundary convention (gap-separated, inclusive-shared)
        #[arg(short, long)]
        boundary: Option<String>,

        /// Quantity convention (fixed-one, repeat-fill-quantity)
        #[arg(short, long)]
        quantity: Option<String>,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Print a server timeline grouped by month
    Timeline {
        /// Timeline response (JSON)
        #[arg(short, long)]
        input: String,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Flag medications with low repeats or little stock left
    Alerts {
        /// Medication chart (JSON array)
        #[arg(short, long)]
        input: String,

        /// Server forecast response (JSON) for prescription checks
        #[arg(long)]
        forecast: Option<String>,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Validate configuration and preview the pay schedule
    Check,
}

fn init_tracing(verbose: bool, log_level: &str) {
    let fallback = if verbose { "debug" } else { log_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = config::load(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config))?;

    init_tracing(cli.verbose, &config.log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Forecast {
            input,
            start,
            frequency,
            months,
            boundary,
            quantity,
            format,
        } => {
            let args = ForecastArgs {
                input,
                start,
                frequency,
                months,
                boundary,
                quantity,
            };
            commands::forecast::run(config.forecast, &args, &format)
        }
        Commands::Timeline { input, format } => commands::timeline::run(&input, &format),
        Commands::Alerts {
            input,
            forecast,
            format,
        } => commands::alerts::run(&config.alerts, &input, forecast.as_deref(), &format),
        Commands::Check => commands::check::run(&config),
    }?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_forecast_flags() {
        let cli = Cli::try_parse_from([
            "medstock", "forecast", "-i", "meds.json", "-s", "2024-01-15", "-p", "weekly", "-f", "json",
        ])
        .unwrap();
        assert_eq!(cli.config, DEFAULT_CONFIG_PATH);
        match cli.command {
            Commands::Forecast {
                input,
                frequency,
                months,
                format,
                ..
            } => {
                assert_eq!(input, "meds.json");
                assert_eq!(frequency.as_deref(), Some("weekly"));
                assert_eq!(months, None);
                assert_eq!(format, "json");
            }
            _ => panic!("Expected forecast command"),
        }
    }
}
