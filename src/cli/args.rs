//! Command-line argument definitions for the station importer
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the weather station importer
///
/// Imports one or more station measurement files and prints, for each file, the
/// number of stations, the number of sensors in error and per-type statistics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "station-importer",
    version,
    about = "Import weather station measurement files and report per-type statistics",
    long_about = "Reads delimited weather station files made of count-prefixed station blocks. \
                  Measurement lines are interpreted through the configured measure types; lines \
                  that cannot be parsed are kept as sensors in error and never abort the import. \
                  Each file is reported independently."
)]
pub struct Args {
    /// Station files to import
    #[arg(value_name = "FILES", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file declaring the separator, comment prefix, date
    /// pattern and measure types. If not specified, looks for
    /// $STATION_IMPORTER_CONFIG, ./station-importer.toml and then
    /// ~/.config/station-importer/config.toml before using built-in defaults.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// List every failed measurement line with its reason
    #[arg(
        long = "show-failures",
        help = "List failed measurement lines after the statistics"
    )]
    pub show_failures: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress informational logging
    ///
    /// Only show warnings and errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except warnings and errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            match self.verbose {
                0 => crate::constants::DEFAULT_LOG_LEVEL,
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(Error::invalid_argument("At least one station file is required"));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.is_file() {
                return Err(Error::configuration(format!(
                    "Configuration file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }
}
