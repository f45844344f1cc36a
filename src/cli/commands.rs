//! Command implementations for the station importer CLI
//!
//! This module contains the import loop over the requested files, logging setup
//! and configuration loading for the CLI interface.

use crate::app::services::report::{Reporter, StatsComputer};
use crate::app::services::station_parser::{ParseResult, StationFileParser};
use crate::cli::args::Args;
use crate::config::ImporterConfig;
use crate::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Import statistics across all requested files
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of files imported and reported
    pub files_processed: usize,
    /// Files that could not be imported, with the reason
    pub failures: Vec<(PathBuf, Error)>,
    /// Number of stations across imported files
    pub stations: usize,
    /// Number of measurements parsed successfully
    pub measurements_parsed: usize,
    /// Number of measurement lines in error
    pub measurements_failed: usize,
    /// Total processing time
    pub processing_time: Duration,
}

impl RunSummary {
    /// True when every requested file was imported
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, result: &ParseResult) {
        self.files_processed += 1;
        self.stations += result.stats.stations;
        self.measurements_parsed += result.stats.measurements_parsed;
        self.measurements_failed += result.stats.measurements_failed;
    }
}

/// Main command runner, reporting to stdout
pub fn run(args: &Args, colored: bool) -> Result<RunSummary> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_writer(args, colored, &mut out)
}

/// Import every file in `args` and write one report per imported file to `out`
///
/// Configuration errors abort the run. A file that cannot be imported is logged,
/// recorded in the summary, and the remaining files are still processed.
pub fn run_with_writer<W: Write>(args: &Args, colored: bool, out: &mut W) -> Result<RunSummary> {
    let start_time = Instant::now();

    info!("Starting station importer");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(args)?;
    let parser = StationFileParser::new(&config)?;
    info!(
        "Importing {} files with {} measure types",
        args.files.len(),
        parser.measure_types().len()
    );

    let mut summary = RunSummary::default();
    for (i, path) in args.files.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }

        match process_file(&parser, path, args.show_failures, colored, out) {
            Ok(result) => summary.record(&result),
            Err(e) => {
                error!("Failed to import {}: {}", path.display(), e);
                summary.failures.push((path.clone(), e));
            }
        }
    }

    summary.processing_time = start_time.elapsed();
    info!(
        "Imported {} of {} files in {:.2?}: {} stations, {} measurements, {} in error",
        summary.files_processed,
        args.files.len(),
        summary.processing_time,
        summary.stations,
        summary.measurements_parsed,
        summary.measurements_failed
    );

    Ok(summary)
}

/// Parse one file and write its report
pub fn process_file<W: Write>(
    parser: &StationFileParser,
    path: &Path,
    show_failures: bool,
    colored: bool,
    out: &mut W,
) -> Result<ParseResult> {
    let result = parser.parse_file(path)?;

    Reporter::new(StatsComputer::new(parser.measure_types(), &result.stations))
        .with_failures(show_failures)
        .with_colors(colored)
        .write_report(&path.display().to_string(), out)?;

    Ok(result)
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("station_importer={}", log_level)));

    let init_result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    init_result.map_err(|e| Error::configuration(format!("Failed to set up logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration from the explicit path or the default lookup locations
pub fn load_configuration(args: &Args) -> Result<ImporterConfig> {
    match &args.config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No config file given, searching default locations"),
    }

    let config = ImporterConfig::load(args.config_file.as_deref())?;
    debug!("Loaded configuration: {:?}", config);

    Ok(config)
}
