//! Core station file parser implementation
//!
//! This module provides the parser orchestration: reading the file, dropping blank
//! and comment lines, and walking the count-prefixed station blocks.

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::field_parsers::{DatePattern, split_fields};
use super::measurement_parser::parse_measurement_line;
use super::schema::MeasureSchemas;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{FailedMeasurement, MeasureType, Measurement, WeatherStation};
use crate::config::ImporterConfig;
use crate::constants::STATION_HEADER_FIELD_COUNT;
use crate::{Error, Result};

/// Parser for weather station measurement files
///
/// A file is a sequence of station blocks. Each block is a header line
/// `name<sep>count` followed by `count` measurement lines. Malformed headers abort
/// the parse; malformed measurement lines are kept as failed measurements of their
/// station.
#[derive(Debug, Clone)]
pub struct StationFileParser {
    schemas: MeasureSchemas,
    separator: String,
    comment_prefix: String,
    date_pattern: DatePattern,
}

impl StationFileParser {
    /// Create a parser from a validated configuration
    pub fn new(config: &ImporterConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            schemas: MeasureSchemas::new(config.measure_types.clone())?,
            separator: config.separator.clone(),
            comment_prefix: config.comment_prefix.clone(),
            date_pattern: DatePattern::new(&config.date_pattern)?,
        })
    }

    pub fn schemas(&self) -> &MeasureSchemas {
        &self.schemas
    }

    /// Measure types in configuration order
    pub fn measure_types(&self) -> &[Arc<MeasureType>] {
        self.schemas.types()
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn date_pattern(&self) -> &DatePattern {
        &self.date_pattern
    }

    /// Parse a station file and return its stations with statistics
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing station file: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::file_not_found(file_path.display().to_string()));
        }

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(
                format!(
                    "An error occurred while reading the file [{}]",
                    file_path.display()
                ),
                e,
            )
        })?;

        let result = self.parse_str(&content)?;

        info!(
            "Parsed {} stations from {}: {} measurements, {} failed",
            result.stats.stations,
            file_path.display(),
            result.stats.measurements_parsed,
            result.stats.measurements_failed
        );

        Ok(result)
    }

    /// Parse an in-memory document
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        let lines = self.content_lines(content);
        self.parse_lines(&lines)
    }

    /// Drop blank lines and lines starting with the comment prefix
    pub fn content_lines<'a>(&self, content: &'a str) -> Vec<&'a str> {
        content
            .lines()
            .filter(|line| !line.trim().is_empty() && !line.starts_with(&self.comment_prefix))
            .collect()
    }

    /// Walk station blocks over already-filtered content lines
    ///
    /// The cursor moves past each header by the declared measurement count, even
    /// when fewer lines remain.
    pub fn parse_lines(&self, lines: &[&str]) -> Result<ParseResult> {
        let mut stations = Vec::new();
        let mut stats = ParseStats::new();
        stats.content_lines = lines.len();

        let mut cursor = 0;
        while cursor < lines.len() {
            let (station, declared) = self.parse_station_block(lines, cursor)?;

            if station.line_count() < declared {
                stats.truncated_blocks += 1;
            }
            stats.record_station(&station);
            stations.push(station);

            cursor = cursor.saturating_add(1).saturating_add(declared);
        }

        Ok(ParseResult { stations, stats })
    }

    /// Parse the header at `index` and the measurement lines of its block,
    /// returning the station and its declared measurement count
    fn parse_station_block(&self, lines: &[&str], index: usize) -> Result<(WeatherStation, usize)> {
        let header = lines[index];
        let fields = split_fields(header, &self.separator);

        if fields.len() != STATION_HEADER_FIELD_COUNT {
            return Err(Error::malformed_station_header(
                header,
                STATION_HEADER_FIELD_COUNT,
                fields.len(),
            ));
        }

        let name = fields[0];
        let declared = fields[1]
            .trim()
            .parse::<usize>()
            .map_err(|e| Error::invalid_measurement_count(fields[1], name, e))?;

        let start = index + 1;
        let end = start.saturating_add(declared).min(lines.len());
        if end - start < declared {
            warn!(
                "Station [{}] declares {} measures but only {} lines remain",
                name,
                declared,
                end - start
            );
        }

        let station = self.build_station(name, &lines[start..end]);
        debug!(
            "Station [{}]: {} measures, {} failed",
            station.name(),
            station.measurements().len(),
            station.failed_measurements().len()
        );

        Ok((station, declared))
    }

    fn build_station(&self, name: &str, block: &[&str]) -> WeatherStation {
        let mut measurements: Vec<Measurement> = Vec::new();
        let mut failed_measurements: Vec<FailedMeasurement> = Vec::new();

        for line in block {
            match parse_measurement_line(line, &self.schemas, &self.separator, &self.date_pattern)
            {
                Ok(measurement) => measurements.push(measurement),
                Err(e) => {
                    debug!("Failed measure in station [{}] ({}): {}", name, e.kind(), e);
                    failed_measurements.push(FailedMeasurement::new(*line, e));
                }
            }
        }

        WeatherStation::new(name, measurements, failed_measurements)
    }
}
