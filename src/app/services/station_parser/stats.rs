//! Parsing statistics and result structures for station file imports
//!
//! This module provides the per-file counters gathered while walking station
//! blocks and the result type handed to the report layer.

use serde::{Deserialize, Serialize};

use crate::app::models::WeatherStation;

/// Parsing result with stations and basic statistics
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Parsed stations, in file order
    pub stations: Vec<WeatherStation>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn into_stations(self) -> Vec<WeatherStation> {
        self.stations
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Lines left after removing blank and comment lines
    pub content_lines: usize,

    /// Station headers parsed
    pub stations: usize,

    /// Measurement lines parsed successfully
    pub measurements_parsed: usize,

    /// Measurement lines isolated as failures
    pub measurements_failed: usize,

    /// Stations whose declared count ran past the end of the file
    pub truncated_blocks: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            content_lines: 0,
            stations: 0,
            measurements_parsed: 0,
            measurements_failed: 0,
            truncated_blocks: 0,
        }
    }

    /// Account for one parsed station
    pub fn record_station(&mut self, station: &WeatherStation) {
        self.stations += 1;
        self.measurements_parsed += station.measurements().len();
        self.measurements_failed += station.failed_measurements().len();
    }

    /// Total measurement lines read, failed ones included
    pub fn measurement_lines(&self) -> usize {
        self.measurements_parsed + self.measurements_failed
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.measurement_lines() == 0 {
            0.0
        } else {
            (self.measurements_parsed as f64 / self.measurement_lines() as f64) * 100.0
        }
    }

    /// Check that no measurement line failed
    pub fn is_clean(&self) -> bool {
        self.measurements_failed == 0 && self.truncated_blocks == 0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
