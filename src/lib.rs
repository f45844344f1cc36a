//! Station Importer Library
//!
//! A Rust library for importing weather station measurement files and computing
//! per-measure-type statistics over the parsed readings.
//!
//! This library provides tools for:
//! - Splitting a delimited text document into count-prefixed station blocks
//! - Parsing measurement lines through a configurable, schema-driven field layout
//! - Isolating malformed sensor lines per station instead of aborting the import
//! - Computing count, min, max and mean per measure type across stations
//! - Rendering a plain-text report for each imported file

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod report;
        pub mod station_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FailedMeasurement, FieldKind, MeasureType, Measurement, WeatherStation};
pub use app::services::report::{Reporter, StatsComputer};
pub use app::services::station_parser::{MeasurementError, ParseResult, StationFileParser};
pub use config::ImporterConfig;

/// Result type alias for the station importer
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal error types for import, configuration and statistics operations
///
/// Failures of individual measurement lines are not represented here: they are
/// recovered into [`FailedMeasurement`] entries and never abort a parse.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("File [{path}] is not found")]
    FileNotFound { path: String },

    /// Station header line does not split into name and measurement count
    #[error(
        "The line [{line}] is not a valid line for the station. Expected number of fields was {expected}, actual number is {actual}"
    )]
    MalformedStationHeader {
        line: String,
        expected: usize,
        actual: usize,
    },

    /// Station header carries a measurement count that is not a non-negative integer
    #[error("Number of measures [{value}] is not valid for station [{station}]")]
    InvalidMeasurementCount {
        value: String,
        station: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Caller supplied an invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be deserialized
    #[error("Configuration parse error in '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a malformed station header error
    pub fn malformed_station_header(line: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::MalformedStationHeader {
            line: line.into(),
            expected,
            actual,
        }
    }

    /// Create an invalid measurement count error
    pub fn invalid_measurement_count(
        value: impl Into<String>,
        station: impl Into<String>,
        source: std::num::ParseIntError,
    ) -> Self {
        Self::InvalidMeasurementCount {
            value: value.into(),
            station: station.into(),
            source,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration parse error
    pub fn config_parse(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }
}

// Automatic conversion for I/O errors
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
