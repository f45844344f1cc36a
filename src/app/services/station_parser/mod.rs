//! Station file parser for weather station measurement data
//!
//! This module turns a delimited text document into weather stations. Station
//! headers carry a count of the measurement lines that follow; each measurement
//! line is interpreted through the field layout configured for its type code.
//! Lines that cannot be parsed are isolated per station rather than failing the
//! whole file.
//!
//! ## Architecture
//!
//! - [`parser`] - File reading, line filtering and station block walking
//! - [`measurement_parser`] - Schema-driven parsing of one measurement line
//! - [`field_parsers`] - Separator split, VALUE and DATE field parsers
//! - [`schema`] - Measure type registry indexed by code
//! - [`error`] - Recoverable measurement-line failures
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use station_importer::{ImporterConfig, StationFileParser};
//!
//! # fn example() -> station_importer::Result<()> {
//! let parser = StationFileParser::new(&ImporterConfig::default())?;
//! let result = parser.parse_str("Mont Aigoual,2\nT,C,20.5\nP,BAR,2014-11-01,1014")?;
//!
//! assert_eq!(result.stations.len(), 1);
//! assert_eq!(result.stats.measurements_parsed, 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod error;
pub mod field_parsers;
pub mod measurement_parser;
pub mod parser;
pub mod schema;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use error::MeasurementError;
pub use field_parsers::DatePattern;
pub use parser::StationFileParser;
pub use schema::MeasureSchemas;
pub use stats::{ParseResult, ParseStats};
