//! Application constants for the station importer
//!
//! This module contains default values, file-format constants and configuration
//! lookup names used throughout the importer.

use crate::app::models::FieldKind;

// =============================================================================
// File Format
// =============================================================================

/// Number of fields on a station header line: station name and measurement count
pub const STATION_HEADER_FIELD_COUNT: usize = 2;

/// Default separator between fields of a line
pub const DEFAULT_FIELD_SEPARATOR: &str = ",";

/// Default prefix marking a comment line
pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// Default date pattern for DATE fields (chrono strftime syntax)
pub const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%d";

// =============================================================================
// Default Measure Types
// =============================================================================

/// Built-in measure types used when no configuration file is found.
///
/// Each entry is `(code, display name, field kinds)`.
pub const DEFAULT_MEASURE_TYPES: &[(&str, &str, &[FieldKind])] = &[
    ("T", "temperature", &[FieldKind::Unit, FieldKind::Value]),
    (
        "P",
        "pressure",
        &[FieldKind::Unit, FieldKind::Date, FieldKind::Value],
    ),
    ("H", "humidity", &[FieldKind::Value]),
];

// =============================================================================
// Configuration Lookup
// =============================================================================

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV_VAR: &str = "STATION_IMPORTER_CONFIG";

/// Configuration file name looked up in the working directory
pub const LOCAL_CONFIG_FILE_NAME: &str = "station-importer.toml";

/// Directory under the user config dir holding `config.toml`
pub const USER_CONFIG_DIR_NAME: &str = "station-importer";

/// File name inside [`USER_CONFIG_DIR_NAME`]
pub const USER_CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Logging and Reporting
// =============================================================================

/// Default log level when neither verbose nor quiet is requested
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Placeholder printed for a statistic with no underlying data
pub const NO_DATA_PLACEHOLDER: &str = "n/a";
