//! Test utilities for station parser testing
//!
//! This module provides the test configuration, document fixtures and helper
//! functions used across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::app::models::{FieldKind, MeasureType};
use crate::app::services::station_parser::StationFileParser;
use crate::config::ImporterConfig;


pub const FIELDS_SEPARATOR: &str = ",";
pub const PREFIX_COMMENT: &str = "#";
pub const DATE_PATTERN: &str = "yyyy-MM-dd";

/// Configuration with T=[UNIT,VALUE], P=[UNIT,DATE,VALUE], H=[VALUE]
pub fn create_test_config() -> ImporterConfig {
    ImporterConfig::default()
        .with_separator(FIELDS_SEPARATOR)
        .with_comment_prefix(PREFIX_COMMENT)
        .with_date_pattern(DATE_PATTERN)
        .with_measure_types(vec![
            MeasureType::new("T", "temperature", vec![FieldKind::Unit, FieldKind::Value]),
            MeasureType::new(
                "P",
                "pressure",
                vec![FieldKind::Unit, FieldKind::Date, FieldKind::Value],
            ),
            MeasureType::new("H", "humidity", vec![FieldKind::Value]),
        ])
}

/// Parser built from [`create_test_config`]
pub fn create_test_parser() -> StationFileParser {
    StationFileParser::new(&create_test_config()).unwrap()
}

/// Well-formed document with four stations, comments and blank lines
pub fn create_test_document() -> String {
    r#"# Weather stations export
# name,count then one line per measure

Mont Aigoual,6
T,C,20.5
P,BAR,2014-11-01,1014
H,25
T,C,21
P,BAR,2014-11-01,1016
H,30
Clapiers,3
P,BAR,2014-11-02,1012
T,C,18
H,60

# station without any reading
Lattes,0
Montpellier,2
T,C,22.5
H,55
"#
    .to_string()
}

/// The well-formed document with its first line of the given type replaced
pub fn create_document_with(first_line_of_type: &str, replacement: &str) -> String {
    create_test_document().replacen(first_line_of_type, replacement, 1)
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
