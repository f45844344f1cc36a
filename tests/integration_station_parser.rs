//! Integration tests for station file import
//!
//! These tests write station files to disk and run them through the public
//! parser, statistics and CLI entry points, end to end.

use std::io::Write;
use std::path::PathBuf;

use station_importer::cli::args::Args;
use station_importer::cli::commands;
use station_importer::{
    Error, FieldKind, ImporterConfig, MeasureType, MeasurementError, StationFileParser,
    StatsComputer,
};
use tempfile::NamedTempFile;

const STATIONS_OK: &str = "# Stations of Herault
# name,count

Mont Aigoual,6
T,C,20.5
P,BAR,2014-11-01,1014
H,25
T,C,21
P,BAR,2014-11-01,1016
H,30
Clapiers,9
P,BAR,2014-11-02,1012
T,C,18
H,60
T,C,19.5
P,BAR,2014-11-02,1013
H,62
T,C,17
P,BAR,2014-11-03,1011
H,65
Lattes,3
T,C,22
H,55
P,BAR,2014-11-01,1015
# closing station
Montpellier,3
T,C,23
P,BAR,2014-11-01,1017
H,50
";

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

fn test_config() -> ImporterConfig {
    ImporterConfig::default()
        .with_date_pattern("yyyy-MM-dd")
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

fn parse_file(content: &str) -> station_importer::Result<station_importer::ParseResult> {
    let file = write_file(content);
    StationFileParser::new(&test_config())?.parse_file(file.path())
}

#[test]
fn test_import_ok_file() {
    let result = parse_file(STATIONS_OK).unwrap();

    assert_eq!(result.station_count(), 4);
    assert_eq!(result.stats.measurements_parsed, 21);
    assert!(result.stats.is_clean());

    let names: Vec<&str> = result.stations.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["Mont Aigoual", "Clapiers", "Lattes", "Montpellier"]);
}

#[test]
fn test_import_empty_file() {
    let result = parse_file("").unwrap();
    assert_eq!(result.station_count(), 0);
}

#[test]
fn test_import_file_with_bad_measure_lines() {
    let content = STATIONS_OK
        .replacen("T,C,20.5", "T,C,", 1)
        .replacen("P,BAR,2014-11-02,1012", "P,BAR,1012", 1)
        .replacen("H,55", "H,55,test", 1)
        .replacen("T,C,23", "Z,C,23", 1);
    let result = parse_file(&content).unwrap();

    assert_eq!(result.station_count(), 4);
    assert_eq!(result.stats.measurements_failed, 4);
    assert_eq!(result.stats.measurements_parsed, 17);

    let reasons: Vec<&MeasurementError> = result
        .stations
        .iter()
        .flat_map(|s| s.failed_measurements())
        .map(|f| f.reason())
        .collect();
    assert_eq!(
        reasons[0],
        &MeasurementError::field_count_mismatch("T,C,", "temperature", 3, 2)
    );
    assert!(matches!(
        reasons[1],
        MeasurementError::FieldCountMismatch {
            expected: 4,
            actual: 3,
            ..
        }
    ));
    assert!(matches!(
        reasons[2],
        MeasurementError::FieldCountMismatch {
            expected: 2,
            actual: 3,
            ..
        }
    ));
    assert_eq!(reasons[3], &MeasurementError::unsupported_measure_type("Z"));
}

#[test]
fn test_import_file_with_wrong_station_count() {
    let content = STATIONS_OK.replacen("Mont Aigoual,6", "Mont Aigoual,4", 1);
    let err = parse_file(&content).unwrap_err();

    assert!(matches!(err, Error::MalformedStationHeader { .. }));
    assert_eq!(
        err.to_string(),
        "The line [P,BAR,2014-11-01,1016] is not a valid line for the station. Expected number of fields was 2, actual number is 4"
    );
}

#[test]
fn test_import_file_with_trailing_separators() {
    let content = STATIONS_OK
        .replacen("Lattes,3", "Lattes,3,", 1)
        .replacen("H,55", "H,55,", 1);
    let result = parse_file(&content).unwrap();

    assert_eq!(result.station_count(), 4);
    assert_eq!(result.stats.measurements_parsed, 21);
    assert!(result.stats.is_clean());
    assert_eq!(result.stations[2].name(), "Lattes");
}

#[test]
fn test_import_missing_file() {
    let parser = StationFileParser::new(&test_config()).unwrap();
    let err = parser
        .parse_file(std::path::Path::new("/nonexistent/stations.txt"))
        .unwrap_err();

    assert!(matches!(err, Error::FileNotFound { .. }));
}

#[test]
fn test_statistics_over_imported_file() {
    let parser = StationFileParser::new(&test_config()).unwrap();
    let file = write_file(STATIONS_OK);
    let result = parser.parse_file(file.path()).unwrap();
    let stats = StatsComputer::new(parser.measure_types(), &result.stations);

    assert_eq!(stats.station_count(), 4);
    assert_eq!(stats.failure_count(), 0);
    assert_eq!(stats.count("T").unwrap(), 7);
    assert_eq!(stats.min("T").unwrap(), Some(17.0));
    assert_eq!(stats.max("P").unwrap(), Some(1017.0));
    assert!((stats.mean("H").unwrap() - 347.0 / 7.0).abs() < 1e-9);
}

#[test]
fn test_cli_run_with_config_file() {
    let config = write_file(
        r#"
separator = ";"
date_pattern = "%d/%m/%Y"

[[measure_types]]
code = "W"
name = "wind"
fields = ["UNIT", "DATE", "VALUE"]
"#,
    );
    let stations = write_file("Sete;2\nW;km/h;01/11/2014;35\nW;km/h;02/11/2014;\n");

    let args = Args {
        files: vec![stations.path().to_path_buf(), PathBuf::from("missing.txt")],
        config_file: Some(config.path().to_path_buf()),
        show_failures: true,
        verbose: 0,
        quiet: true,
    };

    let mut out = Vec::new();
    let summary = commands::run_with_writer(&args, false, &mut out).unwrap();
    let report = String::from_utf8(out).unwrap();

    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.failures.len(), 1);
    assert!(!summary.is_success());
    assert!(report.contains("  Number of weather stations: 1"));
    assert!(report.contains("  Number of sensors in error: 1"));
    assert!(report.contains("  wind (W): count=1, min=35.00, max=35.00, mean=35.00"));
    assert!(report.contains(
        "  [Sete] W;km/h;02/11/2014; => The line [W;km/h;02/11/2014;] is not a valid line for the measure of type wind. Expected number of fields was 4, actual number is 3"
    ));
}
