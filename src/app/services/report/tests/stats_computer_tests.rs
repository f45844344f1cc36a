//! Tests for the statistics computer

use std::sync::Arc;

use super::*;
use crate::Error;
use crate::app::services::report::StatsComputer;

const TOLERANCE: f64 = 0.001;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_station_count_empty() {
    let types = create_test_types();
    let stats = StatsComputer::new(&types, &[]);
    assert_eq!(stats.station_count(), 0);
    assert_eq!(stats.failure_count(), 0);
}

#[test]
fn test_station_and_failure_counts() {
    let types = create_test_types();
    let stations = create_test_stations(&types);
    let stats = StatsComputer::new(&types, &stations);

    assert_eq!(stats.station_count(), 2);
    assert_eq!(stats.failure_count(), 1);
}

#[test]
fn test_min_value() {
    let types = create_test_types();
    let stations = create_test_stations(&types);
    let stats = StatsComputer::new(&types, &stations);

    assert_close(stats.min("T").unwrap().unwrap(), 20.5);
    assert_close(stats.min("P").unwrap().unwrap(), 1010.0);
    assert_close(stats.min("H").unwrap().unwrap(), 30.0);
}

#[test]
fn test_max_value() {
    let types = create_test_types();
    let stations = create_test_stations(&types);
    let stats = StatsComputer::new(&types, &stations);

    assert_close(stats.max("T").unwrap().unwrap(), 35.0);
    assert_close(stats.max("P").unwrap().unwrap(), 1015.0);
    assert_close(stats.max("H").unwrap().unwrap(), 70.0);
}

#[test]
fn test_mean_value() {
    let types = create_test_types();
    let stations = create_test_stations(&types);
    let stats = StatsComputer::new(&types, &stations);

    assert_close(stats.mean("T").unwrap(), 28.5);
    assert_close(stats.mean("P").unwrap(), 1013.0);
    assert_close(stats.mean("H").unwrap(), 50.0);
}

#[test]
fn test_type_without_measurements() {
    let types = create_test_types();
    let stations = create_test_stations(&types);
    let stats = StatsComputer::new(&types, &stations);

    assert_eq!(stats.min("W").unwrap(), None);
    assert_eq!(stats.max("W").unwrap(), None);
    assert_eq!(stats.mean("W").unwrap(), 0.0);
    assert_eq!(stats.count("W").unwrap(), 0);
}

#[test]
fn test_measurements_without_value_are_ignored() {
    let label = Arc::new(MeasureType::new("L", "label", vec![FieldKind::Unit]));
    let types = vec![label.clone()];
    let stations = vec![WeatherStation::new(
        "station",
        vec![Measurement::new(label, None, Some("north".into()), None)],
        vec![],
    )];
    let stats = StatsComputer::new(&types, &stations);

    let summary = stats.summary("L").unwrap();
    assert_eq!(summary.count, 0);
    assert_eq!(summary.min, None);
    assert_eq!(summary.max, None);
    assert_eq!(summary.mean, 0.0);
    assert!(!summary.has_data());
}

#[test]
fn test_blank_type_code_is_rejected() {
    let types = create_test_types();
    let stations = create_test_stations(&types);
    let stats = StatsComputer::new(&types, &stations);

    assert!(matches!(
        stats.min(""),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        stats.max("  "),
        Err(Error::InvalidArgument { .. })
    ));
    let err = stats.mean("\t").unwrap_err();
    assert_eq!(err.to_string(), "Invalid argument: type cannot be blank");
}

#[test]
fn test_summary_matches_individual_queries() {
    let types = create_test_types();
    let stations = create_test_stations(&types);
    let stats = StatsComputer::new(&types, &stations);

    let summary = stats.summary("T").unwrap();
    assert_eq!(summary.count, 3);
    assert_eq!(summary.min, stats.min("T").unwrap());
    assert_eq!(summary.max, stats.max("T").unwrap());
    assert_close(summary.mean, stats.mean("T").unwrap());
}
