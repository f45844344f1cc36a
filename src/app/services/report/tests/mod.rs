//! Shared fixtures for statistics and report tests

use std::sync::Arc;

use crate::app::models::{FailedMeasurement, FieldKind, MeasureType, Measurement, WeatherStation};
use crate::app::services::station_parser::MeasurementError;

mod stats_computer_tests;

/// Temperature, pressure and humidity types in report order
pub fn create_test_types() -> Vec<Arc<MeasureType>> {
    vec![
        Arc::new(MeasureType::new(
            "T",
            "temperature",
            vec![FieldKind::Unit, FieldKind::Value],
        )),
        Arc::new(MeasureType::new(
            "P",
            "pressure",
            vec![FieldKind::Unit, FieldKind::Date, FieldKind::Value],
        )),
        Arc::new(MeasureType::new("H", "humidity", vec![FieldKind::Value])),
    ]
}

fn measure(measure_type: &Arc<MeasureType>, unit: Option<&str>, value: f64) -> Measurement {
    Measurement::new(
        measure_type.clone(),
        Some(value),
        unit.map(str::to_string),
        None,
    )
}

/// Two stations: T {20.5, 30.0, 35.0}, P {1014, 1015, 1010}, H {50, 30, 70} and
/// one failed line on the second station
pub fn create_test_stations(types: &[Arc<MeasureType>]) -> Vec<WeatherStation> {
    let (t, p, h) = (&types[0], &types[1], &types[2]);

    let station1 = WeatherStation::new(
        "station1",
        vec![
            measure(t, Some("C"), 20.5),
            measure(p, Some("BAR"), 1014.0),
            measure(p, Some("BAR"), 1015.0),
            measure(h, None, 50.0),
        ],
        vec![],
    );

    let station2 = WeatherStation::new(
        "station2",
        vec![
            measure(t, Some("C"), 30.0),
            measure(t, Some("C"), 35.0),
            measure(p, Some("BAR"), 1010.0),
            measure(h, None, 30.0),
            measure(h, None, 70.0),
        ],
        vec![FailedMeasurement::new(
            "wrong line",
            MeasurementError::unsupported_measure_type("wrong line"),
        )],
    );

    vec![station1, station2]
}
