//! Data models for weather station imports
//!
//! This module defines the measure type schema, measurement records (successful and
//! failed) and the weather station aggregate produced by the station parser.
//! Records are built complete by the parser and are read-only afterward.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::app::services::station_parser::MeasurementError;
use crate::{Error, Result};

// =============================================================================
// Measure Type Schema
// =============================================================================

/// Kind of a field following the type code on a measurement line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldKind {
    /// Floating-point reading
    Value,
    /// Free-text unit, taken verbatim
    Unit,
    /// Calendar date parsed with the configured pattern
    Date,
}

impl FieldKind {
    /// All field kinds, in declaration order
    pub const ALL: [FieldKind; 3] = [FieldKind::Value, FieldKind::Unit, FieldKind::Date];

    /// Configuration name of the field kind
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Value => "VALUE",
            FieldKind::Unit => "UNIT",
            FieldKind::Date => "DATE",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| {
                Error::configuration(format!(
                    "The field [{}] is not valid. Valid values are: VALUE, UNIT and DATE",
                    s
                ))
            })
    }
}

/// Measure type: a code, its display name and the ordered field layout of its lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureType {
    code: String,
    name: String,
    fields: Vec<FieldKind>,
}

impl MeasureType {
    /// Create a new measure type
    pub fn new(code: impl Into<String>, name: impl Into<String>, fields: Vec<FieldKind>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            fields,
        }
    }

    /// Short code leading each measurement line of this type
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable name used in messages and reports
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered field kinds following the type code
    pub fn fields(&self) -> &[FieldKind] {
        &self.fields
    }

    /// Number of fields a line of this type splits into, type code included
    pub fn expected_field_count(&self) -> usize {
        self.fields.len() + 1
    }

    /// Whether lines of this type carry a numeric value
    pub fn has_value(&self) -> bool {
        self.fields.contains(&FieldKind::Value)
    }
}

// =============================================================================
// Measurement Records
// =============================================================================

/// A successfully parsed measurement line
///
/// Which of `value`, `unit` and `date` are present is fully determined by the
/// field kinds of the measure type.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    measure_type: Arc<MeasureType>,
    value: Option<f64>,
    unit: Option<String>,
    date: Option<NaiveDate>,
}

impl Measurement {
    /// Create a measurement from its already-parsed fields
    pub fn new(
        measure_type: Arc<MeasureType>,
        value: Option<f64>,
        unit: Option<String>,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            measure_type,
            value,
            unit,
            date,
        }
    }

    pub fn measure_type(&self) -> &MeasureType {
        &self.measure_type
    }

    pub fn type_code(&self) -> &str {
        self.measure_type.code()
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Check whether this measurement belongs to the given type code
    pub fn is_of_type(&self, code: &str) -> bool {
        self.measure_type.code() == code
    }
}

/// A measurement line that could not be parsed, kept with its failure reason
#[derive(Debug, Clone, PartialEq)]
pub struct FailedMeasurement {
    raw: String,
    reason: MeasurementError,
}

impl FailedMeasurement {
    pub fn new(raw: impl Into<String>, reason: MeasurementError) -> Self {
        Self {
            raw: raw.into(),
            reason,
        }
    }

    /// The raw line exactly as read from the file
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn reason(&self) -> &MeasurementError {
        &self.reason
    }

    /// Human-readable failure message
    pub fn message(&self) -> String {
        self.reason.to_string()
    }
}

// =============================================================================
// Weather Station
// =============================================================================

/// Weather station with the measurements of its block
///
/// Successful and failed measurements are kept as two separate sequences, each in
/// input order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherStation {
    name: String,
    measurements: Vec<Measurement>,
    failed_measurements: Vec<FailedMeasurement>,
}

impl WeatherStation {
    pub fn new(
        name: impl Into<String>,
        measurements: Vec<Measurement>,
        failed_measurements: Vec<FailedMeasurement>,
    ) -> Self {
        Self {
            name: name.into(),
            measurements,
            failed_measurements,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn failed_measurements(&self) -> &[FailedMeasurement] {
        &self.failed_measurements
    }

    /// Number of measurement lines read for this station, failed ones included
    pub fn line_count(&self) -> usize {
        self.measurements.len() + self.failed_measurements.len()
    }

    /// Values of the measurements of the given type, skipping those without a value
    pub fn values_of<'a>(&'a self, code: &'a str) -> impl Iterator<Item = f64> + 'a {
        self.measurements
            .iter()
            .filter(move |measurement| measurement.is_of_type(code))
            .filter_map(Measurement::value)
    }
}
