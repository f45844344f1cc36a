//! Individual measurement line parsing
//!
//! A measurement line is `code<sep>field1<sep>...<sep>fieldN`, where the number
//! and meaning of the fields come from the field kinds of the type's schema.

use chrono::NaiveDate;

use super::error::MeasurementError;
use super::field_parsers::{DatePattern, parse_date, parse_value, split_fields};
use super::schema::MeasureSchemas;
use crate::app::models::{FieldKind, Measurement};

/// Parse a single measurement line against the registered schemas
pub fn parse_measurement_line(
    line: &str,
    schemas: &MeasureSchemas,
    separator: &str,
    date_pattern: &DatePattern,
) -> Result<Measurement, MeasurementError> {
    let fields = split_fields(line, separator);

    let code = fields[0].trim();
    let measure_type = schemas
        .get(code)
        .ok_or_else(|| MeasurementError::unsupported_measure_type(code))?;

    if fields.len() != measure_type.expected_field_count() {
        return Err(MeasurementError::field_count_mismatch(
            line,
            measure_type.name(),
            measure_type.expected_field_count(),
            fields.len(),
        ));
    }

    let mut value: Option<f64> = None;
    let mut unit: Option<String> = None;
    let mut date: Option<NaiveDate> = None;

    for (kind, field) in measure_type.fields().iter().zip(&fields[1..]) {
        match kind {
            FieldKind::Value => value = Some(parse_value(field, line)?),
            FieldKind::Unit => unit = Some((*field).to_string()),
            FieldKind::Date => date = Some(parse_date(field, line, date_pattern)?),
        }
    }

    Ok(Measurement::new(measure_type.clone(), value, unit, date))
}

/// Write a measurement back as a line in its schema's field order
///
/// Values use the shortest `f64` representation, so the text may differ from the
/// line the measurement was read from while holding the same field values.
pub fn format_measurement_line(
    measurement: &Measurement,
    separator: &str,
    date_pattern: &DatePattern,
) -> String {
    let mut fields = Vec::with_capacity(measurement.measure_type().expected_field_count());
    fields.push(measurement.type_code().to_string());

    for kind in measurement.measure_type().fields() {
        let field = match kind {
            FieldKind::Value => measurement.value().map(|v| v.to_string()),
            FieldKind::Unit => measurement.unit().map(str::to_string),
            FieldKind::Date => measurement.date().map(|d| date_pattern.format(d)),
        };
        fields.push(field.unwrap_or_default());
    }

    fields.join(separator)
}
