//! Recoverable measurement-line failures
//!
//! These errors never abort an import. The station parser captures each one in a
//! [`FailedMeasurement`](crate::app::models::FailedMeasurement) next to the raw line.

use std::num::ParseFloatError;

/// Reason a single measurement line could not be parsed
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    /// Type code has no configured schema
    #[error("Unsupported measure type: {code}")]
    UnsupportedMeasureType { code: String },

    /// Line does not split into the number of fields its schema requires
    #[error(
        "The line [{line}] is not a valid line for the measure of type {type_name}. Expected number of fields was {expected}, actual number is {actual}"
    )]
    FieldCountMismatch {
        line: String,
        type_name: String,
        expected: usize,
        actual: usize,
    },

    /// VALUE field is not a floating-point number
    #[error("Value of measure [{field}] in the line [{line}] is not a valid double")]
    InvalidNumericValue {
        field: String,
        line: String,
        #[source]
        source: ParseFloatError,
    },

    /// DATE field does not match the configured pattern
    #[error(
        "Date of measure [{field}] in the line [{line}] is not a valid date (Expected format is {pattern})"
    )]
    InvalidDateValue {
        field: String,
        line: String,
        pattern: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl MeasurementError {
    pub fn unsupported_measure_type(code: impl Into<String>) -> Self {
        Self::UnsupportedMeasureType { code: code.into() }
    }

    pub fn field_count_mismatch(
        line: impl Into<String>,
        type_name: impl Into<String>,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::FieldCountMismatch {
            line: line.into(),
            type_name: type_name.into(),
            expected,
            actual,
        }
    }

    pub fn invalid_numeric_value(
        field: impl Into<String>,
        line: impl Into<String>,
        source: ParseFloatError,
    ) -> Self {
        Self::InvalidNumericValue {
            field: field.into(),
            line: line.into(),
            source,
        }
    }

    pub fn invalid_date_value(
        field: impl Into<String>,
        line: impl Into<String>,
        pattern: impl Into<String>,
        source: chrono::ParseError,
    ) -> Self {
        Self::InvalidDateValue {
            field: field.into(),
            line: line.into(),
            pattern: pattern.into(),
            source,
        }
    }

    /// Short machine-friendly category name, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedMeasureType { .. } => "unsupported_type",
            Self::FieldCountMismatch { .. } => "field_count",
            Self::InvalidNumericValue { .. } => "invalid_value",
            Self::InvalidDateValue { .. } => "invalid_date",
        }
    }
}
