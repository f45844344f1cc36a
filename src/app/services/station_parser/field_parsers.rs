//! Field parsing utilities for station files
//!
//! This module provides the separator split shared by header and measurement
//! lines, plus typed parsers for VALUE and DATE fields.

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};

use super::error::MeasurementError;
use crate::{Error, Result};

/// Date pattern for DATE fields
///
/// Accepts chrono `strftime` syntax (`%Y-%m-%d`). Patterns without any `%` are read
/// in the letter token style (`yyyy-MM-dd`, `d/M/yy`, `MMM d, yyyy`) and
/// translated; letters other than `y`, `M` and `d` are rejected. The pattern as
/// written is kept for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    pattern: String,
    chrono_format: String,
}

impl DatePattern {
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.trim().is_empty() {
            return Err(Error::configuration("Date pattern cannot be blank"));
        }

        let chrono_format = if pattern.contains('%') {
            pattern.to_string()
        } else {
            translate_token_pattern(pattern)?
        };

        let (is_malformed, has_date_field) = {
            let items: Vec<Item<'_>> = StrftimeItems::new(&chrono_format).collect();
            (
                items.iter().any(|item| matches!(item, Item::Error)),
                items
                    .iter()
                    .any(|item| matches!(item, Item::Numeric(..) | Item::Fixed(..))),
            )
        };
        if is_malformed {
            return Err(Error::configuration(format!(
                "Date pattern [{}] is not a valid date format",
                pattern
            )));
        }
        if !has_date_field {
            return Err(Error::configuration(format!(
                "Date pattern [{}] does not contain any date field",
                pattern
            )));
        }

        Ok(Self {
            pattern: pattern.to_string(),
            chrono_format,
        })
    }

    /// The pattern as configured
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The equivalent chrono format string
    pub fn chrono_format(&self) -> &str {
        &self.chrono_format
    }

    pub fn parse(&self, text: &str) -> std::result::Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(text, &self.chrono_format)
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.chrono_format).to_string()
    }
}

fn translate_token_pattern(pattern: &str) -> Result<String> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut format = String::with_capacity(pattern.len() + 4);

    let mut i = 0;
    while i < chars.len() {
        let token = chars[i];
        let run = chars[i..].iter().take_while(|&&c| c == token).count();

        if token.is_ascii_alphabetic() {
            let spec = match (token, run) {
                ('y', 2) => "%y",
                ('y', _) => "%Y",
                ('M', 1 | 2) => "%m",
                ('M', 3) => "%b",
                ('M', _) => "%B",
                ('d', 1 | 2) => "%d",
                _ => {
                    return Err(Error::configuration(format!(
                        "Date pattern [{}] contains unsupported token [{}]",
                        pattern,
                        token.to_string().repeat(run)
                    )));
                }
            };
            format.push_str(spec);
        } else {
            format.extend(&chars[i..i + run]);
        }

        i += run;
    }

    Ok(format)
}

/// Split a line on the separator
///
/// Inner empty fields are kept; trailing empty fields are dropped, so `T,C,`
/// splits into two fields. At least one field is always returned.
pub fn split_fields<'a>(line: &'a str, separator: &str) -> Vec<&'a str> {
    let mut fields: Vec<&str> = line.split(separator).collect();
    while fields.len() > 1 && fields.last() == Some(&"") {
        fields.pop();
    }
    fields
}

/// Parse a VALUE field, trimmed, as a double
pub fn parse_value(field: &str, line: &str) -> std::result::Result<f64, MeasurementError> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|e| MeasurementError::invalid_numeric_value(field, line, e))
}

/// Parse a DATE field, trimmed, with the configured pattern
pub fn parse_date(
    field: &str,
    line: &str,
    pattern: &DatePattern,
) -> std::result::Result<NaiveDate, MeasurementError> {
    pattern
        .parse(field.trim())
        .map_err(|e| MeasurementError::invalid_date_value(field, line, pattern.as_str(), e))
}
