//! Per-measure-type statistics over parsed stations
//!
//! The computer is a read-only view over a station slice. Every query walks all
//! measurements of all stations; nothing is cached.

use std::sync::Arc;

use crate::app::models::{MeasureType, WeatherStation};
use crate::{Error, Result};

/// Statistics for one measure type
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSummary {
    /// Number of measurements carrying a value
    pub count: usize,
    /// Smallest value, `None` when there is no data
    pub min: Option<f64>,
    /// Largest value, `None` when there is no data
    pub max: Option<f64>,
    /// Mean value, `0.0` when there is no data
    pub mean: f64,
}

impl TypeSummary {
    pub fn has_data(&self) -> bool {
        self.count > 0
    }
}

/// Statistics computer over a set of weather stations
///
/// Measurements without a value (types with no VALUE field) are left out of
/// count, min, max and mean. For a type with no valued measurement, `min` and
/// `max` return `None` and `mean` returns `0.0`.
#[derive(Debug, Clone, Copy)]
pub struct StatsComputer<'a> {
    measure_types: &'a [Arc<MeasureType>],
    stations: &'a [WeatherStation],
}

impl<'a> StatsComputer<'a> {
    /// Create a computer over the given measure types and stations
    pub fn new(measure_types: &'a [Arc<MeasureType>], stations: &'a [WeatherStation]) -> Self {
        Self {
            measure_types,
            stations,
        }
    }

    /// Measure types, in report order
    pub fn measure_types(&self) -> &'a [Arc<MeasureType>] {
        self.measure_types
    }

    pub fn stations(&self) -> &'a [WeatherStation] {
        self.stations
    }

    /// Number of weather stations
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of failed measurements across all stations
    pub fn failure_count(&self) -> usize {
        self.stations
            .iter()
            .map(|station| station.failed_measurements().len())
            .sum()
    }

    /// Number of valued measurements of the given type
    pub fn count(&self, code: &str) -> Result<usize> {
        Ok(self.values(code)?.len())
    }

    /// Minimum value for measurements of the given type
    pub fn min(&self, code: &str) -> Result<Option<f64>> {
        Ok(self.values(code)?.into_iter().reduce(f64::min))
    }

    /// Maximum value for measurements of the given type
    pub fn max(&self, code: &str) -> Result<Option<f64>> {
        Ok(self.values(code)?.into_iter().reduce(f64::max))
    }

    /// Mean value for measurements of the given type
    pub fn mean(&self, code: &str) -> Result<f64> {
        Ok(mean_of(&self.values(code)?))
    }

    /// Count, min, max and mean for the given type in a single pass over stations
    pub fn summary(&self, code: &str) -> Result<TypeSummary> {
        let values = self.values(code)?;

        Ok(TypeSummary {
            count: values.len(),
            min: values.iter().copied().reduce(f64::min),
            max: values.iter().copied().reduce(f64::max),
            mean: mean_of(&values),
        })
    }

    fn values(&self, code: &str) -> Result<Vec<f64>> {
        if code.trim().is_empty() {
            return Err(Error::invalid_argument("type cannot be blank"));
        }

        Ok(self
            .stations
            .iter()
            .flat_map(move |station| station.values_of(code))
            .collect())
    }
}

fn mean_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
