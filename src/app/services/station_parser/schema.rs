//! Measure type registry with O(1) lookup by type code
//!
//! Keeps the configured order of measure types (which drives report order)
//! alongside a code index used by the measurement-line parser.

use std::collections::HashMap;
use std::sync::Arc;

use crate::app::models::MeasureType;
use crate::{Error, Result};

/// Ordered, code-indexed set of measure type schemas
#[derive(Debug, Clone)]
pub struct MeasureSchemas {
    types: Vec<Arc<MeasureType>>,
    by_code: HashMap<String, usize>,
}

impl MeasureSchemas {
    /// Build the registry, rejecting blank codes or names, empty field lists and
    /// duplicate codes
    pub fn new(measure_types: Vec<MeasureType>) -> Result<Self> {
        let mut types = Vec::with_capacity(measure_types.len());
        let mut by_code = HashMap::with_capacity(measure_types.len());

        for measure_type in measure_types {
            if measure_type.code().trim().is_empty() {
                return Err(Error::configuration("Measure type code cannot be blank"));
            }
            if measure_type.code() != measure_type.code().trim() {
                return Err(Error::configuration(format!(
                    "Measure type code [{}] cannot have surrounding whitespace",
                    measure_type.code()
                )));
            }
            if measure_type.name().trim().is_empty() {
                return Err(Error::configuration(format!(
                    "Measure type [{}] must have a name",
                    measure_type.code()
                )));
            }
            if measure_type.fields().is_empty() {
                return Err(Error::configuration(format!(
                    "Measure type [{}] must declare at least one field",
                    measure_type.code()
                )));
            }
            if by_code.contains_key(measure_type.code()) {
                return Err(Error::configuration(format!(
                    "Measure type code [{}] is declared more than once",
                    measure_type.code()
                )));
            }

            by_code.insert(measure_type.code().to_string(), types.len());
            types.push(Arc::new(measure_type));
        }

        Ok(Self { types, by_code })
    }

    /// Look up a schema by its type code
    pub fn get(&self, code: &str) -> Option<&Arc<MeasureType>> {
        self.by_code.get(code).map(|&index| &self.types[index])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Measure types in configuration order
    pub fn types(&self) -> &[Arc<MeasureType>] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
