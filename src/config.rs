//! Configuration management and validation.
//!
//! Provides the importer configuration: the ordered measure type schemas, the
//! field separator, the comment prefix and the date pattern. Configuration is read
//! from TOML and passed explicitly to the parser.
//!
//! Example configuration:
//! ```toml
//! separator = ","
//! comment_prefix = "#"
//! date_pattern = "%Y-%m-%d"
//!
//! [[measure_types]]
//! code = "T"
//! name = "temperature"
//! fields = ["UNIT", "VALUE"]
//!
//! [[measure_types]]
//! code = "H"
//! name = "humidity"
//! fields = ["VALUE"]
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::models::MeasureType;
use crate::app::services::station_parser::{DatePattern, MeasureSchemas};
use crate::constants::{
    CONFIG_ENV_VAR, DEFAULT_COMMENT_PREFIX, DEFAULT_DATE_PATTERN, DEFAULT_FIELD_SEPARATOR,
    DEFAULT_MEASURE_TYPES, LOCAL_CONFIG_FILE_NAME, USER_CONFIG_DIR_NAME, USER_CONFIG_FILE_NAME,
};
use crate::{Error, Result};

/// Importer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImporterConfig {
    /// Separator between the fields of a line
    pub separator: String,

    /// Lines starting with this prefix are ignored
    pub comment_prefix: String,

    /// Pattern used to parse DATE fields
    pub date_pattern: String,

    /// Measure types, in report order
    pub measure_types: Vec<MeasureType>,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        let measure_types = DEFAULT_MEASURE_TYPES
            .iter()
            .map(|(code, name, fields)| MeasureType::new(*code, *name, fields.to_vec()))
            .collect();

        Self {
            separator: DEFAULT_FIELD_SEPARATOR.to_string(),
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
            measure_types,
        }
    }
}

impl ImporterConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read configuration file {}", path.display()),
                e,
            )
        })?;

        let config: ImporterConfig = toml::from_str(&content)
            .map_err(|e| Error::config_parse(path.display().to_string(), e))?;
        config.validate()?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the first location that applies.
    ///
    /// Searches in order:
    /// 1. The explicit path, if given
    /// 2. Environment variable `STATION_IMPORTER_CONFIG`
    /// 3. `./station-importer.toml`
    /// 4. `<user config dir>/station-importer/config.toml`
    ///
    /// Falls back to the built-in defaults when nothing is found.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE_NAME);
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        debug!("No configuration file found, using built-in measure types");
        Ok(Self::default())
    }

    /// Path of the per-user configuration file, if a config directory exists
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR_NAME).join(USER_CONFIG_FILE_NAME))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(Error::configuration("Fields separator cannot be empty"));
        }
        if self.comment_prefix.trim().is_empty() {
            return Err(Error::configuration("Prefix comment cannot be blank"));
        }

        DatePattern::new(&self.date_pattern)?;
        MeasureSchemas::new(self.measure_types.clone())?;

        Ok(())
    }

    /// Set the field separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the comment prefix
    pub fn with_comment_prefix(mut self, comment_prefix: impl Into<String>) -> Self {
        self.comment_prefix = comment_prefix.into();
        self
    }

    /// Set the date pattern
    pub fn with_date_pattern(mut self, date_pattern: impl Into<String>) -> Self {
        self.date_pattern = date_pattern.into();
        self
    }

    /// Replace the measure types
    pub fn with_measure_types(mut self, measure_types: Vec<MeasureType>) -> Self {
        self.measure_types = measure_types;
        self
    }

    /// Append a measure type
    pub fn with_measure_type(mut self, measure_type: MeasureType) -> Self {
        self.measure_types.push(measure_type);
        self
    }
}
