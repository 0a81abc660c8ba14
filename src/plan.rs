//! Compiled form of a mapping file.
//!
//! [`MappingPlan::compile`] validates every path and random spec once, before
//! any document is read, so a bad mapping fails the run up front.

use reindex_core::{ConfigError, DottedPath, MappingConfig};
use reindex_generator::{compile_fields, RandomSpec};
use serde_json::Value as JsonValue;
use std::path::PathBuf;

/// Mapping rules in application order, each category sorted by target key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingPlan {
    /// Written to every output `_index`
    pub index: Option<String>,
    /// `(target, source)` pairs from `field_mapping`
    pub renames: Vec<(DottedPath, DottedPath)>,
    /// `(target, literal)` pairs from `default_values`
    pub defaults: Vec<(DottedPath, JsonValue)>,
    /// `(target, spec)` pairs from `random_generate`
    pub random: Vec<(DottedPath, RandomSpec)>,
    /// Side-data CSV joined by `_id`
    pub side_file: Option<PathBuf>,
}

impl MappingPlan {
    pub fn compile(config: &MappingConfig) -> Result<Self, ConfigError> {
        let renames = config
            .field_mapping
            .iter()
            .map(|(target, source)| {
                Ok((DottedPath::parse_target(target)?, DottedPath::parse(source)))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let defaults = config
            .default_values
            .iter()
            .map(|(target, value)| Ok((DottedPath::parse_target(target)?, value.clone())))
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let random = compile_fields(&config.random_generate)?;

        let side_file = match config.side_file_path() {
            Some("") => return Err(ConfigError::EmptyFilePath),
            Some(path) => Some(PathBuf::from(path)),
            None => None,
        };

        Ok(Self {
            index: config.index.clone(),
            renames,
            defaults,
            random,
            side_file,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
            && self.defaults.is_empty()
            && self.random.is_empty()
            && self.side_file.is_none()
    }
}
