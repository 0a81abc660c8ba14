//! Mapping configuration for a reindex run.
//!
//! The mapping file is a JSON object (or the same shape in YAML) with:
//!
//! - `index` - target index name written to every output `_index`
//! - `field_mapping` - new dotted path → old dotted path
//! - `default_values` - dotted path → literal value
//! - `random_generate` - dotted path → random-generation record
//! - `file` - side-data reference; only the `path` key is used
//!
//! Every table is a `BTreeMap`, so rules inside one category are applied in
//! key order regardless of how the file lists them.

use crate::error::{ReindexError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Key inside `file` that names the side-data CSV.
pub const SIDE_FILE_PATH_KEY: &str = "path";

/// Declarative mapping loaded once per run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Target index name; output `_index` is `null` when unset
    #[serde(default)]
    pub index: Option<String>,

    /// New path → old path renames and relocations
    #[serde(default)]
    pub field_mapping: BTreeMap<String, String>,

    /// Literal values injected at a path
    #[serde(default)]
    pub default_values: BTreeMap<String, serde_json::Value>,

    /// Raw random-generation records, validated when the plan is compiled
    #[serde(default)]
    pub random_generate: BTreeMap<String, serde_json::Map<String, serde_json::Value>>,

    /// Side-data reference (`{"path": "..."}`)
    #[serde(default)]
    pub file: BTreeMap<String, String>,
}

impl MappingConfig {
    /// Load a mapping from a file. `.yaml`/`.yml` files are parsed as YAML,
    /// everything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ReindexError::io(path, e))?;
        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let context = format!("mapping file {}", path.display());
        if is_yaml {
            Self::from_yaml(&content).map_err(|e| ReindexError::decode(context, e))
        } else {
            Self::from_json(&content).map_err(|e| ReindexError::decode(context, e))
        }
    }

    /// Parse a mapping from a JSON string.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a mapping from a YAML string.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// The configured side-data path, if the `file` table names one.
    ///
    /// An empty string is returned as-is; the plan compiler rejects it.
    pub fn side_file_path(&self) -> Option<&str> {
        self.file.get(SIDE_FILE_PATH_KEY).map(String::as_str)
    }

    /// Total number of rules across the four categories.
    pub fn rule_count(&self) -> usize {
        self.field_mapping.len()
            + self.default_values.len()
            + self.random_generate.len()
            + usize::from(self.side_file_path().is_some())
    }
}
