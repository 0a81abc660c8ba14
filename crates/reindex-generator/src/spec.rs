//! Typed random-generation specs compiled from raw mapping records.

use reindex_core::ConfigError;
use serde_json::{Map, Value as JsonValue};

/// What to generate for one `random_generate` entry.
#[derive(Debug, Clone, PartialEq)]
pub enum RandomSpec {
    /// 64 random bytes, base64 encoded
    Binary,

    /// `true` or `false` with equal probability
    Boolean,

    /// Declared but not generated; yields an empty object
    Date,

    /// Integer in `[min, max]` (`long`, `integer`, `short`, `byte`)
    Integer {
        /// Minimum value (inclusive)
        min: i64,
        /// Maximum value (inclusive)
        max: i64,
    },

    /// Real in `[min, max)` rounded to 2 places (`double`, `float`, `half_float`)
    Float {
        /// Minimum value (inclusive)
        min: f64,
        /// Maximum value (exclusive unless equal to `min`)
        max: f64,
    },

    /// One of a fixed pool (`keyword`, `wildcard`, `constant_keyword`)
    Keyword {
        /// Pool of values to select from
        values: Vec<JsonValue>,
    },

    /// A `type` this generator does not know; yields `null`
    Unknown {
        /// The declared type name
        kind: String,
    },
}

impl RandomSpec {
    /// Validate a raw `random_generate` record for the field at `field`.
    pub fn from_config(field: &str, config: &Map<String, JsonValue>) -> Result<Self, ConfigError> {
        let kind = match config.get("type") {
            Some(JsonValue::String(kind)) => kind.as_str(),
            Some(other) => {
                return Err(ConfigError::InvalidParameter {
                    field: field.to_string(),
                    kind: other.to_string(),
                    param: "type".to_string(),
                    reason: "must be a string".to_string(),
                })
            }
            None => {
                return Err(ConfigError::MissingParameter {
                    field: field.to_string(),
                    kind: "<unset>".to_string(),
                    param: "type".to_string(),
                })
            }
        };
        let params = Params {
            field,
            kind,
            config,
        };

        let spec = match kind {
            "binary" => RandomSpec::Binary,
            "boolean" => RandomSpec::Boolean,
            "date" => RandomSpec::Date,
            "long" | "integer" | "short" | "byte" => {
                let min = params.integer("min")?;
                let max = params.integer("max")?;
                if max < min {
                    return Err(params.invalid("max", format!("{max} is less than min {min}")));
                }
                RandomSpec::Integer { min, max }
            }
            "double" | "float" | "half_float" => {
                let min = params.float("min")?;
                let max = params.float("max")?;
                if max < min {
                    return Err(params.invalid("max", format!("{max} is less than min {min}")));
                }
                RandomSpec::Float { min, max }
            }
            "keyword" | "wildcard" | "constant_keyword" => {
                let values = match params.required("values")? {
                    JsonValue::Array(values) if !values.is_empty() => values.clone(),
                    JsonValue::Array(_) => {
                        return Err(params.invalid("values", "must not be empty".to_string()))
                    }
                    _ => return Err(params.invalid("values", "must be an array".to_string())),
                };
                RandomSpec::Keyword { values }
            }
            other => RandomSpec::Unknown {
                kind: other.to_string(),
            },
        };
        Ok(spec)
    }
}

/// Parameter accessors that report errors against one field and type.
struct Params<'a> {
    field: &'a str,
    kind: &'a str,
    config: &'a Map<String, JsonValue>,
}

impl Params<'_> {
    fn required(&self, param: &str) -> Result<&JsonValue, ConfigError> {
        self.config
            .get(param)
            .ok_or_else(|| ConfigError::MissingParameter {
                field: self.field.to_string(),
                kind: self.kind.to_string(),
                param: param.to_string(),
            })
    }

    /// Integer bound; fractional numbers are truncated toward zero.
    fn integer(&self, param: &str) -> Result<i64, ConfigError> {
        let value = self.required(param)?;
        value
            .as_i64()
            .or_else(|| value.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .ok_or_else(|| self.invalid(param, format!("expected a number, got {value}")))
    }

    fn float(&self, param: &str) -> Result<f64, ConfigError> {
        let value = self.required(param)?;
        match value.as_f64() {
            Some(f) if f.is_finite() => Ok(f),
            _ => Err(self.invalid(param, format!("expected a finite number, got {value}"))),
        }
    }

    fn invalid(&self, param: &str, reason: String) -> ConfigError {
        ConfigError::InvalidParameter {
            field: self.field.to_string(),
            kind: self.kind.to_string(),
            param: param.to_string(),
            reason,
        }
    }
}
