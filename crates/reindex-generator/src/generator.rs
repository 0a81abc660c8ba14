//! Per-document random field population.

use crate::generators::generate;
use crate::spec::RandomSpec;
use rand::rngs::StdRng;
use rand::Rng;
use reindex_core::{ConfigError, DottedPath};
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;

/// Validate every entry of a raw `random_generate` table, in key order.
///
/// Unknown and `date` types compile successfully but are logged, since
/// they never produce a generated value.
pub fn compile_fields(
    table: &BTreeMap<String, Map<String, JsonValue>>,
) -> Result<Vec<(DottedPath, RandomSpec)>, ConfigError> {
    let mut fields = Vec::with_capacity(table.len());
    for (field, config) in table {
        let path = DottedPath::parse_target(field)?;
        let spec = RandomSpec::from_config(field, config)?;
        match &spec {
            RandomSpec::Unknown { kind } => {
                tracing::warn!(
                    "random_generate.{field}: unknown type '{kind}', values will be null"
                );
            }
            RandomSpec::Date => {
                tracing::warn!(
                    "random_generate.{field}: date generation is not supported, values will be {{}}"
                );
            }
            _ => {}
        }
        fields.push((path, spec));
    }
    Ok(fields)
}

/// Produces synthetic values for every `random_generate` field of a mapping.
///
/// Fields are kept in key order, and each call to
/// [`FieldGenerator::generate_fields`] draws once per field in that order, so
/// a seeded generator replays the same values across runs.
pub struct FieldGenerator<'a, R = StdRng> {
    /// Target path and compiled spec per field, owned by the mapping plan
    fields: &'a [(DottedPath, RandomSpec)],
    /// Caller-supplied random source
    rng: R,
}

impl<'a, R: Rng> FieldGenerator<'a, R> {
    /// Create a generator over already-compiled fields.
    pub fn new(fields: &'a [(DottedPath, RandomSpec)], rng: R) -> Self {
        Self { fields, rng }
    }

    /// Draw one value per field, in field order.
    pub fn generate_fields(&mut self) -> Vec<(&'a DottedPath, JsonValue)> {
        let rng = &mut self.rng;
        self.fields
            .iter()
            .map(|(path, spec)| (path, generate(spec, rng)))
            .collect()
    }

    pub fn fields(&self) -> &'a [(DottedPath, RandomSpec)] {
        self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}
