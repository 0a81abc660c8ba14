//! Value generation for each [`RandomSpec`] kind.
//!
//! Every generator draws from a caller-supplied RNG, so the same seed and
//! call order always yield the same values.

pub mod binary;
pub mod keyword;
pub mod numeric;

use crate::spec::RandomSpec;
use rand::Rng;
use serde_json::{Map, Value as JsonValue};

/// Generate a value for `spec` using `rng`.
pub fn generate<R: Rng>(spec: &RandomSpec, rng: &mut R) -> JsonValue {
    match spec {
        RandomSpec::Binary => binary::generate_binary(rng),

        RandomSpec::Boolean => JsonValue::Bool(rng.gen_bool(0.5)),

        // Date generation is not provided; the unit value encodes as `{}`.
        RandomSpec::Date => JsonValue::Object(Map::new()),

        RandomSpec::Integer { min, max } => numeric::generate_int_range(rng, *min, *max),

        RandomSpec::Float { min, max } => numeric::generate_float_range(rng, *min, *max),

        RandomSpec::Keyword { values } => keyword::generate_one_of(rng, values),

        RandomSpec::Unknown { .. } => JsonValue::Null,
    }
}
