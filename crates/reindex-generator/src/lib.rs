//! Random field generator for es-reindex.
//!
//! This crate turns the `random_generate` table of a mapping file into typed
//! [`RandomSpec`]s and produces synthetic values from them. The random source
//! is always supplied by the caller, so a run is reproducible given its seed.
//!
//! # Architecture
//!
//! ```text
//! random_generate (mapping file)
//!        │  RandomSpec::from_config
//!        ▼
//! ┌──────────────────┐
//! │  FieldGenerator  │
//! │                  │
//! │  - fields        │
//! │  - rng (StdRng)  │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    (DottedPath, serde_json::Value) per field, per document
//! ```
//!
//! # Example
//!
//! ```rust
//! use reindex_generator::{generate, seeded_rng, RandomSpec};
//! use serde_json::json;
//!
//! let config = json!({"type": "long", "min": 1, "max": 1});
//! let spec = RandomSpec::from_config("count", config.as_object().unwrap()).unwrap();
//!
//! let mut rng = seeded_rng(42);
//! assert_eq!(generate(&spec, &mut rng), json!(1));
//! ```
//!
//! # Types
//!
//! - `binary` - 64 random bytes, base64 encoded
//! - `boolean` - fair coin flip
//! - `date` - not generated; yields `{}`
//! - `long`, `integer`, `short`, `byte` - integer in `[min, max]`
//! - `double`, `float`, `half_float` - real in `[min, max)`, rounded to 2 places
//! - `keyword`, `wildcard`, `constant_keyword` - one entry of `values`
//! - anything else - `null`

pub mod generator;
pub mod generators;
pub mod spec;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{SystemTime, UNIX_EPOCH};

// Re-exports for convenience
pub use generator::{compile_fields, FieldGenerator};
pub use generators::generate;
pub use spec::RandomSpec;

/// Create the run's random source from an explicit seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A seed derived from the wall clock, for runs that do not pin one.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
