//! es-reindex library
//!
//! Reindexes exported search documents into a new shape, driven by a
//! declarative mapping file.
//!
//! # Features
//!
//! - Field renames and relocations by dotted path (`profile.name` ← `user.name`)
//! - Constant default values
//! - Synthetic values per declared type, reproducible from a seed
//! - Enrichment from a CSV side-file joined on the document `_id`
//!
//! # Mapping precedence
//!
//! Within one document the categories apply in a fixed order, and a later
//! category overwrites an earlier one at the same path:
//!
//! ```text
//! field_mapping → default_values → random_generate → file (side-data join)
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! es-reindex --input data/input.json --mapping data/mapping.json \
//!   --output data/output.json --limit 1000 --seed 42
//! ```

pub mod metrics;
pub mod plan;
pub mod run;
pub mod transform;

// Re-export workspace crates for convenience
pub use es_reindex_csv_source as side_data;
pub use es_reindex_jsonl_source as jsonl;
pub use reindex_generator as generator;

pub use plan::MappingPlan;
pub use run::{run, RunOptions, RunSummary};
pub use transform::Transformer;
