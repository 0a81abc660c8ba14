//! Core types for the es-reindex tool.
//!
//! This crate provides the foundational pieces shared by every other
//! crate in the workspace:
//!
//! - [`Document`] - The nested key-value tree carried in a document's `_source`
//! - [`DottedPath`] - A parsed `a.b.c` location inside a [`Document`]
//! - [`extract`] / [`insert`] - Read and write a [`Document`] by dotted path
//! - [`Lookup`] - Navigator result that keeps "stored null" apart from "absent"
//! - [`MappingConfig`] - The declarative mapping file loaded once per run
//! - [`ReindexError`] - The error taxonomy used across the workspace
//!
//! # Architecture
//!
//! ```text
//! reindex-core (this crate)
//!    │
//!    ├─── reindex-generator           (random values per declared type)
//!    ├─── es-reindex-csv-source       (side-data table keyed by id)
//!    ├─── es-reindex-jsonl-source     (NDJSON document reader/writer)
//!    └─── es-reindex                  (plan, transformer, CLI)
//! ```
//!
//! # Example
//!
//! ```rust
//! use reindex_core::{extract, insert, Document, DottedPath, Lookup};
//! use serde_json::json;
//!
//! let mut tree = Document::new();
//! insert(&mut tree, &DottedPath::parse("user.name"), json!("Ada")).unwrap();
//!
//! match extract(&tree, &DottedPath::parse("user.name")) {
//!     Lookup::Value(v) => assert_eq!(v, &json!("Ada")),
//!     other => panic!("unexpected lookup: {other:?}"),
//! }
//! assert!(extract(&tree, &DottedPath::parse("user.age")).is_absent());
//! ```

pub mod error;
pub mod mapping;
pub mod path;

/// A document payload: string keys mapped to JSON values, nested via objects.
pub type Document = serde_json::Map<String, serde_json::Value>;

// Re-exports for convenience
pub use error::{ConfigError, DataShapeError, ReindexError, Result};
pub use mapping::{MappingConfig, SIDE_FILE_PATH_KEY};
pub use path::{extract, insert, DottedPath, Lookup};
