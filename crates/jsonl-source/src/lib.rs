//! NDJSON document input and output for es-reindex
//!
//! This crate reads search-engine export lines (`_index`, `_type`, `_id`,
//! `_score`, `_source`) into [`EsDocument`]s and writes transformed
//! documents back out in the same line-oriented shape.

mod document;
mod reader;
mod writer;

pub use document::EsDocument;
pub use reader::{read_documents, DocumentReader};
pub use writer::{encode_documents, write_documents};
