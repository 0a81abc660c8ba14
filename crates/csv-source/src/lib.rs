//! CSV side-data loading for es-reindex
//!
//! This crate reads the tabular side-file named by a mapping's `file.path`
//! and indexes its rows by the `id` column, so the transformer can join
//! extra string fields into each document by `_id`.

mod side_data;

pub use side_data::{load_by_id, load_with_config, read_side_data, Config, SideData, SideDataRow};
