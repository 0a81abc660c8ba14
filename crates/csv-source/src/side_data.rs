//! Side-data table implementation
//!
//! The first row of the file is the header and must contain the id column.
//! Every later row becomes a [`SideDataRow`] of string fields, keyed by its id.

use reindex_core::{ConfigError, ReindexError, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Configuration for side-data parsing
#[derive(Clone, Debug)]
pub struct Config {
    /// CSV delimiter character (default: ',')
    pub delimiter: u8,

    /// Header naming the join key column (default: "id")
    pub id_column: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: b',',
            id_column: "id".to_string(),
        }
    }
}

/// String fields of one side-data row, excluding the id column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideDataRow {
    fields: BTreeMap<String, String>,
}

impl SideDataRow {
    /// Look up a field by its header name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Iterate `(header, value)` pairs in header-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Side-data rows indexed by id.
#[derive(Debug, Clone, Default)]
pub struct SideData {
    rows: HashMap<String, SideDataRow>,
}

impl SideData {
    /// The row joined to a document with this `_id`, if any.
    pub fn get(&self, id: &str) -> Option<&SideDataRow> {
        self.rows.get(id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Load a comma-delimited side-data file keyed by its `id` column.
pub fn load_by_id(path: impl AsRef<Path>) -> Result<SideData> {
    load_with_config(path, &Config::default())
}

/// Load a side-data file with explicit parsing options.
pub fn load_with_config(path: impl AsRef<Path>, config: &Config) -> Result<SideData> {
    let path = path.as_ref();
    info!("Loading side data from: {}", path.display());

    let file = File::open(path).map_err(|e| ReindexError::io(path, e))?;
    let side_data = read_side_data(file, path, config)?;

    info!(
        "Loaded {} side-data rows from {}",
        side_data.len(),
        path.display()
    );
    Ok(side_data)
}

/// Parse side data from any reader; `source` names it in errors.
///
/// Field values are kept as strings. When an id repeats, the later row
/// replaces the earlier one.
pub fn read_side_data<R: Read>(reader: R, source: &Path, config: &Config) -> Result<SideData> {
    // Column counts are checked per row below, for a clearer error.
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(config.delimiter)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| csv_error(source, e))?
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<String>>();

    let id_index = headers
        .iter()
        .position(|h| *h == config.id_column)
        .ok_or_else(|| ConfigError::MissingIdColumn {
            path: source.to_path_buf(),
        })?;

    debug!("Side-data headers: {headers:?}");

    let mut rows: HashMap<String, SideDataRow> = HashMap::new();
    for (row_index, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| csv_error(source, e))?;
        let row_number = row_index + 1;

        if record.len() != headers.len() {
            return Err(ReindexError::decode(
                format!("side-data file {}", source.display()),
                format!(
                    "column count mismatch in row {}: expected {} columns ({}), but found {} columns",
                    row_number,
                    headers.len(),
                    headers.join(", "),
                    record.len()
                ),
            ));
        }

        let id = record[id_index].to_string();
        let fields = headers
            .iter()
            .zip(record.iter())
            .enumerate()
            .filter(|(i, _)| *i != id_index)
            .map(|(_, (header, value))| (header.clone(), value.to_string()))
            .collect();

        if rows.insert(id.clone(), SideDataRow { fields }).is_some() {
            debug!("Side-data id '{id}' repeated in row {row_number}, keeping the later row");
        }
    }

    Ok(SideData { rows })
}

fn csv_error(source: &Path, err: csv::Error) -> ReindexError {
    let context = format!("side-data file {}", source.display());
    if !err.is_io_error() {
        return ReindexError::decode(context, err);
    }
    match err.into_kind() {
        csv::ErrorKind::Io(io) => ReindexError::io(source, io),
        other => ReindexError::decode(context, format!("{other:?}")),
    }
}
