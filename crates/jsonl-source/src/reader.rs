//! Line-oriented document reader

use crate::document::EsDocument;
use reindex_core::{ReindexError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// Iterator over the documents of an NDJSON input.
///
/// At most `limit` lines are consumed when `limit > 0`; blank lines count
/// toward the limit but yield no document.
pub struct DocumentReader<R> {
    lines: Lines<R>,
    source: PathBuf,
    limit: Option<usize>,
    consumed: usize,
}

impl DocumentReader<BufReader<File>> {
    /// Open an NDJSON file for reading.
    pub fn open(path: impl AsRef<Path>, limit: i64) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ReindexError::io(path, e))?;
        Ok(Self::new(BufReader::new(file), path, limit))
    }
}

impl<R: BufRead> DocumentReader<R> {
    /// Read documents from `reader`; `source` names it in errors.
    pub fn new(reader: R, source: impl Into<PathBuf>, limit: i64) -> Self {
        Self {
            lines: reader.lines(),
            source: source.into(),
            limit: usize::try_from(limit).ok().filter(|&n| n > 0),
            consumed: 0,
        }
    }

    /// Number of input lines consumed so far, blank ones included.
    pub fn lines_consumed(&self) -> usize {
        self.consumed
    }
}

impl<R: BufRead> Iterator for DocumentReader<R> {
    type Item = Result<EsDocument>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.limit.is_some_and(|limit| self.consumed >= limit) {
                return None;
            }

            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(ReindexError::io(&self.source, e))),
            };
            self.consumed += 1;

            if line.trim().is_empty() {
                continue;
            }

            return Some(serde_json::from_str(&line).map_err(|e| {
                ReindexError::decode(
                    format!("{} at line {}", self.source.display(), self.consumed),
                    e,
                )
            }));
        }
    }
}

/// Read every document of an NDJSON file, honouring `limit`.
pub fn read_documents(path: impl AsRef<Path>, limit: i64) -> Result<Vec<EsDocument>> {
    let path = path.as_ref();
    let mut reader = DocumentReader::open(path, limit)?;
    let documents = reader.by_ref().collect::<Result<Vec<_>>>()?;
    tracing::info!(
        "Read {} documents from {} ({} lines)",
        documents.len(),
        path.display(),
        reader.lines_consumed()
    );
    Ok(documents)
}
