//! Line-oriented document writer

use crate::document::EsDocument;
use reindex_core::{ReindexError, Result};
use std::fs;
use std::path::Path;

/// Encode documents one per line, joined by `\n` with no trailing newline.
pub fn encode_documents(documents: &[EsDocument]) -> Result<String> {
    let lines = documents
        .iter()
        .map(|doc| {
            serde_json::to_string(doc).map_err(|e| {
                ReindexError::decode(
                    format!("output document {}", doc.id.as_deref().unwrap_or("<no id>")),
                    e,
                )
            })
        })
        .collect::<Result<Vec<String>>>()?;
    Ok(lines.join("\n"))
}

/// Write documents to `path` in a single write, replacing any existing file.
///
/// Returns the number of documents written.
pub fn write_documents(path: impl AsRef<Path>, documents: &[EsDocument]) -> Result<usize> {
    let path = path.as_ref();
    let content = encode_documents(documents)?;
    fs::write(path, content).map_err(|e| ReindexError::io(path, e))?;
    tracing::info!(
        "Wrote {} documents to {}",
        documents.len(),
        path.display()
    );
    Ok(documents.len())
}
