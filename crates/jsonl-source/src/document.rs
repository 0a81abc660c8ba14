//! Document shape shared by input and output lines

use reindex_core::Document;
use serde::{Deserialize, Deserializer, Serialize};

/// One exported search document.
///
/// `_index`, `_type` and `_id` are written as `null` when unset; `_score`
/// is omitted when unset. A missing or `null` `_source` reads as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EsDocument {
    #[serde(rename = "_index", default)]
    pub index: Option<String>,

    #[serde(rename = "_type", default)]
    pub doc_type: Option<String>,

    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    #[serde(rename = "_score", default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(rename = "_source", default, deserialize_with = "null_as_empty")]
    pub source: Document,
}

impl EsDocument {
    /// A document carrying `meta`'s type, id and score, a new index, and a new source.
    pub fn reindexed(meta: &EsDocument, index: Option<String>, source: Document) -> Self {
        Self {
            index,
            doc_type: meta.doc_type.clone(),
            id: meta.id.clone(),
            score: meta.score,
            source,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Document, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Document>::deserialize(deserializer)?.unwrap_or_default())
}
