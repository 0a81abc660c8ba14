//! Dotted-path navigation over a [`Document`] tree.
//!
//! [`extract`] reads a value at a path without touching the tree, and
//! [`insert`] writes one, creating intermediate objects as it walks.
//! Arrays are never traversed: they are opaque leaves, and an array met
//! mid-path counts as a non-object.

use crate::error::{ConfigError, DataShapeError};
use crate::Document;
use serde_json::Value as JsonValue;
use std::fmt;

/// A location inside a [`Document`], written as `a.b.c`.
///
/// A path with no segments denotes the tree root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DottedPath {
    segments: Vec<String>,
}

impl DottedPath {
    /// The root path (zero segments).
    pub fn root() -> Self {
        Self::default()
    }

    /// Split `raw` on `.`. The empty string parses to the root path.
    ///
    /// Empty segments (`a..b`) are kept as keys named `""`; use
    /// [`DottedPath::parse_target`] where they must be rejected.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::root();
        }
        Self {
            segments: raw.split('.').map(str::to_string).collect(),
        }
    }

    /// Parse a path that names a write target: it must be non-empty and
    /// every segment must be non-empty.
    pub fn parse_target(raw: &str) -> Result<Self, ConfigError> {
        if raw.is_empty() {
            return Err(ConfigError::InvalidPath {
                path: raw.to_string(),
                reason: "target path is empty".to_string(),
            });
        }
        let path = Self::parse(raw);
        if path.segments.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidPath {
                path: raw.to_string(),
                reason: "path contains an empty segment".to_string(),
            });
        }
        Ok(path)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_root()
    }
}

impl fmt::Display for DottedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl From<&str> for DottedPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Result of reading a path out of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// Some segment of the path does not exist, or a non-object sits mid-path.
    Absent,
    /// The final key exists and holds JSON `null`.
    Null,
    /// The path was empty; this is the whole tree.
    Root(&'a Document),
    /// The final key exists and holds a non-null value.
    Value(&'a JsonValue),
}

impl Lookup<'_> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Lookup::Absent)
    }

    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Owned value to hand to [`insert`]: `None` when absent, native
    /// `null` for [`Lookup::Null`].
    pub fn to_value(&self) -> Option<JsonValue> {
        match self {
            Lookup::Absent => None,
            Lookup::Null => Some(JsonValue::Null),
            Lookup::Root(doc) => Some(JsonValue::Object((*doc).clone())),
            Lookup::Value(value) => Some((*value).clone()),
        }
    }
}

/// Read the value at `path` inside `tree`.
pub fn extract<'a>(tree: &'a Document, path: &DottedPath) -> Lookup<'a> {
    extract_segments(tree, path.segments())
}

fn extract_segments<'a>(tree: &'a Document, segments: &[String]) -> Lookup<'a> {
    let Some((first, rest)) = segments.split_first() else {
        return Lookup::Root(tree);
    };
    let Some(value) = tree.get(first) else {
        return Lookup::Absent;
    };
    if rest.is_empty() {
        return if value.is_null() {
            Lookup::Null
        } else {
            Lookup::Value(value)
        };
    }
    match value {
        JsonValue::Object(child) => extract_segments(child, rest),
        _ => Lookup::Absent,
    }
}

/// Write `value` at `path` inside `tree`, overwriting whatever the final key
/// held and creating empty objects for missing intermediate keys.
///
/// Fails without modifying `tree` when an existing intermediate value is not
/// an object.
pub fn insert(
    tree: &mut Document,
    path: &DottedPath,
    value: JsonValue,
) -> Result<(), DataShapeError> {
    let Some((last, parents)) = path.segments().split_last() else {
        return Err(DataShapeError::EmptyPath);
    };

    // A collision can only happen on a pre-existing key, and once a key is
    // created every deeper key is new, so nothing is created before an error.
    let mut current = tree;
    for segment in parents {
        current = match current
            .entry(segment.clone())
            .or_insert_with(|| JsonValue::Object(Document::new()))
        {
            JsonValue::Object(child) => child,
            _ => {
                return Err(DataShapeError::NotAnObject {
                    path: path.to_string(),
                    segment: segment.clone(),
                })
            }
        };
    }

    current.insert(last.clone(), value);
    Ok(())
}
