//! Error types shared across the es-reindex workspace.

use std::path::PathBuf;

/// Convenience result type for reindex operations.
pub type Result<T> = std::result::Result<T, ReindexError>;

/// Top-level error for every fallible reindex operation.
///
/// All variants are fatal to a run; callers propagate them with `?` and the
/// binary reports the chain before exiting.
#[derive(Debug, thiserror::Error)]
pub enum ReindexError {
    /// Opening, reading, writing or closing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON/YAML/CSV input, or an output record that failed to encode.
    #[error("failed to decode {context}: {message}")]
    Decode { context: String, message: String },

    /// The mapping or side-data configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A dotted-path write ran into a value that is not an object.
    #[error(transparent)]
    DataShape(#[from] DataShapeError),
}

impl ReindexError {
    /// Build an [`ReindexError::Io`] for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a [`ReindexError::Decode`] from any displayable cause.
    pub fn decode(context: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Decode {
            context: context.into(),
            message: cause.to_string(),
        }
    }
}

/// Configuration problems detected while loading the mapping or side data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The side-data header row has no column literally named `id`.
    #[error("side-data file {} has no 'id' column", .path.display())]
    MissingIdColumn { path: PathBuf },

    /// `file.path` is present in the mapping but empty.
    #[error("side-data file path is empty (mapping key 'file.path')")]
    EmptyFilePath,

    /// A mapping key is not a usable dotted path.
    #[error("invalid dotted path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// A random-generation spec lacks a parameter its type requires.
    #[error("random_generate.{field}: type '{kind}' requires parameter '{param}'")]
    MissingParameter {
        field: String,
        kind: String,
        param: String,
    },

    /// A random-generation spec parameter is present but unusable.
    #[error("random_generate.{field}: parameter '{param}' for type '{kind}' is invalid: {reason}")]
    InvalidParameter {
        field: String,
        kind: String,
        param: String,
        reason: String,
    },
}

/// A dotted-path write could not be applied to the tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataShapeError {
    /// An intermediate segment already holds a scalar, array or null.
    #[error("cannot write '{path}': segment '{segment}' holds a non-object value")]
    NotAnObject { path: String, segment: String },

    /// Writes need at least one segment to name the target key.
    #[error("cannot write at the document root (empty path)")]
    EmptyPath,
}
