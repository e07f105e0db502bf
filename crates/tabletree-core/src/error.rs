//! Error types for tree mutation and JSON conversion.

use thiserror::Error;

/// Errors that can occur while building or converting a table tree.
#[derive(Error, Debug)]
pub enum TreeError {
    /// A mutation would give a node both a scalar value and children.
    /// This is a caller bug: scalar and child mutations must not be mixed
    /// on the same node.
    #[error("cannot {attempted} on node '{key}': it already holds {current}")]
    PayloadConflict {
        key: String,
        attempted: &'static str,
        current: &'static str,
    },

    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A JSON value has no table-literal counterpart (e.g., a float).
    /// `path` is the dotted key path from the root.
    #[error("unsupported JSON value at '{path}': {kind}")]
    UnsupportedJson { path: String, kind: String },

    /// A keyed lookup found no matching node in the subtree.
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

/// Convenience alias used throughout tabletree-core.
pub type Result<T> = std::result::Result<T, TreeError>;
