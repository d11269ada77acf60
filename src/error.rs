//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for documenter-index operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the application layer. Loading itself
/// reports the typed [`LoadError`].
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a search index cannot be loaded.
///
/// A malformed artifact will not become valid by retrying; the only recovery is
/// regenerating it upstream.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The index file could not be read.
    #[error("failed to read search index at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The input is not valid JSON. `line` and `column` are positions in the
    /// source as given, script wrapper included.
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
    /// The script wrapper was recognized but its body is empty.
    #[error("script wrapper `{keyword} {variable} =` has no index body")]
    EmptyWrapper { keyword: String, variable: String },
    /// The top-level value is not a JSON object.
    #[error("top-level value must be an object, found {found}")]
    NotAnObject { found: &'static str },
    /// The top-level object has no `docs` key.
    #[error("top-level object has no `docs` key")]
    MissingDocs,
    /// The top-level object carries a key other than `docs`.
    #[error("unexpected top-level key `{key}`")]
    UnexpectedKey { key: String },
    /// `docs` is present but not an array.
    #[error("`docs` must be an array, found {found}")]
    DocsNotArray { found: &'static str },
    /// A record inside `docs` failed validation.
    #[error("record {index}: {problem}")]
    InvalidRecord { index: usize, problem: RecordProblem },
}

impl LoadError {
    /// Position of the offending record, when the failure is tied to one.
    pub const fn record_index(&self) -> Option<usize> {
        match self {
            Self::InvalidRecord { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Why a single record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordProblem {
    #[error("expected an object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },
    #[error("field `{field}` must be a string, found {found}")]
    WrongType {
        field: &'static str,
        found: &'static str,
    },
    #[error("unexpected field `{field}`")]
    UnexpectedField { field: String },
    #[error("unknown category `{value}`")]
    UnknownCategory { value: String },
}

/// Name of a JSON value's type, as used in error messages.
pub(crate) const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
