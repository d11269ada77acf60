//! Parsing and validation of serialized search index data.
//!
//! Input is validated as a whole: any malformed record fails the load, and the
//! error names the record's position. No partial or coerced result is returned.

use crate::error::{LoadError, RecordProblem, json_type_name};
use crate::fragment::{Category, DocFragment};
use crate::wrapper;
use serde_json::{Map, Value};
use std::time::Instant;

/// Parses `source` (bare JSON or the `var NAME = ...` script form) into the
/// ordered list of fragments.
pub fn load(source: &str) -> Result<Vec<DocFragment>, LoadError> {
    parse(source).map(|loaded| loaded.docs)
}

/// Result of a successful parse.
#[derive(Debug)]
pub(crate) struct Loaded {
    pub(crate) variable: Option<String>,
    pub(crate) docs: Vec<DocFragment>,
}

pub(crate) fn parse(source: &str) -> Result<Loaded, LoadError> {
    let start = Instant::now();
    let unwrapped = wrapper::split_script(source);

    if let (Some(keyword), Some(variable)) = (unwrapped.keyword, unwrapped.variable)
        && unwrapped.body.is_empty()
    {
        return Err(LoadError::EmptyWrapper {
            keyword: keyword.to_string(),
            variable: variable.to_string(),
        });
    }

    let root: Value = serde_json::from_str(unwrapped.body).map_err(|e| {
        let (line, column) = source_position(source, unwrapped.offset, e.line(), e.column());
        LoadError::Syntax {
            line,
            column,
            message: without_position(e.to_string()),
        }
    })?;

    let docs = docs_array(root)?;
    let docs = docs
        .into_iter()
        .enumerate()
        .map(|(index, value)| record(index, value))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        "Loaded search index: {} fragments{} in {:?}",
        docs.len(),
        unwrapped
            .variable
            .map(|v| format!(" (script variable `{}`)", v))
            .unwrap_or_default(),
        start.elapsed()
    );

    Ok(Loaded {
        variable: unwrapped.variable.map(str::to_string),
        docs,
    })
}

/// Maps a 1-based position inside the body starting at byte `offset` back to
/// a position in `source`.
fn source_position(source: &str, offset: usize, line: usize, column: usize) -> (usize, usize) {
    let prefix = &source[..offset];
    let prefix_lines = prefix.matches('\n').count();
    if line == 1 {
        let last_line = prefix.rfind('\n').map_or(prefix, |i| &prefix[i + 1..]);
        (line + prefix_lines, column + last_line.len())
    } else {
        (line + prefix_lines, column)
    }
}

/// Drops serde_json's trailing ` at line L column C`, which counts from the body.
fn without_position(message: String) -> String {
    match message.rfind(" at line ") {
        Some(end) => message[..end].to_string(),
        None => message,
    }
}

/// Checks the envelope `{"docs": [...]}` and returns the record values.
fn docs_array(root: Value) -> Result<Vec<Value>, LoadError> {
    let mut top: Map<String, Value> = match root {
        Value::Object(map) => map,
        other => {
            return Err(LoadError::NotAnObject {
                found: json_type_name(&other),
            });
        }
    };

    let docs = top.remove("docs").ok_or(LoadError::MissingDocs)?;

    if let Some(key) = top.keys().next() {
        return Err(LoadError::UnexpectedKey { key: key.clone() });
    }

    match docs {
        Value::Array(items) => Ok(items),
        other => Err(LoadError::DocsNotArray {
            found: json_type_name(&other),
        }),
    }
}

/// Validates one record and converts it into a fragment.
fn record(index: usize, value: Value) -> Result<DocFragment, LoadError> {
    let invalid = |problem| LoadError::InvalidRecord { index, problem };

    let mut fields = match value {
        Value::Object(map) => map,
        other => {
            return Err(invalid(RecordProblem::NotAnObject {
                found: json_type_name(&other),
            }));
        }
    };

    let mut take = |field: &'static str| match fields.remove(field) {
        None => Err(invalid(RecordProblem::MissingField { field })),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(invalid(RecordProblem::WrongType {
            field,
            found: json_type_name(&other),
        })),
    };

    let location = take("location")?;
    let page = take("page")?;
    let title = take("title")?;
    let text = take("text")?;
    let category = take("category")?;

    if let Some(field) = fields.keys().next() {
        return Err(invalid(RecordProblem::UnexpectedField {
            field: field.clone(),
        }));
    }

    let category = category
        .parse::<Category>()
        .map_err(|e| invalid(RecordProblem::UnknownCategory { value: e.0 }))?;

    Ok(DocFragment {
        location,
        page,
        title,
        text,
        category,
    })
}
