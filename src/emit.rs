//! Serializing fragments back into the shape the search widget reads.

use crate::fragment::DocFragment;
use serde::Serialize;

#[derive(Serialize)]
struct Envelope<'a> {
    docs: &'a [DocFragment],
}

/// Compact `{"docs":[...]}`.
pub fn to_json(docs: &[DocFragment]) -> String {
    serde_json::to_string(&Envelope { docs }).unwrap_or_else(|e| {
        // Only string fields and a unit enum: serialization cannot fail.
        unreachable!("serializing fragments failed: {}", e)
    })
}

/// The generator's script layout:
///
/// ```text
/// var documenterSearchIndex = {"docs":
/// [{...},{...}]
/// }
/// ```
///
/// `variable` is written as is; check it with
/// [`validate_variable`](crate::wrapper::validate_variable) first.
pub fn to_script(docs: &[DocFragment], variable: &str) -> String {
    let records = serde_json::to_string(docs)
        .unwrap_or_else(|e| unreachable!("serializing fragments failed: {}", e));
    format!("var {} = {{\"docs\":\n{}\n}}\n", variable, records)
}
