//! Detection of the `var NAME = {...}` script form the generator ships.

use regex::Regex;
use std::sync::LazyLock;

/// Variable name the generator assigns the index to.
pub const DEFAULT_VARIABLE: &str = "documenterSearchIndex";

/// A JavaScript identifier as accepted on both the reading and writing side.
const IDENTIFIER: &str = r"[A-Za-z_$][A-Za-z0-9_$]*";

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\s*(var|let|const)\s+({IDENTIFIER})\s*=\s*"))
        .expect("assignment pattern is valid")
});

static VARIABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{IDENTIFIER}$")).expect("identifier pattern is valid")
});

/// A script variable name that [`split_script`] would not recognize.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid script variable name `{0}` (expected letters, digits, `_` or `$`, not starting with a digit)")]
pub struct InvalidVariable(pub String);

/// Checks that `name` can be written as `var <name> = ...` and read back.
pub fn validate_variable(name: &str) -> Result<&str, InvalidVariable> {
    if VARIABLE.is_match(name) {
        Ok(name)
    } else {
        Err(InvalidVariable(name.to_string()))
    }
}

/// The JSON body of an index source, with the script assignment if there was one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unwrapped<'a> {
    /// `var`, `let` or `const`
    pub keyword: Option<&'a str>,
    pub variable: Option<&'a str>,
    pub body: &'a str,
    /// Byte offset of `body` within the source
    pub offset: usize,
}

/// Strips a leading `var NAME =` and a trailing `;` from `source`.
///
/// Bare JSON passes through unchanged.
pub fn split_script(source: &str) -> Unwrapped<'_> {
    let Some(captures) = ASSIGNMENT.captures(source) else {
        return Unwrapped {
            keyword: None,
            variable: None,
            body: source,
            offset: 0,
        };
    };

    let offset = captures.get(0).map_or(0, |m| m.end());
    let keyword = captures.get(1).map(|m| m.as_str());
    let variable = captures.get(2).map(|m| m.as_str());

    let body = source[offset..].trim_end();
    let body = body.strip_suffix(';').unwrap_or(body).trim_end();

    Unwrapped {
        keyword,
        variable,
        body,
        offset,
    }
}
