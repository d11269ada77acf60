//! The search index record and its category tag.

use crate::location::Location;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One record of the search index: a page, a section, or a symbol reference.
///
/// Field order matches the generator's output and is kept when re-emitting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DocFragment {
    pub location: String,
    pub page: String,
    pub title: String,
    pub text: String,
    pub category: Category,
}

impl DocFragment {
    /// Page path and anchor of this fragment.
    pub fn location(&self) -> Location<'_> {
        Location::parse(&self.location)
    }

    /// Whether the fragment carries no text (section headers usually don't).
    pub fn is_empty_text(&self) -> bool {
        self.text.is_empty()
    }
}

/// What kind of documentation unit a fragment represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Page,
    Section,
    Function,
    Type,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 4] = [Self::Page, Self::Section, Self::Function, Self::Type];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Section => "section",
            Self::Function => "function",
            Self::Type => "type",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a category string outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}` (expected one of: page, section, function, type)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
