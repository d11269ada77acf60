//! Aggregate counts over a loaded index.

use crate::fragment::Category;
use crate::store::IndexStore;
use std::collections::BTreeMap;
use std::fmt;

/// Counts shown by `documenter-index stats`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    /// Every category is present, zero counts included
    pub per_category: BTreeMap<Category, usize>,
    pub pages: usize,
    pub empty_text: usize,
    pub fingerprint: u64,
}

impl Summary {
    pub fn of(store: &IndexStore) -> Self {
        let mut per_category: BTreeMap<Category, usize> =
            Category::ALL.into_iter().map(|c| (c, 0)).collect();
        let mut empty_text = 0;

        for fragment in store {
            *per_category.entry(fragment.category).or_insert(0) += 1;
            if fragment.is_empty_text() {
                empty_text += 1;
            }
        }

        Self {
            total: store.len(),
            per_category,
            pages: store.pages().len(),
            empty_text,
            fingerprint: store.fingerprint(),
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.per_category.get(&category).copied().unwrap_or(0)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fragments: {}", self.total)?;
        for (category, count) in &self.per_category {
            writeln!(f, "  • {:<9} {}", category.as_str(), count)?;
        }
        writeln!(f, "Pages: {}", self.pages)?;
        writeln!(f, "Empty text: {}", self.empty_text)?;
        write!(f, "Fingerprint: {:016x}", self.fingerprint)
    }
}
