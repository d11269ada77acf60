//! The loaded, read-only index of documentation fragments.

use crate::emit;
use crate::error::LoadError;
use crate::fragment::{Category, DocFragment};
use crate::loader;
use ahash::AHashMap;
use std::path::Path;
use xxhash_rust::xxh3::xxh3_64;

/// The full, ordered set of fragments from one documentation build.
///
/// A store is built once and never mutated; a new build produces a new store.
#[derive(Debug, Clone)]
pub struct IndexStore {
    docs: Vec<DocFragment>,
    /// Distinct page paths in first-seen order
    pages: Vec<String>,
    /// Page path → positions of its fragments in `docs`
    by_page: AHashMap<String, Vec<usize>>,
    /// Script variable the source assigned the index to, if any
    variable: Option<String>,
    fingerprint: u64,
}

impl IndexStore {
    /// Builds a store from an already validated list of fragments.
    pub fn new(docs: Vec<DocFragment>) -> Self {
        Self::assemble(docs, None)
    }

    /// Parses and validates serialized index data.
    pub fn from_source(source: &str) -> Result<Self, LoadError> {
        let loaded = loader::parse(source)?;
        Ok(Self::assemble(loaded.docs, loaded.variable))
    }

    /// Reads and parses an index file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_source(&source)?;
        tracing::info!(
            "Loaded {} fragments across {} pages from {}",
            store.len(),
            store.pages.len(),
            path.display()
        );
        Ok(store)
    }

    fn assemble(docs: Vec<DocFragment>, variable: Option<String>) -> Self {
        let mut pages = Vec::new();
        let mut by_page: AHashMap<String, Vec<usize>> = AHashMap::new();

        for (index, fragment) in docs.iter().enumerate() {
            let page_path = fragment.location().page_path;
            match by_page.get_mut(page_path) {
                Some(positions) => positions.push(index),
                None => {
                    pages.push(page_path.to_string());
                    by_page.insert(page_path.to_string(), vec![index]);
                }
            }
        }

        let fingerprint = xxh3_64(emit::to_json(&docs).as_bytes());

        Self {
            docs,
            pages,
            by_page,
            variable,
            fingerprint,
        }
    }

    /// All fragments in generator order.
    pub fn docs(&self) -> &[DocFragment] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DocFragment> {
        self.docs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocFragment> {
        self.docs.iter()
    }

    /// Fragments of one category, in generator order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &DocFragment> {
        self.docs.iter().filter(move |f| f.category == category)
    }

    /// Distinct page paths (`""` is the site root) in first-seen order.
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Fragments located on `page_path`, in generator order.
    pub fn page_fragments(&self, page_path: &str) -> impl Iterator<Item = &DocFragment> {
        self.by_page
            .get(page_path)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&index| &self.docs[index])
    }

    /// First fragment whose location is exactly `location`.
    pub fn find(&self, location: &str) -> Option<&DocFragment> {
        let page_path = crate::location::Location::parse(location).page_path;
        self.page_fragments(page_path)
            .find(|fragment| fragment.location == location)
    }

    /// Script variable name the source used, `None` for bare JSON.
    pub fn variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    /// Digest of the canonical JSON encoding. Equal content, equal fingerprint.
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

impl<'a> IntoIterator for &'a IndexStore {
    type Item = &'a DocFragment;
    type IntoIter = std::slice::Iter<'a, DocFragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}

/// Equality is over the fragments; how the source was wrapped does not matter.
impl PartialEq for IndexStore {
    fn eq(&self, other: &Self) -> bool {
        self.docs == other.docs
    }
}

impl Eq for IndexStore {}
