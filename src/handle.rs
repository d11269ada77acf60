//! Holder for the current index snapshot.

use crate::error::LoadError;
use crate::store::IndexStore;
use std::path::Path;
use std::sync::Arc;

/// Owns the store of the most recent documentation build.
///
/// Readers take an `Arc` snapshot with [`current`](Self::current) and keep it for
/// as long as they like; a rebuild swaps the whole store and never touches a
/// snapshot already handed out.
#[derive(Debug, Clone)]
pub struct IndexHandle {
    current: Arc<IndexStore>,
}

impl IndexHandle {
    pub fn new(store: IndexStore) -> Self {
        Self {
            current: Arc::new(store),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        IndexStore::from_path(path).map(Self::new)
    }

    /// The store as of the last successful load.
    pub fn current(&self) -> Arc<IndexStore> {
        Arc::clone(&self.current)
    }

    /// Replaces the store wholesale. Returns `false` (and keeps the old
    /// snapshot) when the new store has the same fragments and script variable.
    pub fn replace(&mut self, store: IndexStore) -> bool {
        if store.fingerprint() == self.current.fingerprint()
            && store == *self.current
            && store.variable() == self.current.variable()
        {
            tracing::debug!("Search index unchanged ({:016x})", store.fingerprint());
            return false;
        }

        tracing::info!(
            "Replacing search index: {} -> {} fragments ({:016x} -> {:016x})",
            self.current.len(),
            store.len(),
            self.current.fingerprint(),
            store.fingerprint()
        );
        self.current = Arc::new(store);
        true
    }

    /// Loads `source` and replaces the store. On failure the previous snapshot stays.
    pub fn reload_from(&mut self, source: &str) -> Result<bool, LoadError> {
        let store = IndexStore::from_source(source).inspect_err(|e| {
            tracing::warn!("Keeping previous search index, reload failed: {}", e);
        })?;
        Ok(self.replace(store))
    }

    /// Re-reads an index file and replaces the store.
    pub fn reload_path(&mut self, path: impl AsRef<Path>) -> Result<bool, LoadError> {
        let store = IndexStore::from_path(path).inspect_err(|e| {
            tracing::warn!("Keeping previous search index, reload failed: {}", e);
        })?;
        Ok(self.replace(store))
    }
}
