//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `generated_index`: the raw text of a real generator artifact
//!   (`tests/fixtures/search_index.js`, 34 fragments over two pages)
//! - `workspace`: an empty [`TempWorkspace`] for tests that write index files

use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns the project root directory (where Cargo.toml lives).
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn fixture_path(name: &str) -> PathBuf {
    project_root().join("tests/fixtures").join(name)
}

/// A temporary directory for index files, removed on drop.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes `content` to `relative_path`, creating parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.root.join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

#[fixture]
pub fn generated_index() -> String {
    std::fs::read_to_string(fixture_path("search_index.js"))
        .expect("Failed to read search_index.js fixture")
}

#[fixture]
pub fn workspace() -> TempWorkspace {
    TempWorkspace::new()
}
