//! Loading and validation of Documenter-style documentation search indexes.
//!
//! A search index is a generated `{"docs": [...]}` table of page fragments,
//! usually shipped as `var documenterSearchIndex = {...}`. [`load`] turns it into
//! an ordered list of [`DocFragment`]s; [`IndexStore`] adds read-only lookups.

pub mod cli;
pub mod commands;
pub mod config;
pub mod emit;
pub mod error;
pub mod fragment;
pub mod handle;
pub mod loader;
pub mod location;
pub mod store;
pub mod summary;
pub mod tracing;
pub mod wrapper;

pub use error::{LoadError, RecordProblem};
pub use fragment::{Category, DocFragment};
pub use handle::IndexHandle;
pub use loader::load;
pub use location::Location;
pub use store::IndexStore;
pub use summary::Summary;
