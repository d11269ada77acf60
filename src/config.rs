//! Optional TOML configuration for the command-line tool.

use crate::error::Result;
use crate::wrapper::{DEFAULT_VARIABLE, validate_variable};
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application directory under the platform config dir.
const APP_DIR: &str = "documenter-index";
const CONFIG_FILE: &str = "config.toml";

const fn default_list_limit() -> usize {
    25
}

fn default_variable() -> String {
    DEFAULT_VARIABLE.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Index file used when a command is given no path
    pub index: Option<PathBuf>,
    /// Script variable written by `emit --format script`
    pub variable: String,
    /// Default row limit for `list`
    pub list_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index: None,
            variable: default_variable(),
            list_limit: default_list_limit(),
        }
    }
}

impl Config {
    /// `<config_dir>/documenter-index/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Reads an explicit config file. The file must exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;

        validate_variable(&config.variable)
            .with_context(|| format!("Invalid `variable` in config at {}", path.display()))?;

        // Relative index paths are relative to the config file
        if let Some(index) = &config.index
            && index.is_relative()
            && let Some(parent) = path.parent()
        {
            config.index = Some(parent.join(index));
        }

        Ok(config)
    }

    /// Loads `explicit` if given, else the default location if it exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Using config at {}", path.display());
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Picks the index path from the command line, falling back to the config.
    pub fn index_path(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        arg.or_else(|| self.index.clone()).context(
            "No index file given. Pass a path or set `index` in the configuration file.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        check!(config.variable == "documenterSearchIndex");
        check!(config.list_limit == 25);
        check!(config.index.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "index = \"build/search_index.js\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        check!(config.index == Some(temp.path().join("build/search_index.js")));
        check!(config.list_limit == 25);
    }

    #[test]
    fn test_full_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "index = \"/srv/docs/search_index.js\"\nvariable = \"idx\"\nlist_limit = 5\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        check!(config.index == Some(PathBuf::from("/srv/docs/search_index.js")));
        check!(config.variable == "idx");
        check!(config.list_limit == 5);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "indx = \"typo.js\"\n").unwrap();

        let_assert!(Err(err) = Config::from_file(&path));
        check!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_invalid_variable_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "variable = \"my index\"\n").unwrap();

        let_assert!(Err(err) = Config::from_file(&path));
        check!(err.to_string().contains("Invalid `variable` in config"));
        check!(format!("{:#}", err).contains("invalid script variable name `my index`"));
    }

    #[test]
    fn test_missing_explicit_file() {
        check!(Config::load(Some(Path::new("/nonexistent/config.toml"))).is_err());
    }

    #[test]
    fn test_index_path_precedence() {
        let config = Config {
            index: Some(PathBuf::from("from-config.js")),
            ..Config::default()
        };
        check!(config.index_path(Some(PathBuf::from("arg.js"))).unwrap() == PathBuf::from("arg.js"));
        check!(config.index_path(None).unwrap() == PathBuf::from("from-config.js"));
        check!(Config::default().index_path(None).is_err());
    }
}
