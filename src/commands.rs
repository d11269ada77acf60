//! Implementations of the command-line subcommands.
//!
//! Each command loads the index, does its work, and returns the text to print.

use crate::cli::EmitFormat;
use crate::config::Config;
use crate::emit;
use crate::error::Result;
use crate::fragment::Category;
use crate::store::IndexStore;
use crate::summary::Summary;
use crate::wrapper::validate_variable;
use std::path::Path;

fn open(path: &Path) -> Result<IndexStore> {
    Ok(IndexStore::from_path(path)?)
}

/// `check`: load and report the fragment count.
pub fn execute_check(path: &Path) -> Result<String> {
    let store = open(path)?;
    Ok(format!(
        "OK: {} fragments across {} pages\n",
        store.len(),
        store.pages().len()
    ))
}

/// `stats`: per-category counts and page totals.
pub fn execute_stats(path: &Path) -> Result<String> {
    let store = open(path)?;
    let mut output = Summary::of(&store).to_string();
    output.push('\n');

    output.push_str(&format!("\nPages ({}):\n", store.pages().len()));
    for page_path in store.pages() {
        let count = store.page_fragments(page_path).count();
        let name = store
            .page_fragments(page_path)
            .next()
            .map_or("", |f| f.page.as_str());
        let shown = if page_path.is_empty() { "/" } else { page_path };
        output.push_str(&format!("  • {} ({}): {}\n", shown, name, count));
    }

    Ok(output)
}

/// Filters for `list`.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub category: Option<Category>,
    pub page: Option<String>,
    pub limit: Option<usize>,
}

/// `list`: one line per matching fragment.
pub fn execute_list(path: &Path, filter: &ListFilter, config: &Config) -> Result<String> {
    let store = open(path)?;
    let limit = filter.limit.unwrap_or(config.list_limit);

    let matches: Vec<_> = store
        .iter()
        .filter(|f| filter.category.is_none_or(|c| f.category == c))
        .filter(|f| {
            filter
                .page
                .as_deref()
                .is_none_or(|page| f.location().page_path == page)
        })
        .collect();

    if matches.is_empty() {
        return Ok("No fragments match.\n".to_string());
    }

    let mut output = String::new();
    for fragment in matches.iter().take(limit) {
        output.push_str(&format!(
            "{:<9} {:<40} {}\n",
            fragment.category.as_str(),
            fragment.location,
            fragment.title
        ));
    }

    if matches.len() > limit {
        output.push_str(&format!("... and {} more\n", matches.len() - limit));
    }

    Ok(output)
}

/// `emit`: re-serialize the index.
///
/// The script variable is taken from `variable`, then from the source file,
/// then from the configuration.
pub fn execute_emit(
    path: &Path,
    format: EmitFormat,
    variable: Option<&str>,
    config: &Config,
) -> Result<String> {
    let store = open(path)?;
    Ok(match format {
        EmitFormat::Json => {
            let mut json = emit::to_json(store.docs());
            json.push('\n');
            json
        }
        EmitFormat::Script => {
            let variable = variable
                .or_else(|| store.variable())
                .unwrap_or(config.variable.as_str());
            emit::to_script(store.docs(), validate_variable(variable)?)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use tempfile::TempDir;

    const INDEX: &str = r##"{"docs":[
        {"location":"#","page":"Home","title":"Home","text":"","category":"page"},
        {"location":"api/#f","page":"API","title":"f","text":"f(x)","category":"function"},
        {"location":"api/#g","page":"API","title":"g","text":"g(x)","category":"function"},
        {"location":"api/#T","page":"API","title":"T","text":"","category":"type"}
    ]}"##;

    fn index_file(content: &str) -> (TempDir, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("search_index.json");
        std::fs::write(&path, content).unwrap();
        (temp, path)
    }

    #[test]
    fn test_check_ok() {
        let (_temp, path) = index_file(INDEX);
        check!(execute_check(&path).unwrap() == "OK: 4 fragments across 2 pages\n");
    }

    #[test]
    fn test_check_reports_load_error() {
        let (_temp, path) = index_file(r#"{"docs":"not-a-list"}"#);
        let err = execute_check(&path).unwrap_err();
        check!(err.to_string().contains("`docs` must be an array"));
    }

    #[test]
    fn test_stats_lists_pages() {
        let (_temp, path) = index_file(INDEX);
        let output = execute_stats(&path).unwrap();
        check!(output.contains("Fragments: 4"));
        check!(output.contains("• / (Home): 1"));
        check!(output.contains("• api/ (API): 3"));
    }

    #[test]
    fn test_list_filters_and_limits() {
        let (_temp, path) = index_file(INDEX);
        let filter = ListFilter {
            category: Some(Category::Function),
            limit: Some(1),
            ..ListFilter::default()
        };
        let output = execute_list(&path, &filter, &Config::default()).unwrap();
        check!(output.contains("api/#f"));
        check!(!output.contains("api/#g"));
        check!(output.contains("... and 1 more"));
    }

    #[test]
    fn test_list_by_page() {
        let (_temp, path) = index_file(INDEX);
        let filter = ListFilter {
            page: Some(String::new()),
            ..ListFilter::default()
        };
        let output = execute_list(&path, &filter, &Config::default()).unwrap();
        check!(output.lines().count() == 1);
        check!(output.contains("Home"));
    }

    #[test]
    fn test_list_no_matches() {
        let (_temp, path) = index_file(INDEX);
        let filter = ListFilter {
            category: Some(Category::Section),
            ..ListFilter::default()
        };
        let output = execute_list(&path, &filter, &Config::default()).unwrap();
        check!(output == "No fragments match.\n");
    }

    #[test]
    fn test_emit_variable_precedence() {
        let (_temp, path) = index_file(INDEX);
        let config = Config {
            variable: "fromConfig".to_string(),
            ..Config::default()
        };

        let output = execute_emit(&path, EmitFormat::Script, None, &config).unwrap();
        check!(output.starts_with("var fromConfig = {\"docs\":\n["));

        let output = execute_emit(&path, EmitFormat::Script, Some("explicit"), &config).unwrap();
        check!(output.starts_with("var explicit = "));

        let (_temp, wrapped) = index_file(&format!("var fromSource = {}", INDEX));
        let output = execute_emit(&wrapped, EmitFormat::Script, None, &config).unwrap();
        check!(output.starts_with("var fromSource = "));
    }

    #[test]
    fn test_emit_rejects_bad_variable() {
        let (_temp, path) = index_file(INDEX);
        let err = execute_emit(&path, EmitFormat::Script, Some("my index"), &Config::default())
            .unwrap_err();
        check!(err.to_string().contains("invalid script variable name `my index`"));

        let config = Config {
            variable: "2fast".to_string(),
            ..Config::default()
        };
        check!(execute_emit(&path, EmitFormat::Script, None, &config).is_err());
    }

    #[test]
    fn test_emitted_script_loads_back() {
        let (_temp, path) = index_file(INDEX);
        let output =
            execute_emit(&path, EmitFormat::Script, Some("$idx"), &Config::default()).unwrap();
        let store = IndexStore::from_source(&output).unwrap();
        check!(store.variable() == Some("$idx"));
        check!(store.len() == 4);
    }

    #[test]
    fn test_emit_json() {
        let (_temp, path) = index_file(INDEX);
        let output = execute_emit(&path, EmitFormat::Json, None, &Config::default()).unwrap();
        check!(output.starts_with(r##"{"docs":[{"location":"#","page":"Home""##));
        check!(output.ends_with("}]}\n"));
    }
}
