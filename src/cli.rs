use crate::fragment::Category;
use crate::wrapper::validate_variable;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "documenter-index")]
#[command(about = "Validate and inspect documentation search index files", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to <config dir>/documenter-index/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load the index and report whether it is well-formed
    Check { path: Option<PathBuf> },
    /// Show fragment counts per category and page
    Stats { path: Option<PathBuf> },
    /// List fragments, optionally filtered
    List {
        path: Option<PathBuf>,
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,
        /// Page path, e.g. `extra/` (empty string for the site root)
        #[arg(short, long)]
        page: Option<String>,
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Re-emit the index as JSON or in the generator's script form
    Emit {
        path: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = EmitFormat::Script)]
        format: EmitFormat,
        /// Script variable name (defaults to the source's, then the config's)
        #[arg(long, value_parser = parse_variable)]
        variable: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmitFormat {
    Json,
    Script,
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|e: crate::fragment::ParseCategoryError| e.to_string())
}

fn parse_variable(s: &str) -> Result<String, String> {
    validate_variable(s)
        .map(str::to_string)
        .map_err(|e| e.to_string())
}
