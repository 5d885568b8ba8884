//! CLI argument definitions for `DsExplorer`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use ds_explorer::config::ConfigOverrides;
use ds_explorer::core::models::CategoryFilter;
use ds_explorer::core::report::ReportFormat;
use ds_explorer::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (e.g., `level`, `max_suggestions`, `catalog`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Reset one configuration value to its default.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Where and how to render a result page
#[derive(Debug, Clone, clap::Args)]
pub struct OutputArgs {
    /// Output format: text, markdown (md), html, or json
    #[arg(short, long, value_name = "FORMAT", default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the report into the configured reports directory
    #[arg(long, conflicts_with = "output")]
    pub save: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List catalog entries, optionally narrowed to one category.
    List {
        /// Category filter: all, linear, non-linear, tree, graph, hash
        #[arg(short, long, value_name = "CATEGORY", default_value = "all")]
        category: CategoryFilter,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Search entries by name, description, keyword, or category.
    Search {
        /// Free-text query (case-insensitive substring)
        #[arg(value_name = "QUERY")]
        query: String,

        /// Category filter: all, linear, non-linear, tree, graph, hash
        #[arg(short, long, value_name = "CATEGORY", default_value = "all")]
        category: CategoryFilter,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show autocomplete suggestions for a partial query.
    Suggest {
        /// Partial query
        #[arg(value_name = "QUERY")]
        query: String,

        /// Maximum number of suggestions (defaults to config `max_suggestions`)
        #[arg(short, long, value_name = "N")]
        limit: Option<usize>,

        /// Print suggestions as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Show the full reference card for one entry.
    Show {
        /// Entry id (e.g., `binary-search-tree`)
        #[arg(value_name = "ID")]
        id: String,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// List categories with their entry counts.
    Categories,
    /// Interactive search session on stdin.
    ///
    /// Type a query to see suggestions and matches. `:category <C>` changes
    /// the filter, `:clear` resets, `:quit` exits.
    Explore,
}

#[derive(Parser, Debug)]
#[command(
    name = "dsexplorer",
    about = "Browse and search a catalog of data-structure reference cards",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Load the catalog from this TOML dataset instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config suggestion cap
    #[arg(long = "config-max-suggestions", value_name = "N")]
    pub config_max_suggestions: Option<usize>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `--catalog` feeds the catalog override so the rest of the program only
    /// needs to look at the merged config.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            catalog_file: self
                .catalog
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            max_suggestions: self.config_max_suggestions,
            reports_dir: self
                .config_reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_explorer::core::models::Category;

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = Cli::parse_from(["dsexplorer", "categories"]);
        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.catalog_file.is_none());
        assert!(overrides.max_suggestions.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli::parse_from([
            "dsexplorer",
            "--config-level",
            "debug",
            "--config-verbose",
            "yes",
            "--catalog",
            "/tmp/catalog.toml",
            "--config-max-suggestions",
            "3",
            "--config-reports-dir",
            "/out",
            "categories",
        ]);
        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level.as_deref(), Some("debug"));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.catalog_file.as_deref(), Some("/tmp/catalog.toml"));
        assert_eq!(overrides.max_suggestions, Some(3));
        assert_eq!(overrides.reports_dir.as_deref(), Some("/out"));
    }

    #[test]
    fn test_search_parses_category_and_format() {
        let cli = Cli::parse_from([
            "dsexplorer", "search", "node", "-c", "linear", "-f", "md",
        ]);
        match cli.command {
            Command::Search {
                query,
                category,
                output,
            } => {
                assert_eq!(query, "node");
                assert_eq!(category, CategoryFilter::Only(Category::Linear));
                assert_eq!(output.format, ReportFormat::Markdown);
                assert!(output.output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_bad_category_is_rejected() {
        let parsed = Cli::try_parse_from(["dsexplorer", "list", "--category", "forest"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_output_and_save_conflict() {
        let parsed = Cli::try_parse_from([
            "dsexplorer", "list", "--output", "x.md", "--save",
        ]);
        assert!(parsed.is_err());
    }
}
