//! Configuration module for `DsExplorer`

use crate::core::query::{SuggestOptions, DEFAULT_MAX_SUGGESTIONS, DEFAULT_MIN_QUERY_CHARS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory in string values
const DIR_VARIABLE: &str = "$DS_EXPLORER";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Catalog source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a custom dataset; empty means the built-in catalog
    #[serde(default)]
    pub file: String,
}

const fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

const fn default_min_query_chars() -> usize {
    DEFAULT_MIN_QUERY_CHARS
}

/// Search behaviour configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum suggestions shown
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// Minimum query length before suggesting
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
        }
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Search settings
    #[serde(default)]
    pub search: SearchConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override catalog dataset path
    pub catalog_file: Option<String>,
    /// Override suggestion cap
    pub max_suggestions: Option<usize>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$DS_EXPLORER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/dsexplorer`
    /// - macOS: `~/Library/Application Support/dsexplorer`
    /// - Windows: `%APPDATA%\dsexplorer`
    #[must_use]
    pub fn get_dsexplorer_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dsexplorer")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled in, so existing user settings survive upgrades.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.catalog.file.is_empty() && !defaults.catalog.file.is_empty() {
            self.catalog.file.clone_from(&defaults.catalog.file);
            changed = true;
        }

        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; nothing is persisted.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     max_suggestions: Some(3),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(catalog_file) = &overrides.catalog_file {
            self.catalog.file.clone_from(catalog_file);
        }

        if let Some(max) = overrides.max_suggestions {
            self.search.max_suggestions = max;
        }

        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_dsexplorer_dir`](Self::get_dsexplorer_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_dsexplorer_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$DS_EXPLORER` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_dsexplorer_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults. `$DS_EXPLORER` is expanded in
    /// path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.catalog.file = Self::expand_variables(&config.catalog.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    /// The defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from
    ///   defaults, and saves the result if anything was added
    /// - On first run: writes the defaults to the config file
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
            crate::warn!(
                "Ignoring unreadable config file {}; using defaults",
                config_file.display()
            );
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the config
    /// directory cannot be created, or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Suggestion options derived from the `[search]` section
    #[must_use]
    pub const fn suggest_options(&self) -> SuggestOptions {
        SuggestOptions {
            max_results: self.search.max_suggestions,
            min_query_chars: self.search.min_query_chars,
        }
    }

    /// Custom catalog path, if one is configured
    #[must_use]
    pub fn catalog_path(&self) -> Option<PathBuf> {
        if self.catalog.file.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.catalog.file))
        }
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `catalog`,
    /// `max_suggestions`, `min_query_chars`, `reports_dir`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "catalog" | "catalog_file" | "catalog-file" => Some(self.catalog.file.clone()),
            "max_suggestions" | "max-suggestions" => {
                Some(self.search.max_suggestions.to_string())
            }
            "min_query_chars" | "min-query-chars" => {
                Some(self.search.min_query_chars.to_string())
            }
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "catalog" | "catalog_file" | "catalog-file" => self.catalog.file = value.to_string(),
            "max_suggestions" | "max-suggestions" => {
                self.search.max_suggestions = parse_count(key, value)?;
            }
            "min_query_chars" | "min-query-chars" => {
                self.search.min_query_chars = parse_count(key, value)?;
            }
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "catalog" | "catalog_file" | "catalog-file" => {
                self.catalog.file.clone_from(&defaults.catalog.file);
            }
            "max_suggestions" | "max-suggestions" => {
                self.search.max_suggestions = defaults.search.max_suggestions;
            }
            "min_query_chars" | "min-query-chars" => {
                self.search.min_query_chars = defaults.search.min_query_chars;
            }
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// Succeeds without doing anything if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("Invalid number for '{key}': '{value}'"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[catalog]")?;
        writeln!(f, "  file = \"{}\"", self.catalog.file)?;

        writeln!(f, "\n[search]")?;
        writeln!(f, "  max_suggestions = {}", self.search.max_suggestions)?;
        writeln!(f, "  min_query_chars = {}", self.search.min_query_chars)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let config = Config::from_defaults();
        assert!(!config.logging.level.is_empty());
        assert!(!config.paths.reports_dir.is_empty());
        assert!(!config.paths.reports_dir.contains(DIR_VARIABLE));
        assert_eq!(config.search.max_suggestions, 8);
        assert_eq!(config.search.min_query_chars, 2);
        assert!(config.catalog_path().is_none());
    }

    #[test]
    fn test_suggest_options_follow_search_section() {
        let mut config = Config::from_defaults();
        assert_eq!(config.suggest_options(), SuggestOptions::default());

        config.set("max_suggestions", "3").unwrap();
        assert_eq!(config.suggest_options().max_results, 3);
    }

    #[test]
    fn test_set_rejects_bad_numbers() {
        let mut config = Config::from_defaults();
        let err = config.set("max_suggestions", "many").unwrap_err();
        assert!(err.contains("Invalid number"));
        assert!(config.set("min-query-chars", "-1").is_err());
    }

    #[test]
    fn test_expand_variables() {
        let expanded = Config::expand_variables("$DS_EXPLORER/data/catalog.toml");
        assert!(!expanded.contains(DIR_VARIABLE));
        assert!(expanded.ends_with("data/catalog.toml"));
        assert_eq!(Config::expand_variables("plain"), "plain");
    }
}
