//! Catalog store
//!
//! Holds the ordered, read-only list of [`CatalogEntry`] records. The built-in
//! dataset is compiled into the binary from `assets/catalog.toml`; a custom
//! dataset with the same layout can be loaded from disk.
//!
//! Dataset layout:
//! ```toml
//! [[entry]]
//! id = "stack"
//! name = "Stack"
//! description = "..."
//! category = "Linear"
//! keywords = ["lifo", "push"]
//! icon = "Layers3"
//! complexity = { insert = "O(1)", search = "O(n)", delete = "O(1)", space = "O(n)" }
//! ```

use crate::core::models::{CatalogEntry, Category, CategoryFilter, Suggestion};
use crate::core::query::{self, SuggestOptions};
use serde::Deserialize;
use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Embedded dataset
const BUILTIN_CATALOG: &str = include_str!("../../../assets/catalog.toml");

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_toml(BUILTIN_CATALOG).expect("Failed to parse compiled-in catalog")
});

/// On-disk representation of a dataset file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "entry")]
    entries: Vec<CatalogEntry>,
}

/// Ordered, immutable collection of catalog entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from entries, keeping their order
    ///
    /// # Errors
    /// Returns an error if any entry is missing a required field or if two
    /// entries share an id
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, String> {
        let mut seen = HashSet::new();
        for entry in &entries {
            entry.validate()?;
            if !seen.insert(entry.id.as_str()) {
                return Err(format!("Duplicate catalog id: '{}'", entry.id));
            }
        }
        crate::debug!("Catalog built with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// The catalog compiled into the binary
    ///
    /// Parsed once on first access and shared for the rest of the process.
    ///
    /// # Panics
    /// Panics if the embedded dataset is invalid. The dataset is checked by the
    /// test suite, so this only happens if `assets/catalog.toml` is broken.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Parse a catalog from a TOML dataset string
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or an entry fails validation
    pub fn from_toml(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let file: CatalogFile = toml::from_str(toml_str)?;
        Ok(Self::new(file.entries)?)
    }

    /// Load a catalog from a TOML dataset file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read catalog {}: {e}", path.display()))?;
        let catalog = Self::from_toml(&content)
            .map_err(|e| format!("Invalid catalog {}: {e}", path.display()))?;
        crate::info!(
            "Loaded {} entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise copy the built-in catalog
    ///
    /// # Errors
    /// Returns an error if a custom file was requested and cannot be loaded
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::builtin().clone()),
        }
    }

    /// Entries in catalog order
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Iterate entries in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entry count per category, in [`Category::ALL`] order
    #[must_use]
    pub fn count_by_category(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&c| (c, self.entries.iter().filter(|e| e.category == c).count()))
            .collect()
    }

    /// Filter this catalog; see [`query::filter`]
    #[must_use]
    pub fn search(&self, category: &CategoryFilter, query: &str) -> Vec<&CatalogEntry> {
        query::filter(&self.entries, category, query)
    }

    /// Suggestions for a partial query; see [`query::suggest`]
    #[must_use]
    pub fn suggest(&self, query: &str, options: &SuggestOptions) -> Vec<Suggestion> {
        query::suggest(&self.entries, query, options)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
