//! Catalog entry model

use super::{Category, Complexity, Icon};
use serde::{Deserialize, Serialize};

/// Use case shown when an entry lists none
pub const DEFAULT_USE_CASE: &str = "General purpose data storage";

/// One data-structure reference card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique, stable key (e.g., "binary-search-tree")
    pub id: String,

    /// Display name (e.g., "Binary Search Tree")
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Classification
    pub category: Category,

    /// Big-O display strings
    pub complexity: Complexity,

    /// Search keywords, in display order
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Glyph identifier, opaque to the query engine
    #[serde(default)]
    pub icon: Icon,

    /// Typical applications shown on the detail card
    #[serde(default)]
    pub use_cases: Vec<String>,
}

impl CatalogEntry {
    /// Create a new entry with no keywords, default icon and no use cases
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        complexity: Complexity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category,
            complexity,
            keywords: Vec::new(),
            icon: Icon::default(),
            use_cases: Vec::new(),
        }
    }

    /// Builder-style keyword setter
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style icon setter
    #[must_use]
    pub const fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    /// Builder-style use case setter
    #[must_use]
    pub fn with_use_cases<I, S>(mut self, use_cases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.use_cases = use_cases.into_iter().map(Into::into).collect();
        self
    }

    /// Use cases, or the generic fallback when none are listed
    #[must_use]
    pub fn use_cases_or_default(&self) -> Vec<&str> {
        if self.use_cases.is_empty() {
            vec![DEFAULT_USE_CASE]
        } else {
            self.use_cases.iter().map(String::as_str).collect()
        }
    }

    /// Check the fields the catalog requires to be present
    ///
    /// # Errors
    /// Returns a message naming the first missing field
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err(format!("Entry '{}' has an empty id", self.name));
        }
        if self.name.trim().is_empty() {
            return Err(format!("Entry '{}' has an empty name", self.id));
        }
        if let Some(label) = self.complexity.first_missing() {
            return Err(format!(
                "Entry '{}' is missing its {label} complexity",
                self.id
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> CatalogEntry {
        CatalogEntry::new(
            "stack",
            "Stack",
            "LIFO structure",
            Category::Linear,
            Complexity::new("O(1)", "O(n)", "O(1)", "O(n)"),
        )
        .with_keywords(["lifo", "push", "pop"])
    }

    #[test]
    fn test_entry_creation() {
        let entry = stack();
        assert_eq!(entry.id, "stack");
        assert_eq!(entry.category, Category::Linear);
        assert_eq!(entry.keywords, ["lifo", "push", "pop"]);
        assert_eq!(entry.icon, Icon::Box);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_use_cases_fallback() {
        let entry = stack();
        assert_eq!(entry.use_cases_or_default(), [DEFAULT_USE_CASE]);

        let entry = entry.with_use_cases(["Undo"]);
        assert_eq!(entry.use_cases_or_default(), ["Undo"]);
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut entry = stack();
        entry.id = "  ".to_string();
        assert!(entry.validate().unwrap_err().contains("empty id"));

        let mut entry = stack();
        entry.name = String::new();
        assert!(entry.validate().unwrap_err().contains("empty name"));

        let mut entry = stack();
        entry.complexity.space = String::new();
        assert!(entry.validate().unwrap_err().contains("Space"));
    }
}
