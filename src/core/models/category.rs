//! Category model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed classification tag attached to every catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Sequential structures (arrays, lists, stacks, queues)
    Linear,
    /// Non-sequential structures that are neither trees nor graphs
    #[serde(rename = "Non-Linear")]
    NonLinear,
    /// Hierarchical structures
    Tree,
    /// Vertex/edge structures
    Graph,
    /// Hash-based structures
    Hash,
}

impl Category {
    /// Every category in its defined display order
    pub const ALL: [Self; 5] = [
        Self::Linear,
        Self::NonLinear,
        Self::Tree,
        Self::Graph,
        Self::Hash,
    ];

    /// Display name used for matching and rendering (e.g., "Non-Linear")
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::NonLinear => "Non-Linear",
            Self::Tree => "Tree",
            Self::Graph => "Graph",
            Self::Hash => "Hash",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "non-linear" | "nonlinear" | "non_linear" => Ok(Self::NonLinear),
            "tree" => Ok(Self::Tree),
            "graph" => Ok(Self::Graph),
            "hash" => Ok(Self::Hash),
            _ => Err(format!(
                "Unknown category: '{s}' (expected one of: Linear, Non-Linear, Tree, Graph, Hash)"
            )),
        }
    }
}

/// Category selection coming from the user
///
/// Kept apart from [`Category`] so the "All" sentinel is never compared
/// against an entry's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category narrowing
    #[default]
    All,
    /// Keep only entries of this category
    Only(Category),
}

impl CategoryFilter {
    /// Whether an entry with `category` passes this filter
    #[must_use]
    pub fn admits(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }

    /// Whether this is the "All" selection
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        category.map_or(Self::All, Self::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "any" => Ok(Self::All),
            _ => s.parse::<Category>().map(Self::Only),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        let names: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
        assert_eq!(names, ["Linear", "Non-Linear", "Tree", "Graph", "Hash"]);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("tree".parse::<Category>(), Ok(Category::Tree));
        assert_eq!("HASH".parse::<Category>(), Ok(Category::Hash));
        assert_eq!("Non-Linear".parse::<Category>(), Ok(Category::NonLinear));
        assert_eq!("nonlinear".parse::<Category>(), Ok(Category::NonLinear));
        assert!("forest".parse::<Category>().is_err());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!("any".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "graph".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Graph))
        );
        assert!("everything".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_filter_admits() {
        assert!(CategoryFilter::All.admits(Category::Graph));
        assert!(CategoryFilter::Only(Category::Tree).admits(Category::Tree));
        assert!(!CategoryFilter::Only(Category::Tree).admits(Category::Linear));
    }

    #[test]
    fn test_filter_default_and_display() {
        assert!(CategoryFilter::default().is_all());
        assert_eq!(CategoryFilter::All.to_string(), "All");
        assert_eq!(
            CategoryFilter::from(Category::NonLinear).to_string(),
            "Non-Linear"
        );
        assert_eq!(CategoryFilter::from(None), CategoryFilter::All);
    }

    #[test]
    fn test_serde_uses_display_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            category: Category,
        }
        let parsed: Wrapper = toml::from_str("category = \"Non-Linear\"").unwrap();
        assert_eq!(parsed.category, Category::NonLinear);
    }
}
