//! Complexity model
//!
//! Complexities are kept as display strings ("O(1)", "O(log n)", "O(V + E)").
//! [`ComplexityClass`] is a coarse reading of such a string for presentation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Big-O display strings for the four standard measures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complexity {
    /// Insertion time
    pub insert: String,
    /// Search time
    pub search: String,
    /// Deletion time
    pub delete: String,
    /// Space usage
    pub space: String,
}

impl Complexity {
    /// Create a complexity record
    #[must_use]
    pub fn new(
        insert: impl Into<String>,
        search: impl Into<String>,
        delete: impl Into<String>,
        space: impl Into<String>,
    ) -> Self {
        Self {
            insert: insert.into(),
            search: search.into(),
            delete: delete.into(),
            space: space.into(),
        }
    }

    /// Labelled measures in card order: Insert, Search, Delete, Space
    #[must_use]
    pub fn labelled(&self) -> [(&'static str, &str); 4] {
        [
            ("Insert", self.insert.as_str()),
            ("Search", self.search.as_str()),
            ("Delete", self.delete.as_str()),
            ("Space", self.space.as_str()),
        ]
    }

    /// Label of the first empty measure, if any
    #[must_use]
    pub fn first_missing(&self) -> Option<&'static str> {
        self.labelled()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| label)
    }
}

/// Coarse growth class of a complexity string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityClass {
    /// O(1)
    Constant,
    /// Anything mentioning a logarithm
    Logarithmic,
    /// n² or n^2
    Quadratic,
    /// Linear and everything else
    Other,
}

impl ComplexityClass {
    /// Classify a display string
    ///
    /// Checks run in order: constant, logarithmic, quadratic. Constant needs the
    /// bracketed expression to be exactly `1`, so "O(n1)" is not constant.
    #[must_use]
    pub fn classify(expr: &str) -> Self {
        if Self::inner(expr) == "1" {
            Self::Constant
        } else if expr.contains("log") {
            Self::Logarithmic
        } else if expr.contains("n²") || expr.contains("n^2") {
            Self::Quadratic
        } else {
            Self::Other
        }
    }

    /// Expression between `O(` and `)` with whitespace removed
    fn inner(expr: &str) -> String {
        let trimmed = expr.trim();
        let body = trimmed
            .strip_prefix("O(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        body.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// CSS class used by the HTML report
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Constant => "cx-constant",
            Self::Logarithmic => "cx-log",
            Self::Quadratic => "cx-quadratic",
            Self::Other => "cx-other",
        }
    }

    /// Trend marker used by text and Markdown output
    #[must_use]
    pub const fn trend(&self) -> &'static str {
        match self {
            Self::Constant => "↓",
            Self::Logarithmic => "–",
            Self::Quadratic | Self::Other => "↑",
        }
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Constant => "constant",
            Self::Logarithmic => "logarithmic",
            Self::Quadratic => "quadratic",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_notations() {
        assert_eq!(ComplexityClass::classify("O(1)"), ComplexityClass::Constant);
        assert_eq!(ComplexityClass::classify("O( 1 )"), ComplexityClass::Constant);
        assert_eq!(
            ComplexityClass::classify("O(log n)"),
            ComplexityClass::Logarithmic
        );
        assert_eq!(
            ComplexityClass::classify("O(n log n)"),
            ComplexityClass::Logarithmic
        );
        assert_eq!(ComplexityClass::classify("O(n²)"), ComplexityClass::Quadratic);
        assert_eq!(ComplexityClass::classify("O(n^2)"), ComplexityClass::Quadratic);
        assert_eq!(ComplexityClass::classify("O(n)"), ComplexityClass::Other);
        assert_eq!(ComplexityClass::classify("O(V + E)"), ComplexityClass::Other);
    }

    #[test]
    fn test_digit_one_elsewhere_is_not_constant() {
        assert_eq!(ComplexityClass::classify("O(n1)"), ComplexityClass::Other);
        assert_eq!(
            ComplexityClass::classify("O(10 log n)"),
            ComplexityClass::Logarithmic
        );
    }

    #[test]
    fn test_first_missing() {
        let full = Complexity::new("O(1)", "O(n)", "O(1)", "O(n)");
        assert_eq!(full.first_missing(), None);

        let partial = Complexity::new("O(1)", " ", "O(1)", "");
        assert_eq!(partial.first_missing(), Some("Search"));
    }

    #[test]
    fn test_labelled_order() {
        let cx = Complexity::new("a", "b", "c", "d");
        let labels: Vec<_> = cx.labelled().iter().map(|(l, v)| format!("{l}={v}")).collect();
        assert_eq!(labels, ["Insert=a", "Search=b", "Delete=c", "Space=d"]);
    }
}
