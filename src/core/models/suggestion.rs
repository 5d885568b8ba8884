//! Search suggestion model

use serde::Serialize;
use std::fmt;

/// Where a suggestion came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// A structure name
    Structure,
    /// A keyword of some entry
    Keyword,
    /// A category name
    Category,
}

impl SuggestionKind {
    /// Lowercase label, also the id prefix
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Keyword => "keyword",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One autocomplete candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Deterministic id derived from the source (`structure-<entry id>`,
    /// `keyword-<text>`, `category-<name>`)
    pub id: String,
    /// Text shown to the user
    pub text: String,
    /// Source kind
    pub kind: SuggestionKind,
}

impl Suggestion {
    /// Suggestion for an entry name
    #[must_use]
    pub fn structure(entry_id: &str, name: &str) -> Self {
        Self::new(SuggestionKind::Structure, entry_id, name)
    }

    /// Suggestion for a keyword
    #[must_use]
    pub fn keyword(keyword: &str) -> Self {
        Self::new(SuggestionKind::Keyword, keyword, keyword)
    }

    /// Suggestion for a category name
    #[must_use]
    pub fn category(name: &str) -> Self {
        Self::new(SuggestionKind::Category, name, name)
    }

    fn new(kind: SuggestionKind, source: &str, text: &str) -> Self {
        Self {
            id: format!("{}-{source}", kind.as_str()),
            text: text.to_string(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_source() {
        assert_eq!(
            Suggestion::structure("binary-tree", "Binary Tree").id,
            "structure-binary-tree"
        );
        assert_eq!(Suggestion::keyword("lifo").id, "keyword-lifo");
        assert_eq!(Suggestion::category("Non-Linear").id, "category-Non-Linear");
    }

    #[test]
    fn test_structure_text_is_name() {
        let s = Suggestion::structure("binary-tree", "Binary Tree");
        assert_eq!(s.text, "Binary Tree");
        assert_eq!(s.kind, SuggestionKind::Structure);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&Suggestion::keyword("push")).unwrap();
        assert_eq!(json, r#"{"id":"keyword-push","text":"push","kind":"keyword"}"#);
    }
}
