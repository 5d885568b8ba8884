//! Autocomplete suggestions
//!
//! Emission order: for each entry in catalog order, its name (if it matches)
//! followed by its matching keywords; then matching category names in
//! [`Category::ALL`] order. Texts already emitted in the same call (compared
//! case-insensitively) are skipped, and the list is cut to `max_results`.

use crate::core::models::{CatalogEntry, Category, Suggestion};
use std::collections::HashSet;

/// Default cap on returned suggestions
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;

/// Default minimum query length (in characters) before suggesting
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

/// Tuning knobs for [`suggest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Maximum number of suggestions returned
    pub max_results: usize,
    /// Queries shorter than this many characters get no suggestions
    pub min_query_chars: usize,
}

impl SuggestOptions {
    /// Options with a custom result cap
    #[must_use]
    pub const fn with_max_results(max_results: usize) -> Self {
        Self {
            max_results,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
        }
    }
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self::with_max_results(DEFAULT_MAX_SUGGESTIONS)
    }
}

/// Running, per-call collection of suggestions with case-insensitive dedup
struct Collector {
    seen: HashSet<String>,
    out: Vec<Suggestion>,
}

impl Collector {
    fn new() -> Self {
        Self {
            seen: HashSet::new(),
            out: Vec::new(),
        }
    }

    fn push(&mut self, suggestion: Suggestion) {
        if self.seen.insert(suggestion.text.to_lowercase()) {
            self.out.push(suggestion);
        }
    }
}

/// Compute suggestions for a partial query
///
/// Returns an empty list when `query` is shorter than
/// `options.min_query_chars` characters.
///
/// # Examples
/// ```
/// use ds_explorer::core::catalog::Catalog;
/// use ds_explorer::core::query::{suggest, SuggestOptions};
///
/// let found = suggest(Catalog::builtin().entries(), "lif", &SuggestOptions::default());
/// assert_eq!(found[0].text, "lifo");
/// ```
#[must_use]
pub fn suggest(
    entries: &[CatalogEntry],
    query: &str,
    options: &SuggestOptions,
) -> Vec<Suggestion> {
    if query.chars().count() < options.min_query_chars {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    let mut collector = Collector::new();

    for entry in entries {
        if entry.name.to_lowercase().contains(&needle) {
            collector.push(Suggestion::structure(&entry.id, &entry.name));
        }
        for keyword in &entry.keywords {
            if keyword.to_lowercase().contains(&needle) {
                collector.push(Suggestion::keyword(keyword));
            }
        }
    }

    for category in Category::ALL {
        if category.as_str().to_lowercase().contains(&needle) {
            collector.push(Suggestion::category(category.as_str()));
        }
    }

    let mut suggestions = collector.out;
    suggestions.truncate(options.max_results);
    crate::debug!("suggest({query:?}) -> {} suggestions", suggestions.len());
    suggestions
}
