//! Category and free-text filtering

use crate::core::models::{CatalogEntry, CategoryFilter};

/// Narrow `entries` by category, then by free-text query
///
/// The category check is exact. The text check is a case-insensitive
/// substring match against the name, description, any keyword, or the
/// category name; an empty query keeps everything that passed the category
/// check. Catalog order is preserved.
///
/// # Examples
/// ```
/// use ds_explorer::core::catalog::Catalog;
/// use ds_explorer::core::models::{Category, CategoryFilter};
/// use ds_explorer::core::query::filter;
///
/// let catalog = Catalog::builtin();
/// let trees = filter(catalog.entries(), &CategoryFilter::Only(Category::Tree), "");
/// assert_eq!(trees.len(), 4);
/// ```
#[must_use]
pub fn filter<'a>(
    entries: &'a [CatalogEntry],
    category: &CategoryFilter,
    query: &str,
) -> Vec<&'a CatalogEntry> {
    let needle = query.to_lowercase();
    let results: Vec<&CatalogEntry> = entries
        .iter()
        .filter(|entry| category.admits(entry.category))
        .filter(|entry| needle.is_empty() || matches_query(entry, &needle))
        .collect();

    crate::debug!(
        "filter(category={category}, query={query:?}) kept {}/{}",
        results.len(),
        entries.len()
    );
    results
}

/// Whether `entry` contains the already-lowercased `needle` in any
/// searchable field
#[must_use]
pub fn matches_query(entry: &CatalogEntry, needle: &str) -> bool {
    entry.name.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle)
        || entry
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(needle))
        || entry.category.as_str().to_lowercase().contains(needle)
}
