//! Report generation for catalog results
//!
//! Renders a filtered slice of the catalog as reference cards in several
//! formats (plain text, Markdown, HTML, JSON). A report either lists cards
//! (the result page) or shows one card in full (the detail view).

pub mod formats;

use crate::core::models::{CatalogEntry, CategoryFilter};
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{HtmlReporter, JsonReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Keywords shown on a summary card before collapsing into "+N more"
pub const KEYWORD_PREVIEW: usize = 4;

/// Message shown when nothing matched
pub const EMPTY_TITLE: &str = "No data structures found";

/// Hint shown under [`EMPTY_TITLE`]
pub const EMPTY_HINT: &str =
    "Try adjusting your search query or filters to find what you're looking for.";

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Entries to render, in display order
    pub entries: &'a [&'a CatalogEntry],
    /// Query that produced the entries (may be empty)
    pub query: &'a str,
    /// Category selection that produced the entries
    pub category: CategoryFilter,
    /// Render full detail cards (all keywords, use cases)
    pub detail: bool,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context for a result list
    #[must_use]
    pub const fn new(
        entries: &'a [&'a CatalogEntry],
        query: &'a str,
        category: CategoryFilter,
    ) -> Self {
        Self {
            entries,
            query,
            category,
            detail: false,
        }
    }

    /// Switch to detail cards
    #[must_use]
    pub const fn with_detail(mut self, detail: bool) -> Self {
        self.detail = detail;
        self
    }

    /// Page heading
    #[must_use]
    pub fn heading(&self) -> String {
        if !self.query.is_empty() {
            "Search Results".to_string()
        } else if self.category.is_all() {
            "All Data Structures".to_string()
        } else {
            format!("{} Data Structures", self.category)
        }
    }

    /// Count line, e.g. `3 structures found for "tree"`
    #[must_use]
    pub fn count_line(&self) -> String {
        let n = self.entries.len();
        let plural = if n == 1 { "" } else { "s" };
        if self.query.is_empty() {
            format!("{n} structure{plural} found")
        } else {
            format!("{n} structure{plural} found for \"{}\"", self.query)
        }
    }

    /// Whether there is nothing to show
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keywords to print for `entry` and how many were left out
    #[must_use]
    pub fn keywords_for<'e>(&self, entry: &'e CatalogEntry) -> (&'e [String], usize) {
        if self.detail || entry.keywords.len() <= KEYWORD_PREVIEW {
            (&entry.keywords, 0)
        } else {
            (
                &entry.keywords[..KEYWORD_PREVIEW],
                entry.keywords.len() - KEYWORD_PREVIEW,
            )
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, content)?;
        crate::info!("Report written to {}", output_path.display());
        Ok(())
    }
}

/// Replace `{{name}}` placeholders in `template` in a single pass
///
/// Substituted text is never scanned again, so values may themselves contain
/// `{{...}}`. Unknown placeholders are left as they are.
#[must_use]
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let known = after.find("}}").and_then(|end| {
            let name = &after[..end];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, end))
        });
        match known {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
