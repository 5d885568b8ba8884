//! Markdown report generator
//!
//! Generates catalog reports in Markdown. Each card carries a complexity table
//! so the output renders well in GitHub, GitLab, and VS Code.

use crate::core::get_version;
use crate::core::models::{CatalogEntry, ComplexityClass};
use crate::core::report::{
    fill_template, ReportContext, ReportGenerator, EMPTY_HINT, EMPTY_TITLE,
};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/catalog.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let cards = if ctx.is_empty() {
            format!("**{EMPTY_TITLE}**\n\n{EMPTY_HINT}\n")
        } else {
            ctx.entries
                .iter()
                .map(|entry| Self::generate_card(ctx, entry))
                .collect::<Vec<_>>()
                .join("\n")
        };
        fill_template(
            MARKDOWN_TEMPLATE,
            &[
                ("heading", ctx.heading().as_str()),
                ("count_line", ctx.count_line().as_str()),
                ("cards", cards.as_str()),
                ("version", get_version()),
            ],
        )
    }

    /// Generate one reference card
    fn generate_card(ctx: &ReportContext, entry: &CatalogEntry) -> String {
        let mut card = String::new();

        let _ = writeln!(card, "## {}\n", entry.name);
        let _ = writeln!(card, "`{}` · id: `{}`\n", entry.category, entry.id);
        let _ = writeln!(card, "{}\n", entry.description);

        card.push_str("| Insert | Search | Delete | Space |\n");
        card.push_str("|---|---|---|---|\n");
        let cells: Vec<String> = entry
            .complexity
            .labelled()
            .iter()
            .map(|(_, value)| {
                format!("`{value}` {}", ComplexityClass::classify(value).trend())
            })
            .collect();
        let _ = writeln!(card, "| {} |\n", cells.join(" | "));

        let (shown, hidden) = ctx.keywords_for(entry);
        if !shown.is_empty() {
            let mut keywords = shown.join(", ");
            if hidden > 0 {
                let _ = write!(keywords, ", +{hidden} more");
            }
            let _ = writeln!(card, "**Keywords:** {keywords}\n");
        }

        if ctx.detail {
            card.push_str("**Common use cases:**\n\n");
            for use_case in entry.use_cases_or_default() {
                let _ = writeln!(card, "- {use_case}");
            }
        }

        card
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::models::{Category, CategoryFilter};

    #[test]
    fn test_render_category_page() {
        let catalog = Catalog::builtin();
        let filter = CategoryFilter::Only(Category::Hash);
        let entries = catalog.search(&filter, "");
        let ctx = ReportContext::new(&entries, "", filter);
        let md = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(md.starts_with("# Hash Data Structures\n"));
        assert!(md.contains("_1 structure found_"));
        assert!(md.contains("## Hash Table"));
        assert!(md.contains("| `O(1)` ↓ | `O(1)` ↓ | `O(1)` ↓ | `O(n)` ↑ |"));
        assert!(md.contains("**Keywords:** hash, key, value, collision, +2 more"));
        assert!(!md.contains("{{"));
    }

    #[test]
    fn test_render_empty() {
        let entries = Vec::new();
        let ctx = ReportContext::new(&entries, "nothing", CategoryFilter::All);
        let md = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(md.contains("# Search Results"));
        assert!(md.contains(EMPTY_TITLE));
    }

    #[test]
    fn test_render_detail_lists_use_cases() {
        let catalog = Catalog::builtin();
        let entries = vec![catalog.get("heap").unwrap()];
        let ctx = ReportContext::new(&entries, "", CategoryFilter::All).with_detail(true);
        let md = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(md.contains("- Heap sort algorithm"));
        assert!(md.contains("`O(log n)` –"));
    }

    #[test]
    fn test_query_placeholders_are_not_expanded() {
        let entries = Vec::new();
        let ctx = ReportContext::new(&entries, "{{cards}} {{version}}", CategoryFilter::All);
        let md = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(md.contains("_0 structures found for \"{{cards}} {{version}}\"_"));
        assert_eq!(md.matches(EMPTY_TITLE).count(), 1);
    }
}
