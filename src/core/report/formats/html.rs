//! HTML report generator
//!
//! Generates a self-contained HTML page of reference cards with embedded CSS.
//! All catalog text is escaped before substitution.

use crate::core::get_version;
use crate::core::models::{CatalogEntry, Category, ComplexityClass};
use crate::core::report::{
    fill_template, ReportContext, ReportGenerator, EMPTY_HINT, EMPTY_TITLE,
};
use std::error::Error;
use std::fmt::Write;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/catalog.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let cards = if ctx.is_empty() {
            format!(
                "  <div class=\"empty\">\n    <h3>{EMPTY_TITLE}</h3>\n    <p>{}</p>\n  </div>\n",
                escape_html(EMPTY_HINT)
            )
        } else {
            let mut html = String::from("  <div class=\"grid\">\n");
            for entry in ctx.entries {
                html.push_str(&Self::generate_card(ctx, entry));
            }
            html.push_str("  </div>\n");
            html
        };
        fill_template(
            HTML_TEMPLATE,
            &[
                ("heading", escape_html(&ctx.heading()).as_str()),
                ("count_line", escape_html(&ctx.count_line()).as_str()),
                ("cards", cards.as_str()),
                ("version", get_version()),
            ],
        )
    }

    /// Badge class for a category
    const fn category_class(category: Category) -> &'static str {
        match category {
            Category::Linear => "cat-linear",
            Category::Tree => "cat-tree",
            Category::Graph => "cat-graph",
            Category::Hash => "cat-hash",
            Category::NonLinear => "cat-other",
        }
    }

    /// Generate one card
    fn generate_card(ctx: &ReportContext, entry: &CatalogEntry) -> String {
        let mut html = String::new();

        let _ = writeln!(
            html,
            "    <article class=\"card\" id=\"{}\">",
            escape_html(&entry.id)
        );
        let _ = writeln!(html, "      <h3>{}</h3>", escape_html(&entry.name));
        let _ = writeln!(
            html,
            "      <span class=\"badge {}\">{}</span>",
            Self::category_class(entry.category),
            entry.category
        );
        let _ = writeln!(html, "      <p>{}</p>", escape_html(&entry.description));

        html.push_str("      <div class=\"complexity\">\n");
        for (label, value) in entry.complexity.labelled() {
            let _ = writeln!(
                html,
                "        <div><span>{label}</span><code class=\"{}\">{}</code></div>",
                ComplexityClass::classify(value).css_class(),
                escape_html(value)
            );
        }
        html.push_str("      </div>\n");

        let (shown, hidden) = ctx.keywords_for(entry);
        if !shown.is_empty() {
            html.push_str("      <div>");
            for keyword in shown {
                let _ = write!(
                    html,
                    "<span class=\"keyword\">{}</span>",
                    escape_html(keyword)
                );
            }
            if hidden > 0 {
                let _ = write!(html, "<span class=\"keyword\">+{hidden} more</span>");
            }
            html.push_str("</div>\n");
        }

        if ctx.detail {
            html.push_str("      <h4>Common Use Cases</h4>\n      <ul>\n");
            for use_case in entry.use_cases_or_default() {
                let _ = writeln!(html, "        <li>{}</li>", escape_html(use_case));
            }
            html.push_str("      </ul>\n");
        }

        html.push_str("    </article>\n");
        html
    }
}

/// Escape text for HTML element and attribute content
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::models::{CategoryFilter, Complexity};

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & 'Jerry'</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_all() {
        let catalog = Catalog::builtin();
        let entries = catalog.search(&CategoryFilter::All, "");
        let ctx = ReportContext::new(&entries, "", CategoryFilter::All);
        let html = HtmlReporter::new().render(&ctx).unwrap();

        assert!(html.contains("<h1>All Data Structures</h1>"));
        assert_eq!(html.matches("<article class=\"card\"").count(), 10);
        assert!(html.contains("<code class=\"cx-log\">O(log n)</code>"));
        assert!(html.contains("<span class=\"badge cat-graph\">Graph</span>"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_search_query_is_escaped() {
        let entries = Vec::new();
        let ctx = ReportContext::new(&entries, "<script>", CategoryFilter::All);
        let html = HtmlReporter::new().render(&ctx).unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("for \"<script>\""));
        assert!(html.contains(EMPTY_TITLE));
    }

    #[test]
    fn test_query_placeholders_are_not_expanded() {
        let entries = Vec::new();
        let ctx = ReportContext::new(&entries, "{{cards}}{{version}}", CategoryFilter::All);
        let html = HtmlReporter::new().render(&ctx).unwrap();
        assert!(html.contains("{{cards}}{{version}}"));
        assert_eq!(html.matches(EMPTY_TITLE).count(), 1);
    }

    #[test]
    fn test_entry_text_is_escaped() {
        let entry = CatalogEntry::new(
            "evil",
            "<b>Evil</b>",
            "a & b",
            Category::Graph,
            Complexity::new("O(1)", "O(1)", "O(1)", "O(1)"),
        );
        let entries = vec![&entry];
        let ctx = ReportContext::new(&entries, "", CategoryFilter::All);
        let html = HtmlReporter::new().render(&ctx).unwrap();
        assert!(html.contains("<h3>&lt;b&gt;Evil&lt;/b&gt;</h3>"));
        assert!(html.contains("<p>a &amp; b</p>"));
    }
}
