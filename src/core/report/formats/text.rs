//! Plain-text report generator
//!
//! Cards sized for a terminal, one block per entry.

use crate::core::models::{CatalogEntry, ComplexityClass};
use crate::core::report::{ReportContext, ReportGenerator, EMPTY_HINT, EMPTY_TITLE};
use std::error::Error;
use std::fmt::Write;

/// Terminal card renderer
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_card(out: &mut String, ctx: &ReportContext, entry: &CatalogEntry) {
        let _ = writeln!(
            out,
            "{} {}  [{}]",
            entry.icon.glyph(),
            entry.name,
            entry.category
        );
        let _ = writeln!(out, "  {}", entry.description);

        let cells: Vec<String> = entry
            .complexity
            .labelled()
            .iter()
            .map(|(label, value)| {
                format!("{label} {value} {}", ComplexityClass::classify(value).trend())
            })
            .collect();
        let _ = writeln!(out, "  {}", cells.join("   "));

        let (shown, hidden) = ctx.keywords_for(entry);
        if !shown.is_empty() {
            let _ = write!(out, "  {}", shown.join(" · "));
            if hidden > 0 {
                let _ = write!(out, "  +{hidden} more");
            }
            out.push('\n');
        }

        if ctx.detail {
            out.push_str("  Use cases:\n");
            for use_case in entry.use_cases_or_default() {
                let _ = writeln!(out, "    - {use_case}");
            }
        }
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();

        if ctx.detail {
            // Detail view shows the cards only
            for entry in ctx.entries {
                Self::write_card(&mut out, ctx, entry);
            }
            return Ok(out);
        }

        let _ = writeln!(out, "{}", ctx.heading());
        let _ = writeln!(out, "{}", ctx.count_line());
        out.push('\n');

        if ctx.is_empty() {
            let _ = writeln!(out, "{EMPTY_TITLE}");
            let _ = writeln!(out, "{EMPTY_HINT}");
            return Ok(out);
        }

        for entry in ctx.entries {
            Self::write_card(&mut out, ctx, entry);
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::models::CategoryFilter;

    #[test]
    fn test_render_list() {
        let catalog = Catalog::builtin();
        let entries = catalog.search(&CategoryFilter::All, "stack");
        let ctx = ReportContext::new(&entries, "stack", CategoryFilter::All);
        let out = TextReporter::new().render(&ctx).unwrap();

        assert!(out.starts_with("Search Results\n1 structure found for \"stack\"\n"));
        assert!(out.contains("☰ Stack  [Linear]"));
        assert!(out.contains("Insert O(1) ↓"));
        assert!(out.contains("lifo · push · pop · top  +1 more"));
        assert!(!out.contains("Use cases"));
    }

    #[test]
    fn test_render_empty() {
        let entries = Vec::new();
        let ctx = ReportContext::new(&entries, "zzz", CategoryFilter::All);
        let out = TextReporter::new().render(&ctx).unwrap();
        assert!(out.contains(EMPTY_TITLE));
        assert!(out.contains("0 structures found for \"zzz\""));
    }

    #[test]
    fn test_render_detail() {
        let catalog = Catalog::builtin();
        let entries = vec![catalog.get("graph").unwrap()];
        let ctx = ReportContext::new(&entries, "", CategoryFilter::All).with_detail(true);
        let out = TextReporter::new().render(&ctx).unwrap();

        assert!(out.starts_with("⋈ Graph  [Graph]"));
        assert!(out.contains("weighted"));
        assert!(!out.contains("more"));
        assert!(out.contains("    - GPS navigation"));
    }
}
