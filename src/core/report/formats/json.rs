//! JSON report generator

use crate::core::models::CatalogEntry;
use crate::core::report::{ReportContext, ReportGenerator};
use serde::Serialize;
use std::error::Error;

/// Serialized shape of a JSON report
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    heading: String,
    query: &'a str,
    category: String,
    count: usize,
    entries: &'a [&'a CatalogEntry],
}

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let report = JsonReport {
            heading: ctx.heading(),
            query: ctx.query,
            category: ctx.category.to_string(),
            count: ctx.entries.len(),
            entries: ctx.entries,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::models::{Category, CategoryFilter};

    #[test]
    fn test_render_json() {
        let catalog = Catalog::builtin();
        let filter = CategoryFilter::Only(Category::Graph);
        let entries = catalog.search(&filter, "");
        let ctx = ReportContext::new(&entries, "", filter);
        let json = JsonReporter::new().render(&ctx).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["category"], "Graph");
        assert_eq!(value["count"], 1);
        assert_eq!(value["entries"][0]["id"], "graph");
        assert_eq!(value["entries"][0]["complexity"]["search"], "O(V + E)");
        assert_eq!(value["entries"][0]["icon"], "Network");
    }
}
