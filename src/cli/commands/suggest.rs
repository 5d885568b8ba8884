//! Suggest command handler

use ds_explorer::core::catalog::Catalog;
use ds_explorer::core::models::Suggestion;
use ds_explorer::core::query::SuggestOptions;
use ds_explorer::{debug, verbose};

/// Run the `suggest` command
///
/// # Errors
/// Returns an error if JSON output cannot be serialized
pub fn run(
    catalog: &Catalog,
    query: &str,
    limit: Option<usize>,
    json: bool,
    defaults: SuggestOptions,
) -> Result<(), String> {
    let options = SuggestOptions {
        max_results: limit.unwrap_or(defaults.max_results),
        ..defaults
    };
    debug!("suggest options: {options:?}");

    if query.chars().count() < options.min_query_chars {
        verbose!(
            "Query shorter than {} characters; no suggestions",
            options.min_query_chars
        );
    }

    let suggestions = catalog.suggest(query, &options);
    if json {
        let rendered = serde_json::to_string_pretty(&suggestions)
            .map_err(|e| format!("Failed to serialize suggestions: {e}"))?;
        println!("{rendered}");
    } else {
        for line in format_lines(&suggestions) {
            println!("{line}");
        }
    }
    Ok(())
}

/// One display line per suggestion: `<text>  (<kind>)`
fn format_lines(suggestions: &[Suggestion]) -> Vec<String> {
    suggestions
        .iter()
        .map(|s| format!("{}  ({})", s.text, s.kind))
        .collect()
}
