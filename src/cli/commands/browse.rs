//! Browse command handlers: `list`, `search`, `show`, `categories`
//!
//! Each handler filters the catalog, wraps the result in a `ReportContext`, and
//! hands it to the reporter for the requested format.

use crate::args::OutputArgs;
use ds_explorer::config::Config;
use ds_explorer::core::catalog::Catalog;
use ds_explorer::core::models::{CatalogEntry, CategoryFilter};
use ds_explorer::core::report::{ReportContext, ReportFormat};
use ds_explorer::{info, verbose};
use std::path::PathBuf;

/// Run the `list` command
///
/// # Errors
/// Returns an error if the report cannot be rendered or written
pub fn run_list(
    catalog: &Catalog,
    category: CategoryFilter,
    output: &OutputArgs,
    config: &Config,
) -> Result<(), String> {
    let entries = catalog.search(&category, "");
    info!("list: {} of {} entries for {category}", entries.len(), catalog.len());
    let ctx = ReportContext::new(&entries, "", category);
    emit(&ctx, output, config, &default_stem(category, ""))
}

/// Run the `search` command
///
/// # Errors
/// Returns an error if the report cannot be rendered or written
pub fn run_search(
    catalog: &Catalog,
    query: &str,
    category: CategoryFilter,
    output: &OutputArgs,
    config: &Config,
) -> Result<(), String> {
    let entries = catalog.search(&category, query);
    info!(
        "search {query:?}: {} of {} entries for {category}",
        entries.len(),
        catalog.len()
    );
    let ctx = ReportContext::new(&entries, query, category);
    emit(&ctx, output, config, &default_stem(category, query))
}

/// Run the `show` command
///
/// # Errors
/// Returns an error if `id` is unknown or the report cannot be written
pub fn run_show(
    catalog: &Catalog,
    id: &str,
    output: &OutputArgs,
    config: &Config,
) -> Result<(), String> {
    let entry = catalog.get(id).ok_or_else(|| {
        let known: Vec<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
        format!("Unknown entry id '{id}'. Known ids: {}", known.join(", "))
    })?;
    let entries: Vec<&CatalogEntry> = vec![entry];
    let ctx = ReportContext::new(&entries, "", CategoryFilter::All).with_detail(true);
    emit(&ctx, output, config, id)
}

/// Run the `categories` command
pub fn run_categories(catalog: &Catalog) {
    for (category, count) in catalog.count_by_category() {
        println!("{category:<12} {count}");
    }
}

/// Render `ctx` and print it or write it to the chosen destination
fn emit(
    ctx: &ReportContext,
    output: &OutputArgs,
    config: &Config,
    stem: &str,
) -> Result<(), String> {
    let reporter = output.format.reporter();
    match destination(output, config, stem) {
        Some(path) => {
            reporter
                .generate(ctx, &path)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            println!("✓ Report written: {}", path.display());
        }
        None => {
            let rendered = reporter
                .render(ctx)
                .map_err(|e| format!("Failed to render {} report: {e}", output.format))?;
            print!("{rendered}");
            if output.format == ReportFormat::Json {
                println!();
            }
        }
    }
    Ok(())
}

/// Output path for a report, or `None` for stdout
fn destination(output: &OutputArgs, config: &Config, stem: &str) -> Option<PathBuf> {
    if let Some(path) = &output.output {
        return Some(path.clone());
    }
    if output.save {
        let path = PathBuf::from(&config.paths.reports_dir)
            .join(format!("{stem}.{}", output.format.extension()));
        verbose!("Saving report under reports_dir: {}", path.display());
        return Some(path);
    }
    None
}

/// File stem for saved reports, e.g. `tree`, `search-binary-tree`
fn default_stem(category: CategoryFilter, query: &str) -> String {
    let base = match category {
        CategoryFilter::All => "catalog".to_string(),
        CategoryFilter::Only(c) => c.as_str().to_lowercase(),
    };
    if query.is_empty() {
        return base;
    }
    let slug: String = query
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    format!("{base}-search-{}", slug.trim_matches('-'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_explorer::core::models::Category;

    fn output_args(format: ReportFormat, save: bool) -> OutputArgs {
        OutputArgs {
            format,
            output: None,
            save,
        }
    }

    #[test]
    fn test_default_stem() {
        assert_eq!(default_stem(CategoryFilter::All, ""), "catalog");
        assert_eq!(
            default_stem(CategoryFilter::Only(Category::NonLinear), ""),
            "non-linear"
        );
        assert_eq!(
            default_stem(CategoryFilter::All, "Binary Tree!"),
            "catalog-search-binary-tree"
        );
    }

    #[test]
    fn test_destination_stdout_by_default() {
        let config = Config::from_defaults();
        assert!(destination(&output_args(ReportFormat::Text, false), &config, "x").is_none());
    }

    #[test]
    fn test_destination_uses_reports_dir_when_saving() {
        let mut config = Config::from_defaults();
        config.paths.reports_dir = "/tmp/reports".to_string();
        let path = destination(&output_args(ReportFormat::Html, true), &config, "tree").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/reports/tree.html"));
    }

    #[test]
    fn test_show_unknown_id() {
        let config = Config::from_defaults();
        let err = run_show(
            Catalog::builtin(),
            "skip-list",
            &output_args(ReportFormat::Text, false),
            &config,
        )
        .unwrap_err();
        assert!(err.contains("Unknown entry id 'skip-list'"));
        assert!(err.contains("binary-search-tree"));
    }

    #[test]
    fn test_show_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stack.md");
        let config = Config::from_defaults();
        let args = OutputArgs {
            format: ReportFormat::Markdown,
            output: Some(path.clone()),
            save: false,
        };
        run_show(Catalog::builtin(), "stack", &args, &config).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("## Stack"));
        assert!(written.contains("- Function call management"));
    }
}
