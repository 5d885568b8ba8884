//! Interactive explore session
//!
//! Reads one command per line. The session owns the only mutable state in the
//! program: the current query and category filter. Every line re-runs the
//! query engine from scratch.

use ds_explorer::core::catalog::Catalog;
use ds_explorer::core::models::CategoryFilter;
use ds_explorer::core::query::SuggestOptions;
use ds_explorer::core::report::ReportContext;
use ds_explorer::info;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  <text>              search for <text>
  :category <name>    filter by category (all, linear, non-linear, tree, graph, hash)
  :clear              reset query and category
  :help               show this help
  :quit               leave";

/// What the loop should do after a line
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// Current query and category
struct Session<'a> {
    catalog: &'a Catalog,
    options: SuggestOptions,
    query: String,
    category: CategoryFilter,
}

impl<'a> Session<'a> {
    fn new(catalog: &'a Catalog, options: SuggestOptions) -> Self {
        Self {
            catalog,
            options,
            query: String::new(),
            category: CategoryFilter::All,
        }
    }

    fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Step> {
        let line = line.trim();
        match line.split_once(char::is_whitespace).unwrap_or((line, "")) {
            (":quit" | ":q" | ":exit", _) => return Ok(Step::Quit),
            (":help" | ":h", _) => {
                writeln!(out, "{HELP}")?;
                return Ok(Step::Continue);
            }
            (":clear", _) => {
                self.query.clear();
                self.category = CategoryFilter::All;
            }
            (":category" | ":c", arg) => match arg.trim().parse::<CategoryFilter>() {
                Ok(category) => self.category = category,
                Err(e) => {
                    writeln!(out, "✗ {e}")?;
                    return Ok(Step::Continue);
                }
            },
            (cmd, _) if cmd.starts_with(':') => {
                writeln!(out, "✗ Unknown command '{cmd}' (try :help)")?;
                return Ok(Step::Continue);
            }
            _ => {
                self.query = line.to_string();
                self.write_suggestions(out)?;
            }
        }
        self.write_results(out)?;
        Ok(Step::Continue)
    }

    fn write_suggestions<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let suggestions = self.catalog.suggest(&self.query, &self.options);
        if suggestions.is_empty() {
            return Ok(());
        }
        let shown: Vec<String> = suggestions
            .iter()
            .map(|s| format!("{} ({})", s.text, s.kind))
            .collect();
        writeln!(out, "Suggestions: {}", shown.join(", "))
    }

    fn write_results<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let entries = self.catalog.search(&self.category, &self.query);
        let ctx = ReportContext::new(&entries, &self.query, self.category);
        writeln!(out, "{}: {}", ctx.heading(), ctx.count_line())?;
        for entry in &entries {
            writeln!(
                out,
                "  {} {:<20} [{}]",
                entry.icon.glyph(),
                entry.name,
                entry.category
            )?;
        }
        Ok(())
    }
}

/// Run the session over `input`, writing to `out`, until `:quit` or end of input
///
/// # Errors
/// Returns an error if reading input or writing output fails
pub fn run_with<R: BufRead, W: Write>(
    catalog: &Catalog,
    options: SuggestOptions,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    let mut session = Session::new(catalog, options);
    writeln!(out, "DsExplorer interactive search (:help for commands)")?;
    session.write_results(out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if session.handle(&line, out)? == Step::Quit {
            break;
        }
        out.flush()?;
    }
    info!("explore session ended");
    Ok(())
}

/// Run the session on stdin/stdout
///
/// # Errors
/// Returns an error if stdin or stdout fail
pub fn run(catalog: &Catalog, options: SuggestOptions) -> Result<(), String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_with(catalog, options, stdin.lock(), &mut stdout)
        .map_err(|e| format!("Explore session failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn transcript(input: &str) -> String {
        let mut out = Vec::new();
        run_with(
            Catalog::builtin(),
            SuggestOptions::default(),
            Cursor::new(input.to_string()),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_starts_with_full_catalog() {
        let out = transcript(":quit\n");
        assert!(out.contains("All Data Structures: 10 structures found"));
    }

    #[test]
    fn test_query_prints_suggestions_and_results() {
        let out = transcript("lifo\n:quit\n");
        assert!(out.contains("Suggestions: lifo (keyword)"));
        assert!(out.contains("Search Results: 1 structure found for \"lifo\""));
        assert!(out.contains("Stack"));
    }

    #[test]
    fn test_category_then_clear() {
        let out = transcript(":category tree\n:clear\n");
        assert!(out.contains("Tree Data Structures: 4 structures found"));
        assert_eq!(out.matches("All Data Structures: 10 structures found").count(), 2);
    }

    #[test]
    fn test_bad_category_keeps_state() {
        let out = transcript(":category forest\n");
        assert!(out.contains("✗ Unknown category: 'forest'"));
    }

    #[test]
    fn test_unknown_command() {
        let out = transcript(":frobnicate\n");
        assert!(out.contains("Unknown command ':frobnicate'"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let out = transcript(":q\nstack\n");
        assert!(!out.contains("Search Results"));
    }
}
