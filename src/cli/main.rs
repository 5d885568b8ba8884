//! Command-line interface entry point for `DsExplorer`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use ds_explorer::config::Config;
use ds_explorer::core::catalog::Catalog;
use ds_explorer::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use ds_explorer::{debug, error, info};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));
    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        if init_file_logging(log_path) {
            info!("File logging initialized at: {}", log_path.display());
        } else {
            eprintln!(
                "✗ Failed to initialize file logging at: {}",
                log_path.display()
            );
        }
    }

    if let Err(e) = run(args.command, &mut config, &defaults) {
        error!("{e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

/// Dispatch a subcommand
fn run(command: Command, config: &mut Config, defaults: &Config) -> Result<(), String> {
    debug!("Dispatching {command:?}");

    // Config management never needs the catalog
    let command = match command {
        Command::Config { subcommand } => {
            return commands::config::run(subcommand, config, defaults);
        }
        other => other,
    };

    let catalog_path = config.catalog_path();
    let catalog = Catalog::load(catalog_path.as_deref()).map_err(|e| e.to_string())?;
    info!("Catalog ready with {} entries", catalog.len());

    match command {
        Command::List { category, output } => {
            commands::browse::run_list(&catalog, category, &output, config)
        }
        Command::Search {
            query,
            category,
            output,
        } => commands::browse::run_search(&catalog, &query, category, &output, config),
        Command::Suggest { query, limit, json } => {
            commands::suggest::run(&catalog, &query, limit, json, config.suggest_options())
        }
        Command::Show { id, output } => commands::browse::run_show(&catalog, &id, &output, config),
        Command::Categories => {
            commands::browse::run_categories(&catalog);
            Ok(())
        }
        Command::Explore => commands::explore::run(&catalog, config.suggest_options()),
        Command::Config { .. } => unreachable!("handled above"),
    }
}
