use anyhow::{Context, Result, bail};
use clap::Parser;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;

use goto_completion::{build_suggestions, resolve_destination};
use goto_store::KeywordStore;

use crate::cli::{Cli, Commands, join_query};
use crate::config::Config;
use crate::launch::Launcher;

mod cli;
mod config;
mod interactive;
mod launch;
mod log;
mod render;

fn main() -> Result<()> {
    let cli = Cli::parse();

    log::init_logger(cli.verbose);

    match dotenvy::dotenv() {
        Ok(path) => ::log::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => ::log::warn!("Failed to load .env: {}", e),
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    let store_path = cli.store.clone().unwrap_or_else(|| config.store_path.clone());
    let store = KeywordStore::open(&store_path)
        .with_context(|| format!("Failed to open keyword store {}", store_path.display()))?;
    if store.is_first_run() {
        ::log::info!(
            "Created keyword store with default keywords at {}",
            store.path().display()
        );
    }

    let launcher = Launcher::new(config.open_command.clone());
    run_command(cli.command, store, &launcher)
}

fn run_command(command: Commands, mut store: KeywordStore, launcher: &Launcher) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Suggest { query, json } => {
            let snapshot = store.snapshot();
            let list =
                build_suggestions(&snapshot.keywords, &snapshot.fallback, &join_query(&query));
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&list)?)?;
            } else {
                write!(stdout, "{}", render::format_suggestions(&list))?;
            }
        }

        Commands::Open { query, print } => {
            let query = join_query(&query);
            let snapshot = store.snapshot();
            match resolve_destination(&snapshot.keywords, &snapshot.fallback, &query) {
                None => ::log::info!("Nothing to open for {:?}", query),
                Some(destination) if print => writeln!(stdout, "{destination}")?,
                Some(destination) => launcher.launch(&destination)?,
            }
        }

        Commands::Add {
            keyword,
            destination,
        } => {
            store.set(&keyword, &destination)?;
            writeln!(stdout, "{} => {}", keyword.trim(), destination.trim())?;
        }

        Commands::Remove { keyword } => {
            if !store.remove(&keyword)? {
                bail!("No keyword named {:?}", keyword);
            }
        }

        Commands::List { json } => {
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(store.keywords())?)?;
            } else {
                write!(
                    stdout,
                    "{}",
                    render::format_keywords(store.keywords(), store.search_engine())
                )?;
            }
        }

        Commands::SearchEngine { template } => match template {
            Some(template) => store.set_search_engine(&template)?,
            None if store.search_engine().is_empty() => {
                writeln!(stdout, "(no search fallback)")?
            }
            None => writeln!(stdout, "{}", store.search_engine())?,
        },

        Commands::Import { file } => {
            let entries = read_import_file(&file)?;
            let report = store.replace_all(entries)?;
            for renamed in &report.renamed {
                ::log::warn!("Reserved keyword stored as {}", renamed);
            }
            writeln!(
                stdout,
                "Imported {} keyword(s), skipped {} blank row(s)",
                report.imported, report.skipped
            )?;
        }

        Commands::Reset { yes } => {
            if !yes {
                bail!("Resetting replaces every keyword with the defaults; pass --yes to confirm");
            }
            store.reset()?;
        }

        Commands::Interactive { print } => {
            drop(stdout);
            let mut session = interactive::Session::new(store);
            let launcher = (!print).then_some(launcher);
            interactive::run(&mut session, io::stdin().lock(), io::stdout(), launcher)?;
        }
    }

    Ok(())
}

/// Read a JSON object of keyword -> destination
///
/// Non-string values (such as the internal settings entry of an exported
/// store file) are skipped.
fn read_import_file(path: &Path) -> Result<Vec<(String, String)>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let object: BTreeMap<String, serde_json::Value> = serde_json::from_str(&content)
        .with_context(|| format!("Expected a JSON object of keywords in {}", path.display()))?;

    Ok(object
        .into_iter()
        .filter_map(|(keyword, value)| match value {
            serde_json::Value::String(destination) => Some((keyword, destination)),
            _ => {
                ::log::debug!("Skipping non-string entry {:?}", keyword);
                None
            }
        })
        .collect())
}
