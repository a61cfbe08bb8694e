//! Line-oriented omnibox: every line is either a query or an edit command
//!
//! The session reads from a snapshot that is kept current by a store
//! listener, so edits made during the session show up in the very next
//! query without re-reading the store.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex, PoisonError};

use goto_completion::{SuggestionList, build_suggestions, resolve_destination};
use goto_store::{KeywordStore, SharedSnapshot, SnapshotListener};

use crate::launch::Launcher;
use crate::render::format_suggestions;

/// What a single input line produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Suggestions(SuggestionList),
    /// Destination of a commit; `None` when there was nothing to open
    Navigate(Option<String>),
    Updated(String),
    Error(String),
    Quit,
}

pub struct Session {
    store: KeywordStore,
    snapshot: SharedSnapshot,
}

impl Session {
    pub fn new(mut store: KeywordStore) -> Self {
        let snapshot: SharedSnapshot = Arc::new(Mutex::new(store.snapshot()));
        store.subscribe(Box::new(SnapshotListener::new(snapshot.clone())));
        Self { store, snapshot }
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Reply> {
        let line = line.trim_end_matches(['\r', '\n']);

        if let Some(command) = line.strip_prefix(':') {
            return self.handle_command(command.trim());
        }

        let snapshot = self.snapshot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(query) = line.strip_prefix('!') {
            return Ok(Reply::Navigate(resolve_destination(
                &snapshot.keywords,
                &snapshot.fallback,
                query,
            )));
        }

        Ok(Reply::Suggestions(build_suggestions(
            &snapshot.keywords,
            &snapshot.fallback,
            line,
        )))
    }

    fn handle_command(&mut self, command: &str) -> Result<Reply> {
        let (name, rest) = command
            .split_once(char::is_whitespace)
            .map(|(name, rest)| (name, rest.trim()))
            .unwrap_or((command, ""));

        match name {
            "q" | "quit" => Ok(Reply::Quit),
            "add" => {
                let Some((keyword, destination)) = rest.split_once(char::is_whitespace) else {
                    return Ok(Reply::Error("usage: :add <keyword> <destination>".into()));
                };
                match self.store.set(keyword, destination) {
                    Ok(()) => Ok(Reply::Updated(format!("added {}", keyword.trim()))),
                    Err(e) => Ok(Reply::Error(e.to_string())),
                }
            }
            "rm" | "remove" => match self.store.remove(rest) {
                Ok(true) => Ok(Reply::Updated(format!("removed {rest}"))),
                Ok(false) => Ok(Reply::Error(format!("no keyword {rest:?}"))),
                Err(e) => Ok(Reply::Error(e.to_string())),
            },
            "search" => match self.store.set_search_engine(rest) {
                Ok(()) if rest.is_empty() => Ok(Reply::Updated("search fallback disabled".into())),
                Ok(()) => Ok(Reply::Updated(format!("search fallback set to {rest}"))),
                Err(e) => Ok(Reply::Error(e.to_string())),
            },
            other => Ok(Reply::Error(format!("unknown command :{other}"))),
        }
    }
}

/// Run the session until `:q` or end of input
pub fn run(
    session: &mut Session,
    input: impl BufRead,
    mut output: impl Write,
    launcher: Option<&Launcher>,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;

        match session.handle_line(&line)? {
            Reply::Quit => break,
            Reply::Suggestions(list) => write!(output, "{}", format_suggestions(&list))?,
            Reply::Navigate(None) => log::info!("Nothing to open for {:?}", line),
            Reply::Navigate(Some(destination)) => match launcher {
                Some(launcher) => launcher.launch(&destination)?,
                None => writeln!(output, "{destination}")?,
            },
            Reply::Updated(message) => writeln!(output, "{message}")?,
            Reply::Error(message) => writeln!(output, "error: {message}")?,
        }
        output.flush()?;
    }

    Ok(())
}
