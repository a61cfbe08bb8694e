use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use goto_completion::{KeywordMap, SearchFallback};

use crate::change::{ChangeListener, Snapshot, StoreChange, diff_keywords};
use crate::defaults::{default_keywords, default_search_engine};
use crate::error::{StoreError, StoreResult};

/// Key under which internal settings are stored, never a user keyword
pub const RESERVED_KEY: &str = "__internal_use_only";

/// Prefix given to a reserved keyword during bulk import
pub const RENAMED_PREFIX: &str = "nope_";

const STORE_VERSION: u8 = 1;

/// Settings that live next to the keywords under [`RESERVED_KEY`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct InternalSettings {
    #[serde(default = "current_version")]
    version: u8,
    #[serde(rename = "default-search", default)]
    search_engine: String,
}

fn current_version() -> u8 {
    STORE_VERSION
}

/// On-disk layout: a flat object of keyword -> destination plus the
/// reserved internal entry
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    #[serde(rename = "__internal_use_only", default)]
    internal: Option<InternalSettings>,
    #[serde(flatten)]
    keywords: KeywordMap,
}

/// Outcome of a bulk import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Entries written to the store
    pub imported: usize,
    /// Rows dropped because the keyword or destination was blank
    pub skipped: usize,
    /// Keywords renamed because they collided with [`RESERVED_KEY`]
    pub renamed: Vec<String>,
}

/// Keyword store persisted as a JSON file
///
/// Holds the keyword map and the search fallback template. Every successful
/// edit is written to disk and then announced to the registered listeners.
#[derive(Debug)]
pub struct KeywordStore {
    path: PathBuf,
    keywords: KeywordMap,
    search_engine: String,
    first_run: bool,
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl KeywordStore {
    /// Open the store at `path`, seeding defaults on first run
    ///
    /// A store is uninitialized when the file is missing or lacks the
    /// reserved internal entry. In that case the default keywords and search
    /// engine are written out and [`is_first_run`](Self::is_first_run)
    /// returns true.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let loaded = if path.exists() {
            Some(Self::load_from_disk(&path)?)
        } else {
            None
        };

        match loaded {
            Some(StoreFile {
                internal: Some(internal),
                keywords,
            }) => {
                debug!(
                    "Keyword store loaded from {} ({} keywords)",
                    path.display(),
                    keywords.len()
                );
                Ok(Self {
                    path,
                    keywords,
                    search_engine: internal.search_engine,
                    first_run: false,
                    listeners: Vec::new(),
                })
            }
            _ => {
                info!("Initializing keyword store at {}", path.display());
                let store = Self {
                    path,
                    keywords: default_keywords(),
                    search_engine: default_search_engine(),
                    first_run: true,
                    listeners: Vec::new(),
                };
                Self::save_to_disk(&store.path, &store.keywords, &store.search_engine)?;
                Ok(store)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether [`open`](Self::open) had to seed the defaults
    pub fn is_first_run(&self) -> bool {
        self.first_run
    }

    pub fn keywords(&self) -> &KeywordMap {
        &self.keywords
    }

    pub fn search_engine(&self) -> &str {
        &self.search_engine
    }

    /// Copy of the current state for the completion engine
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            keywords: self.keywords.clone(),
            fallback: SearchFallback::new(self.search_engine.clone()),
        }
    }

    /// Register a listener for future changes
    ///
    /// Listeners are called in the order they were registered.
    pub fn subscribe(&mut self, listener: Box<dyn ChangeListener>) {
        self.listeners.push(listener);
    }

    /// Add a keyword or change its destination
    ///
    /// Both sides are trimmed. Blank values and the reserved key are
    /// rejected.
    pub fn set(&mut self, keyword: &str, destination: &str) -> StoreResult<()> {
        let keyword = keyword.trim();
        let destination = destination.trim();

        if keyword.is_empty() {
            return Err(StoreError::EmptyKeyword);
        }
        if keyword == RESERVED_KEY {
            return Err(StoreError::ReservedKeyword(keyword.to_string()));
        }
        if destination.is_empty() {
            return Err(StoreError::EmptyDestination(keyword.to_string()));
        }

        if self.keywords.get(keyword).map(String::as_str) == Some(destination) {
            debug!("Keyword {:?} unchanged", keyword);
            return Ok(());
        }

        let mut keywords = self.keywords.clone();
        keywords.insert(keyword.to_string(), destination.to_string());
        let search_engine = self.search_engine.clone();
        self.commit(
            keywords,
            search_engine,
            vec![StoreChange::KeywordSet {
                keyword: keyword.to_string(),
                destination: destination.to_string(),
            }],
        )
    }

    /// Remove a keyword, returning whether it existed
    ///
    /// The keyword is trimmed the same way [`set`](Self::set) trims it.
    pub fn remove(&mut self, keyword: &str) -> StoreResult<bool> {
        let keyword = keyword.trim();

        let mut keywords = self.keywords.clone();
        if keywords.remove(keyword).is_none() {
            debug!("Keyword {:?} not found, nothing to remove", keyword);
            return Ok(false);
        }

        let search_engine = self.search_engine.clone();
        self.commit(
            keywords,
            search_engine,
            vec![StoreChange::KeywordRemoved {
                keyword: keyword.to_string(),
            }],
        )?;
        Ok(true)
    }

    /// Set the search fallback template; an empty template disables it
    pub fn set_search_engine(&mut self, template: &str) -> StoreResult<()> {
        let template = template.trim();
        if template == self.search_engine {
            return Ok(());
        }

        let keywords = self.keywords.clone();
        self.commit(
            keywords,
            template.to_string(),
            vec![StoreChange::SearchEngineChanged {
                template: template.to_string(),
            }],
        )
    }

    /// Replace every keyword with `entries`, the way a settings editor saves
    ///
    /// Rows are trimmed and blank rows skipped. A row named [`RESERVED_KEY`]
    /// is kept under a [`RENAMED_PREFIX`]ed name instead of being lost. Later
    /// rows win over earlier ones with the same keyword. The search engine is
    /// left as is.
    pub fn replace_all<I, K, V>(&mut self, entries: I) -> StoreResult<ImportReport>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut report = ImportReport::default();
        let mut keywords = KeywordMap::new();

        for (keyword, destination) in entries {
            let mut keyword = keyword.as_ref().trim().to_string();
            let destination = destination.as_ref().trim();

            if keyword.is_empty() || destination.is_empty() {
                report.skipped += 1;
                continue;
            }

            if keyword == RESERVED_KEY {
                keyword = format!("{RENAMED_PREFIX}{keyword}");
                warn!(
                    "The keyword {:?} is reserved for internal use, storing it as {:?}",
                    RESERVED_KEY, keyword
                );
                report.renamed.push(keyword.clone());
            }

            keywords.insert(keyword, destination.to_string());
        }

        report.imported = keywords.len();

        let changes = diff_keywords(&self.keywords, &keywords);
        let search_engine = self.search_engine.clone();
        self.commit(keywords, search_engine, changes)?;

        Ok(report)
    }

    /// Restore the default keywords and search engine
    pub fn reset(&mut self) -> StoreResult<()> {
        let keywords = default_keywords();
        let search_engine = default_search_engine();

        let mut changes = diff_keywords(&self.keywords, &keywords);
        if search_engine != self.search_engine {
            changes.push(StoreChange::SearchEngineChanged {
                template: search_engine.clone(),
            });
        }

        self.commit(keywords, search_engine, changes)?;
        info!("Keyword store reset to defaults");
        Ok(())
    }

    // Private helpers

    /// Write the new state, then adopt it and notify; a no-op for an empty
    /// change list
    ///
    /// The store keeps its previous state when the write fails.
    fn commit(
        &mut self,
        keywords: KeywordMap,
        search_engine: String,
        changes: Vec<StoreChange>,
    ) -> StoreResult<()> {
        if changes.is_empty() {
            return Ok(());
        }

        Self::save_to_disk(&self.path, &keywords, &search_engine)?;
        debug!("Store SAVE: {} change(s) to {}", changes.len(), self.path.display());

        self.keywords = keywords;
        self.search_engine = search_engine;

        for listener in &self.listeners {
            listener.on_change(&changes);
        }
        Ok(())
    }

    fn load_from_disk(path: &Path) -> StoreResult<StoreFile> {
        let content = std::fs::read_to_string(path)?;
        let file: StoreFile = serde_json::from_str(&content)?;

        if let Some(internal) = &file.internal
            && internal.version > STORE_VERSION
        {
            return Err(StoreError::UnsupportedVersion {
                found: internal.version,
                supported: STORE_VERSION,
            });
        }

        Ok(file)
    }

    fn save_to_disk(path: &Path, keywords: &KeywordMap, search_engine: &str) -> StoreResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = StoreFile {
            internal: Some(InternalSettings {
                version: STORE_VERSION,
                search_engine: search_engine.to_string(),
            }),
            keywords: keywords.clone(),
        };

        let content = serde_json::to_string_pretty(&file)?;
        std::fs::write(path, content)?;

        Ok(())
    }
}
