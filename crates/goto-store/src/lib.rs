//! Persistent keyword store for goto
//!
//! Keeps the keyword -> destination mapping and the search fallback template
//! in a JSON file, validates edits at the boundary (so the reserved internal
//! key never reaches the completion engine), seeds defaults on first run and
//! notifies listeners about every change.
//!
//! # Example
//!
//! ```no_run
//! use goto_store::KeywordStore;
//!
//! let mut store = KeywordStore::open("keywords.json")?;
//! store.set("gh", "https://github.com")?;
//!
//! let snapshot = store.snapshot();
//! let completions = goto_completion::find_completions(&snapshot.keywords, "g");
//! # Ok::<(), goto_store::StoreError>(())
//! ```

mod change;
mod defaults;
mod error;
mod store;

pub use change::{ChangeListener, SharedSnapshot, Snapshot, SnapshotListener, StoreChange};
pub use defaults::{default_keywords, default_search_engine};
pub use error::{StoreError, StoreResult};
pub use store::{ImportReport, KeywordStore, RENAMED_PREFIX, RESERVED_KEY};
