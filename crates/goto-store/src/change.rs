//! Change notifications and the snapshots they keep up to date

use std::fmt::Debug;
use std::sync::{Arc, Mutex, PoisonError};

use goto_completion::{KeywordMap, SearchFallback};

/// A single modification applied to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    /// A keyword was added or its destination changed
    KeywordSet {
        keyword: String,
        destination: String,
    },

    /// A keyword was removed
    KeywordRemoved { keyword: String },

    /// The search fallback template changed (empty disables it)
    SearchEngineChanged { template: String },
}

/// Trait for observing store modifications
///
/// Listeners are called synchronously, in registration order, after the
/// changes have been persisted.
pub trait ChangeListener: Debug {
    fn on_change(&self, changes: &[StoreChange]);
}

/// Everything the completion engine needs for one call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub keywords: KeywordMap,
    pub fallback: SearchFallback,
}

impl Snapshot {
    /// Bring the snapshot up to date with `changes`
    pub fn apply(&mut self, changes: &[StoreChange]) {
        for change in changes {
            match change {
                StoreChange::KeywordSet {
                    keyword,
                    destination,
                } => {
                    self.keywords.insert(keyword.clone(), destination.clone());
                }
                StoreChange::KeywordRemoved { keyword } => {
                    self.keywords.remove(keyword);
                }
                StoreChange::SearchEngineChanged { template } => {
                    self.fallback = SearchFallback::new(template.clone());
                }
            }
        }
    }
}

/// Snapshot shared between the store's listener and its readers
pub type SharedSnapshot = Arc<Mutex<Snapshot>>;

/// Listener that mirrors store changes into a [`SharedSnapshot`]
#[derive(Debug, Clone)]
pub struct SnapshotListener {
    snapshot: SharedSnapshot,
}

impl SnapshotListener {
    pub fn new(snapshot: SharedSnapshot) -> Self {
        Self { snapshot }
    }
}

impl ChangeListener for SnapshotListener {
    fn on_change(&self, changes: &[StoreChange]) {
        let mut snapshot = self.snapshot.lock().unwrap_or_else(PoisonError::into_inner);
        snapshot.apply(changes);
    }
}

/// Changes that turn `old` into `new`, in keyword order
pub(crate) fn diff_keywords(old: &KeywordMap, new: &KeywordMap) -> Vec<StoreChange> {
    let removed = old
        .keys()
        .filter(|k| !new.contains_key(*k))
        .map(|k| StoreChange::KeywordRemoved { keyword: k.clone() });

    let set = new
        .iter()
        .filter(|(k, v)| old.get(*k) != Some(*v))
        .map(|(k, v)| StoreChange::KeywordSet {
            keyword: k.clone(),
            destination: v.clone(),
        });

    removed.chain(set).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> KeywordMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_apply_changes() {
        let mut snapshot = Snapshot {
            keywords: map(&[("docs", "https://docs.google.com"), ("old", "x")]),
            fallback: SearchFallback::disabled(),
        };

        snapshot.apply(&[
            StoreChange::KeywordSet {
                keyword: "mail".into(),
                destination: "https://mail.google.com".into(),
            },
            StoreChange::KeywordRemoved {
                keyword: "old".into(),
            },
            StoreChange::SearchEngineChanged {
                template: "https://s/?q=%s".into(),
            },
        ]);

        assert_eq!(
            snapshot.keywords,
            map(&[
                ("docs", "https://docs.google.com"),
                ("mail", "https://mail.google.com"),
            ])
        );
        assert_eq!(snapshot.fallback.template(), "https://s/?q=%s");
    }

    #[test]
    fn test_removing_missing_keyword_is_harmless() {
        let mut snapshot = Snapshot::default();
        snapshot.apply(&[StoreChange::KeywordRemoved {
            keyword: "nothing".into(),
        }]);
        assert!(snapshot.keywords.is_empty());
    }

    #[test]
    fn test_diff_keywords() {
        let old = map(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let new = map(&[("b", "2"), ("c", "30"), ("d", "4")]);

        let changes = diff_keywords(&old, &new);
        assert_eq!(
            changes,
            vec![
                StoreChange::KeywordRemoved {
                    keyword: "a".into()
                },
                StoreChange::KeywordSet {
                    keyword: "c".into(),
                    destination: "30".into()
                },
                StoreChange::KeywordSet {
                    keyword: "d".into(),
                    destination: "4".into()
                },
            ]
        );

        let mut snapshot = Snapshot {
            keywords: old,
            fallback: SearchFallback::disabled(),
        };
        snapshot.apply(&changes);
        assert_eq!(snapshot.keywords, new);
    }

    #[test]
    fn test_snapshot_listener_updates_shared_snapshot() {
        let shared: SharedSnapshot = Arc::new(Mutex::new(Snapshot::default()));
        let listener = SnapshotListener::new(shared.clone());

        listener.on_change(&[StoreChange::KeywordSet {
            keyword: "ide".into(),
            destination: "https://ideone.com".into(),
        }]);

        let snapshot = shared.lock().unwrap();
        assert_eq!(
            snapshot.keywords.get("ide").map(String::as_str),
            Some("https://ideone.com")
        );
    }
}
