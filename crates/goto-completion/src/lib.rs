//! Keyword completion engine
//!
//! Ranks registered keywords against a partially typed query and builds the
//! suggestion list offered to the user:
//! - Character-multiset scoring with prefix and substring bonuses
//! - Exact matches always ranked first
//! - Search fallback appended when no keyword resolves the query
//! - Pure functions over a keyword snapshot, no I/O
//!
//! # Example
//!
//! ```
//! use goto_completion::{KeywordMap, SearchFallback, build_suggestions, find_completions};
//!
//! let mut keywords = KeywordMap::new();
//! keywords.insert("docs".into(), "https://docs.google.com".into());
//! keywords.insert("do".into(), "https://example.com/do".into());
//!
//! assert_eq!(find_completions(&keywords, "do"), vec!["do", "docs"]);
//!
//! let fallback = SearchFallback::new("https://google.com#q=%s");
//! let list = build_suggestions(&keywords, &fallback, "zzz");
//! assert_eq!(list.best().map(|s| s.destination.as_str()), Some("https://google.com#q=zzz"));
//! ```

mod engine;
mod fallback;
mod scorer;
mod suggest;

pub use engine::{Candidate, KeywordMap, find_completions, rank_candidates};
pub use fallback::{DEFAULT_SEARCH_ENGINE, PLACEHOLDER, SearchFallback};
pub use scorer::{EXACT_MATCH, has_char_multiset, score};
pub use suggest::{
    Suggestion, SuggestionKind, SuggestionList, build_suggestions, escape_markup,
    resolve_destination,
};
