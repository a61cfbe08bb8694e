//! Suggestion list shown to the user while typing, and commit resolution

use serde::Serialize;

use crate::engine::{KeywordMap, rank_candidates};
use crate::fallback::SearchFallback;

/// Where a suggestion came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// A registered keyword
    Keyword,
    /// The search fallback built from the raw query
    Search,
}

/// A single entry in the suggestion list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Text put back into the input when the suggestion is picked
    /// (the keyword, or the fallback destination)
    pub content: String,

    /// Escaped display label (e.g., "docs => https://docs.google.com")
    pub description: String,

    /// Destination navigated to when this suggestion is committed
    pub destination: String,

    pub kind: SuggestionKind,
}

/// Ranked suggestions for one query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuggestionList {
    pub suggestions: Vec<Suggestion>,
}

impl SuggestionList {
    /// The suggestion used as the default when the user commits directly
    pub fn best(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Suggestion> {
        self.suggestions.iter()
    }
}

/// Escape text for display in a markup-rendered suggestion label
///
/// Replaces `&`, `"`, `'`, `<` and `>` in that order, and only the first
/// occurrence of each. Later occurrences pass through untouched.
pub fn escape_markup(text: &str) -> String {
    text.replacen('&', "&amp;", 1)
        .replacen('"', "&quot;", 1)
        .replacen('\'', "&apos;", 1)
        .replacen('<', "&lt;", 1)
        .replacen('>', "&gt;", 1)
}

/// Build the suggestion list for `query`
///
/// Keyword matches come first in rank order. The search fallback built from
/// the raw (not lower-cased) query is appended last when the fallback is
/// enabled, no keyword matched exactly, and no keyword already leads to the
/// same destination.
pub fn build_suggestions(
    keywords: &KeywordMap,
    fallback: &SearchFallback,
    query: &str,
) -> SuggestionList {
    let candidates = rank_candidates(keywords, query);
    let has_exact = candidates.iter().any(|c| c.is_exact());

    let mut suggestions: Vec<Suggestion> = candidates
        .into_iter()
        .map(|c| Suggestion {
            content: c.keyword.to_string(),
            description: format!(
                "{} => {}",
                escape_markup(c.keyword),
                escape_markup(c.destination)
            ),
            destination: c.destination.to_string(),
            kind: SuggestionKind::Keyword,
        })
        .collect();

    if !has_exact
        && let Some(destination) = fallback.destination_for(query)
        && !suggestions.iter().any(|s| s.destination == destination)
    {
        suggestions.push(Suggestion {
            content: destination.clone(),
            description: escape_markup(&destination),
            destination,
            kind: SuggestionKind::Search,
        });
    }

    SuggestionList { suggestions }
}

/// Resolve the destination to navigate to when the user commits `query`
///
/// The top-ranked keyword wins; otherwise the search fallback. `None` means
/// there is nothing to navigate to and the commit is a no-op.
pub fn resolve_destination(
    keywords: &KeywordMap,
    fallback: &SearchFallback,
    query: &str,
) -> Option<String> {
    match rank_candidates(keywords, query).first() {
        Some(top) => Some(top.destination.to_string()),
        None => fallback.destination_for(query),
    }
}
