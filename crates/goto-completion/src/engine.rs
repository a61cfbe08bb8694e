//! Ranking of all registered keywords against a query

use std::collections::BTreeMap;

use crate::scorer::{EXACT_MATCH, score};

/// Snapshot of registered keywords mapped to their destinations
///
/// A `BTreeMap` iterates in lexicographic key order, which is what breaks
/// ties between equal scores.
pub type KeywordMap = BTreeMap<String, String>;

/// A keyword that survived filtering, with its score and destination
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    /// The registered keyword (as stored, never case-folded)
    pub keyword: &'a str,

    /// The destination the keyword expands to
    pub destination: &'a str,

    /// Score from [`score`], always non-zero
    pub score: f64,
}

impl Candidate<'_> {
    /// Whether the keyword matched the query exactly
    pub fn is_exact(&self) -> bool {
        self.score == EXACT_MATCH
    }
}

/// Score and rank every keyword in `keywords` against `query`
///
/// The query is lower-cased before scoring; keywords are not. Disqualified
/// keywords (score `0`) are dropped. The result is sorted by score, highest
/// first, with ties kept in keyword order.
///
/// An empty query yields no candidates.
pub fn rank_candidates<'a>(keywords: &'a KeywordMap, query: &str) -> Vec<Candidate<'a>> {
    if query.is_empty() {
        return Vec::new();
    }

    let query_lower = query.to_lowercase();

    let mut candidates: Vec<Candidate<'a>> = keywords
        .iter()
        .filter_map(|(keyword, destination)| {
            let score = score(keyword, &query_lower);
            (score != 0.0).then_some(Candidate {
                keyword,
                destination,
                score,
            })
        })
        .collect();

    // Stable sort keeps BTreeMap order among equal scores
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    candidates
}

/// Keywords matching `query`, best match first
pub fn find_completions(keywords: &KeywordMap, query: &str) -> Vec<String> {
    rank_candidates(keywords, query)
        .into_iter()
        .map(|c| c.keyword.to_string())
        .collect()
}
