//! Scoring of a single keyword against a query

use std::collections::HashMap;

/// Score assigned when the keyword equals the query exactly.
///
/// Greater than anything the weighted terms can add up to, so an exact match
/// always ranks first.
pub const EXACT_MATCH: f64 = f64::INFINITY;

const PREFIX_WEIGHT: f64 = 0.5;
const SUBSTRING_WEIGHT: f64 = 0.5;
const LENGTH_WEIGHT: f64 = 0.1;

/// Check that every character of `query` occurs in `keyword` at least as
/// many times as it occurs in `query`.
///
/// Order is ignored: `"od"` passes against `"do"`. This is a cheap
/// necessary condition for a match, not a subsequence test.
pub fn has_char_multiset(keyword: &str, query: &str) -> bool {
    let mut counts: HashMap<char, i64> = HashMap::new();

    for c in query.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    for c in keyword.chars() {
        *counts.entry(c).or_insert(0) -= 1;
    }

    query.chars().all(|c| counts[&c] <= 0)
}

/// Score how well `keyword` matches `query`
///
/// Returns [`EXACT_MATCH`] for an exact (case-sensitive) match and `0.0` when
/// the keyword is disqualified. Any other match lands in `(0.0, 1.1)`:
///
/// * `+0.5` when the query is a prefix of the keyword
/// * `+0.5` when the query occurs anywhere in the keyword
/// * `+0.1 * len(query) / len(keyword)`, dropped when the ratio exceeds 1
///
/// Lengths are counted in `char`s. Neither side is case-folded here.
pub fn score(keyword: &str, query: &str) -> f64 {
    if keyword == query {
        return EXACT_MATCH;
    }

    if !has_char_multiset(keyword, query) {
        return 0.0;
    }

    let mut score = 0.0;

    match keyword.find(query) {
        Some(0) => score += PREFIX_WEIGHT + SUBSTRING_WEIGHT,
        Some(_) => score += SUBSTRING_WEIGHT,
        None => {}
    }

    let keyword_len = keyword.chars().count();
    if keyword_len > 0 {
        let ratio = query.chars().count() as f64 / keyword_len as f64;
        if ratio <= 1.0 {
            score += ratio * LENGTH_WEIGHT;
        }
    }

    score
}
