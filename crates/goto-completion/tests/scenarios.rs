use goto_completion::{
    DEFAULT_SEARCH_ENGINE, EXACT_MATCH, KeywordMap, SearchFallback, SuggestionKind,
    build_suggestions, find_completions, rank_candidates, resolve_destination, score,
};

fn keywords(entries: &[(&str, &str)]) -> KeywordMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn default_keywords() -> KeywordMap {
    keywords(&[
        ("docs", "https://docs.google.com"),
        ("mail", "https://mail.google.com"),
        ("ide", "https://ideone.com"),
        ("reddit", "https://reddit.com"),
        ("facebook", "https://facebook.com"),
        ("programming", "https://reddit.com/r/programming"),
        ("talesfromtechsupport", "https://reddit.com/r/talesfromtechsupport"),
    ])
}

#[test]
fn test_exact_match_ranks_before_prefix_match() {
    let keywords = keywords(&[
        ("docs", "https://docs.google.com"),
        ("do", "https://example.com/do"),
    ]);

    assert_eq!(find_completions(&keywords, "do"), vec!["do", "docs"]);

    let ranked = rank_candidates(&keywords, "do");
    assert_eq!(ranked[0].score, EXACT_MATCH);
    assert!(ranked[1].score.is_finite());
    assert_eq!(ranked[1].score, score("docs", "do"));
}

#[test]
fn test_empty_map_falls_back_to_search() {
    let keywords = KeywordMap::new();
    let fallback = SearchFallback::new("https://google.com#q=%s");

    assert!(find_completions(&keywords, "x").is_empty());

    let list = build_suggestions(&keywords, &fallback, "x");
    assert_eq!(list.len(), 1);

    let best = list.best().expect("fallback suggestion");
    assert_eq!(best.kind, SuggestionKind::Search);
    assert_eq!(best.destination, "https://google.com#q=x");

    assert_eq!(
        resolve_destination(&keywords, &fallback, "x").as_deref(),
        Some("https://google.com#q=x")
    );
}

#[test]
fn test_unmatched_query_without_fallback_is_noop() {
    let keywords = keywords(&[("reddit", "https://reddit.com")]);
    let fallback = SearchFallback::disabled();

    assert!(find_completions(&keywords, "zzz").is_empty());

    let list = build_suggestions(&keywords, &fallback, "zzz");
    assert!(list.is_empty());
    assert!(list.best().is_none());
    assert_eq!(resolve_destination(&keywords, &fallback, "zzz"), None);
}

#[test]
fn test_typing_progressively_narrows_to_keyword() {
    let keywords = default_keywords();
    let fallback = SearchFallback::new(DEFAULT_SEARCH_ENGINE);

    for query in ["t", "ta", "tal", "tales", "talesfromtechsupport"] {
        let destination = resolve_destination(&keywords, &fallback, query);
        assert_eq!(
            destination.as_deref(),
            Some("https://reddit.com/r/talesfromtechsupport"),
            "query {query:?}"
        );
    }
}

#[test]
fn test_uppercase_query_still_finds_keyword() {
    let keywords = default_keywords();
    assert_eq!(find_completions(&keywords, "REDD"), vec!["reddit"]);
}

#[test]
fn test_suggestions_serialize_for_host() {
    let keywords = keywords(&[("docs", "https://docs.google.com")]);
    let fallback = SearchFallback::new(DEFAULT_SEARCH_ENGINE);
    let list = build_suggestions(&keywords, &fallback, "doc");

    let json = serde_json::to_value(&list).unwrap();
    let suggestions = json["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0]["content"], "docs");
    assert_eq!(suggestions[0]["kind"], "keyword");
    assert_eq!(suggestions[1]["kind"], "search");
    assert_eq!(suggestions[1]["destination"], "https://google.com#q=doc");
}

#[test]
fn test_repeated_calls_are_identical() {
    let keywords = default_keywords();
    let fallback = SearchFallback::new(DEFAULT_SEARCH_ENGINE);

    for query in ["e", "o", "r", "mai", "zz"] {
        assert_eq!(
            build_suggestions(&keywords, &fallback, query),
            build_suggestions(&keywords, &fallback, query)
        );
    }
}
