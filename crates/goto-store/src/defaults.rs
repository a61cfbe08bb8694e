use goto_completion::{DEFAULT_SEARCH_ENGINE, KeywordMap};

/// Keywords a fresh store starts with, so there is something to build upon
pub fn default_keywords() -> KeywordMap {
    [
        ("docs", "https://docs.google.com"),
        ("mail", "https://mail.google.com"),
        ("ide", "https://ideone.com"),
        ("reddit", "https://reddit.com"),
        ("facebook", "https://facebook.com"),
        ("programming", "https://reddit.com/r/programming"),
        ("talesfromtechsupport", "https://reddit.com/r/talesfromtechsupport"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

pub fn default_search_engine() -> String {
    DEFAULT_SEARCH_ENGINE.to_string()
}
