use goto_completion::{KeywordMap, SuggestionKind, SuggestionList};

/// Render suggestions one per line, best first and marked with `*`
///
/// Each line is `<marker> <content>\t<description>`; search suggestions are
/// tagged so they stand out from keywords.
pub fn format_suggestions(list: &SuggestionList) -> String {
    list.iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let marker = if i == 0 { '*' } else { ' ' };
            let tag = match suggestion.kind {
                SuggestionKind::Keyword => "",
                SuggestionKind::Search => " [search]",
            };
            format!(
                "{} {}\t{}{}\n",
                marker, suggestion.content, suggestion.description, tag
            )
        })
        .collect()
}

/// Render the keyword table, sorted by keyword
pub fn format_keywords(keywords: &KeywordMap, search_engine: &str) -> String {
    let width = keywords.keys().map(|k| k.chars().count()).max().unwrap_or(0);

    let mut out: String = keywords
        .iter()
        .map(|(keyword, destination)| format!("{keyword:<width$}  {destination}\n"))
        .collect();

    if search_engine.is_empty() {
        out.push_str("(no search fallback)\n");
    } else {
        out.push_str(&format!("(search fallback: {search_engine})\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use goto_completion::{SearchFallback, build_suggestions};

    #[test]
    fn test_format_suggestions() {
        let mut keywords = KeywordMap::new();
        keywords.insert("docs".into(), "https://docs.google.com".into());
        let fallback = SearchFallback::new("https://google.com#q=%s");

        let list = build_suggestions(&keywords, &fallback, "doc");
        assert_eq!(
            format_suggestions(&list),
            "* docs\tdocs => https://docs.google.com\n  \
             https://google.com#q=doc\thttps://google.com#q=doc [search]\n"
        );
    }

    #[test]
    fn test_format_empty_suggestions() {
        assert_eq!(format_suggestions(&SuggestionList::default()), "");
    }

    #[test]
    fn test_format_keywords_aligned() {
        let mut keywords = KeywordMap::new();
        keywords.insert("ide".into(), "https://ideone.com".into());
        keywords.insert("docs".into(), "https://docs.google.com".into());

        assert_eq!(
            format_keywords(&keywords, ""),
            "docs  https://docs.google.com\n\
             ide   https://ideone.com\n\
             (no search fallback)\n"
        );
    }
}
