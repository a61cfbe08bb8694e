//! Search fallback used when no keyword covers the query

/// Token in the fallback template that is replaced by the query
pub const PLACEHOLDER: &str = "%s";

/// Search engine used when the user has not picked one
pub const DEFAULT_SEARCH_ENGINE: &str = "https://google.com#q=%s";

/// Destination template for queries that no keyword resolves
///
/// An empty template disables the fallback entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFallback {
    template: String,
}

impl SearchFallback {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// A fallback that never produces a destination
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn is_enabled(&self) -> bool {
        !self.template.is_empty()
    }

    /// Build the destination for `query`
    ///
    /// Only the first [`PLACEHOLDER`] is substituted. A template without a
    /// placeholder is returned as-is. Returns `None` when disabled.
    pub fn destination_for(&self, query: &str) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }
        Some(self.template.replacen(PLACEHOLDER, query, 1))
    }
}

impl From<Option<String>> for SearchFallback {
    fn from(template: Option<String>) -> Self {
        template.map(Self::new).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_query() {
        let fallback = SearchFallback::new(DEFAULT_SEARCH_ENGINE);
        assert_eq!(
            fallback.destination_for("x").as_deref(),
            Some("https://google.com#q=x")
        );
    }

    #[test]
    fn test_only_first_placeholder_is_substituted() {
        let fallback = SearchFallback::new("https://go/%s?again=%s");
        assert_eq!(
            fallback.destination_for("abc").as_deref(),
            Some("https://go/abc?again=%s")
        );
    }

    #[test]
    fn test_template_without_placeholder() {
        let fallback = SearchFallback::new("https://intranet.example.com");
        assert_eq!(
            fallback.destination_for("abc").as_deref(),
            Some("https://intranet.example.com")
        );
    }

    #[test]
    fn test_empty_template_is_disabled() {
        let fallbacks = [
            SearchFallback::disabled(),
            SearchFallback::new(""),
            SearchFallback::from(None::<String>),
        ];

        for fallback in fallbacks {
            assert!(!fallback.is_enabled());
            assert_eq!(fallback.destination_for("abc"), None);
            assert_eq!(fallback.destination_for(""), None);
        }
    }

    #[test]
    fn test_query_is_not_lower_cased() {
        let fallback = SearchFallback::new("https://s/?q=%s");
        assert_eq!(
            fallback.destination_for("Rust Docs").as_deref(),
            Some("https://s/?q=Rust Docs")
        );
    }
}
