//! Configuration for the search engine and snippet highlighting.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AtlasError, Result};
use crate::query::MIN_QUERY_CHARS;

/// Configuration for snippet extraction and highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// HTML tag wrapping each highlighted occurrence (e.g. "mark", "em").
    pub tag: String,
    /// CSS class added to highlight tags.
    pub css_class: Option<String>,
    /// Characters of context kept on each side of the first match.
    pub context_chars: usize,
    /// Marker added where the window cuts the text short.
    pub ellipsis: String,
    /// Compiled size limit for the highlight pattern, in bytes.
    pub pattern_size_limit: usize,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            tag: "mark".to_string(),
            css_class: None,
            context_chars: 50,
            ellipsis: "...".to_string(),
            pattern_size_limit: 1 << 20,
        }
    }
}

impl HighlightConfig {
    /// Create a new highlight configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML tag for highlighting.
    pub fn tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the CSS class for highlight tags.
    pub fn css_class<S: Into<String>>(mut self, css_class: S) -> Self {
        self.css_class = Some(css_class.into());
        self
    }

    /// Set the number of context characters around a match.
    pub fn context_chars(mut self, context_chars: usize) -> Self {
        self.context_chars = context_chars;
        self
    }

    /// Set the ellipsis marker.
    pub fn ellipsis<S: Into<String>>(mut self, ellipsis: S) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// Set the compiled size limit for highlight patterns.
    pub fn pattern_size_limit(mut self, limit: usize) -> Self {
        self.pattern_size_limit = limit;
        self
    }

    /// Build the opening HTML tag.
    pub fn opening_tag(&self) -> String {
        if let Some(ref css_class) = self.css_class {
            format!("<{} class=\"{}\">", self.tag, css_class)
        } else {
            format!("<{}>", self.tag)
        }
    }

    /// Build the closing HTML tag.
    pub fn closing_tag(&self) -> String {
        format!("</{}>", self.tag)
    }

    /// Check that the tag and class cannot break out of the markup.
    pub fn validate(&self) -> Result<()> {
        if self.tag.is_empty() || !self.tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AtlasError::invalid_config(format!(
                "highlight tag must be a non-empty alphanumeric name, got '{}'",
                self.tag
            )));
        }
        if let Some(ref class) = self.css_class
            && class
                .chars()
                .any(|c| matches!(c, '"' | '<' | '>' | '&' | '\''))
        {
            return Err(AtlasError::invalid_config(format!(
                "highlight css class contains markup characters: '{class}'"
            )));
        }
        Ok(())
    }
}

/// Configuration for [`SearchEngine`](crate::search::SearchEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of results, taken from the front in document order.
    pub max_results: usize,
    /// Minimum normalized query length, in characters.
    pub min_query_chars: usize,
    /// Snippet and highlight settings.
    pub highlight: HighlightConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_results: 10,
            min_query_chars: MIN_QUERY_CHARS,
            highlight: HighlightConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Create a new search configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of results.
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the minimum query length.
    pub fn min_query_chars(mut self, min_query_chars: usize) -> Self {
        self.min_query_chars = min_query_chars;
        self
    }

    /// Set the highlight configuration.
    pub fn highlight(mut self, highlight: HighlightConfig) -> Self {
        self.highlight = highlight;
        self
    }

    /// Parse and validate a configuration from JSON. Missing fields keep
    /// their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(AtlasError::invalid_config("max_results must be at least 1"));
        }
        if self.min_query_chars == 0 {
            return Err(AtlasError::invalid_config(
                "min_query_chars must be at least 1",
            ));
        }
        self.highlight.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_config_default() {
        let config = SearchConfig::default();
        assert_eq!(config.max_results, 10);
        assert_eq!(config.min_query_chars, 2);
        assert_eq!(config.highlight.tag, "mark");
        assert_eq!(config.highlight.context_chars, 50);
        assert_eq!(config.highlight.ellipsis, "...");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tags() {
        let config = HighlightConfig::new();
        assert_eq!(config.opening_tag(), "<mark>");
        assert_eq!(config.closing_tag(), "</mark>");

        let config = HighlightConfig::new().tag("em").css_class("hit");
        assert_eq!(config.opening_tag(), "<em class=\"hit\">");
        assert_eq!(config.closing_tag(), "</em>");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            SearchConfig::from_json_str(r#"{"max_results": 5, "highlight": {"tag": "em"}}"#)
                .unwrap();
        assert_eq!(config.max_results, 5);
        assert_eq!(config.min_query_chars, 2);
        assert_eq!(config.highlight.tag, "em");
        assert_eq!(config.highlight.context_chars, 50);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(SearchConfig::from_json_str(r#"{"max_results": 0}"#).is_err());
        assert!(SearchConfig::from_json_str(r#"{"min_query_chars": 0}"#).is_err());
        assert!(SearchConfig::from_json_str(r#"{"highlight": {"tag": "mark onclick=x"}}"#).is_err());
        assert!(SearchConfig::from_json_str(r#"{"highlight": {"css_class": "a\"b"}}"#).is_err());
    }
}
