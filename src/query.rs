//! Query normalization.
//!
//! User input is trimmed and lowercased before it reaches the search engine.
//! Inputs shorter than [`MIN_QUERY_CHARS`] characters are no-op queries: the
//! caller hides the results panel instead of showing an empty one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum query length, in characters, for a search to run.
pub const MIN_QUERY_CHARS: usize = 2;

/// A normalized, searchable query.
///
/// # Examples
///
/// ```
/// use atlas_search::query::{Query, MIN_QUERY_CHARS};
///
/// let query = Query::parse("  SSH-Keygen ", MIN_QUERY_CHARS).unwrap();
/// assert_eq!(query.as_str(), "ssh-keygen");
///
/// assert!(Query::parse(" g ", MIN_QUERY_CHARS).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query(String);

impl Query {
    /// Normalize `raw` and return it as a query, or `None` when it is too
    /// short to search.
    pub fn parse(raw: &str, min_chars: usize) -> Option<Self> {
        let normalized = normalize(raw);
        if normalized.chars().count() < min_chars.max(1) {
            None
        } else {
            Some(Query(normalized))
        }
    }

    /// The normalized query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim surrounding whitespace and lowercase.
///
/// Applying it twice gives the same result as applying it once.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase().trim().to_string()
}
