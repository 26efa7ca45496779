//! The search engine over an immutable corpus.

use std::sync::Arc;

use log::debug;

use crate::corpus::{Corpus, Section};
use crate::query::Query;
use crate::search::config::SearchConfig;
use crate::search::highlight::{PreparedHighlight, Snippeter};
use crate::search::result::{SearchOutcome, SearchResult};

/// Searchable text of one section, computed once.
#[derive(Debug, Clone)]
struct SectionEntry {
    /// Title and every unit, joined by newlines.
    text: String,
}

impl SectionEntry {
    fn new(section: &Section) -> Self {
        let units = section.units();
        let capacity =
            section.title().len() + units.iter().map(|u| u.text().len() + 1).sum::<usize>();
        let mut text = String::with_capacity(capacity);
        text.push_str(section.title());
        for unit in units {
            text.push('\n');
            text.push_str(unit.text());
        }

        SectionEntry { text }
    }

    /// Coarse filter: could any unit of this section match?
    fn may_match(&self, query: &PreparedHighlight<'_>) -> bool {
        query.is_match(&self.text)
    }
}

/// Per-section search text over a corpus, in document order.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<SectionEntry>,
}

impl SearchIndex {
    pub fn build(corpus: &Corpus) -> Self {
        SearchIndex {
            entries: corpus.iter().map(SectionEntry::new).collect(),
        }
    }

    /// Number of indexed sections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Substring search over documentation sections.
///
/// The engine never mutates its corpus. `search` and `snippet` are pure, and
/// the engine can be shared across threads and called concurrently; callers
/// that issue queries rapidly decide which result set wins.
///
/// Results come back in document order and are cut to `max_results` from the
/// front. Later matches are dropped; there is no relevance ranking.
///
/// # Examples
///
/// ```
/// use atlas_search::corpus::{Corpus, Section};
/// use atlas_search::search::{SearchConfig, SearchEngine};
///
/// let corpus = Corpus::builder()
///     .section(
///         Section::new("ssh-keys", "Generating SSH Keys")
///             .unit("Run ssh-keygen -t ed25519 to create a new key pair."),
///     )
///     .build()
///     .unwrap();
/// let engine = SearchEngine::new(corpus, SearchConfig::default());
///
/// let outcome = engine.search("ssh-keygen");
/// let results = outcome.results();
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].section_id, "ssh-keys");
/// assert_eq!(
///     results[0].snippet,
///     "Run <mark>ssh-keygen</mark> -t ed25519 to create a new key pair."
/// );
///
/// assert!(engine.search("s").is_noop());
/// ```
#[derive(Debug, Clone)]
pub struct SearchEngine {
    corpus: Arc<Corpus>,
    index: SearchIndex,
    config: SearchConfig,
    snippeter: Snippeter,
}

impl SearchEngine {
    /// Create an engine over a corpus snapshot.
    pub fn new<C: Into<Arc<Corpus>>>(corpus: C, config: SearchConfig) -> Self {
        let corpus = corpus.into();
        let index = SearchIndex::build(&corpus);
        debug!(
            "search engine ready: {} sections indexed, max_results={}",
            index.len(),
            config.max_results
        );
        let snippeter = Snippeter::new(config.highlight.clone());
        SearchEngine {
            corpus,
            index,
            config,
            snippeter,
        }
    }

    /// Create an engine with the default configuration.
    pub fn with_defaults<C: Into<Arc<Corpus>>>(corpus: C) -> Self {
        Self::new(corpus, SearchConfig::default())
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search for a raw user query.
    ///
    /// The query is trimmed and lowercased. Queries shorter than
    /// `min_query_chars` return [`SearchOutcome::NoOp`].
    pub fn search(&self, raw: &str) -> SearchOutcome {
        match Query::parse(raw, self.config.min_query_chars) {
            Some(query) => SearchOutcome::Matches(self.search_query(&query)),
            None => SearchOutcome::NoOp,
        }
    }

    /// Search for an already normalized query.
    pub fn search_query(&self, query: &Query) -> Vec<SearchResult> {
        let mut results = Vec::new();
        if self.config.max_results == 0 {
            return results;
        }

        let needle = query.as_str();
        // Containment, window placement and highlighting share this matcher.
        let matcher = self.snippeter.prepare(needle);

        'sections: for (section, entry) in self.corpus.iter().zip(&self.index.entries) {
            if !entry.may_match(&matcher) {
                continue;
            }
            for unit in section.units() {
                if !matcher.is_match(unit.text()) {
                    continue;
                }
                results.push(SearchResult {
                    section_id: section.id().to_string(),
                    title: section.display_title().to_string(),
                    snippet: matcher.snippet(unit.text()),
                });
                if results.len() == self.config.max_results {
                    break 'sections;
                }
            }
        }

        debug!("query {:?} matched {} units", needle, results.len());
        results
    }

    /// Highlighted snippet of `text` around the first occurrence of `query`.
    pub fn snippet(&self, text: &str, query: &str) -> String {
        self.snippeter.snippet(text, query)
    }
}
